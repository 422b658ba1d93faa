// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use crate::error;

/// A configuration problem attached to a specific attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Diagnostic {
    attribute: &'static str,
    summary: &'static str,
    detail: String,
}

impl Diagnostic {
    pub(crate) const fn attribute(&self) -> &'static str {
        self.attribute
    }

    pub(crate) const fn summary(&self) -> &'static str {
        self.summary
    }

    pub(crate) fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<&error::Validation> for Diagnostic {
    fn from(value: &error::Validation) -> Self {
        match *value {
            error::Validation::UnsupportedKeyType(_) => Self {
                attribute: "keytype",
                summary: "wrong keytype",
                detail: value.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }
}

impl<E> From<Result<(), E>> for Diagnostics
where
    for<'err> Diagnostic: From<&'err E>,
{
    fn from(value: Result<(), E>) -> Self {
        let mut diags = Self::new();
        if let Err(ref e) = value {
            diags.push(e.into());
        }
        diags
    }
}

impl<'diags> IntoIterator for &'diags Diagnostics {
    type Item = &'diags Diagnostic;
    type IntoIter = std::slice::Iter<'diags, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
