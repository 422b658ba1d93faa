// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{error, policy};

/// The key types a resource can be configured with. External input is
/// converted into this type exactly once, at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum KeyAlgorithm {
    Rsa,
    Ed25519,
    Ecdsa,
}

impl KeyAlgorithm {
    pub(crate) const ALL: [Self; 3] = [Self::Rsa, Self::Ed25519, Self::Ecdsa];

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Rsa => "rsa",
            Self::Ed25519 => "ed25519",
            Self::Ecdsa => "ecdsa",
        }
    }

    /// The algorithm as the SSH wire protocol names it.
    pub(crate) fn ssh_algorithm(self) -> ssh_key::Algorithm {
        match self {
            Self::Rsa => ssh_key::Algorithm::Rsa { hash: None },
            Self::Ed25519 => ssh_key::Algorithm::Ed25519,
            Self::Ecdsa => ssh_key::Algorithm::Ecdsa {
                curve: policy::ECDSA_CURVE,
            },
        }
    }
}

impl Default for KeyAlgorithm {
    fn default() -> Self {
        policy::DEFAULT_KEY_ALGORITHM
    }
}

impl Display for KeyAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyAlgorithm {
    type Err = error::Validation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == s)
            .ok_or_else(|| error::Validation::UnsupportedKeyType(s.to_owned()))
    }
}
