// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

//! Lifecycle of a generated key pair.
//!
//! A resource starts out [`Unconfigured`] and becomes [`Created`] exactly once.
//! Its key type never changes in place: asking for a different key type
//! destroys the resource and creates a new one with a new key and a new
//! identifier. Reading returns the stored record untouched, and nothing can be
//! imported, because a private key cannot be recovered from its identifier.

use log::{debug, info};

use crate::{
    error::{self, Result},
    identity,
    keygen::Generator,
    model::{Diagnostics, KeyAlgorithm, ResourceRecord},
};

/// Converts the configured key type into a [`KeyAlgorithm`], falling back to
/// the default when none was given.
pub(crate) fn configure(keytype: Option<&str>) -> Result<KeyAlgorithm, Diagnostics> {
    keytype.map_or_else(
        || Ok(KeyAlgorithm::default()),
        |value| {
            value
                .parse()
                .map_err(|e: error::Validation| Diagnostics::from(Err::<(), _>(e)))
        },
    )
}

pub(crate) fn validate(keytype: &str) -> Diagnostics {
    configure(Some(keytype)).err().unwrap_or_default()
}

/// Returns the resources that can be recovered from an identifier, which is
/// always none of them.
pub(crate) fn import(id: &str) -> Vec<ResourceRecord> {
    debug!("Ignoring request to import {}", id);
    Vec::new()
}

pub(crate) trait State: private::Sealed {}

pub(crate) struct Unconfigured;

impl State for Unconfigured {}

pub(crate) struct Created {
    record: ResourceRecord,
}

impl State for Created {}

pub(crate) struct Resource<S: State> {
    state: S,
}

impl Resource<Unconfigured> {
    pub(crate) const fn new() -> Self {
        Self {
            state: Unconfigured,
        }
    }

    /// Generates a key pair and derives its identity. Either every field of
    /// the record is populated or no resource is created at all.
    pub(crate) fn create(
        self,
        keytype: KeyAlgorithm,
        generator: &mut Generator<'_>,
    ) -> Result<Resource<Created>> {
        let pair = generator.generate(keytype)?;
        let canonical = identity::derive(pair.public_key_raw())?;
        if canonical.algorithm() != pair.algorithm().ssh_algorithm() {
            return Err(error::Parse::AlgorithmMismatch(
                pair.algorithm(),
                canonical.algorithm(),
            )
            .into());
        }

        let id = canonical.fingerprint().to_string();
        info!("Created {} key pair {}", keytype, id);

        Ok(Resource {
            state: Created {
                record: ResourceRecord::new(
                    keytype,
                    canonical.authorized_key().to_owned(),
                    pair.into_private_key_pem(),
                    id,
                ),
            },
        })
    }
}

impl Resource<Created> {
    /// Resumes tracking a record that was created earlier.
    pub(crate) const fn from_record(record: ResourceRecord) -> Self {
        Self {
            state: Created { record },
        }
    }

    pub(crate) const fn read(&self) -> &ResourceRecord {
        &self.state.record
    }

    pub(crate) fn into_record(self) -> ResourceRecord {
        self.state.record
    }

    /// Discards the record. There is nothing outside of it to clean up.
    pub(crate) fn destroy(self) -> Resource<Unconfigured> {
        debug!("Destroying key pair {}", self.state.record.id());
        Resource::new()
    }
}

/// What applying a configuration to the current state will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Plan {
    Create(KeyAlgorithm),
    Keep,
    Replace {
        from: KeyAlgorithm,
        to: KeyAlgorithm,
    },
}

impl Plan {
    pub(crate) fn new(current: Option<&ResourceRecord>, keytype: KeyAlgorithm) -> Self {
        match current {
            None => Self::Create(keytype),
            Some(record) if record.keytype() == keytype => Self::Keep,
            Some(record) => Self::Replace {
                from: record.keytype(),
                to: keytype,
            },
        }
    }
}

/// Brings the current state in line with the configured key type.
pub(crate) fn apply(
    current: Option<Resource<Created>>,
    keytype: KeyAlgorithm,
    generator: &mut Generator<'_>,
) -> Result<(Plan, Resource<Created>)> {
    let plan = Plan::new(current.as_ref().map(Resource::<Created>::read), keytype);
    let resource = match (plan, current) {
        (Plan::Keep, Some(resource)) => resource,
        (Plan::Replace { from, to }, Some(resource)) => {
            info!("Key type changed from {} to {}, replacing key pair", from, to);
            resource.destroy().create(keytype, generator)?
        }
        (Plan::Create(_) | Plan::Keep | Plan::Replace { .. }, _) => {
            Resource::new().create(keytype, generator)?
        }
    };
    Ok((plan, resource))
}

mod private {
    pub(crate) trait Sealed {}
    impl Sealed for super::Unconfigured {}
    impl Sealed for super::Created {}
}
