// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::error;

use crate::{
    error::{self, Result},
    resource,
};

/// Attempt to start tracking an existing key pair by its identifier.
///
/// A private key cannot be reconstructed from a fingerprint, so this never
/// finds anything to import.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The identifier (SHA-256 fingerprint) of the key pair.
    #[clap()]
    id: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, state: &mut super::State) -> Result<()> {
        match resource::import(&self.id).into_iter().next() {
            Some(record) => state.update(&record).await,
            None => {
                error!(
                    "Cannot import {}: generated key pairs cannot be recovered from their identifier",
                    self.id
                );
                Err(error::Error::Command)
            }
        }
    }
}
