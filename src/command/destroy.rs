// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::{info, warn};

use crate::{error::Result, resource::Resource};

/// Stop tracking the key pair. The key material is simply forgotten; nothing
/// is revoked anywhere.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, state: &mut super::State) -> Result<()> {
        match state.get().await? {
            Some(record) => {
                let id = record.id().to_owned();
                let _unconfigured = Resource::from_record(record).destroy();
                state.clear().await?;
                info!("Destroyed key pair {}", id);
            }
            None => warn!("No key pair has been created, so there is nothing to destroy"),
        }
        Ok(())
    }
}
