// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use log::error;

use crate::{
    error::{self, Result},
    model::{Diagnostics, ResourceRecord},
    storage::Storage,
};

pub(crate) mod apply;
pub(crate) mod destroy;
pub(crate) mod import;
pub(crate) mod read;
pub(crate) mod validate;

pub(crate) type State = dyn Storage<ResourceRecord>;

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, state: &mut State) -> Result<()>;
}

/// Prints every diagnostic and fails if there were any.
fn check(diags: &Diagnostics) -> Result<()> {
    for diag in diags {
        eprintln!(
            "Error: {} ({}): {}",
            diag.summary(),
            diag.attribute(),
            diag.detail()
        );
    }

    if diags.is_empty() {
        Ok(())
    } else {
        error!("Configuration has {} error(s)", diags.len());
        Err(error::Error::Command)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use crate::storage::Memory;

    use super::*;

    fn memory() -> Memory<ResourceRecord> {
        Memory::new()
    }

    #[tokio::test]
    async fn apply_tracks_and_keeps_record() -> Result<()> {
        let mut state = memory();
        apply::Command::parse_from(["apply", "--keytype", "ed25519"])
            .execute(&mut state)
            .await?;
        let first = state.get().await?.ok_or(error::Error::Command)?;
        assert!(first.pubkey().starts_with("ssh-ed25519 "));

        apply::Command::parse_from(["apply", "--keytype", "ed25519"])
            .execute(&mut state)
            .await?;
        assert_eq!(state.get().await?.as_ref(), Some(&first));

        apply::Command::parse_from(["apply", "-k", "ecdsa"])
            .execute(&mut state)
            .await?;
        let replaced = state.get().await?.ok_or(error::Error::Command)?;
        assert_ne!(replaced.id(), first.id());
        assert!(replaced.pubkey().starts_with("ecdsa-sha2-nistp256 "));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_keytype_leaves_no_record() -> Result<()> {
        let mut state = memory();
        let result = apply::Command::parse_from(["apply", "--keytype", "bogus"])
            .execute(&mut state)
            .await;

        assert!(matches!(result, Err(error::Error::Command)));
        assert_eq!(state.get().await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn validate_fails_for_unsupported_keytype() {
        let mut state = memory();
        assert!(validate::Command::parse_from(["validate", "ecdsa"])
            .execute(&mut state)
            .await
            .is_ok());
        assert!(validate::Command::parse_from(["validate", "bogus"])
            .execute(&mut state)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn destroy_forgets_record() -> Result<()> {
        let mut state = memory();
        apply::Command::parse_from(["apply", "--keytype", "ed25519"])
            .execute(&mut state)
            .await?;
        destroy::Command::parse_from(["destroy"])
            .execute(&mut state)
            .await?;
        assert_eq!(state.get().await?, None);

        destroy::Command::parse_from(["destroy"])
            .execute(&mut state)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn read_and_import_without_record() -> Result<()> {
        let mut state = memory();
        assert!(read::Command::parse_from(["read"])
            .execute(&mut state)
            .await
            .is_err());
        assert!(import::Command::parse_from(["import", "any-id"])
            .execute(&mut state)
            .await
            .is_err());
        assert_eq!(state.get().await?, None);
        Ok(())
    }
}
