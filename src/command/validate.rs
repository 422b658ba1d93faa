// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{error::Result, resource};

/// Check whether a key type is supported without generating anything.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The key type to check.
    #[clap()]
    keytype: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, _: &mut super::State) -> Result<()> {
        super::check(&resource::validate(&self.keytype))?;
        println!("{} is a supported keytype", self.keytype);
        Ok(())
    }
}
