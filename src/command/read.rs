// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::error;
use tabled::{settings::Style, Table};

use crate::{
    error::{self, Result},
    model::Field,
    resource::Resource,
};

/// Show the tracked key pair. Reading never regenerates or re-fetches key
/// material; it prints exactly what was recorded when the key pair was
/// created.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// Print only the raw value of a single field. This is the only way to
    /// reveal the private key.
    #[arg(long, short, value_enum)]
    field: Option<Field>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, state: &mut super::State) -> Result<()> {
        let Some(record) = state.get().await? else {
            error!("No key pair has been created yet");
            return Err(error::Error::Command);
        };
        let resource = Resource::from_record(record);

        if let Some(field) = self.field {
            let value = resource.read().field(field);
            if value.ends_with('\n') {
                print!("{value}");
            } else {
                println!("{value}");
            }
        } else {
            println!(
                "{}",
                Table::new([resource.read()]).with(Style::rounded())
            );
        }
        Ok(())
    }
}
