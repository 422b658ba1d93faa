// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    missing_doc_code_examples,
    private_doc_tests,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::single_char_lifetime_names,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug,
    clippy::future_not_send
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

mod command;
mod error;
mod identity;
mod keygen;
mod metadata;
mod model;
mod policy;
mod resource;
mod rng;
mod storage;

use std::{path::PathBuf, process};

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use error::Result;
use log::{debug, error};
use model::ResourceRecord;

#[derive(Debug, Subcommand)]
enum Command {
    Validate(command::validate::Command),
    Apply(command::apply::Command),
    Read(command::read::Command),
    Destroy(command::destroy::Command),
    Import(command::import::Command),
}

#[async_trait]
impl command::Command for Command {
    async fn execute(self, state: &mut command::State) -> Result<()> {
        match self {
            Self::Validate(cmd) => cmd.execute(state).await,
            Self::Apply(cmd) => cmd.execute(state).await,
            Self::Read(cmd) => cmd.execute(state).await,
            Self::Destroy(cmd) => cmd.execute(state).await,
            Self::Import(cmd) => cmd.execute(state).await,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The file that tracks the generated key pair. Defaults to a file in the
    /// platform's data directory.
    #[arg(long, env = "SSH_KEYPAIR_STATE", value_hint = clap::ValueHint::FilePath, conflicts_with = "ephemeral")]
    state: Option<PathBuf>,

    /// Do not track the key pair beyond this invocation. Generated key
    /// material is printed instead.
    #[arg(long)]
    ephemeral: bool,

    #[clap(subcommand)]
    command: Command,
}

fn get_state_storage(args: &Args) -> Result<Box<command::State>> {
    if args.ephemeral {
        return Ok(Box::new(storage::Memory::<ResourceRecord>::new()));
    }

    let file = match args.state {
        Some(ref path) => storage::File::new(path),
        None => storage::File::new_in_data_dir(metadata::STATE_FILE_NAME)?,
    };
    Ok(Box::new(file))
}

async fn run(args: Args) -> Result<()> {
    let mut state = get_state_storage(&args)?;
    debug!("{} starting", *metadata::APPLICATION_DISPLAY_NAME);

    command::Command::execute(args.command, &mut *state).await
}

#[tokio::main]
async fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("SSH_KEYPAIR_LOG", "warn")
        .write_style("SSH_KEYPAIR_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    if let Err(e) = run(Args::parse()).await {
        error!("We encountered an error: {}", e);
        process::exit(1);
    };
}
