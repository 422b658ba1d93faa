// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::info;
use secrecy::ExposeSecret as _;
use tokio::task;

use crate::{
    error::Result,
    keygen::GeneratorBuilder,
    policy,
    resource::{self, Plan, Resource},
};

/// Create the key pair, or replace it if its key type has changed.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The key type to generate: rsa, ed25519, or ecdsa. Defaults to rsa.
    #[arg(long, short)]
    keytype: Option<String>,

    /// The RSA modulus size in bits.
    #[arg(
        long,
        env = "SSH_KEYPAIR_RSA_BITS",
        default_value_t = policy::RSA_KEY_BITS,
        value_parser = clap::value_parser!(u16).range(i64::from(policy::RSA_MIN_KEY_BITS)..=i64::from(policy::RSA_MAX_KEY_BITS)),
    )]
    rsa_bits: u16,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, state: &mut super::State) -> Result<()> {
        let keytype = match resource::configure(self.keytype.as_deref()) {
            Ok(keytype) => keytype,
            Err(diags) => return super::check(&diags),
        };

        let current = state.get().await?.map(Resource::from_record);
        let rsa_bits = self.rsa_bits;
        let (plan, resource) = task::spawn_blocking(move || {
            let mut generator = GeneratorBuilder::new()
                .with_rsa_bits(rsa_bits)
                .into_generator();
            resource::apply(current, keytype, &mut generator)
        })
        .await??;
        let record = resource.into_record();

        match plan {
            Plan::Keep => info!("Key pair {} is up to date", record.id()),
            Plan::Create(_) | Plan::Replace { .. } => state.update(&record).await?,
        }

        if state.is_persistent() {
            println!("{}", record.id());
        } else {
            // Nothing will remember this key pair once we exit.
            print!("{}", record.privkey().expose_secret());
            print!("{}", record.pubkey());
            println!("{}", record.id());
        }
        Ok(())
    }
}
