// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Debug, Formatter};

use secrecy::{ExposeSecret, Zeroize};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

#[derive(Deserialize, Serialize, Clone)]
#[serde(transparent)]
struct Pem(String);

impl secrecy::CloneableSecret for Pem {}

impl secrecy::DebugSecret for Pem {}

impl secrecy::SerializableSecret for Pem {}

impl Zeroize for Pem {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Unencrypted PEM text of a private key. The text is wiped from memory when
/// the value is dropped.
#[derive(Deserialize, Serialize, Clone)]
#[serde(transparent)]
pub(crate) struct PrivateKeyPem(secrecy::Secret<Pem>);

impl PrivateKeyPem {
    pub(crate) fn new(pem: String) -> Self {
        Self(secrecy::Secret::new(Pem(pem)))
    }
}

impl ExposeSecret<String> for PrivateKeyPem {
    fn expose_secret(&self) -> &String {
        &self.0.expose_secret().0
    }
}

impl PartialEq for PrivateKeyPem {
    fn eq(&self, other: &Self) -> bool {
        self.expose_secret()
            .as_bytes()
            .ct_eq(other.expose_secret().as_bytes())
            .unwrap_u8()
            == 1
    }
}

impl Eq for PrivateKeyPem {}

impl Debug for PrivateKeyPem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PrivateKeyPem").field(&self.0).finish()
    }
}
