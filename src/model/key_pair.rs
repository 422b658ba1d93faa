// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use super::{KeyAlgorithm, PrivateKeyPem};

/// Freshly generated key material. Nothing retains a `KeyPair` once its
/// derived outputs have been captured in a record.
pub(crate) struct KeyPair {
    algorithm: KeyAlgorithm,
    private_key_pem: PrivateKeyPem,
    public_key_raw: Vec<u8>,
}

impl KeyPair {
    pub(crate) const fn new(
        algorithm: KeyAlgorithm,
        private_key_pem: PrivateKeyPem,
        public_key_raw: Vec<u8>,
    ) -> Self {
        Self {
            algorithm,
            private_key_pem,
            public_key_raw,
        }
    }

    pub(crate) const fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    #[cfg(test)]
    pub(crate) const fn private_key_pem(&self) -> &PrivateKeyPem {
        &self.private_key_pem
    }

    /// Authorized-key text exactly as the generator produced it.
    pub(crate) fn public_key_raw(&self) -> &[u8] {
        &self.public_key_raw
    }

    pub(crate) fn into_private_key_pem(self) -> PrivateKeyPem {
        self.private_key_pem
    }
}
