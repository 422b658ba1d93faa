// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

use sha2::{Digest, Sha256};
use ssh_key::PublicKey;

use crate::{error, policy};

const FINGERPRINT_BYTES: usize = 32;

/// SHA-256 digest of a public key's wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Fingerprint([u8; FINGERPRINT_BYTES]);

impl Fingerprint {
    fn of_wire(wire: &[u8]) -> Self {
        Self(Sha256::digest(wire).into())
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}",
            policy::FINGERPRINT_LABEL,
            base64::encode_config(self.0, base64::STANDARD_NO_PAD),
        )
    }
}

/// A public key in the single representation used for display and
/// identification, regardless of how its text was originally formatted.
#[derive(Debug, Clone)]
pub(crate) struct CanonicalPublicKey {
    key: PublicKey,
    authorized_key: String,
    fingerprint: Fingerprint,
}

impl CanonicalPublicKey {
    pub(crate) fn algorithm(&self) -> ssh_key::Algorithm {
        self.key.algorithm()
    }

    /// `<algorithm-name> <base64-payload>` followed by a newline.
    pub(crate) fn authorized_key(&self) -> &str {
        &self.authorized_key
    }

    pub(crate) const fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }
}

/// Parses authorized-key text and reduces it to its canonical form.
///
/// The key is parsed from text, marshaled to its wire form, and parsed again
/// from the wire form. Anything the text carried beyond the key itself, such
/// as a comment or surrounding whitespace, does not survive.
pub(crate) fn derive(public_key_raw: &[u8]) -> Result<CanonicalPublicKey, error::Parse> {
    let text = std::str::from_utf8(public_key_raw)?;
    let parsed = PublicKey::from_openssh(text.trim()).map_err(error::Parse::AuthorizedKey)?;

    let wire = parsed.to_bytes().map_err(error::Parse::Marshal)?;
    let key = PublicKey::from_bytes(&wire).map_err(error::Parse::WireFormat)?;

    let mut authorized_key = key.to_openssh().map_err(error::Parse::Encode)?;
    authorized_key.push('\n');

    let fingerprint = Fingerprint::of_wire(&key.to_bytes().map_err(error::Parse::Marshal)?);

    Ok(CanonicalPublicKey {
        key,
        authorized_key,
        fingerprint,
    })
}
