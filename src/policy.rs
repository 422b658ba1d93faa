// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed parameters for key generation and identity derivation.

use ssh_key::{EcdsaCurve, LineEnding};

use crate::model::KeyAlgorithm;

/// Algorithm used when the configuration does not name one.
pub(crate) const DEFAULT_KEY_ALGORITHM: KeyAlgorithm = KeyAlgorithm::Rsa;

/// RSA modulus size in bits.
pub(crate) const RSA_KEY_BITS: u16 = 4096;

/// Smallest RSA modulus size accepted from configuration.
pub(crate) const RSA_MIN_KEY_BITS: u16 = 2048;

/// Largest RSA modulus size accepted from configuration.
pub(crate) const RSA_MAX_KEY_BITS: u16 = 16384;

pub(crate) const ECDSA_CURVE: EcdsaCurve = EcdsaCurve::NistP256;

/// Generated keys carry no comment, so the authorized-key text consists of
/// the algorithm name and the base64 payload only.
pub(crate) const KEY_COMMENT: &str = "";

pub(crate) const PRIVATE_KEY_LINE_ENDING: LineEnding = LineEnding::LF;

/// Label that precedes the base64 digest in a fingerprint.
pub(crate) const FINGERPRINT_LABEL: &str = "SHA256";
