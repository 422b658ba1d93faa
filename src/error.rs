// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, io, result};

use thiserror::Error;

pub(crate) type Result<T, E = Error> = result::Result<T, E>;

#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),
    #[error("JSON format error: {0}")]
    Json(serde_json::Error),
    #[error("error generating keypair: {0}")]
    Generation(#[from] Generation),
    #[error("internal error converting public key: {0}")]
    Parse(#[from] Parse),
    #[error("storage error: {0}")]
    Storage(#[from] Storage),
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("command execution failed")]
    Command,
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        // LINT: Deliberate fall-through that should catch future cases added to
        // the enum.
        #[allow(clippy::wildcard_enum_match_arm)]
        match value.classify() {
            serde_json::error::Category::Io => Self::Io(value.into()),
            _ => Self::Json(value),
        }
    }
}

/// Problems with user-supplied configuration. These are always reported
/// before any key material is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Validation {
    #[error("{} is not a supported keytype", Quoted(.0))]
    UnsupportedKeyType(String),
}

/// Double-quotes a value, escaping backslashes, double quotes and anything that
/// does not print. Single quotes are left alone.
struct Quoted<'value>(&'value str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                '\u{7}' => f.write_str("\\a")?,
                '\u{8}' => f.write_str("\\b")?,
                '\u{c}' => f.write_str("\\f")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\u{b}' => f.write_str("\\v")?,
                '\'' => f.write_str("'")?,
                c if c < ' ' || c == '\u{7f}' => write!(f, "\\x{:02x}", u32::from(c))?,
                c if c.escape_debug().next() != Some('\\') => write!(f, "{c}")?,
                c if u32::from(c) < 0x1_0000 => write!(f, "\\u{:04x}", u32::from(c))?,
                c => write!(f, "\\U{:08x}", u32::from(c))?,
            }
        }
        f.write_str("\"")
    }
}

#[derive(Error, Debug)]
pub(crate) enum Generation {
    #[error("{0}")]
    Primitive(#[from] ssh_key::Error),
    #[error("private key could not be encoded: {0}")]
    Encode(ssh_key::Error),
}

/// The generator and the parser disagreed about the format of a public key.
/// This never stems from user input.
#[derive(Error, Debug)]
pub(crate) enum Parse {
    #[error("public key is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("public key could not be parsed as an authorized key: {0}")]
    AuthorizedKey(ssh_key::Error),
    #[error("public key could not be marshaled to its wire form: {0}")]
    Marshal(ssh_key::Error),
    #[error("public key wire form could not be parsed: {0}")]
    WireFormat(ssh_key::Error),
    #[error("public key could not be encoded as an authorized key: {0}")]
    Encode(ssh_key::Error),
    #[error("generated {0} key parsed as {1}")]
    AlgorithmMismatch(crate::model::KeyAlgorithm, ssh_key::Algorithm),
}

#[derive(Error, Debug)]
pub(crate) enum Storage {
    #[error("no state location is available on this platform; pass --state explicitly")]
    NoLocation,
}
