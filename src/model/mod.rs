// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

mod algorithm;
mod diagnostics;
mod key_pair;
mod private_key;
mod record;

pub(crate) use algorithm::KeyAlgorithm;
pub(crate) use diagnostics::Diagnostics;
pub(crate) use key_pair::KeyPair;
pub(crate) use private_key::PrivateKeyPem;
pub(crate) use record::{Field, ResourceRecord};
