// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::CryptoRngCore;

thread_local! {
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_entropy());
}

/// Where key generation draws its randomness from. Every thread seeds its own
/// generator from the operating system, so concurrent generations never share
/// state.
#[derive(Default)]
pub(crate) enum Source<'rng> {
    #[default]
    ThreadLocal,
    #[cfg_attr(not(test), allow(dead_code))]
    Provided(&'rng mut (dyn CryptoRngCore + Send)),
}

impl Source<'_> {
    pub(crate) fn with<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn CryptoRngCore) -> R,
    {
        match *self {
            Self::ThreadLocal => RNG.with(|rng| f(&mut *rng.borrow_mut())),
            Self::Provided(ref mut rng) => f(&mut **rng),
        }
    }
}
