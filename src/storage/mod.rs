// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

mod file;
mod memory;

use async_trait::async_trait;

use crate::error::Result;

pub(crate) use file::File;
pub(crate) use memory::Memory;

pub(crate) trait IsPersistent {
    fn is_persistent(&self) -> bool;
}

/// Holds the tracked state of at most one resource.
#[async_trait]
pub(crate) trait Storage<T>: Send + Sync + IsPersistent {
    async fn get(&mut self) -> Result<Option<T>>;
    async fn update(&mut self, data: &T) -> Result<()>;
    /// Forgets the tracked state. Clearing storage that holds nothing is not
    /// an error.
    async fn clear(&mut self) -> Result<()>;
}
