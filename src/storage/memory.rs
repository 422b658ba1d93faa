// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;

use super::{IsPersistent, Storage};

/// State that lives only as long as the current invocation.
pub(crate) struct Memory<T> {
    data: RwLock<Option<T>>,
}

impl<T> Memory<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl<T> IsPersistent for Memory<T> {
    fn is_persistent(&self) -> bool {
        false
    }
}

#[async_trait]
impl<T: Send + Sync + Clone> Storage<T> for Memory<T> {
    async fn get(&mut self) -> Result<Option<T>> {
        Ok(self.data.read().await.clone())
    }

    async fn update(&mut self, data: &T) -> Result<()> {
        *self.data.write().await = Some(data.clone());
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        *self.data.write().await = None;
        Ok(())
    }
}

impl<T> Default for Memory<T> {
    fn default() -> Self {
        Self {
            data: RwLock::new(None),
        }
    }
}
