// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs,
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::{
    error::{self, Result},
    metadata,
};

use super::{IsPersistent, Storage};

/// State kept as JSON in a single file. The file holds private key material,
/// so on Unix it is only readable by its owner. Updates replace the file
/// atomically.
pub(crate) struct File {
    path: PathBuf,
}

impl File {
    pub(crate) fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_owned(),
        }
    }

    pub(crate) fn new_in_data_dir<P: AsRef<Path>>(file: P) -> Result<Self> {
        metadata::PROJECT_DIRS
            .as_ref()
            .map(|dirs| Self::new(dirs.data_dir().join(file)))
            .ok_or_else(|| error::Storage::NoLocation.into())
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl IsPersistent for File {
    fn is_persistent(&self) -> bool {
        true
    }
}

#[async_trait]
impl<T: Send + Serialize + Sync + for<'de> Deserialize<'de>> Storage<T> for File {
    async fn get(&mut self) -> Result<Option<T>> {
        match fs::File::open(&self.path) {
            Ok(fp) => Ok(Some(serde_json::from_reader::<fs::File, T>(fp)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&mut self, data: &T) -> Result<()> {
        let dir = self.dir();
        fs::create_dir_all(dir)?;

        // Temporary files are created with mode 0600 on Unix.
        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, data)?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;
        _ = file.persist(&self.path).map_err(io::Error::from)?;
        debug!("Wrote state to {}", self.path.display());
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed state at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_through_disk() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("state.json");
        let mut storage = File::new(&path);
        assert!(storage.is_persistent());

        assert_eq!(Storage::<Vec<String>>::get(&mut storage).await?, None);

        storage.update(&vec!["a".to_owned(), "b".to_owned()]).await?;
        assert_eq!(
            Storage::<Vec<String>>::get(&mut storage).await?,
            Some(vec!["a".to_owned(), "b".to_owned()]),
        );

        Storage::<Vec<String>>::clear(&mut storage).await?;
        assert!(!path.exists());
        Storage::<Vec<String>>::clear(&mut storage).await?;
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn state_is_owner_only() -> Result<()> {
        use std::os::unix::fs::PermissionsExt as _;

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("state.json");
        let mut storage = File::new(&path);
        storage.update(&"secret".to_owned()).await?;
        assert_eq!(fs::metadata(&path)?.permissions().mode() & 0o777, 0o600);

        let loose = dir.path().join("loose.json");
        fs::write(&loose, "\"old\"\n")?;
        fs::set_permissions(&loose, fs::Permissions::from_mode(0o644))?;
        let mut storage = File::new(&loose);
        storage.update(&"secret".to_owned()).await?;
        assert_eq!(fs::metadata(&loose)?.permissions().mode() & 0o777, 0o600);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_whole_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("state.json");
        let mut storage = File::new(&path);
        storage.update(&"a much longer first value".to_owned()).await?;
        storage.update(&"second".to_owned()).await?;

        assert_eq!(fs::read_to_string(&path)?, "\"second\"\n");
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_state_is_reported() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json")?;

        let mut storage = File::new(&path);
        assert!(matches!(
            Storage::<Vec<String>>::get(&mut storage).await,
            Err(error::Error::Json(_))
        ));
        Ok(())
    }
}
