//! File store over the storage directory.
//!
//! Filenames are the only key. Uploads overwrite silently. Operations on the
//! same name are serialised through `KeyedLocks`; different names run in
//! parallel.

use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use super::locks::KeyedLocks;
use super::name::validate_filename;
use crate::core::error::{Error, Result};

pub struct FileStore {
    root: PathBuf,
    locks: KeyedLocks,
}

fn not_found_or_io(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::NotFound
    } else {
        Error::Io(err)
    }
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locks: KeyedLocks::new(),
        }
    }

    fn resolve(&self, name: &str) -> Result<PathBuf> {
        Ok(self.root.join(validate_filename(name)?))
    }

    /// Stream `chunks` into `name`, replacing any existing file.
    ///
    /// If the stream or a write fails part way the partial file is removed.
    pub async fn upload<S, E>(&self, name: &str, chunks: S) -> Result<u64>
    where
        S: Stream<Item = std::result::Result<Bytes, E>>,
        E: Into<Error>,
    {
        let path = self.resolve(name)?;
        let _guard = self.locks.lock(name).await;

        let mut file = File::create(&path).await?;
        let copied = copy_chunks(&mut file, chunks).await;
        drop(file);

        match copied {
            Ok(written) => {
                info!("Wrote {} ({} bytes)", name, written);
                Ok(written)
            }
            Err(e) => {
                if let Err(rm) = fs::remove_file(&path).await {
                    warn!("Failed to remove partial upload {:?}: {}", path, rm);
                }
                Err(e)
            }
        }
    }

    /// Single-buffer upload for tests.
    #[cfg(test)]
    pub(crate) async fn write(&self, name: &str, data: impl Into<Bytes>) -> Result<u64> {
        let once = futures::stream::iter([Ok::<Bytes, Error>(data.into())]);
        self.upload(name, once).await
    }

    /// Names of the regular files in the storage directory, unsorted.
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!("Skipping non UTF-8 filename {:?}", raw),
            }
        }

        Ok(names)
    }

    /// Open `name` for reading, returning the handle and its length.
    pub async fn open(&self, name: &str) -> Result<(File, u64)> {
        let path = self.resolve(name)?;
        let _guard = self.locks.lock(name).await;

        let file = File::open(&path).await.map_err(not_found_or_io)?;
        let meta = file.metadata().await?;
        if !meta.is_file() {
            return Err(Error::NotFound);
        }
        Ok((file, meta.len()))
    }

    /// Read the whole file into memory, holding the name's lock throughout.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve(name)?;
        let _guard = self.locks.lock(name).await;

        ensure_file(&path).await?;
        fs::read(&path).await.map_err(not_found_or_io)
    }

    /// Remove `name` for good.
    pub async fn delete(&self, name: &str) -> Result<()> {
        let path = self.resolve(name)?;
        let _guard = self.locks.lock(name).await;

        ensure_file(&path).await?;
        fs::remove_file(&path).await.map_err(not_found_or_io)?;
        info!("Deleted {}", name);
        Ok(())
    }
}

async fn ensure_file(path: &Path) -> Result<()> {
    let meta = fs::metadata(path).await.map_err(not_found_or_io)?;
    if !meta.is_file() {
        return Err(Error::NotFound);
    }
    Ok(())
}

async fn copy_chunks<S, E>(file: &mut File, chunks: S) -> Result<u64>
where
    S: Stream<Item = std::result::Result<Bytes, E>>,
    E: Into<Error>,
{
    let mut chunks = std::pin::pin!(chunks);
    let mut written = 0u64;

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.map_err(Into::into)?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(written)
}
