use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryMetadata, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response<T> {
    Ok(T),
    Err(io::ErrorKind, String),
}

impl<T: Clone> Response<T> {
    fn resolve(&self) -> io::Result<T> {
        match self {
            Response::Ok(value) => Ok(value.clone()),
            Response::Err(kind, message) => Err(io::Error::new(*kind, message.clone())),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    dirs: HashMap<PathBuf, Response<Vec<FsEntry>>>,
    metadata: HashMap<PathBuf, Response<EntryMetadata>>,
    calls: Vec<PathBuf>,
    metadata_calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.dirs.insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, kind: io::ErrorKind, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .dirs
            .insert(dir.into(), Response::Err(kind, message.into()));
    }

    pub fn set_metadata(&self, path: impl Into<PathBuf>, metadata: EntryMetadata) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.metadata.insert(path.into(), Response::Ok(metadata));
    }

    pub fn set_metadata_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.metadata.insert(
            path.into(),
            Response::Err(io::ErrorKind::NotFound, message.into()),
        );
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }

    pub fn metadata_calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.metadata_calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.dirs.get(dir) {
            Some(response) => response.resolve(),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock response for {}", dir.display()),
            )),
        }
    }

    async fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.metadata_calls.push(path.to_path_buf());

        match inner.metadata.get(path) {
            Some(response) => response.resolve(),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock metadata for {}", path.display()),
            )),
        }
    }
}
