use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use log::debug;
use parking_lot::Mutex;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::file_mutex::FileMutex;
use crate::ssl::traits::engine_mutex::EngineMutex;

impl FileMutex {
    pub fn new<P: AsRef<Path>>(path: P) -> FileMutex {
        FileMutex {
            path: PathBuf::from(path.as_ref()),
            handle: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.handle.lock().is_some()
    }

    fn open(&self) -> Result<(), SslError> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|e| SslError::MutexInit(format!("{}: {}", self.path.display(), e)))?;
        *self.handle.lock() = Some(file);
        Ok(())
    }
}

impl EngineMutex for FileMutex {
    fn initialize(&self) -> Result<(), SslError> {
        self.open()?;
        debug!("[SSL] lock file {} ready", self.path.display());
        Ok(())
    }

    /// Children reopen the lock file so they do not share the parent's descriptor.
    fn reinit_after_fork(&self) -> Result<(), SslError> {
        self.open()
    }

    fn kill(&self) {
        if self.handle.lock().take().is_some() {
            let _ = fs::remove_file(&self.path);
        }
    }
}
