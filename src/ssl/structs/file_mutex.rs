use std::fs::File;
use std::path::PathBuf;
use parking_lot::Mutex;

#[derive(Debug)]
pub struct FileMutex {
    pub(crate) path: PathBuf,
    pub(crate) handle: Mutex<Option<File>>,
}
