use std::fs;
use std::path::Path;
use log::{debug, trace};
use crate::ssl::ssl::load_certificates;
use crate::ssl::structs::subject_name::SubjectName;
use crate::ssl::structs::trust_list::TrustList;
use crate::ssl::structs::trust_list_assembler::TrustListAssembler;

impl TrustListAssembler {
    pub fn new() -> TrustListAssembler {
        TrustListAssembler::default()
    }

    /// Returns false when an equal name was already present; the new copy is dropped.
    pub fn insert(&mut self, name: SubjectName) -> bool {
        if self.names.contains(&name) {
            trace!("[TRUST] discarding duplicate CA name {}", name);
            self.discarded += 1;
            return false;
        }
        self.names.insert(name)
    }

    fn add_certificates(&mut self, path: &Path) -> Result<usize, String> {
        let certificates = load_certificates(path)?;
        if certificates.is_empty() {
            return Err(format!("{}: no CA certificates found", path.display()));
        }
        let mut added = 0;
        for certificate in certificates {
            let name = SubjectName::from_certificate(&certificate)
                .map_err(|e| format!("{}: {}", path.display(), e))?;
            if self.insert(name) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// A bundle that cannot be read or holds no certificate is an error.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, String> {
        let added = self.add_certificates(path.as_ref())?;
        debug!("[TRUST] {}: {} CA name(s) added", path.as_ref().display(), added);
        Ok(added)
    }

    /// Walks directory entries in filesystem order; entries that are not certificates are skipped.
    pub fn add_directory<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, String> {
        let path = path.as_ref();
        let entries = fs::read_dir(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        let mut added = 0;
        for entry in entries {
            let entry = entry.map_err(|e| format!("{}: {}", path.display(), e))?;
            let entry_path = entry.path();
            match fs::metadata(&entry_path) {
                Ok(metadata) if metadata.is_dir() => continue,
                Ok(_) => {}
                Err(e) => {
                    debug!("[TRUST] skipping {}: {}", entry_path.display(), e);
                    continue;
                }
            }
            match self.add_certificates(&entry_path) {
                Ok(count) => added += count,
                Err(e) => debug!("[TRUST] skipping {}", e),
            }
        }
        debug!("[TRUST] {}: {} CA name(s) added", path.display(), added);
        Ok(added)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn freeze(self) -> TrustList {
        TrustList {
            names: self.names.into_iter().collect(),
        }
    }
}
