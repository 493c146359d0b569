use std::fs;
use std::path::Path;
use log::debug;
use rustls::pki_types::CertificateRevocationListDer;
use x509_parser::prelude::parse_x509_crl;
use crate::ssl::ssl::is_pem;
use crate::ssl::structs::revocation_store::RevocationStore;

fn read_crls(path: &Path) -> Result<Vec<CertificateRevocationListDer<'static>>, String> {
    let data = fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if is_pem(&data) {
        return rustls_pemfile::crls(&mut data.as_slice())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("{}: {}", path.display(), e));
    }
    Ok(vec![CertificateRevocationListDer::from(data)])
}

impl RevocationStore {
    pub fn load(file: Option<&str>, directory: Option<&str>) -> Result<RevocationStore, String> {
        let mut store = RevocationStore::default();
        if let Some(file) = file {
            let crls = read_crls(Path::new(file))?;
            if crls.is_empty() {
                return Err(format!("{}: no CRL found", file));
            }
            for crl in crls {
                store.add(crl).map_err(|e| format!("{}: {}", file, e))?;
            }
        }
        if let Some(directory) = directory {
            let entries = fs::read_dir(directory).map_err(|e| format!("{}: {}", directory, e))?;
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    continue;
                }
                let crls = match read_crls(&path) {
                    Ok(crls) => crls,
                    Err(e) => {
                        debug!("[SSL] skipping {}", e);
                        continue;
                    }
                };
                for crl in crls {
                    if let Err(e) = store.add(crl) {
                        debug!("[SSL] skipping {}: {}", path.display(), e);
                    }
                }
            }
        }
        Ok(store)
    }

    pub fn add(&mut self, crl: CertificateRevocationListDer<'static>) -> Result<(), String> {
        let issuer = {
            let (_, parsed) = parse_x509_crl(&crl).map_err(|e| e.to_string())?;
            parsed.issuer().to_string()
        };
        debug!("[SSL] CRL issued by {} loaded", issuer);
        self.issuers.push(issuer);
        self.crls.push(crl);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.crls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crls.is_empty()
    }

    pub fn issuers(&self) -> &[String] {
        &self.issuers
    }

    pub fn crls(&self) -> Vec<CertificateRevocationListDer<'static>> {
        self.crls.clone()
    }
}
