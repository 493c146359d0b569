use rustls::DistinguishedName;
use crate::ssl::structs::subject_name::SubjectName;
use crate::ssl::structs::trust_list::TrustList;
use crate::ssl::structs::trust_list_assembler::TrustListAssembler;

impl TrustList {
    /// Merges the optional bundle file and directory into one list.
    pub fn assemble(file: Option<&str>, directory: Option<&str>) -> Result<TrustList, String> {
        let mut assembler = TrustListAssembler::new();
        if let Some(file) = file {
            assembler.add_file(file)?;
        }
        if let Some(directory) = directory {
            assembler.add_directory(directory)?;
        }
        Ok(assembler.freeze())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubjectName> {
        self.names.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.names.iter().map(|name| name.to_string()).collect()
    }

    pub fn distinguished_names(&self) -> Vec<DistinguishedName> {
        self.names.iter().map(|name| name.to_distinguished_name()).collect()
    }
}
