use std::fmt;
use rustls::DistinguishedName;
use x509_parser::prelude::{parse_x509_certificate, FromDer, X509Name};
use crate::ssl::structs::subject_name::SubjectName;

impl SubjectName {
    pub fn from_der(der: &[u8]) -> SubjectName {
        SubjectName(der.to_vec())
    }

    /// Subject name of a DER encoded certificate.
    pub fn from_certificate(certificate: &[u8]) -> Result<SubjectName, String> {
        let (_, parsed) = parse_x509_certificate(certificate).map_err(|e| e.to_string())?;
        Ok(SubjectName(parsed.subject().as_raw().to_vec()))
    }

    pub fn as_der(&self) -> &[u8] {
        &self.0
    }

    pub fn to_distinguished_name(&self) -> DistinguishedName {
        DistinguishedName::from(self.0.clone())
    }
}

impl fmt::Display for SubjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match X509Name::from_der(&self.0) {
            Ok((_, name)) => write!(f, "{}", name),
            Err(_) => write!(f, "<{} bytes>", self.0.len()),
        }
    }
}
