use std::collections::BTreeSet;
use crate::ssl::structs::subject_name::SubjectName;

#[derive(Debug, Default)]
pub struct TrustListAssembler {
    pub(crate) names: BTreeSet<SubjectName>,
    pub(crate) discarded: usize,
}
