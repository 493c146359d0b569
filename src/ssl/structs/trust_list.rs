use crate::ssl::structs::subject_name::SubjectName;

/// Frozen, sorted and duplicate-free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustList {
    pub(crate) names: Vec<SubjectName>,
}
