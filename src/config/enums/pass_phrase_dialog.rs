use serde::{Deserialize, Serialize};

/// Only unencrypted key material is read by the builtin dialog.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassPhraseDialog {
    #[default]
    builtin,
}
