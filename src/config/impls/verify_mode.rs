use crate::config::enums::verify_mode::VerifyMode;

impl VerifyMode {
    pub fn is_none(&self) -> bool {
        matches!(self, VerifyMode::none)
    }

    pub fn is_required(&self) -> bool {
        matches!(self, VerifyMode::require)
    }

    /// `optional_no_ca` accepts client certificates without chain validation.
    pub fn skips_ca_check(&self) -> bool {
        matches!(self, VerifyMode::optional_no_ca)
    }
}
