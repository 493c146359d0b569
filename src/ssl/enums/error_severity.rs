#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Terminates the initializing process.
    fatal,
    /// Aborts initialization with an error status the caller may retry.
    blocking,
}
