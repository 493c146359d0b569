/// Logs the error and exits with `exit_code`.
#[derive(Debug, Clone, Copy)]
pub struct ProcessFatalHandler {
    pub exit_code: i32,
}
