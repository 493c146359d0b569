use log::error;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::process_fatal_handler::ProcessFatalHandler;
use crate::ssl::traits::fatal_handler::FatalHandler;

impl ProcessFatalHandler {
    pub fn new() -> ProcessFatalHandler {
        ProcessFatalHandler { exit_code: 1 }
    }
}

impl Default for ProcessFatalHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FatalHandler for ProcessFatalHandler {
    fn die(&self, error: &SslError) -> ! {
        error!("[SSL] {}", error);
        error!("[SSL] Init: SSL initialization failed, exiting");
        std::process::exit(self.exit_code)
    }
}
