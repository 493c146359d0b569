use std::fs::File;
use std::io::Write;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::mutex_mode::MutexMode;
use crate::config::enums::pass_phrase_dialog::PassPhraseDialog;
use crate::config::enums::protocol_version::ProtocolVersion;
use crate::config::enums::session_cache_mode::SessionCacheMode;
use crate::config::enums::verify_mode::VerifyMode;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::engine_config::EngineConfig;
use crate::config::structs::virtual_host_config::VirtualHostConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            engine: EngineConfig {
                crypto_device: Some(String::from("builtin")),
                session_cache: Some(SessionCacheMode::memory),
                session_cache_size: Some(512),
                session_cache_timeout: Some(300),
                mutex: Some(MutexMode::none),
                mutex_file: None,
                pass_phrase_dialog: Some(PassPhraseDialog::builtin),
                random_seed_bytes: Some(512),
            },
            virtual_hosts: vec![
                VirtualHostConfig {
                    server_name: String::from("localhost"),
                    bind_address: String::from("0.0.0.0:443"),
                    enabled: Some(false),
                    source: Some(String::from("config.toml:1")),
                    protocols: Some(vec![ProtocolVersion::tlsv1_2, ProtocolVersion::tlsv1_3]),
                    cipher_suite: None,
                    verify_client: Some(VerifyMode::none),
                    verify_depth: Some(1),
                    certificate_files: vec![String::from("cert.pem")],
                    key_files: vec![String::from("key.pem")],
                    ca_certificate_file: None,
                    ca_certificate_path: None,
                    ca_revocation_file: None,
                    ca_revocation_path: None,
                    certificate_chain_file: None,
                    session_cache_timeout: None,
                    trace_state: Some(false),
                }
            ],
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and enable at least one virtual host, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                }
            }
        }
    }
}
