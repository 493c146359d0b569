use std::process::exit;
use clap::Parser;
use log::{error, info, warn};
use serde_json::json;
use vhost_tls::common::common::setup_logging;
use vhost_tls::config::structs::configuration::Configuration;
use vhost_tls::ssl::ssl::create_self_signed;
use vhost_tls::ssl::structs::engine_collaborators::EngineCollaborators;
use vhost_tls::ssl::structs::engine_state::EngineState;
use vhost_tls::ssl::structs::host_summary::HostSummary;
use vhost_tls::structs::Cli;

const SELF_SIGNED_BITS: usize = 2048;

fn main()
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{}", error);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.create_selfsigned {
        match create_self_signed(&args.selfsigned_domain, &args.selfsigned_keyfile, &args.selfsigned_certfile, SELF_SIGNED_BITS) {
            Ok(_) => exit(0),
            Err(error) => {
                error!("{}", error);
                exit(1);
            }
        }
    }

    let collaborators = EngineCollaborators::from_config(&config.engine);
    let (mut state, mut hosts) = match EngineState::init_module(&config, &collaborators) {
        Ok(result) => result,
        Err(error) => {
            error!("[INIT] Startup aborted: {}", error);
            exit(2);
        }
    };

    for host in hosts.iter().filter(|host| host.enabled) {
        if let Some(context) = &host.context {
            if let Err(error) = context.server_config() {
                warn!("[SSL] {}", error);
            }
        }
    }

    if args.check {
        let summaries: Vec<HostSummary> = hosts.iter().map(|host| host.summary()).collect();
        let report = json!({
            "version": state.version(),
            "hosts": summaries,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(report) => println!("{}", report),
            Err(error) => error!("[CHECK] Unable to render the summary: {}", error)
        }
    } else {
        info!("[INIT] {} virtual host(s) ready", hosts.iter().filter(|host| host.context.is_some()).count());
    }

    state.kill_module(&mut hosts);
}
