mod provider;

use std::io;

use clap::Parser;
use doctor_ai::session::console;
use doctor_ai::{Session, DOCTOR_SYSTEM_PROMPT};

use crate::args::CliArgs;
use crate::config::load_config;
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let _args = CliArgs::parse();
    let loaded = load_config()?;
    let _logger = init_logging(&loaded.config.logging, &loaded.paths)?;
    if loaded.config_exists {
        log::info!("using overrides from {}", loaded.paths.config_file.display());
    }

    let provider = provider::build_provider(&loaded.config)?;
    log::info!(
        "provider ready: model={} base_url={}",
        provider.model(),
        provider.base_url()
    );
    let system_prompt = loaded
        .config
        .chat
        .system_prompt
        .clone()
        .unwrap_or_else(|| DOCTOR_SYSTEM_PROMPT.to_string());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session::start(Box::new(provider), system_prompt);
    console::banner(&mut out)?;
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    session.run(input, &mut out).await?;
    Ok(())
}
