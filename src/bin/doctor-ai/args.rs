use clap::Parser;

/// The assistant takes no options; clap supplies `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "doctor-ai",
    version,
    about = "Interactive CLI for asking a medical assistant health-related questions"
)]
pub struct CliArgs {}
