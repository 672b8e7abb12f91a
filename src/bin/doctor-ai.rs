#[path = "doctor-ai/app/mod.rs"]
mod app;
#[path = "doctor-ai/args.rs"]
mod args;
#[path = "doctor-ai/config/mod.rs"]
mod config;
#[path = "doctor-ai/logging.rs"]
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
