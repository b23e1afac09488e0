mod cli;
mod config;
mod gateways;
mod reload;

fn main() -> anyhow::Result<()> {
    // Environment variables from .env must be present before the logger reads RUST_LOG
    let dotenv = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match dotenv {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => log::warn!("Unable to load .env file: {err}"),
    }
    cli::run()
}
