use std::path::PathBuf;

use casinomatch::{
    catalog::QuestionCatalog,
    names,
    services::content::{load_casinos, BuiltinCasinos, JsonFileSource},
    AppState,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// JSON export of casino records. The built-in records are used when it
    /// is missing or unreadable.
    #[arg(long, env)]
    casinos_file: Option<PathBuf>,

    /// How many recommendations the results screen shows.
    #[arg(long, env, default_value_t = names::DEFAULT_RESULT_LIMIT)]
    result_limit: usize,

    /// Mark cookies as `Secure` (enable behind HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tower_http=info,casinomatch=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let fallback = BuiltinCasinos::default();
    let casinos = match &args.casinos_file {
        Some(path) => load_casinos(&JsonFileSource::new(path), &fallback).await?,
        None => load_casinos(&fallback, &fallback).await?,
    };

    let mut state = AppState::new(QuestionCatalog::standard(), casinos);
    state.result_limit = args.result_limit;
    state.secure_cookies = args.secure_cookies;

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, casinomatch::router(state)).await?;

    Ok(())
}
