#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;

    use anyhow::Context;
    use roster_ics::{RosterConfig, http_api, logging};

    logging::init(1);

    let addr: SocketAddr = std::env::var("ROSTER_ICS_HTTP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()
        .context("ROSTER_ICS_HTTP_ADDR is not a socket address")?;

    let config = match std::env::var("ROSTER_ICS_CONFIG") {
        Ok(path) => RosterConfig::load(&path)
            .with_context(|| format!("failed to load config from {path}"))?,
        Err(_) => RosterConfig::default(),
    };
    let config = config.resolve()?;

    let max_sessions = match std::env::var("ROSTER_ICS_MAX_SESSIONS") {
        Ok(value) => value
            .parse::<usize>()
            .context("ROSTER_ICS_MAX_SESSIONS is not a positive integer")?,
        Err(_) => http_api::DEFAULT_SESSION_CAPACITY,
    };

    tracing::info!(
        %addr,
        timezone = %config.timezone,
        max_sessions,
        "roster-ics HTTP API listening"
    );
    let state = http_api::AppState::with_session_capacity(config, max_sessions);
    http_api::serve(addr, state).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
