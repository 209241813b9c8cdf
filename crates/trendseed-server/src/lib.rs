//! trendseed-server — the axum HTTP surface.
//!
//! Two routes over shared [`AppState`]:
//!
//! - `GET /api/suggestions?q=` — suggestion list with its provenance tag.
//! - `GET /api/search?q=` — full analysis: main keyword, ranked related
//!   keywords, candidate totals, and instant suggestions for the next query.
//!
//! [`build_router`] is public so harnesses can drive the router in-process
//! with stub collaborators and no listening socket.

pub mod error;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;
use trendseed_core::config::Config;
use trendseed_core::{Orchestrator, SuggestionSource, TrendSource};
use trendseed_sources::{RemoteSuggestionFetcher, TrendsClient};

use axum::{routing::get, Router};

/// Shared state for the route handlers. Cloning is cheap — everything is
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub suggestions: Arc<dyn SuggestionSource>,
}

/// Assemble the router over a prepared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/suggestions", get(routes::suggestions))
        .route("/api/search", get(routes::search))
        .with_state(state)
}

/// Wire the production collaborators and serve until the task is aborted.
///
/// `bind_override` takes precedence over the configured bind address.
pub async fn run(config: Config, bind_override: Option<SocketAddr>) -> anyhow::Result<()> {
    let fetcher = Arc::new(RemoteSuggestionFetcher::new(&config.suggest)?);
    let trends: Arc<dyn TrendSource> = Arc::new(TrendsClient::new(&config.trends)?);

    let suggestions: Arc<dyn SuggestionSource> = fetcher;
    let orchestrator = Arc::new(Orchestrator::new(
        suggestions.clone(),
        trends,
        config.analysis.clone(),
    ));

    let state = AppState { orchestrator, suggestions };

    let addr: SocketAddr = match bind_override {
        Some(addr) => addr,
        None => config.server.bind.parse()?,
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "starting trendseed API server");

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
