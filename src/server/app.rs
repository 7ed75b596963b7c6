use std::future::Future;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

use super::{
    error::ServerError,
    handlers,
    middleware::{cors, recover, trace_id},
    shutdown::{shutdown_signal, BoxError, ShutdownGroup},
};
use crate::config::Config;

/// Routes only, without middleware.
pub fn router() -> Router {
    let api_v1 = Router::new()
        .route("/calculate", post(handlers::calculate))
        .route("/healthz", get(handlers::healthz));
    Router::new()
        .nest("/api/v1", api_v1)
        .fallback(handlers::not_found)
}

/// Wraps `router` in panic recovery, CORS and trace ids, outermost first.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(middleware::from_fn(trace_id))
        .layer(middleware::from_fn(cors))
        .layer(middleware::from_fn(recover))
}

pub fn app() -> Router {
    with_middleware(router())
}

#[derive(Debug)]
pub struct App {
    config: Config,
    shutdown: ShutdownGroup,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            shutdown: ShutdownGroup::new(),
        }
    }

    /// Registers a hook to run after the server has drained.
    pub fn on_shutdown(
        &mut self,
        name: impl Into<String>,
        hook: impl FnOnce() -> Result<(), BoxError> + Send + 'static,
    ) {
        self.shutdown.add(name, hook);
    }

    /// Binds the configured address and serves until a termination signal.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(self.config.addr()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    pub async fn serve(
        self,
        listener: TcpListener,
        signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), ServerError> {
        tracing::info!(addr = %listener.local_addr()?, "listening");
        axum::serve(listener, app())
            .with_graceful_shutdown(signal)
            .await?;
        tracing::info!(hooks = self.shutdown.len(), "server stopped");
        self.shutdown.close()?;
        Ok(())
    }
}
