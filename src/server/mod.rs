//! HTTP front end: `POST /api/v1/calculate` and `GET /api/v1/healthz`.

pub mod app;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod shutdown;

pub use app::{app, router, with_middleware, App};
pub use error::{ApiError, ServerError};
pub use shutdown::{shutdown_signal, ShutdownError, ShutdownGroup};
