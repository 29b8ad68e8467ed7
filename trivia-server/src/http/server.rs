//! Axum server setup
//!
//! Server skeleton with:
//! - Every route mounted at the root and under `/api`
//! - Permissive CORS plus fixed allow-headers/allow-methods on every response
//! - JSON envelopes for unknown paths, wrong methods and handler panics
//! - Request tracing
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION, CONTENT_TYPE,
};
use axum::http::{HeaderValue, Method, Request, Uri};
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use trivia_core::{Settings, DEFAULT_QUESTIONS_PER_PAGE};

use super::error::ApiError;
use super::routes;
use crate::db::{CategoryStore, QuestionStore};

const ALLOWED_HEADERS: &str = "Content-Type,Authorization";
const ALLOWED_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for ServerConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            bind_addr: settings.bind_addr,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryStore>,
    pub questions: Arc<dyn QuestionStore>,
    pub questions_per_page: usize,
}

impl AppState {
    /// State over one store that serves both categories and questions.
    pub fn new<S>(store: S, questions_per_page: usize) -> Self
    where
        S: CategoryStore + QuestionStore + 'static,
    {
        let store = Arc::new(store);
        Self {
            categories: store.clone(),
            questions: store,
            questions_per_page: questions_per_page.max(1),
        }
    }

    /// State with the default page size.
    pub fn with_store<S>(store: S) -> Self
    where
        S: CategoryStore + QuestionStore + 'static,
    {
        Self::new(store, DEFAULT_QUESTIONS_PER_PAGE)
    }
}

/// Routes served both at `/` and under `/api`
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(routes::categories::router())
        .merge(routes::questions::router())
        .merge(routes::search::router())
        .merge(routes::quizzes::router())
        .merge(routes::health::router())
        .method_not_allowed_fallback(method_not_allowed)
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    // Outermost first
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                id = %uuid::Uuid::new_v4(),
            )
        }))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(cors)
        .layer(CatchPanicLayer::custom(panic_response));

    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .fallback(not_found)
        .layer(middleware)
        .with_state(Arc::new(state))
}

/// Unknown path
async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found("route", uri.path())
}

/// Known path, unsupported method
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Handler panicked: 500 envelope instead of a dropped connection
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "handler panicked".to_owned()
    };

    axum::response::IntoResponse::into_response(ApiError::Internal { message })
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let state = AppState::new(PgStore::new(pool), 10);
/// run_server(state, ServerConfig::default()).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!(
        questions_per_page = state.questions_per_page,
        "Trivia API configured"
    );

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
