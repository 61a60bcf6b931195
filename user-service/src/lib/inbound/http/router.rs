use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::delete_user::delete_user;
use super::handlers::get_profile::get_profile;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::register_user::register_user;
use super::handlers::update_profile::update_profile;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::ports::UserServicePort;

/// Shared request context: the user service and the authenticator, both
/// constructed once at startup and injected here. No hidden globals.
pub struct AppState<US: UserServicePort> {
    pub user_service: Arc<US>,
    pub authenticator: Arc<Authenticator>,
}

// Manual Clone: deriving would demand US: Clone even though only Arcs are cloned.
impl<US: UserServicePort> Clone for AppState<US> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

pub fn create_router<US: UserServicePort>(
    user_service: Arc<US>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/", get(root))
        .route("/register_user", post(register_user::<US>))
        .route("/login", post(login::<US>))
        .route("/api/get_users", get(list_users::<US>))
        .route("/users/:user_id", delete(delete_user::<US>));

    let protected_routes = Router::new()
        .route("/user/get_profile", get(get_profile))
        .route("/update_profile", patch(update_profile::<US>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<US>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "User Service"
}
