//! HTTP surface: an explicit table of (verb, path, policy, handler) entries,
//! assembled into one router with the global layers on top.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::{on, post, MethodFilter, MethodRouter},
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::{JwtKeys, Policy};
use crate::config::{AppConfig, Environment};
use crate::error::ApiError;
use crate::handlers::{golfers, health, member_types, members, participation, tokens, tournaments};
use crate::middleware::{require_policy, AuthGate};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn filter(self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Put => MethodFilter::PUT,
            Verb::Delete => MethodFilter::DELETE,
        }
    }
}

pub struct RouteEntry {
    pub verb: Verb,
    pub path: &'static str,
    pub policy: Policy,
    pub handler: MethodRouter<AppState>,
}

fn entry<H, T>(verb: Verb, path: &'static str, policy: Policy, handler: H) -> RouteEntry
where
    H: axum::handler::Handler<T, AppState>,
    T: 'static,
{
    RouteEntry {
        verb,
        path,
        policy,
        handler: on(verb.filter(), handler),
    }
}

pub fn route_table() -> Vec<RouteEntry> {
    use Policy::{Admin, Anonymous, Authenticated, Trusted};
    use Verb::{Delete, Get, Post, Put};

    vec![
        entry(Get, "/_health", Anonymous, health::get),
        // Golfers
        entry(Get, "/api/golfers", Authenticated, golfers::list),
        entry(Post, "/api/golfers", Authenticated, golfers::post),
        entry(Get, "/api/golfers/:id", Anonymous, golfers::get),
        entry(Put, "/api/golfers/:id", Authenticated, golfers::put),
        entry(Delete, "/api/golfers/:id", Authenticated, golfers::delete),
        entry(Post, "/api/golfers/:id/tournamentparticipation", Trusted, participation::post_for_golfer),
        // Tournaments
        entry(Get, "/api/tournaments", Anonymous, tournaments::list),
        entry(Post, "/api/tournaments", Authenticated, tournaments::post),
        entry(Get, "/api/tournaments/:id", Anonymous, tournaments::get),
        entry(Put, "/api/tournaments/:id", Authenticated, tournaments::put),
        entry(Delete, "/api/tournaments/:id", Authenticated, tournaments::delete),
        entry(Post, "/api/tournaments/:id/tournamentparticipation", Trusted, participation::post_for_tournament),
        // Participation, keyed by query string
        entry(Get, "/api/tournamentparticipation", Anonymous, participation::get),
        entry(Post, "/api/tournamentparticipation", Trusted, participation::post),
        entry(Put, "/api/tournamentparticipation", Trusted, participation::put),
        entry(Delete, "/api/tournamentparticipation", Admin, participation::delete),
        // Member types
        entry(Get, "/api/membertypes", Anonymous, member_types::list),
        entry(Post, "/api/membertypes", Authenticated, member_types::post),
        entry(Get, "/api/membertypes/:id", Anonymous, member_types::get),
        entry(Put, "/api/membertypes/:id", Authenticated, member_types::put),
        entry(Delete, "/api/membertypes/:id", Authenticated, member_types::delete),
        // Members
        entry(Get, "/api/members", Anonymous, members::list),
        entry(Post, "/api/members", Authenticated, members::post),
        entry(Get, "/api/members/:id", Anonymous, members::get),
        entry(Put, "/api/members/:id", Authenticated, members::put),
        entry(Delete, "/api/members/:id", Authenticated, members::delete),
    ]
}

/// The API router with policy gates, tracing, CORS, body limit and the
/// panic boundary applied
pub fn router(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new();

    for RouteEntry { verb, path, policy, handler } in route_table() {
        tracing::debug!("Route {:?} {} ({:?})", verb, path, policy);
        let handler = match policy {
            Policy::Anonymous => handler,
            policy => handler.route_layer(middleware::from_fn_with_state(
                AuthGate {
                    policy,
                    keys: state.keys.clone(),
                },
                require_policy,
            )),
        };
        // Same-path entries merge into one method router
        router = router.route(path, handler);
    }

    router
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors(config))
}

/// Router of the local token helper
pub fn identity_router(keys: Arc<JwtKeys>) -> Router {
    Router::new()
        .route("/api/tokens", post(tokens::post))
        .with_state(keys)
        .layer(TraceLayer::new_for_http())
}

fn cors(config: &AppConfig) -> CorsLayer {
    if config.environment == Environment::Development {
        return CorsLayer::permissive();
    }
    if !config.security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::LOCATION])
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    tracing::error!("Handler panicked: {}", detail);
    ApiError::internal_server_error("An unexpected error occurred").into_response()
}
