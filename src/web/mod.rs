use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::RosterStore;
use crate::services::roster_service::CapacityPolicy;

pub mod routes;

use routes::{activities, health};

pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: RosterStore,
    pub capacity_policy: CapacityPolicy,
}

pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    // Rosters change on every signup; never let a browser reuse a stale list.
    let activity_routes = Router::new()
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/health", get(health::health_handler))
        .merge(activity_routes)
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
