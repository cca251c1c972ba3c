// rest/mod.rs — the public REST API server.
//
// Axum HTTP server bridging routes to the resource service.
//
// Endpoints:
//   GET    /                    welcome message
//   GET    /health
//   GET    /stats
//   POST   /users               GET /users
//   GET    /users/{id}          PUT /users/{id}      DELETE /users/{id}
//   POST   /tasks               GET /tasks?completed=&owner_id=
//   GET    /tasks/{id}          PUT /tasks/{id}      DELETE /tasks/{id}
//   PATCH  /tasks/{id}/complete

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, patch};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>, addr: SocketAddr) -> Result<()> {
    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health))
        .route("/stats", get(routes::health::stats))
        // Users
        .route(
            "/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/users/{id}",
            get(routes::users::get_user)
                .put(routes::users::update_user)
                .delete(routes::users::delete_user),
        )
        // Tasks
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .route("/tasks/{id}/complete", patch(routes::tasks::complete_task))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
