use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_handler, delete_handler, health_handler, list_handler, metrics_handler,
    redirect_handler, update_handler,
};
use crate::middleware::track_request;
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the full router. Only the association routes are timed and
    /// logged by [`track_request`]; `/health` and `/metrics` are not.
    pub fn router(state: AppState) -> Router {
        let associations = Router::new()
            .route("/", get(list_handler).post(create_handler))
            .route(
                "/{id}",
                get(redirect_handler)
                    .put(update_handler)
                    .delete(delete_handler),
            )
            .route_layer(middleware::from_fn_with_state(
                state.metrics.clone(),
                track_request,
            ));

        Router::new()
            .merge(associations)
            .route("/health", get(health_handler))
            .route("/metrics", get(metrics_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
