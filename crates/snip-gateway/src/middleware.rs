use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use crate::metrics::HttpMetrics;

/// Times one association request, records it in the latency histogram and
/// logs a single line for it once the response is ready.
pub async fn track_request(
    State(metrics): State<Arc<HttpMetrics>>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let elapsed = started.elapsed();
    metrics.observe_request(elapsed);
    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms = elapsed.as_secs_f64() * 1000.0,
        "handled request"
    );

    response
}
