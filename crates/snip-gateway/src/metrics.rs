use std::time::Duration;

use prometheus::{Histogram, HistogramOpts, Registry, TextEncoder};

/// Upper bounds, in seconds, of the request latency histogram.
pub const REQUEST_DURATION_BUCKETS: [f64; 4] = [0.3, 1.0, 5.0, 10.0];

/// Request metrics owned by one gateway instance.
///
/// Each instance has its own [`Registry`], so routers built in the same
/// process (tests, mostly) never share series.
#[derive(Clone)]
pub struct HttpMetrics {
    registry: Registry,
    request_duration: Histogram,
}

impl HttpMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let request_duration = Histogram::with_opts(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Duration of HTTP requests to the association routes",
            )
            .buckets(REQUEST_DURATION_BUCKETS.to_vec()),
        )?;
        registry.register(Box::new(request_duration.clone()))?;

        Ok(Self {
            registry,
            request_duration,
        })
    }

    pub fn observe_request(&self, elapsed: Duration) {
        self.request_duration.observe(elapsed.as_secs_f64());
    }

    /// Renders every registered series in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = String::new();
        TextEncoder::new().encode_utf8(&self.registry.gather(), &mut buffer)?;
        Ok(buffer)
    }
}
