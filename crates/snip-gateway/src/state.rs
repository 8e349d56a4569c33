use std::sync::Arc;

use snip_core::Associations;

use crate::metrics::HttpMetrics;

#[derive(Clone)]
pub struct AppState {
    pub associations: Arc<dyn Associations>,
    pub metrics: Arc<HttpMetrics>,
}

impl AppState {
    pub fn new(associations: Arc<dyn Associations>, metrics: Arc<HttpMetrics>) -> Self {
        Self {
            associations,
            metrics,
        }
    }
}
