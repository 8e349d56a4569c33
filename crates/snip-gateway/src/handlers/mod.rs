mod health;
mod metrics;
mod url;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use url::{
    create_handler, delete_handler, list_handler, redirect_handler, update_handler,
};
