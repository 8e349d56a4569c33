mod url;

pub use url::{HealthResponse, UrlRequest};
