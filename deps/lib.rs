pub use anyhow;
pub use chrono;
pub use http;
pub use hyper;
pub use reqwest;
pub use serde_json;
pub use tokio;
