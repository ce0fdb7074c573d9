pub mod analytics;
pub mod api;
pub mod environment;
pub mod logging;
pub mod render;
pub mod session;
pub mod types;

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_ANALYTICS: &str = "analytics";
