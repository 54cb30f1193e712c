//! Lead-capture relay service library.

pub mod config;
pub mod http;
pub mod lead;
pub mod observability;
pub mod security;
pub mod sink;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lead::LeadRecord;
