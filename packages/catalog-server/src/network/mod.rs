//! Transport plumbing shared by the three services: configuration,
//! middleware stack, serve lifecycle, and status endpoints.

pub mod config;
pub mod middleware;
pub mod module;
pub mod status;

pub use config::ServiceConfig;
pub use module::ServiceModule;
pub use status::status_router;
