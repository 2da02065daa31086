//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and business rules and give HTTP
//! handlers and the admin CLI a single entry point.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening, redirects and statistics

pub mod services;
