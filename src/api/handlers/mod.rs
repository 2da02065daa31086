//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod recent;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use recent::recent_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
