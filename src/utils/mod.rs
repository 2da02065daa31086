//! Request-independent helpers shared by the API and web layers.

pub mod base_url;
pub mod url_validator;
