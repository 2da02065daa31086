//! Web layer for the browser UI.
//!
//! Uses Askama templates from `templates/` for server-side rendering; the
//! shorten form itself talks to the JSON API from `static/js/app.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
