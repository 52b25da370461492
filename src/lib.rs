//! Pay for a bank transfer by handing a SPAYD payment to an installed bank app.
//!
//! [`application::engine::PayViaBankApp`] resolves which apps can take the
//! payment directly or as a QR-code image, decides between launching one of
//! them and showing a chooser, and renders the QR image only when needed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
