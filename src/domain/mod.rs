//! Domain types and the ports the dispatch engine talks to.
//!
//! Nothing in here touches the platform: app discovery, QR rendering and
//! navigation are reached only through the traits in [`ports`].

pub mod launch;
pub mod payment;
pub mod plan;
pub mod ports;
pub mod receiver;
