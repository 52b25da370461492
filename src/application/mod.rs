//! Application layer: resolving receivers, choosing a dispatch plan and
//! carrying it out.
//!
//! [`engine::PayViaBankApp`] is the entry point; [`strategy`] holds the
//! decision table and has no dependencies on any adapter.

pub mod dispatch;
pub mod engine;
pub mod resolver;
pub mod strategy;
