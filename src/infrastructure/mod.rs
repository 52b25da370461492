pub mod in_memory;
pub mod qr;
pub mod registry;
