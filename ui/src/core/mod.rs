//! Platform-independent state and data: no rendering in here.

pub mod catalogue;
pub mod lead;
pub mod links;
pub mod presentation;
pub mod qr;
pub mod registry;
pub mod transition;
