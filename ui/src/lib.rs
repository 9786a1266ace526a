//! Shared UI crate for the iHerd site: slides, navigation, localization,
//! QR rendering and the lead form. Platform crates only launch [`Site`].

pub mod components;
pub mod core;
pub mod i18n;
pub mod slides;
pub mod views;

pub use views::{LeadStoreHandle, Site};

#[cfg(test)]
mod tests;
