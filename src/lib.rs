//! # homepage-enhance
//!
//! Leptos + WASM enhancement layer for a static academic homepage.
//!
//! The static HTML stays authoritative. Once the document is ready this
//! crate adds a persisted light/dark toggle, scroll-spy highlighting for the
//! top navigation, a publication filter, copy-to-clipboard on contact
//! fields, bidirectional scroll animations, and an off-canvas section
//! drawer.
//!
//! State machines and matching rules live in `state` and `util` and build
//! without the `csr` feature so they can be tested natively. Browser wiring
//! (`boot`, `mount`, `util::dom`) only exists with `csr`.

#[cfg(feature = "csr")]
pub mod boot;
pub mod components;
pub mod config;
pub mod error;
#[cfg(feature = "csr")]
pub mod mount;
pub mod state;
pub mod util;
