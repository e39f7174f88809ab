//! Utility helpers shared across enhancement modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clipboard, the global
//! animation library, raw DOM access) from component logic so that logic can
//! be exercised natively in tests.

pub mod animation;
pub mod clipboard;
pub mod contact;
#[cfg(feature = "csr")]
pub mod dom;
pub mod preference;
