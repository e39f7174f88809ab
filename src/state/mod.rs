//! Explicit per-component state.
//!
//! DESIGN
//! ======
//! Each enhancement owns its state here as plain data. Body classes, ARIA
//! attributes and icon classes are projections computed from these types,
//! never read back from the DOM.

pub mod drawer;
pub mod search;
pub mod spy;
pub mod theme;
pub mod toast;
