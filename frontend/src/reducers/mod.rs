//! Domain reducers.
//!
//! Each area (modal, panels, header) lives in its own module.  The root
//! `update.rs` offers every message to them in turn; the first one that
//! returns `true` consumed it.

pub mod header;
pub mod modal;
pub mod panels;
