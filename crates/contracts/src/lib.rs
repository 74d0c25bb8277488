//! Platform-independent core of the tabs widget.
//!
//! Everything here is free of DOM access so that it can be unit-tested on the
//! host target; the Leptos components in the `frontend` crate call into it.

pub mod demo;
pub mod tabs;
