//! kanbancal_core - functional core of the kanban calendar.
//!
//! Everything here is synchronous and owned by a single caller (the UI event
//! loop or the CLI). Nothing in this crate renders, animates or detects input
//! devices; it only keeps track of which events live on which day and turns
//! pointer samples into navigation decisions.

pub mod calendar;
pub mod gesture;
pub mod navigation;
pub mod session;
pub mod store;
