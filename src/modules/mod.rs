//! UI Modules
//!
//! Each module implements the Module trait and handles its own key
//! input; rendering stays in `ui`.
//!
//! Modules:
//! - dashboard: year selection, resolved record, metric tabs

pub mod dashboard;
