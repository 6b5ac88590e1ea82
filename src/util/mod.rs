//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting, validation, and browser/environment
//! concerns from page and component logic to improve reuse and testability.

pub mod chart_data;
pub mod date;
pub mod mood;
pub mod storage;
pub mod validate;
