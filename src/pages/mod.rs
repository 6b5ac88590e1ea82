//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, form state) and
//! delegates rendering details to `components`. Session mutations go
//! through the store handle; no page touches the credential slot.

pub mod achievements;
pub mod add_journal;
pub mod add_mood;
pub mod dashboard;
pub mod home;
pub mod journals;
pub mod login;
pub mod mood_history;
pub mod not_found;
pub mod profile;
pub mod signup;
