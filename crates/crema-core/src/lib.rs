//! Core domain layer for the Crema staff-management client.
//!
//! Holds the three cross-cutting client states (session/role, theme,
//! locale) behind a single explicit [`store::StateStore`], plus the pure
//! resolvers around it: locale/direction resolution, translation lookup
//! with fallback, menu-label resolution, and profile-form validation.
//!
//! Everything here is synchronous and single-threaded: intents complete
//! within the dispatching UI event, and subscribers are notified before
//! the intent call returns.

pub mod config;
pub mod error;
pub mod locale;
pub mod menu;
pub mod profile;
pub mod session;
pub mod store;
pub mod theme;

// Re-export common error type
pub use error::CremaError;
