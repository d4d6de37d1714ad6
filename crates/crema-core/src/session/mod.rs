//! Session domain models: the authenticated staff member and their role.

pub mod model;

pub use model::{Session, StaffMember, StaffRole};
