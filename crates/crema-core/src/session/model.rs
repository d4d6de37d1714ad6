//! Session domain model.
//!
//! A session tracks whether a staff member is logged in, who they are and
//! which role they hold. The role selects the screen set and the
//! translation namespace for menu labels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use uuid::Uuid;

/// Staff roles recognized by the client.
///
/// The lowercase wire form doubles as the translation-key namespace
/// (`admin.*`, `supervisor.*`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    /// Store administrator: full screen set.
    Admin,
    /// Shift supervisor: day-to-day screen set.
    Supervisor,
}

/// A logged-in staff member.
///
/// `id` is assigned by the store at login and stays stable for the
/// lifetime of the session, including across profile updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    /// Stable, store-assigned identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

/// The client's authentication state.
///
/// Created empty at process start, populated by the login intent and
/// cleared by logout. Owned exclusively by the state store; presenters
/// only ever see clones via snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether a staff member is currently logged in.
    pub authenticated: bool,
    /// Role of the logged-in staff member, if any.
    pub role: Option<StaffRole>,
    /// The logged-in staff member, if any.
    pub user: Option<StaffMember>,
    /// When the current session started, if any.
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Returns the empty, unauthenticated session.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true when a staff member is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns the display name of the logged-in user, if any.
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
