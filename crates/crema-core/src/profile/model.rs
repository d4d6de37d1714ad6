//! Profile draft model.

use serde::{Deserialize, Serialize};

use crate::session::StaffMember;

/// An uncommitted, locally-held copy of the editable profile fields.
///
/// Created when an edit session opens, validated on submit and merged
/// into the session's user on success; discarded on cancel. Never
/// persisted anywhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    /// Display name being edited.
    pub name: String,
    /// Contact email being edited.
    pub email: String,
    /// Contact phone number being edited.
    pub phone: String,
}

impl ProfileDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a draft from the currently logged-in staff member.
    pub fn from_member(member: &StaffMember) -> Self {
        Self {
            name: member.name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
        }
    }
}
