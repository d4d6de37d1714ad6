//! Profile edit session.
//!
//! One edit session exists per screen instance: it seeds a draft from
//! the logged-in user, validates fresh on every submit, merges into the
//! store only when valid, and discards the draft on cancel. The
//! Idle -> Validating -> Valid/Invalid cycle restarts from scratch on
//! each submit, so no error state carries over between attempts.

use std::collections::BTreeMap;

use tracing::debug;

use crema_core::locale::{Locale, Translator};
use crema_core::profile::{self, ProfileDraft, ProfileField, ValidationResult};
use crema_core::store::{StateStore, StoreSnapshot};

/// An in-flight profile edit.
#[derive(Debug, Clone)]
pub struct ProfileEditSession {
    draft: ProfileDraft,
    last_result: Option<ValidationResult>,
}

impl ProfileEditSession {
    /// Opens an edit session seeded from the current user, or an empty
    /// draft when nobody is logged in.
    pub fn open(snapshot: &StoreSnapshot) -> Self {
        let draft = snapshot
            .session
            .user
            .as_ref()
            .map(ProfileDraft::from_member)
            .unwrap_or_default();
        Self {
            draft,
            last_result: None,
        }
    }

    /// The draft under edit, for binding to input fields.
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Mutable access to the draft for text-input changes.
    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    /// The result of the most recent submit, if any. Cleared again by
    /// the next submit before revalidation.
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }

    /// Validates the draft fresh and, when valid, merges it into the
    /// store. Returns the new validation result either way; invalid
    /// drafts leave the store untouched and the session open for
    /// correction.
    pub fn submit(&mut self, store: &mut StateStore) -> ValidationResult {
        self.last_result = None;
        let result = profile::validate(&self.draft);
        if result.is_valid() {
            debug!("profile edit submitted, merging draft");
            store.update_profile(&self.draft);
        } else {
            debug!(errors = result.errors().len(), "profile edit rejected");
        }
        self.last_result = Some(result.clone());
        result
    }

    /// Discards the draft. The store never saw it.
    pub fn cancel(self) {
        debug!("profile edit cancelled, draft discarded");
    }

    /// Translates the last submit's errors into inline messages, keyed
    /// by field, for rendering next to the inputs.
    pub fn error_messages(
        &self,
        translator: &Translator,
        locale: Locale,
    ) -> BTreeMap<ProfileField, String> {
        self.last_result
            .as_ref()
            .map(|result| {
                result
                    .errors()
                    .iter()
                    .map(|(field, error)| {
                        (*field, translator.translate(error.message_key(), locale))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
