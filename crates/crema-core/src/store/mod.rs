//! The client state store.
//!
//! `StateStore` is the single authoritative container for the session,
//! theme and locale preferences. Presenters read it through snapshots
//! and change it only through the intent methods here; there is no
//! global instance, the store is passed explicitly to whoever needs it.
//!
//! All intents run synchronously on the dispatching thread. Subscribers
//! are notified after a transition is fully applied, so none of them can
//! observe a half-applied state such as a new language with a stale
//! direction flag.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::{CremaError, Result};
use crate::locale::{Direction, Locale, LocalePreference};
use crate::profile::ProfileDraft;
use crate::session::{Session, StaffMember, StaffRole};
use crate::theme::ThemePreference;

/// Notification emitted to subscribers after each completed transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A staff member logged in.
    LoggedIn { role: StaffRole },
    /// The session was cleared. Observers treat this as the signal to
    /// navigate to the unauthenticated entry screen.
    LoggedOut,
    /// The color theme flipped.
    ThemeChanged { dark_mode: bool },
    /// The active language changed; direction was recomputed in the
    /// same transition.
    LanguageChanged { locale: Locale, direction: Direction },
    /// The logged-in user's profile fields were replaced.
    ProfileUpdated,
}

/// Owned read model of the full store state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    /// Authentication state.
    pub session: Session,
    /// Color theme preference.
    pub theme: ThemePreference,
    /// Active locale with its derived direction.
    pub locale: LocalePreference,
}

/// Handle returned by [`StateStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&StoreEvent, &StoreSnapshot)>;

/// Single source of truth for session, theme and locale state.
pub struct StateStore {
    config: StoreConfig,
    session: Session,
    theme: ThemePreference,
    locale: LocalePreference,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl StateStore {
    /// Creates a store with default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a store seeded from the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            session: Session::empty(),
            theme: ThemePreference::new(config.dark_mode),
            locale: LocalePreference::new(config.default_locale),
            config,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ------------------------------------------------------------------
    // Read model
    // ------------------------------------------------------------------

    /// Returns an owned snapshot of the full state.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            session: self.session.clone(),
            theme: self.theme,
            locale: self.locale,
        }
    }

    /// The current authentication state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The current theme preference.
    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// The active locale with its derived direction.
    pub fn locale(&self) -> LocalePreference {
        self.locale
    }

    // ------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------

    /// Registers a callback invoked synchronously after every completed
    /// transition, with the event and a snapshot of the new state.
    pub fn subscribe(&mut self, callback: impl Fn(&StoreEvent, &StoreSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a previously registered callback. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    fn emit(&self, event: StoreEvent) {
        let snapshot = self.snapshot();
        for (_, subscriber) in &self.subscribers {
            subscriber(&event, &snapshot);
        }
    }

    // ------------------------------------------------------------------
    // Intents
    // ------------------------------------------------------------------

    /// Marks a staff member as logged in with the given role.
    ///
    /// Authentication itself happens upstream; this intent has no error
    /// path. A fresh stable identifier is assigned here and preserved
    /// for the lifetime of the session.
    pub fn login(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: StaffRole,
    ) -> Uuid {
        let member = StaffMember {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        };
        let id = member.id;
        debug!(%role, user = %member.name, "intent: login");
        self.session = Session {
            authenticated: true,
            role: Some(role),
            user: Some(member),
            logged_in_at: Some(Utc::now()),
        };
        self.emit(StoreEvent::LoggedIn { role });
        id
    }

    /// Clears the session back to its empty state.
    pub fn logout(&mut self) {
        debug!("intent: logout");
        self.session = Session::empty();
        self.emit(StoreEvent::LoggedOut);
    }

    /// Flips the color theme.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        debug!(dark_mode = self.theme.dark_mode, "intent: toggle_theme");
        self.emit(StoreEvent::ThemeChanged {
            dark_mode: self.theme.dark_mode,
        });
    }

    /// Switches the active language, recomputing the direction flag in
    /// the same transition. Total over the closed locale set.
    pub fn set_language(&mut self, locale: Locale) {
        self.locale.set(locale);
        debug!(%locale, direction = %self.locale.direction(), "intent: set_language");
        self.emit(StoreEvent::LanguageChanged {
            locale,
            direction: self.locale.direction(),
        });
    }

    /// Switches the active language from a raw code.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLocale` for a code outside the supported set;
    /// the store is left untouched, so the previous valid locale stays
    /// active.
    pub fn set_language_code(&mut self, code: &str) -> Result<()> {
        let locale =
            Locale::parse(code).ok_or_else(|| CremaError::unsupported_locale(code))?;
        self.set_language(locale);
        Ok(())
    }

    /// Replaces the logged-in user's profile fields from a draft.
    ///
    /// Precondition: the draft has already passed validation; the store
    /// does not re-validate. The stable identifier and login timestamp
    /// are preserved. Without a logged-in user this is a logged no-op.
    pub fn update_profile(&mut self, draft: &ProfileDraft) {
        let Some(user) = self.session.user.as_mut() else {
            warn!("intent: update_profile without an authenticated user, ignoring");
            return;
        };
        debug!(user = %user.id, "intent: update_profile");
        user.name = draft.name.trim().to_string();
        user.email = draft.email.trim().to_string();
        user.phone = draft.phone.trim().to_string();
        self.emit(StoreEvent::ProfileUpdated);
    }

    /// The configuration this store was created with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
