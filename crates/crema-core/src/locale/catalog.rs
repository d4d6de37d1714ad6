//! Translation catalog seam and the built-in static catalog.
//!
//! Screens never call the dictionary directly; they go through
//! [`Translator`], which owns the fallback chain (target locale, then the
//! default locale, then the raw key). Missing copy therefore degrades to
//! readable output instead of breaking a screen.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use super::{DEFAULT_LOCALE, Locale};

/// An opaque key-to-string dictionary per locale.
///
/// Implementations must supply the full key set for [`DEFAULT_LOCALE`];
/// other locales may be partial, in which case the [`Translator`]
/// fallback chain covers the gaps.
pub trait TranslationCatalog: Send + Sync {
    /// Looks up a translation, returning `None` when the key is absent
    /// for the given locale.
    fn lookup(&self, key: &str, locale: Locale) -> Option<&str>;
}

/// Resolves translations with a non-failing fallback chain.
///
/// `translate` never returns an error: a key missing from the target
/// locale falls back to the default locale's string, and if still absent
/// the raw key itself is returned, so missing copy can never take down a
/// presenter.
#[derive(Clone)]
pub struct Translator {
    catalog: Arc<dyn TranslationCatalog>,
}

impl Translator {
    /// Creates a translator over the given catalog.
    pub fn new(catalog: Arc<dyn TranslationCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolves `key` for `locale`, falling back to the default locale
    /// and finally to the raw key.
    pub fn translate(&self, key: &str, locale: Locale) -> String {
        if let Some(text) = self.catalog.lookup(key, locale) {
            return text.to_string();
        }
        if locale != DEFAULT_LOCALE {
            if let Some(text) = self.catalog.lookup(key, DEFAULT_LOCALE) {
                warn!(%key, %locale, "translation missing, using default locale");
                return text.to_string();
            }
        }
        warn!(%key, %locale, "translation missing in all locales, using raw key");
        key.to_string()
    }

    /// Returns true if the key resolves for the locale without fallback.
    pub fn has(&self, key: &str, locale: Locale) -> bool {
        self.catalog.lookup(key, locale).is_some()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Arc::new(StaticCatalog::new()))
    }
}

/// In-memory catalog built from the static tables below.
pub struct StaticCatalog {
    tables: HashMap<Locale, HashMap<&'static str, &'static str>>,
}

impl StaticCatalog {
    /// Builds the catalog from the registered per-locale tables.
    pub fn new() -> Self {
        let mut tables = HashMap::new();
        tables.insert(Locale::En, CATALOG_EN.iter().copied().collect());
        tables.insert(Locale::Ar, CATALOG_AR.iter().copied().collect());
        Self { tables }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationCatalog for StaticCatalog {
    fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        self.tables.get(&locale)?.get(key).copied()
    }
}

/// English catalog (the default locale; must stay complete).
const CATALOG_EN: &[(&str, &str)] = &[
    ("app.title", "Crema"),
    // Drawer labels, admin namespace
    ("admin.home", "Dashboard"),
    ("admin.profile", "My Profile"),
    ("admin.products", "Products"),
    ("admin.orders", "Orders"),
    ("admin.staff", "Manage Staff"),
    ("admin.settings", "Settings"),
    ("admin.help", "Help"),
    ("admin.privacy", "Privacy Policy"),
    // Drawer labels, supervisor namespace
    ("supervisor.home", "Home"),
    ("supervisor.profile", "My Profile"),
    ("supervisor.products", "Products"),
    ("supervisor.orders", "Shift Orders"),
    ("supervisor.staff", "My Team"),
    ("supervisor.settings", "Settings"),
    ("supervisor.help", "Help"),
    ("supervisor.privacy", "Privacy Policy"),
    // Profile screen
    ("profile.name", "Name"),
    ("profile.email", "Email"),
    ("profile.phone", "Phone Number"),
    ("profile.save", "Save"),
    ("profile.cancel", "Cancel"),
    // Settings screen
    ("settings.dark_mode", "Dark Mode"),
    ("settings.language", "Language"),
    // Shared
    ("common.logout", "Log Out"),
    ("common.guest", "Guest"),
    // Inline validation copy
    ("validation.required", "This field is required"),
    ("validation.invalid_format", "Invalid format"),
    // Static pages
    ("help.title", "Help"),
    (
        "help.body",
        "Reach out to your shift lead or email support@crema.app and we \
         will get back to you within one business day.",
    ),
    ("privacy.title", "Privacy Policy"),
    (
        "privacy.body",
        "Your profile details stay on this device and are only shared \
         with your store's management account.",
    ),
];

/// Arabic catalog.
const CATALOG_AR: &[(&str, &str)] = &[
    ("app.title", "كريمة"),
    ("admin.home", "لوحة التحكم"),
    ("admin.profile", "ملفي الشخصي"),
    ("admin.products", "المنتجات"),
    ("admin.orders", "الطلبات"),
    ("admin.staff", "إدارة الموظفين"),
    ("admin.settings", "الإعدادات"),
    ("admin.help", "المساعدة"),
    ("admin.privacy", "سياسة الخصوصية"),
    ("supervisor.home", "الرئيسية"),
    ("supervisor.profile", "ملفي الشخصي"),
    ("supervisor.products", "المنتجات"),
    ("supervisor.orders", "طلبات الوردية"),
    ("supervisor.staff", "فريقي"),
    ("supervisor.settings", "الإعدادات"),
    ("supervisor.help", "المساعدة"),
    ("supervisor.privacy", "سياسة الخصوصية"),
    ("profile.name", "الاسم"),
    ("profile.email", "البريد الإلكتروني"),
    ("profile.phone", "رقم الهاتف"),
    ("profile.save", "حفظ"),
    ("profile.cancel", "إلغاء"),
    ("settings.dark_mode", "الوضع الداكن"),
    ("settings.language", "اللغة"),
    ("common.logout", "تسجيل الخروج"),
    ("common.guest", "زائر"),
    ("validation.required", "هذا الحقل مطلوب"),
    ("validation.invalid_format", "صيغة غير صحيحة"),
    ("help.title", "المساعدة"),
    (
        "help.body",
        "تواصل مع مشرف الوردية أو راسلنا على support@crema.app وسنرد عليك \
         خلال يوم عمل واحد.",
    ),
    ("privacy.title", "سياسة الخصوصية"),
    (
        "privacy.body",
        "تبقى بيانات ملفك الشخصي على هذا الجهاز ولا تتم مشاركتها إلا مع \
         حساب إدارة المتجر الخاص بك.",
    ),
];
