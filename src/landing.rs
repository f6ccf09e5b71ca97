//! Built-in table for the landing page.
//!
//! Rows are grouped by page section: hero, navigation, calls to action and
//! footer. The footer rows are rendered as a list, so their order matters.

use std::sync::LazyLock;

use crate::table::{
    LookupError,
    TranslationEntry,
    TranslationTable,
};

/// `(key, en, fr)` rows in page order.
const LANDING_PAGE_ROWS: [(&str, &str, &str); 19] = [
    ("hero_title_word_trade", "Trade", "Tradez"),
    (
        "hero_title_suffix",
        "with less doubt and more confidence",
        "avec moins de doute et plus de confiance",
    ),
    (
        "hero_subtitle",
        "Fynelis is a real-time virtual trading assistant that scans the market and alerts you.",
        "Fynelis est un assistant de trading virtuel en temps réel qui analyse le marché et vous alerte.",
    ),
    ("nav_home", "Home", "Accueil"),
    ("nav_service", "Service", "Service"),
    ("nav_feature", "Feature", "Fonctionnalités"),
    ("nav_contact", "Contact", "Contact"),
    ("hero_fast_sending", "Fast Sending", "Envoi rapide"),
    ("hero_always_on", "Always on 24/7", "Toujours actif 24/7"),
    ("cta_try_now", "Try Now", "Essayer maintenant"),
    ("cta_watch_demo", "Watch Demo Video", "Regarder la démo"),
    ("cta_get_started", "Get Started", "Commencer"),
    ("footer_others_label", "Others", "Autres"),
    ("footer_terms", "Terms & Conditions", "Conditions générales"),
    ("footer_privacy", "Privacy Policies", "Politique de confidentialité"),
    ("footer_sitemap", "Sitemap", "Plan du site"),
    ("footer_connect_with_us", "Connect with us", "Contactez-nous"),
    ("footer_contact", "Contact", "Contact"),
    ("footer_legal", "Legal Notice", "Mentions légales"),
];

/// The table built from [`LANDING_PAGE_ROWS`]; panics on first access if a row is invalid.
#[allow(clippy::expect_used)]
static LANDING_PAGE: LazyLock<TranslationTable> = LazyLock::new(|| {
    let entries = LANDING_PAGE_ROWS
        .iter()
        .map(|&(key, en, fr)| TranslationEntry::new(key, en, fr))
        .collect();
    TranslationTable::new(entries).expect("built-in landing page rows are valid")
});

/// The landing page table, built on first access and shared afterwards.
#[must_use]
pub fn landing_page() -> &'static TranslationTable {
    &LANDING_PAGE
}

/// Looks up `key` in the landing page table.
///
/// # Errors
/// See [`TranslationTable::lookup_tag`].
pub fn lookup(key: &str, locale: &str) -> Result<&'static str, LookupError> {
    landing_page().lookup_tag(key, locale)
}

/// Landing page keys in page order.
pub fn all_keys() -> impl ExactSizeIterator<Item = &'static str> + Clone {
    landing_page().all_keys()
}
