//! Path table: canonical routes and their per-locale URL slugs.
//!
//! Localization of URL slugs is opt-in. Only specific marketing pages carry
//! translated slugs; legal and contact pages keep a single slug across
//! locales. Any route (or route/locale combination) without a registered
//! slug resolves to the canonical route string itself (the identity
//! fallback). Unknown routes are therefore never an error.

use crate::i18n::Locale;
use std::sync::OnceLock;

/// One canonical route and its localized slugs.
#[derive(Debug, Clone)]
pub struct PathEntry {
    /// Locale-independent route identifier (e.g., "/e-sim-compatibility-guide")
    pub canonical: &'static str,

    /// Per-locale slug overrides as (locale code, slug) pairs
    pub slugs: &'static [(&'static str, &'static str)],
}

/// Static mapping from canonical routes to per-locale slugs.
///
/// Initialized once at process start and read-only thereafter; safe to read
/// concurrently from any number of request handlers.
pub struct PathTable {
    entries: Vec<PathEntry>,
}

/// Global path table instance (initialized lazily)
static PATH_TABLE: OnceLock<PathTable> = OnceLock::new();

impl PathTable {
    /// Get the global path table instance.
    pub fn get() -> &'static PathTable {
        PATH_TABLE.get_or_init(|| PathTable {
            entries: default_entries(),
        })
    }

    /// Resolve the localized slug for a canonical route.
    ///
    /// Returns the slug registered for `locale`, or the canonical route
    /// string unchanged when the route has no entry or the entry has no
    /// override for that locale (identity fallback).
    ///
    /// # Arguments
    /// * `canonical` - The locale-independent route identifier
    /// * `locale` - The target locale
    pub fn resolve_localized_path<'a>(&self, canonical: &'a str, locale: Locale) -> &'a str {
        self.entries
            .iter()
            .find(|entry| entry.canonical == canonical)
            .and_then(|entry| {
                entry
                    .slugs
                    .iter()
                    .find(|(code, _)| *code == locale.code())
                    .map(|(_, slug)| *slug)
            })
            .unwrap_or(canonical)
    }

    /// Map a localized slug back to its canonical route.
    ///
    /// This is the inverse of [`resolve_localized_path`]: given the slug the
    /// user requested and the locale it was requested under, find which
    /// canonical route registered that slug. Unregistered slugs pass through
    /// unchanged, mirroring the identity fallback on the forward direction.
    ///
    /// [`resolve_localized_path`]: PathTable::resolve_localized_path
    pub fn canonical_route_for<'a>(&self, slug: &'a str, locale: Locale) -> &'a str {
        self.entries
            .iter()
            .find(|entry| {
                entry
                    .slugs
                    .iter()
                    .any(|(code, s)| *code == locale.code() && *s == slug)
            })
            .map(|entry| entry.canonical)
            .unwrap_or(slug)
    }

    /// All registered canonical routes, in table order.
    pub fn canonical_routes(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.canonical).collect()
    }
}

/// Default path table entries.
///
/// The guide pages and the data-deletion page are the only routes with
/// translated slugs; everything else (legal pages, contact) keeps its
/// canonical slug in every locale.
fn default_entries() -> Vec<PathEntry> {
    vec![
        PathEntry {
            canonical: "/e-sim-compatibility-guide",
            slugs: &[
                ("en", "/e-sim-compatibility-guide"),
                ("de", "/e-sim-kompatibilitätsleitfaden"),
                ("fr", "/guide-de-compatibilité-e-sim"),
                ("es", "/guía-de-compatibilidad-e-sim"),
            ],
        },
        PathEntry {
            canonical: "/e-sim-installation-guide",
            slugs: &[
                ("en", "/e-sim-installation-guide"),
                ("de", "/e-sim-installationsanleitung"),
                ("fr", "/guide-d'installation-e-sim"),
                ("es", "/guía-de-instalación-e-sim"),
            ],
        },
        PathEntry {
            canonical: "/data-deletion",
            slugs: &[
                ("en", "/data-deletion"),
                ("de", "/datenlöschung"),
                ("fr", "/suppression-de-données"),
                ("es", "/eliminación-de-datos"),
            ],
        },
    ]
}
