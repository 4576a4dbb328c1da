//! The `Locale` value type.
//!
//! A `Locale` can only be obtained for a code the registry knows and has
//! enabled, which is what lets the rest of the crate take locales by value
//! without re-validating them.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};

/// A locale known to the registry.
///
/// Construction goes through registry validation, so downstream code (path
/// table, translation bundles, request routing) can trust the code without
/// re-checking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "en", "de")
    code: &'static str,
}

impl Locale {
    /// English, the default locale.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// German.
    pub const GERMAN: Locale = Locale { code: "de" };

    /// French.
    pub const FRENCH: Locale = Locale { code: "fr" };

    /// Spanish.
    pub const SPANISH: Locale = Locale { code: "es" };

    /// Construct a `Locale` from an ISO 639-1 code.
    ///
    /// Matching is exact and case-sensitive, same as request routing.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered and the locale is enabled
    /// * `Err` if the code is not found or the locale is disabled
    ///
    /// # Example
    /// ```ignore
    /// let german = Locale::from_code("de")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Get the default locale.
    ///
    /// This is the locale the site root redirects to and the language the
    /// content is originally authored in.
    pub fn default() -> Locale {
        let config = LocaleRegistry::get().default();
        Locale { code: config.code }
    }

    /// All enabled locales, in registry order.
    ///
    /// Used by the language switcher to render one entry per locale.
    pub fn list_enabled() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full registry configuration behind this locale.
    ///
    /// # Panics
    /// Panics if the code is absent from the registry, which cannot happen
    /// for a `Locale` obtained via `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the English name of the locale (e.g., "German").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale (e.g., "Deutsch").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
