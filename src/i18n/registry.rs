//! Locale registry: the closed set of locales the site is served in.
//!
//! Everything locale-related (routing, path resolution, bundle selection)
//! answers to this registry. It lives behind a `OnceLock` so the set is
//! built once and read concurrently without synchronization.

use std::sync::OnceLock;

/// Metadata for one supported locale: its code, display names, whether it
/// is enabled for serving, and whether it is the site default.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "de", "fr", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Deutsch")
    pub native_name: &'static str,

    /// Whether this is the default locale (only one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for serving
    pub enabled: bool,
}

/// Process-wide locale registry.
///
/// Holds every locale configuration and the queries over them. Built on
/// first access; nothing mutates it afterwards.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance, building it on first call.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Look up a locale configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "de")
    ///
    /// # Returns
    /// `Some(&LocaleConfig)` when the code is registered, `None` otherwise.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All locales currently enabled for serving, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales
            .iter()
            .filter(|locale| locale.enabled)
            .collect()
    }

    /// Every registered locale, including disabled ones.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// The default locale is the one the site root redirects to, and the
    /// language the content was originally authored in. There should be
    /// exactly one default locale.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    ///
    /// Codes are matched exactly; the site only serves lowercase codes, so
    /// `"EN"` is not supported even though `"en"` is.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code to check
    ///
    /// # Returns
    /// `true` if the locale exists and is enabled, `false` otherwise.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// The locales this deployment ships with: English (default), German,
/// French, and Spanish.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
            enabled: true,
        },
    ]
}
