//! Internationalization (i18n) module for multi-language support.
//!
//! This module contains the locale resolution and localized-path routing
//! core of the site. All locale-related logic, translation lookup, and URL
//! localization lives here; page handlers only consume resolved values.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale value validated against the registry
//! - `pathnames`: Canonical route → per-locale URL slug table with identity fallback
//! - `bundle`: Per-locale translation bundles with plain, raw, and rich lookup
//! - `router`: Request-path locale resolution and navigation URL building
//! - `validator`: Bundle completeness validation (backs the `validate-content` binary)
//!
//! # Example
//!
//! ```rust,ignore
//! use esim_site::i18n::{self, Locale, PathTable};
//!
//! let routed = i18n::route_request("/de/e-sim-kompatibilitätsleitfaden")?;
//! let canonical = PathTable::get().canonical_route_for(&routed.remainder, routed.locale);
//! let title = i18n::translate(routed.locale, &format!("{canonical}.title"))?;
//! ```

mod bundle;
mod locale;
mod pathnames;
mod registry;
mod router;
mod validator;

pub use bundle::{
    translate, translate_raw, translate_rich, translate_rich_with, TranslationBundle,
    TranslationError,
};
pub use locale::Locale;
pub use pathnames::{PathEntry, PathTable};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use router::{build_navigation_url, route_request, RouteError, RoutedRequest};
pub use validator::{BundleValidator, ValidationReport};
