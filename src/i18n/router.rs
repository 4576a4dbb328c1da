//! Locale router: derives the active locale from the request path and builds
//! locale-switching URLs.
//!
//! Every public URL has the shape `/{locale}/{slug…}`. The leading segment
//! must match a registry locale exactly; anything else is a not-found outcome
//! for that request. The default-locale experience is reached via a redirect
//! from `/` applied before this check (see the serving layer), never by
//! silently substituting a locale here.

use crate::i18n::{Locale, LocaleRegistry, PathTable};
use thiserror::Error;

/// Routing failure for one request. Terminal: reported as not-found.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The leading path segment is not a registered, enabled locale.
    #[error("unsupported locale in request path: '{0}'")]
    UnsupportedLocale(String),

    /// The path carries no locale segment at all.
    #[error("request path has no locale segment")]
    MissingLocale,
}

/// The locale and remainder extracted from one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedRequest {
    /// Active locale for this request
    pub locale: Locale,

    /// Path remainder after the locale segment, always starting with `/`
    /// (`"/"` when the path was just `/{locale}`)
    pub remainder: String,
}

/// Parse a request path into its active locale and remainder.
///
/// # Arguments
/// * `path` - The inbound request path, e.g. `/de/e-sim-installationsanleitung`
///
/// # Returns
/// * `Ok(RoutedRequest)` when the leading segment is a supported locale
/// * `Err(RouteError)` otherwise: the request is not-found, no default is
///   substituted
pub fn route_request(path: &str) -> Result<RoutedRequest, RouteError> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (candidate, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, ""),
    };

    if candidate.is_empty() {
        return Err(RouteError::MissingLocale);
    }
    if !LocaleRegistry::get().is_supported(candidate) {
        return Err(RouteError::UnsupportedLocale(candidate.to_string()));
    }

    // from_code cannot fail here: is_supported just passed
    let locale = Locale::from_code(candidate)
        .map_err(|_| RouteError::UnsupportedLocale(candidate.to_string()))?;

    let remainder = if rest.is_empty() {
        "/".to_string()
    } else {
        rest.to_string()
    };

    Ok(RoutedRequest { locale, remainder })
}

/// Build the URL for a canonical route in a target locale.
///
/// Composes `/{locale}{localized slug}`, using the path table's identity
/// fallback for unregistered routes. Used by the language switcher to
/// preserve the current page while changing language.
pub fn build_navigation_url(canonical: &str, target_locale: Locale) -> String {
    let slug = PathTable::get().resolve_localized_path(canonical, target_locale);
    if slug == "/" {
        format!("/{}", target_locale.code())
    } else {
        format!("/{}{}", target_locale.code(), slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== route_request Tests ====================

    #[test]
    fn test_route_request_locale_and_remainder() {
        let routed = route_request("/de/e-sim-installationsanleitung").unwrap();
        assert_eq!(routed.locale, Locale::GERMAN);
        assert_eq!(routed.remainder, "/e-sim-installationsanleitung");
    }

    #[test]
    fn test_route_request_locale_only() {
        let routed = route_request("/fr").unwrap();
        assert_eq!(routed.locale, Locale::FRENCH);
        assert_eq!(routed.remainder, "/");
    }

    #[test]
    fn test_route_request_trailing_slash() {
        let routed = route_request("/es/").unwrap();
        assert_eq!(routed.locale, Locale::SPANISH);
        assert_eq!(routed.remainder, "/");
    }

    #[test]
    fn test_route_request_deep_remainder() {
        let routed = route_request("/en/contact-us/team").unwrap();
        assert_eq!(routed.locale, Locale::ENGLISH);
        assert_eq!(routed.remainder, "/contact-us/team");
    }

    #[test]
    fn test_route_request_unsupported_locale_is_not_found() {
        let err = route_request("/xx/contact-us").unwrap_err();
        assert_eq!(err, RouteError::UnsupportedLocale("xx".to_string()));
    }

    #[test]
    fn test_route_request_uppercase_locale_rejected() {
        assert!(route_request("/EN/contact-us").is_err());
    }

    #[test]
    fn test_route_request_non_locale_page_rejected() {
        // A page slug in locale position is not silently defaulted
        assert!(route_request("/contact-us").is_err());
    }

    #[test]
    fn test_route_request_empty_path() {
        assert_eq!(route_request("/").unwrap_err(), RouteError::MissingLocale);
        assert_eq!(route_request("").unwrap_err(), RouteError::MissingLocale);
    }

    // ==================== build_navigation_url Tests ====================

    #[test]
    fn test_build_navigation_url_localized_slug() {
        assert_eq!(
            build_navigation_url("/e-sim-compatibility-guide", Locale::GERMAN),
            "/de/e-sim-kompatibilitätsleitfaden"
        );
    }

    #[test]
    fn test_build_navigation_url_identity_fallback() {
        assert_eq!(
            build_navigation_url("/contact-us", Locale::FRENCH),
            "/fr/contact-us"
        );
    }

    #[test]
    fn test_build_navigation_url_root() {
        assert_eq!(build_navigation_url("/", Locale::SPANISH), "/es");
    }

    #[test]
    fn test_round_trip_all_routes_all_locales() {
        let mut routes = PathTable::get().canonical_routes();
        routes.push("/contact-us");
        routes.push("/");

        for canonical in routes {
            for locale in Locale::list_enabled() {
                let url = build_navigation_url(canonical, locale);
                assert!(url.starts_with(&format!("/{}", locale.code())));

                let routed = route_request(&url).unwrap();
                assert_eq!(routed.locale, locale);
            }
        }
    }
}
