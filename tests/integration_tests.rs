//! Integration tests for the eSIM site server.
//!
//! These tests exercise the full request path: the axum router, locale
//! routing, localized-slug resolution, and page rendering from the embedded
//! translation bundles. No network or filesystem access is required since
//! all content ships inside the binary.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use esim_site::config::Config;
use esim_site::i18n::{self, Locale, PathTable};
use esim_site::server;

// ==================== Test Helpers ====================

fn test_config() -> Arc<Config> {
    Arc::new(Config {
        port: 0,
        base_url: "http://test.local".to_string(),
    })
}

/// Percent-encode non-ASCII path bytes the way a browser would before
/// putting a localized slug on the wire.
fn encode_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for byte in path.bytes() {
        if byte.is_ascii() && byte != b' ' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

/// Send one GET request through the router and return (status, body).
async fn get(path: &str) -> (StatusCode, String) {
    let app = server::app(test_config());
    let response = app
        .oneshot(
            Request::builder()
                .uri(encode_path(path))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

// ==================== Routing Tests ====================

#[tokio::test]
async fn test_root_redirects_to_default_locale() {
    let app = server::app(test_config());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get("location")
        .expect("location header")
        .to_str()
        .expect("ascii location");
    assert_eq!(location, "/en");
}

#[tokio::test]
async fn test_healthz() {
    let (status, body) = get("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_unsupported_locale_is_404() {
    let (status, _) = get("/xx/contact-us").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_uppercase_locale_is_404() {
    // Locale matching is case-sensitive
    let (status, _) = get("/EN/contact-us").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_slug_is_404() {
    let (status, _) = get("/en/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_slug_from_wrong_locale_is_404() {
    // The German slug only resolves under /de, not /en
    let (status, _) = get("/en/datenlöschung").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ==================== Page Rendering Tests ====================

#[tokio::test]
async fn test_home_page_renders_for_every_locale() {
    for locale in Locale::list_enabled() {
        let (status, body) = get(&format!("/{}", locale.code())).await;
        assert_eq!(status, StatusCode::OK, "home page for {}", locale);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains(&format!("<html lang=\"{}\">", locale.code())));
        assert!(body.contains("<meta name=\"description\""));
        assert!(body.contains("<meta name=\"keywords\""));
    }
}

#[tokio::test]
async fn test_every_localized_route_renders() {
    let table = PathTable::get();
    for locale in Locale::list_enabled() {
        for canonical in table.canonical_routes() {
            let url = i18n::build_navigation_url(canonical, locale);
            let (status, body) = get(&url).await;
            assert_eq!(status, StatusCode::OK, "{} ({})", url, locale);
            assert!(body.contains(&format!("<html lang=\"{}\">", locale.code())));
        }
    }
}

#[tokio::test]
async fn test_localized_slugs_serve_localized_content() {
    let (status, body) = get("/de/e-sim-kompatibilitätsleitfaden").await;
    assert_eq!(status, StatusCode::OK);
    // German page content, not English
    assert!(body.contains("<html lang=\"de\">"));
    assert!(body.contains("iPhone"));

    let (status, body_en) = get("/en/e-sim-compatibility-guide").await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(body, body_en);
}

#[tokio::test]
async fn test_unregistered_route_uses_identity_slug() {
    // /contact-us has no per-locale slugs, so every locale serves it under
    // the canonical path
    for locale in Locale::list_enabled() {
        let (status, body) = get(&format!("/{}/contact-us", locale.code())).await;
        assert_eq!(status, StatusCode::OK, "contact page for {}", locale);
        assert!(body.contains("support@connectphone.eu"));
    }
}

#[tokio::test]
async fn test_page_carries_hreflang_alternates() {
    let (status, body) = get("/en/e-sim-compatibility-guide").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("hreflang=\"en\""));
    assert!(body.contains("hreflang=\"de\""));
    assert!(body.contains("http://test.local/de/e-sim-kompatibilitätsleitfaden"));
    assert!(body.contains("http://test.local/fr/guide-de-compatibilité-e-sim"));
    assert!(body.contains("http://test.local/es/guía-de-compatibilidad-e-sim"));
}

#[tokio::test]
async fn test_language_switcher_uses_native_names() {
    let (status, body) = get("/en/contact-us").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Deutsch"));
    assert!(body.contains("Français"));
    assert!(body.contains("Español"));
}

#[tokio::test]
async fn test_installation_guide_renders_rich_spans() {
    let (status, body) = get("/en/e-sim-installation-guide").await;
    assert_eq!(status, StatusCode::OK);
    // The compatibility callout embeds a <strong> span and a link to the
    // localized compatibility guide
    assert!(body.contains("<strong>"));
    assert!(body.contains("href=\"/en/e-sim-compatibility-guide\""));
}

#[tokio::test]
async fn test_guide_pages_carry_brand_anchors() {
    for locale in Locale::list_enabled() {
        let url = i18n::build_navigation_url("/e-sim-compatibility-guide", locale);
        let (status, body) = get(&url).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"iphone\""), "anchor for {}", locale);
        assert!(body.contains("id=\"samsung\""), "anchor for {}", locale);
        assert!(body.contains("id=\"google-pixel\""), "anchor for {}", locale);
    }
}

// ==================== Cross-Module Consistency Tests ====================

#[tokio::test]
async fn test_navigation_urls_round_trip_through_the_router() {
    // Every URL the site emits for navigation must resolve back to the page
    // it was built from
    let table = PathTable::get();
    for locale in Locale::list_enabled() {
        for canonical in table.canonical_routes() {
            let url = i18n::build_navigation_url(canonical, locale);
            let routed = i18n::route_request(&url).expect("emitted URL must route");
            assert_eq!(routed.locale, locale);
            assert_eq!(
                table.canonical_route_for(&routed.remainder, routed.locale),
                canonical
            );
        }
    }
}

#[test]
fn test_bundle_urls_agree_with_path_table() {
    // The `url` metadata key in each bundle mirrors the path table slug
    // (without the leading slash) so rendered metadata never disagrees
    // with routing
    let table = PathTable::get();
    for locale in Locale::list_enabled() {
        for canonical in table.canonical_routes() {
            if canonical == "/" {
                continue;
            }
            let url = i18n::translate(locale, &format!("{}.url", canonical))
                .unwrap_or_else(|e| panic!("{} ({}): {}", canonical, locale, e));
            let slug = table.resolve_localized_path(canonical, locale);
            assert_eq!(format!("/{}", url), slug, "{} ({})", canonical, locale);
        }
    }
}
