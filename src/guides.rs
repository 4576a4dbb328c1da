//! Typed content model for the per-locale guide documents.
//!
//! Each guide page is driven by one JSON document per locale: an ordered
//! sequence of brand records with nested step and model-group structures.
//! The documents are embedded at compile time like the translation bundles
//! and parsed once per process. The anchor-id algorithm and the page
//! handlers consume them; this module does not interpret the content beyond
//! its shape.

use crate::i18n::Locale;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

// ==================== Compatibility Guide ====================

/// One way to check a phone for eSIM support: an ordered list of steps with
/// optional screenshots and a closing note.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckMethod {
    pub description: Option<String>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A titled group of device models (e.g. "iPhone 15 series").
#[derive(Debug, Clone, Deserialize)]
pub struct ModelGroup {
    pub title: Option<String>,
    pub models: Vec<String>,
}

/// Compatibility information for one phone brand.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandCompatibility {
    pub brand: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub steps: Vec<CheckMethod>,
    #[serde(default)]
    pub compatibility: Vec<String>,
    #[serde(default)]
    pub compatible_models: Vec<ModelGroup>,
    #[serde(default)]
    pub incompatible_models: Vec<ModelGroup>,
}

// ==================== Installation Guide ====================

/// One numbered step inside an installation method.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// One installation method (QR code, carrier app, manual entry) for a brand.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationMethod {
    pub title: String,
    pub description: String,
    pub steps: Vec<InstallationStep>,
    #[serde(default)]
    pub important_notes: Vec<String>,
}

/// Installation instructions for one phone brand.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInstallation {
    pub brand: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub what_you_need: Vec<String>,
    pub methods: Vec<InstallationMethod>,
    #[serde(default)]
    pub general_tips: Vec<String>,
}

// ==================== Embedded Documents ====================

const COMPATIBILITY_DATA: &[(&str, &str)] = &[
    ("en", include_str!("../content/guides/compatibility/en.json")),
    ("de", include_str!("../content/guides/compatibility/de.json")),
    ("fr", include_str!("../content/guides/compatibility/fr.json")),
    ("es", include_str!("../content/guides/compatibility/es.json")),
];

const INSTALLATION_DATA: &[(&str, &str)] = &[
    ("en", include_str!("../content/guides/installation/en.json")),
    ("de", include_str!("../content/guides/installation/de.json")),
    ("fr", include_str!("../content/guides/installation/fr.json")),
    ("es", include_str!("../content/guides/installation/es.json")),
];

static COMPATIBILITY: OnceLock<HashMap<&'static str, Vec<BrandCompatibility>>> = OnceLock::new();
static INSTALLATION: OnceLock<HashMap<&'static str, Vec<BrandInstallation>>> = OnceLock::new();

fn parse_all<T: for<'de> Deserialize<'de>>(
    documents: &[(&'static str, &'static str)],
    what: &str,
) -> HashMap<&'static str, Vec<T>> {
    documents
        .iter()
        .map(|(code, raw)| {
            let parsed: Vec<T> = serde_json::from_str(raw)
                .unwrap_or_else(|e| panic!("malformed {} document '{}': {}", what, code, e));
            (*code, parsed)
        })
        .collect()
}

/// The compatibility guide's brand records for one locale.
///
/// # Panics
/// Panics if the embedded document for the locale is missing or malformed
/// (a build defect; the documents are compiled into the binary).
pub fn compatibility_guide(locale: Locale) -> &'static [BrandCompatibility] {
    COMPATIBILITY
        .get_or_init(|| parse_all(COMPATIBILITY_DATA, "compatibility guide"))
        .get(locale.code())
        .unwrap_or_else(|| panic!("no compatibility guide for locale '{}'", locale.code()))
}

/// The installation guide's brand records for one locale.
///
/// # Panics
/// Same policy as [`compatibility_guide`].
pub fn installation_guide(locale: Locale) -> &'static [BrandInstallation] {
    INSTALLATION
        .get_or_init(|| parse_all(INSTALLATION_DATA, "installation guide"))
        .get(locale.code())
        .unwrap_or_else(|| panic!("no installation guide for locale '{}'", locale.code()))
}
