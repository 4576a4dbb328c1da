//! Bundle completeness validation.
//!
//! Each locale's translation bundle is expected to be complete: every key
//! present in the default locale's bundle must exist in every other enabled
//! locale's bundle. A partial bundle is a deployment error, so this check
//! runs in CI via the `validate-content` binary rather than being papered
//! over at request time.

use crate::i18n::{Locale, TranslationBundle};
use serde_json::Value;
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about bundle contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors: keys the default bundle defines but a locale lacks
    pub errors: Vec<String>,

    /// Non-critical warnings: keys a locale defines beyond the default set
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation bundle completeness.
pub struct BundleValidator;

impl BundleValidator {
    /// Validate every enabled locale's bundle against the default locale's.
    ///
    /// The default bundle's key set is the reference: keys missing from
    /// another locale are errors, keys only present in another locale are
    /// warnings (stale copy that no longer renders anywhere).
    pub fn validate_all() -> ValidationReport {
        let mut report = ValidationReport::new();

        let default_locale = Locale::default();
        let reference = leaf_keys(TranslationBundle::for_locale(default_locale));

        for locale in Locale::list_enabled() {
            if locale == default_locale {
                continue;
            }

            let keys = leaf_keys(TranslationBundle::for_locale(locale));

            for missing in reference.difference(&keys) {
                report.errors.push(format!(
                    "locale '{}' is missing key '{}'",
                    locale.code(),
                    missing
                ));
            }
            for extra in keys.difference(&reference) {
                report.warnings.push(format!(
                    "locale '{}' has extra key '{}' not present in '{}'",
                    locale.code(),
                    extra,
                    default_locale.code()
                ));
            }
        }

        report
    }
}

/// Collect the dotted paths of all leaf values in a bundle.
///
/// Arrays count as leaves: they are resolved whole via raw lookups, so their
/// shape is content, not key structure.
fn leaf_keys(bundle: &TranslationBundle) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    collect(bundle.root(), String::new(), &mut keys);
    keys
}

fn collect(value: &Value, prefix: String, keys: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                collect(child, path, keys);
            }
        }
        _ => {
            keys.insert(prefix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }

    // ==================== Key Collection Tests ====================

    #[test]
    fn test_collect_flattens_nested_objects() {
        let value = json!({
            "/contact-us": {
                "title": "Contact us",
                "metadata": { "keywords": ["a", "b"] }
            },
            "en": "English"
        });

        let mut keys = BTreeSet::new();
        collect(&value, String::new(), &mut keys);

        assert!(keys.contains("/contact-us.title"));
        assert!(keys.contains("/contact-us.metadata.keywords"));
        assert!(keys.contains("en"));
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_collect_treats_arrays_as_leaves() {
        let value = json!({ "keywords": [{"nested": true}] });

        let mut keys = BTreeSet::new();
        collect(&value, String::new(), &mut keys);

        assert_eq!(keys.len(), 1);
        assert!(keys.contains("keywords"));
    }

    // ==================== Embedded Bundle Tests ====================

    #[test]
    fn test_embedded_bundles_are_complete() {
        let report = BundleValidator::validate_all();
        assert!(
            !report.has_errors(),
            "incomplete translation bundles: {:?}",
            report.errors
        );
        assert!(
            !report.has_warnings(),
            "stale translation keys: {:?}",
            report.warnings
        );
    }
}
