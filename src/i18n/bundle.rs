//! Translation bundles: per-locale key/value trees backing all page copy.
//!
//! One JSON document per locale is embedded at compile time and parsed once
//! per process on first access. Bundles are read-only after that, so any
//! number of request handlers can resolve keys concurrently.
//!
//! Keys are dotted paths whose first segment is a route-like top-level key,
//! e.g. `/contact-us.title` or `/e-sim-compatibility-guide.quick_tips.1`.
//!
//! A missing key is a configuration defect and resolves to an error. The
//! resolver never invents fallback text and never falls back to another
//! locale's bundle: each bundle is expected to be complete, and a partial
//! bundle is a deployment error (see the `validator` module and the
//! `validate-content` binary).

use crate::i18n::Locale;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Embedded translation bundles, one per registry locale.
const EMBEDDED_BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../../content/messages/en.json")),
    ("de", include_str!("../../content/messages/de.json")),
    ("fr", include_str!("../../content/messages/fr.json")),
    ("es", include_str!("../../content/messages/es.json")),
];

/// Errors surfaced by translation lookups.
///
/// These are configuration defects, not runtime-recoverable conditions; the
/// serving layer reports them as internal errors rather than papering over
/// them with another locale's text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// The key has no leaf in this locale's bundle.
    #[error("missing translation key '{key}' in '{locale}' bundle")]
    MissingKey { locale: String, key: String },

    /// The key resolved to a structured value where a string was expected.
    #[error("translation key '{key}' in '{locale}' bundle is not a string")]
    NotAString { locale: String, key: String },

    /// A rich template contains a placeholder span the caller supplied no
    /// renderer for.
    #[error("no renderer for placeholder '<{tag}>' in key '{key}' ('{locale}' bundle)")]
    MissingRenderer {
        locale: String,
        key: String,
        tag: String,
    },
}

/// The complete set of translations for one locale.
pub struct TranslationBundle {
    locale: Locale,
    root: Value,
}

/// Global bundle cache, keyed by locale code (initialized lazily).
///
/// Population is idempotent: every thread parsing the embedded documents
/// produces the same value, and `OnceLock` avoids the duplicated work.
static BUNDLES: OnceLock<HashMap<&'static str, TranslationBundle>> = OnceLock::new();

impl TranslationBundle {
    /// Get the cached bundle for a locale.
    ///
    /// # Panics
    /// Panics if an embedded bundle is malformed or a registry locale has no
    /// embedded document. Both are build defects: the documents are compiled
    /// into the binary and checked by the `validate-content` binary.
    pub fn for_locale(locale: Locale) -> &'static TranslationBundle {
        let bundles = BUNDLES.get_or_init(|| {
            EMBEDDED_BUNDLES
                .iter()
                .map(|(code, raw)| {
                    let root: Value = serde_json::from_str(raw).unwrap_or_else(|e| {
                        panic!("malformed embedded translation bundle '{}': {}", code, e)
                    });
                    let bundle_locale = Locale::from_code(code).unwrap_or_else(|e| {
                        panic!("embedded bundle for unregistered locale '{}': {}", code, e)
                    });
                    (
                        *code,
                        TranslationBundle {
                            locale: bundle_locale,
                            root,
                        },
                    )
                })
                .collect()
        });

        bundles.get(locale.code()).unwrap_or_else(|| {
            panic!(
                "no embedded translation bundle for locale '{}'",
                locale.code()
            )
        })
    }

    /// The locale this bundle belongs to.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolve a key to a string leaf.
    pub fn translate(&self, key: &str) -> Result<&str, TranslationError> {
        let value = self.lookup(key)?;
        value.as_str().ok_or_else(|| TranslationError::NotAString {
            locale: self.locale.code().to_string(),
            key: key.to_string(),
        })
    }

    /// Resolve a key to its structured leaf verbatim (array or object).
    ///
    /// Used for non-string content such as metadata keyword lists.
    pub fn translate_raw(&self, key: &str) -> Result<&Value, TranslationError> {
        self.lookup(key)
    }

    /// Resolve a key and substitute `<name>…</name>` placeholder spans.
    ///
    /// Each span is replaced by the output of the renderer registered under
    /// `name`, applied to the enclosed text run; surrounding text is left
    /// untouched. This lets one translated string embed a styled or clickable
    /// sub-span without the bundle knowing about presentation.
    ///
    /// Multiple non-nested spans are substituted left to right. A `<` that
    /// does not open a well-formed span is treated as literal text. A
    /// well-formed span whose name has no renderer is an error, same as a
    /// missing key.
    pub fn translate_rich(
        &self,
        key: &str,
        renderers: &[(&str, &dyn Fn(&str) -> String)],
    ) -> Result<String, TranslationError> {
        self.translate_rich_with(key, renderers, &|text| text.to_string())
    }

    /// Like [`translate_rich`], with a transform applied to the text runs
    /// outside placeholder spans. The serving layer passes an HTML escaper
    /// here so template text and renderer output follow one escaping policy.
    ///
    /// [`translate_rich`]: TranslationBundle::translate_rich
    pub fn translate_rich_with(
        &self,
        key: &str,
        renderers: &[(&str, &dyn Fn(&str) -> String)],
        text: &dyn Fn(&str) -> String,
    ) -> Result<String, TranslationError> {
        let template = self.translate(key)?;

        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('<') {
            let after_open = &rest[open + 1..];
            match parse_span(after_open) {
                Some((tag, inner, consumed)) => {
                    let renderer = renderers
                        .iter()
                        .find(|(name, _)| *name == tag)
                        .map(|(_, render)| render)
                        .ok_or_else(|| TranslationError::MissingRenderer {
                            locale: self.locale.code().to_string(),
                            key: key.to_string(),
                            tag: tag.to_string(),
                        })?;

                    out.push_str(&text(&rest[..open]));
                    out.push_str(&renderer(inner));
                    rest = &after_open[consumed..];
                }
                None => {
                    // Literal '<' (or malformed span): keep it as text
                    out.push_str(&text(&rest[..open + 1]));
                    rest = after_open;
                }
            }
        }
        out.push_str(&text(rest));

        Ok(out)
    }

    /// Walk the bundle tree along a dotted key path.
    ///
    /// The first segment is everything up to the first `.` (route keys like
    /// `/contact-us` contain no dots); the remaining segments address nested
    /// object keys.
    fn lookup(&self, key: &str) -> Result<&Value, TranslationError> {
        let (head, rest) = match key.find('.') {
            Some(idx) => (&key[..idx], Some(&key[idx + 1..])),
            None => (key, None),
        };

        let mut current = self.root.get(head).ok_or_else(|| self.missing(key))?;
        if let Some(rest) = rest {
            for part in rest.split('.') {
                current = current.get(part).ok_or_else(|| self.missing(key))?;
            }
        }
        Ok(current)
    }

    /// The whole bundle tree, used by the completeness validator.
    pub(crate) fn root(&self) -> &Value {
        &self.root
    }

    fn missing(&self, key: &str) -> TranslationError {
        TranslationError::MissingKey {
            locale: self.locale.code().to_string(),
            key: key.to_string(),
        }
    }

    #[cfg(test)]
    fn from_value(locale: Locale, root: Value) -> Self {
        Self { locale, root }
    }
}

/// Try to parse a placeholder span starting right after a `<`.
///
/// On success returns `(tag, inner text, bytes consumed after the '<')`.
/// Returns `None` when the text after the `<` is not a well-formed
/// `name>…</name>` span.
fn parse_span(after_open: &str) -> Option<(&str, &str, usize)> {
    let gt = after_open.find('>')?;
    let tag = &after_open[..gt];
    if tag.is_empty()
        || !tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return None;
    }

    let body = &after_open[gt + 1..];
    let closing = format!("</{}>", tag);
    let close = body.find(&closing)?;

    let inner = &body[..close];
    let consumed = gt + 1 + close + closing.len();
    Some((tag, inner, consumed))
}

// ==================== Spec-facing free functions ====================
//
// Every lookup takes the locale explicitly; nothing reads ambient request
// state.

/// Resolve a string translation for a locale.
pub fn translate(locale: Locale, key: &str) -> Result<&'static str, TranslationError> {
    TranslationBundle::for_locale(locale).translate(key)
}

/// Resolve a structured translation (array/object leaf) for a locale.
pub fn translate_raw(locale: Locale, key: &str) -> Result<&'static Value, TranslationError> {
    TranslationBundle::for_locale(locale).translate_raw(key)
}

/// Resolve a rich translation, substituting placeholder spans with the
/// supplied renderers.
pub fn translate_rich(
    locale: Locale,
    key: &str,
    renderers: &[(&str, &dyn Fn(&str) -> String)],
) -> Result<String, TranslationError> {
    TranslationBundle::for_locale(locale).translate_rich(key, renderers)
}

/// Resolve a rich translation, additionally transforming the text runs
/// outside placeholder spans.
pub fn translate_rich_with(
    locale: Locale,
    key: &str,
    renderers: &[(&str, &dyn Fn(&str) -> String)],
    text: &dyn Fn(&str) -> String,
) -> Result<String, TranslationError> {
    TranslationBundle::for_locale(locale).translate_rich_with(key, renderers, text)
}
