//! HTTP serving surface.
//!
//! Thin axum layer over the i18n core: handlers reconstruct the request
//! path, hand it to `route_request`, map the localized slug back to its
//! canonical route, and render a page from translations. An unsupported
//! locale segment is a 404; a missing translation key is a 500 (configuration
//! defect surfacing loudly, never replaced with another locale's text).

use crate::anchors::anchor_ids;
use crate::config::Config;
use crate::guides;
use crate::i18n::{self, Locale, PathTable, TranslationError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Pages the site serves, by canonical route.
const PAGES: &[&str] = &[
    "/",
    "/e-sim-compatibility-guide",
    "/e-sim-installation-guide",
    "/contact-us",
    "/privacy-policy",
    "/terms-of-service",
    "/data-deletion",
];

/// Build the application router.
pub fn app(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/healthz", get(healthz))
        .route("/:locale", get(localized_home))
        .route("/:locale/:slug", get(localized_page))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// `/` carries no locale; redirect to the default-locale home page. This is
/// the only place a locale is ever substituted.
async fn root_redirect() -> Redirect {
    Redirect::temporary(&format!("/{}", Locale::default().code()))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn localized_home(
    State(config): State<Arc<Config>>,
    Path(locale): Path<String>,
) -> Response {
    serve(&config, &format!("/{}", locale))
}

async fn localized_page(
    State(config): State<Arc<Config>>,
    Path((locale, slug)): Path<(String, String)>,
) -> Response {
    serve(&config, &format!("/{}/{}", locale, slug))
}

/// Route one request path and render the page it resolves to.
fn serve(config: &Config, path: &str) -> Response {
    let routed = match i18n::route_request(path) {
        Ok(routed) => routed,
        Err(e) => {
            debug!("rejecting request path '{}': {}", path, e);
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let canonical = PathTable::get().canonical_route_for(&routed.remainder, routed.locale);
    if !PAGES.contains(&canonical) {
        return StatusCode::NOT_FOUND.into_response();
    }

    match render_page(config, routed.locale, canonical) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("translation failure rendering '{}': {}", canonical, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn render_page(
    config: &Config,
    locale: Locale,
    canonical: &str,
) -> Result<String, TranslationError> {
    let body = match canonical {
        "/" => render_home(locale)?,
        "/e-sim-compatibility-guide" => render_compatibility_guide(locale)?,
        "/e-sim-installation-guide" => render_installation_guide(locale)?,
        "/contact-us" => render_contact(locale)?,
        // The three legal pages share one layout
        _ => render_legal(locale, canonical)?,
    };

    page_shell(config, locale, canonical, &body)
}

/// Join a canonical route and a key suffix into a bundle key
/// (`/contact-us` + `title` → `/contact-us.title`).
fn page_key(canonical: &str, suffix: &str) -> String {
    format!("{}.{}", canonical, suffix)
}

/// Common document shell: metadata, hreflang alternates, language switcher,
/// footer.
fn page_shell(
    config: &Config,
    locale: Locale,
    canonical: &str,
    body: &str,
) -> Result<String, TranslationError> {
    let title = i18n::translate(locale, &page_key(canonical, "metadata.title"))?;
    let description = i18n::translate(locale, &page_key(canonical, "metadata.description"))?;

    // Keyword lists are structured leaves, resolved verbatim and joined here
    let keywords = i18n::translate_raw(locale, &page_key(canonical, "metadata.keywords"))?
        .as_array()
        .map(|list| {
            list.iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    let mut alternates = String::new();
    for target in Locale::list_enabled() {
        alternates.push_str(&format!(
            "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}{}\">\n",
            target.code(),
            config.base_url,
            i18n::build_navigation_url(canonical, target)
        ));
    }

    let mut switcher = String::new();
    for target in Locale::list_enabled() {
        // Locale display names are ordinary bundle keys, so the switcher
        // renders each language under its own name
        let label = i18n::translate(locale, target.code())?;
        switcher.push_str(&format!(
            "<a lang=\"{}\" href=\"{}\">{}</a>\n",
            target.code(),
            i18n::build_navigation_url(canonical, target),
            escape_html(label)
        ));
    }

    let footer = render_footer(locale)?;

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <meta name=\"description\" content=\"{description}\">\n\
         <meta name=\"keywords\" content=\"{keywords}\">\n\
         {alternates}</head>\n<body>\n\
         <nav class=\"language-switcher\">\n{switcher}</nav>\n\
         <main>\n{body}</main>\n{footer}</body>\n</html>\n",
        lang = locale.code(),
        title = escape_html(title),
        description = escape_html(description),
        keywords = escape_html(&keywords),
        alternates = alternates,
        switcher = switcher,
        body = body,
        footer = footer,
    ))
}

fn render_footer(locale: Locale) -> Result<String, TranslationError> {
    let t = |suffix: &str| i18n::translate(locale, &format!("footer.{}", suffix));

    let mut links = String::new();
    for (label_key, canonical) in [
        ("compatibility_guide", "/e-sim-compatibility-guide"),
        ("installation_guide", "/e-sim-installation-guide"),
        ("contact_us", "/contact-us"),
        ("privacy_policy", "/privacy-policy"),
        ("terms_of_service", "/terms-of-service"),
        ("data_deletion", "/data-deletion"),
    ] {
        links.push_str(&format!(
            "<a href=\"{}\">{}</a>\n",
            i18n::build_navigation_url(canonical, locale),
            escape_html(t(label_key)?)
        ));
    }

    Ok(format!(
        "<footer>\n<p>{}</p>\n<h3>{}</h3>\n{}<p>{}</p>\n</footer>\n",
        escape_html(t("description")?),
        escape_html(t("quick_links")?),
        links,
        escape_html(t("all_rights_reserved")?),
    ))
}

fn render_home(locale: Locale) -> Result<String, TranslationError> {
    Ok(format!(
        "<h1>{}</h1>\n<p>{}</p>\n<a href=\"{}\">{}</a>\n<a href=\"{}\">{}</a>\n",
        escape_html(i18n::translate(locale, "/.title")?),
        escape_html(i18n::translate(locale, "/.tagline")?),
        i18n::build_navigation_url("/e-sim-compatibility-guide", locale),
        escape_html(i18n::translate(
            locale,
            "/e-sim-compatibility-guide.title"
        )?),
        i18n::build_navigation_url("/e-sim-installation-guide", locale),
        escape_html(i18n::translate(locale, "/e-sim-installation-guide.title")?),
    ))
}

fn render_compatibility_guide(locale: Locale) -> Result<String, TranslationError> {
    let route = "/e-sim-compatibility-guide";
    let t = |suffix: &str| i18n::translate(locale, &page_key(route, suffix));

    let data = guides::compatibility_guide(locale);
    let names: Vec<&str> = data.iter().map(|b| b.brand.as_str()).collect();
    let ids = anchor_ids(&names);

    let mut out = format!("<h1>{}</h1>\n", escape_html(t("title")?));

    // Brand index
    out.push_str(&format!(
        "<h3>{}</h3>\n<nav class=\"brand-index\">\n",
        escape_html(t("jump_to_your_phone_brand")?)
    ));
    for (brand, id) in data.iter().zip(&ids) {
        out.push_str(&format!(
            "<a href=\"#{}\">{}</a>\n",
            id,
            escape_html(&brand.brand)
        ));
    }
    out.push_str("</nav>\n");

    // Quick tips
    out.push_str(&format!(
        "<h3>{}</h3>\n<ul>\n",
        escape_html(t("quick_tips.title")?)
    ));
    for tip in ["1", "2", "3"] {
        out.push_str(&format!(
            "<li>{}</li>\n",
            escape_html(t(&format!("quick_tips.{}", tip))?)
        ));
    }
    out.push_str("</ul>\n");

    // FAQ
    for section in ["can_esim_be_used_internationally", "is_my_phone_unlocked"] {
        out.push_str(&format!(
            "<h3>{}</h3>\n<p>{}</p>\n",
            escape_html(t(&format!("{}.title", section))?),
            escape_html(t(&format!("{}.answer", section))?)
        ));
    }

    // Per-brand manual instructions
    out.push_str(&format!(
        "<h2>{}</h2>\n",
        escape_html(t("manual_check_instructions")?)
    ));
    for (brand, id) in data.iter().zip(&ids) {
        out.push_str(&format!(
            "<section id=\"{}\">\n<h3>{}</h3>\n<p>{}</p>\n",
            id,
            escape_html(&brand.brand),
            escape_html(&brand.description)
        ));

        out.push_str(&format!("<h4>{}</h4>\n", escape_html(t("methods_to_check")?)));
        for (method_index, method) in brand.steps.iter().enumerate() {
            out.push_str(&format!(
                "<h5>{} {}:</h5>\n<ol>\n",
                escape_html(t("method")?),
                method_index + 1
            ));
            for step in &method.steps {
                out.push_str(&format!("<li>{}</li>\n", escape_html(step)));
            }
            out.push_str("</ol>\n");
            if let Some(note) = &method.description {
                out.push_str(&format!("<p class=\"note\">{}</p>\n", escape_html(note)));
            }
        }

        for (heading_key, groups) in [
            ("compatible_models", &brand.compatible_models),
            ("not_compatible_models", &brand.incompatible_models),
        ] {
            if groups.is_empty() {
                continue;
            }
            out.push_str(&format!("<h4>{}</h4>\n", escape_html(t(heading_key)?)));
            for group in groups {
                if let Some(group_title) = &group.title {
                    out.push_str(&format!("<h5>{}</h5>\n", escape_html(group_title)));
                }
                out.push_str("<ul>\n");
                for model in &group.models {
                    out.push_str(&format!("<li>{}</li>\n", escape_html(model)));
                }
                out.push_str("</ul>\n");
            }
        }

        if !brand.compatibility.is_empty() {
            out.push_str(&format!("<h4>{}</h4>\n<ul>\n", escape_html(t("compatibility")?)));
            for item in &brand.compatibility {
                out.push_str(&format!("<li>{}</li>\n", escape_html(item)));
            }
            out.push_str("</ul>\n");
        }

        out.push_str("</section>\n");
    }

    Ok(out)
}

fn render_installation_guide(locale: Locale) -> Result<String, TranslationError> {
    let route = "/e-sim-installation-guide";
    let t = |suffix: &str| i18n::translate(locale, &page_key(route, suffix));

    let data = guides::installation_guide(locale);
    let names: Vec<&str> = data.iter().map(|b| b.brand.as_str()).collect();
    let ids = anchor_ids(&names);

    let mut out = format!("<h1>{}</h1>\n", escape_html(t("title")?));

    // Compatibility check callout: one translated string embedding a styled
    // span, one embedding a link to the compatibility guide. Template text
    // outside the spans is escaped like everything else on the page.
    let esc = |text: &str| escape_html(text);
    let strong = |chunks: &str| format!("<strong>{}</strong>", escape_html(chunks));
    let compatibility_url = i18n::build_navigation_url("/e-sim-compatibility-guide", locale);
    let link = |chunks: &str| format!("<a href=\"{}\">{}</a>", compatibility_url, escape_html(chunks));

    out.push_str(&format!(
        "<h3>{}</h3>\n<p>{}</p>\n<p>{}</p>\n",
        escape_html(t("check_device_compatibility")?),
        i18n::translate_rich_with(
            locale,
            &page_key(route, "first_of_all"),
            &[("strong", &strong)],
            &esc
        )?,
        i18n::translate_rich_with(
            locale,
            &page_key(route, "to_check_compatibility"),
            &[("link", &link)],
            &esc
        )?,
    ));

    for (brand, id) in data.iter().zip(&ids) {
        out.push_str(&format!(
            "<section id=\"{}\">\n<h3>{}</h3>\n<p>{}</p>\n",
            id,
            escape_html(&brand.brand),
            escape_html(&brand.description)
        ));

        out.push_str(&format!("<h4>{}</h4>\n<ul>\n", escape_html(t("what_you_need")?)));
        for item in &brand.what_you_need {
            out.push_str(&format!("<li>{}</li>\n", escape_html(item)));
        }
        out.push_str("</ul>\n");

        for method in &brand.methods {
            out.push_str(&format!(
                "<h4>{}</h4>\n<p>{}</p>\n<ol>\n",
                escape_html(&method.title),
                escape_html(&method.description)
            ));
            for step in &method.steps {
                out.push_str(&format!(
                    "<li value=\"{}\"><strong>{}</strong> {}</li>\n",
                    step.step_number,
                    escape_html(&step.title),
                    escape_html(&step.description)
                ));
            }
            out.push_str("</ol>\n");
            for note in &method.important_notes {
                out.push_str(&format!("<p class=\"note\">{}</p>\n", escape_html(note)));
            }
        }

        if !brand.general_tips.is_empty() {
            out.push_str(&format!("<h4>{}</h4>\n<ul>\n", escape_html(t("general_tips")?)));
            for tip in &brand.general_tips {
                out.push_str(&format!("<li>{}</li>\n", escape_html(tip)));
            }
            out.push_str("</ul>\n");
        }

        out.push_str("</section>\n");
    }

    Ok(out)
}

fn render_contact(locale: Locale) -> Result<String, TranslationError> {
    let route = "/contact-us";
    Ok(format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p>{}: <a href=\"mailto:support@connectphone.eu\">support@connectphone.eu</a></p>\n",
        escape_html(i18n::translate(locale, &page_key(route, "title"))?),
        escape_html(i18n::translate(locale, &page_key(route, "description"))?),
        escape_html(i18n::translate(locale, &page_key(route, "email_label"))?),
    ))
}

/// Shared layout for the privacy-policy, terms-of-service, and data-deletion
/// pages: intro text plus a contact section whose translated string embeds a
/// link to the contact page.
fn render_legal(locale: Locale, canonical: &str) -> Result<String, TranslationError> {
    let contact_url = i18n::build_navigation_url("/contact-us", locale);
    let esc = |text: &str| escape_html(text);
    let link = |chunks: &str| format!("<a href=\"{}\">{}</a>", contact_url, escape_html(chunks));

    Ok(format!(
        "<h1>{}</h1>\n<p>{}</p>\n<h2>{}</h2>\n<p>{}</p>\n",
        escape_html(i18n::translate(locale, &page_key(canonical, "title"))?),
        escape_html(i18n::translate(locale, &page_key(canonical, "intro"))?),
        escape_html(i18n::translate(locale, &page_key(canonical, "contact.title"))?),
        i18n::translate_rich_with(
            locale,
            &page_key(canonical, "contact.description"),
            &[("link", &link)],
            &esc
        )?,
    ))
}

/// Minimal HTML text escaping for translated copy and content fields.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
