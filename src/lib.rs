//! Library crate for the ConnectPhone eSIM marketing site.
//!
//! The site itself is mostly static content; the interesting part lives in
//! [`i18n`], which decides which locale a request belongs to, which localized
//! URL slug maps to which canonical route, and how translation lookups are
//! resolved. Everything else (page handlers, guide content types, anchor ids)
//! consumes those resolved values.

pub mod anchors;
pub mod config;
pub mod guides;
pub mod i18n;
pub mod server;
