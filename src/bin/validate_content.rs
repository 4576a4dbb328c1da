//! Content validation binary - checks translation bundle completeness.
//!
//! Usage:
//!   cargo run --bin validate-content
//!
//! Every enabled locale's bundle is compared against the default locale's
//! key set. Missing keys are errors (exit code 1); extra keys are warnings.
//! Run this in CI so a partial bundle never ships.

use esim_site::i18n::{BundleValidator, Locale};

fn main() {
    let report = BundleValidator::validate_all();

    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }
    for error in &report.errors {
        eprintln!("error: {}", error);
    }

    if report.has_errors() {
        eprintln!(
            "translation bundles incomplete: {} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
        std::process::exit(1);
    }

    println!(
        "translation bundles complete for {} locales ({} warning(s))",
        Locale::list_enabled().len(),
        report.warnings.len()
    );
}
