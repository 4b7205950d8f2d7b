//! # Section Retrieval
//!
//! Selects the bill sections relevant to a business profile using the static
//! keyword tables. This is deliberately a containment scan over a fixed text,
//! not a search index: matching is case-insensitive substring containment,
//! with no word boundaries, ranking, or scoring.

use crate::{
    bill,
    mappings::{industry_keywords, size_keywords},
    types::BusinessProfile,
};
use tracing::debug;

/// Filters `document` down to the sections relevant to `profile`.
///
/// Without a profile, the document is returned unchanged. Otherwise each
/// blank-line-delimited section is kept when it contains any of the profile's
/// industry or size keywords, case-insensitively. A scan that selects nothing
/// falls back to the full document, so the result is never empty. When the
/// scan does select something, the tax/finance title is force-included and
/// moved to the front; the remaining sections keep document order.
pub fn select_sections(profile: Option<&BusinessProfile>, document: &str) -> String {
    let Some(profile) = profile else {
        return document.to_string();
    };

    let keywords: Vec<String> = industry_keywords(&profile.industry)
        .iter()
        .chain(size_keywords(&profile.size))
        .map(|keyword| keyword.to_lowercase())
        .collect();

    let mut selected: Vec<&str> = bill::sections(document)
        .filter(|section| {
            let section_lower = section.to_lowercase();
            keywords
                .iter()
                .any(|keyword| section_lower.contains(keyword.as_str()))
        })
        .collect();

    if selected.is_empty() {
        debug!(
            industry = %profile.industry,
            size = %profile.size,
            "No sections matched the profile keywords; falling back to the full bill text"
        );
        return document.to_string();
    }

    // The tax title is an explicit post-filter step, separate from the
    // keyword scan: it is always surfaced, ahead of everything else. The
    // first marker hit wins ("Title VIII" also contains "Title VII", so the
    // match must be resolved by document order and deduplicated by identity).
    if let Some(tax_section) = bill::sections(document).find(|s| bill::is_tax_section(s)) {
        selected.retain(|section| *section != tax_section);
        selected.insert(0, tax_section);
    }

    selected.join("\n\n")
}
