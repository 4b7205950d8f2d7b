//! # Keyword Tables
//!
//! Static mappings from industry and company-size keys to the bill keywords
//! that mark a section as relevant. These are plain data tables fixed at
//! build time; lookups for unknown keys yield an empty list rather than an
//! error.

/// Keywords per industry. Keys are lowercase; callers lowercase their input.
pub const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "Technology & Data",
            "R&D Bonus Depreciation",
            "Advanced Manufacturing Credit",
            "Data Modernization",
        ],
    ),
    (
        "healthcare",
        &[
            "Healthcare & Labor",
            "Health Workforce",
            "Community Health Centers",
            "J-1 Visa Waivers",
        ],
    ),
    (
        "manufacturing",
        &[
            "Advanced Manufacturing Credit",
            "Full Expensing",
            "R&D Bonus Depreciation",
            "Clean-Energy Credit Phase-Out",
        ],
    ),
    (
        "finance",
        &[
            "Banking & Capital Markets",
            "CFPB Funding Cap",
            "SEC Reserve Enhancement",
        ],
    ),
    (
        "agriculture",
        &[
            "Agriculture & Food",
            "SNAP Rebase",
            "Commodity Programs",
            "PLC Reference Prices",
        ],
    ),
    (
        "energy",
        &[
            "Energy & Natural Resources",
            "Clean-Energy Credit Phase-Out",
            "Outer Continental Shelf Leasing",
            "Coal Royalty Adjustment",
        ],
    ),
    (
        "defense",
        &[
            "Defense & Security Contracting",
            "Navy Shipbuilding",
            "Munitions Replenishment",
        ],
    ),
    (
        "education",
        &[
            "Higher Education Finance",
            "Pell Grants",
            "PLUS Loan Limits",
            "Workforce Development",
        ],
    ),
    (
        "construction",
        &[
            "Infrastructure & Construction",
            "MILCON Projects",
            "Bridge Repair Grants",
        ],
    ),
    (
        "retail",
        &[
            "Tax & Finance",
            "Tips & Overtime",
            "Child Tax Credit",
            "Qualified Business Income Deduction",
        ],
    ),
    (
        "transportation",
        &["ATC Modernization", "NextGen Funding", "FAA Spectrum Auction"],
    ),
];

/// Keywords per company-size bracket. Keys are matched exactly.
// Note: `CFPB regulations` does not occur verbatim in the bill text, so with
// plain substring matching it can never select a section.
pub const SIZE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "startup",
        &[
            "Tips & Overtime",
            "R&D Bonus Depreciation",
            "Full Expensing",
            "Workforce Development",
        ],
    ),
    (
        "small",
        &[
            "Qualified Business Income Deduction",
            "Full Expensing",
            "Tips & Overtime",
            "Child Tax Credit",
        ],
    ),
    (
        "medium",
        &[
            "Advanced Manufacturing Credit",
            "Full Expensing",
            "Workforce Development",
            "Non-compete ban",
        ],
    ),
    (
        "large",
        &[
            "Advanced Manufacturing Credit",
            "R&D Bonus Depreciation",
            "CFPB regulations",
            "Clean-Energy Credit Phase-Out",
        ],
    ),
    (
        "enterprise",
        &[
            "Banking & Capital Markets",
            "SEC Reserve Enhancement",
            "Advanced Manufacturing Credit",
            "Clean-Energy Credit Phase-Out",
        ],
    ),
];

/// Looks up the keyword list for an industry, case-insensitively.
///
/// Unknown industries contribute no keywords.
pub fn industry_keywords(industry: &str) -> &'static [&'static str] {
    let key = industry.to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

/// Looks up the keyword list for a size bracket.
///
/// Unknown sizes contribute no keywords.
pub fn size_keywords(size: &str) -> &'static [&'static str] {
    SIZE_KEYWORDS
        .iter()
        .find(|(name, _)| *name == size)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}
