//! # Business-Impact Narratives
//!
//! Canned per-industry and per-size narrative blocks appended to the system
//! prompt. Every figure in these templates is a literal constant from the
//! bill summary; nothing is computed from the profile.

use crate::types::BusinessProfile;

const TECHNOLOGY_IMPACT: &str = r#"**Technology Sector Impact:**
- R&D Bonus Depreciation (Sec 704(b)): Immediate expensing restored - significant tax savings for R&D investments
- Advanced Manufacturing Credit (Sec 704(c)): $1B/year for semiconductors and battery components (FY26-35)
- Data Modernization Fund: $100M for federal data platform - potential government contracting opportunities
- FAA Spectrum Auction: ~$5B proceeds from 5GHz Safety Band

"#;

const HEALTHCARE_IMPACT: &str = r#"**Healthcare Sector Impact:**
- Health Workforce provisions (Sec 804): J-1 Visa Waivers accelerated for HPSA service
- Community Health Centers: $300M HRSA staffing grants (FY26-30)
- Workforce Development: $2B funding with non-compete ban requirements

"#;

const MANUFACTURING_IMPACT: &str = r#"**Manufacturing Sector Impact:**
- Advanced Manufacturing Credit: $1B/year for semiconductors and battery components
- Full Expensing: $2.5M cap indexed, permanent - major capital expenditure benefits
- Clean-Energy Credit Phase-Out: 5% annual reduction, 0% by Jan 1, 2030

"#;

const FINANCE_IMPACT: &str = r#"**Financial Services Impact:**
- CFPB Funding Cap: Budget capped at $1.2B (FY26 baseline) - potential regulatory relief
- SEC Reserve Enhancement: Up to $250M/year transfer to Investor Protection Fund
- Increased oversight and compliance requirements

"#;

const SMALL_BUSINESS_IMPACT: &str = r#"**Small Business Specific Benefits:**
- Tips & Overtime Exclusion: Up to $5,000 annually excluded from AGI
- R&D Bonus Depreciation: Immediate expensing for research investments
- Full Expensing: Up to $2.5M cap for equipment and assets
- Qualified Business Income Deduction: 20% deduction maintained

"#;

const LARGER_BUSINESS_IMPACT: &str = r#"**Larger Business Considerations:**
- Advanced Manufacturing Credit eligibility for qualifying sectors
- Workforce Development requirements: Non-compete ban compliance needed
- Enhanced regulatory compliance for CFPB and SEC provisions
- Clean-Energy Credit phase-out timeline planning required

"#;

/// The narrative block for an industry, if it is one of the known sectors.
fn industry_block(industry: &str) -> Option<&'static str> {
    match industry.to_lowercase().as_str() {
        "technology" => Some(TECHNOLOGY_IMPACT),
        "healthcare" => Some(HEALTHCARE_IMPACT),
        "manufacturing" => Some(MANUFACTURING_IMPACT),
        "finance" => Some(FINANCE_IMPACT),
        _ => None,
    }
}

/// The narrative block for a size bracket, if it is one of the known sizes.
fn size_block(size: &str) -> Option<&'static str> {
    match size {
        "startup" | "small" => Some(SMALL_BUSINESS_IMPACT),
        "medium" | "large" | "enterprise" => Some(LARGER_BUSINESS_IMPACT),
        _ => None,
    }
}

/// Builds the canned impact narrative for a profile.
///
/// Returns an empty string without a profile. Otherwise: a header naming the
/// company, then the industry block (when the industry is known) followed by
/// the size block (when the size is known). Unknown keys contribute nothing.
pub fn describe_impact(profile: Option<&BusinessProfile>) -> String {
    let Some(profile) = profile else {
        return String::new();
    };

    let mut analysis = format!(
        "\n## RAG-Enhanced Business Impact Analysis for {}\n\n",
        profile.company_name
    );
    if let Some(block) = industry_block(&profile.industry) {
        analysis.push_str(block);
    }
    if let Some(block) = size_block(&profile.size) {
        analysis.push_str(block);
    }

    analysis
}
