//! # Analysis Prompts
//!
//! The fixed prompt text for the legislative-impact analyst, and the assembly
//! of the per-request system instruction: role framing, the business context
//! (or the complete bill when no profile was submitted), the retrieved
//! sections, the impact narrative, the analysis instructions, and the
//! output-format directive.

use crate::{
    bill::BILL_TEXT,
    impact::describe_impact,
    retrieval::select_sections,
    types::{AnalysisMode, BusinessProfile},
};

/// Role framing for the analyst persona.
pub const ANALYST_ROLE: &str = r#"You are an expert business analyst specializing in legislative impact analysis for H.R. 1 "One Big Beautiful Bill". You have access to the complete bill text and must provide detailed, actionable insights on how this legislation will affect businesses."#;

/// The fixed list of analysis steps every response must follow.
pub const ANALYSIS_INSTRUCTIONS: &str = r#"ANALYSIS INSTRUCTIONS:
1. **Prioritize Retrieved Content**: Focus primarily on the sections most relevant to this business
2. **Specific Impact Assessment**: Provide concrete financial and operational impacts
3. **Timeline Analysis**: Highlight key implementation dates and deadlines
4. **Compliance Requirements**: Detail specific actions needed for compliance
5. **Opportunity Identification**: Point out potential benefits and competitive advantages
6. **Cost-Benefit Analysis**: Provide estimated costs and savings where possible
7. **Action Items**: Give specific, prioritized next steps
8. **Risk Assessment**: Identify potential challenges and mitigation strategies"#;

/// Depth directive for `AnalysisMode::Detailed`.
pub const DEPTH_DETAILED: &str = "Provide comprehensive, in-depth analysis with extensive details";

/// Depth directive for `AnalysisMode::Quick`.
pub const DEPTH_QUICK: &str = "Provide focused, concise analysis highlighting key points";

/// Output-format directive appended to every system prompt.
pub const RESPONSE_FORMAT: &str = r#"RESPONSE FORMAT:
- Use specific section references (e.g., "Sec 704(a), §179")
- Include dollar amounts and percentages from the bill
- Provide implementation timelines
- Distinguish between mandatory and optional provisions
- Offer both immediate and long-term impact assessments

Focus on actionable business intelligence rather than legal interpretation. Be specific about how each provision affects this particular business context."#;

/// The fixed low sampling temperature for analysis generation.
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// Literal employee headcount range for a size bracket.
fn headcount(size: &str) -> &'static str {
    match size {
        "startup" => "1-10",
        "small" => "11-50",
        "medium" => "51-200",
        "large" => "201-1000",
        _ => "1000+",
    }
}

/// Assembles the per-request system instruction.
///
/// With a profile: the business context block, the retrieved bill sections,
/// and the impact narrative. Without one: the complete bill text.
pub fn build_system_prompt(profile: Option<&BusinessProfile>, mode: AnalysisMode) -> String {
    let context = match profile {
        Some(profile) => {
            let retrieved = select_sections(Some(profile), BILL_TEXT);
            let impact = describe_impact(Some(profile));
            format!(
                "BUSINESS CONTEXT:\n\
                 - Company: {company}\n\
                 - Industry: {industry}\n\
                 - Size: {size} ({headcount} employees)\n\
                 - Description: {description}\n\n\
                 RETRIEVED RELEVANT BILL SECTIONS FOR THIS BUSINESS:\n\
                 {retrieved}\n\
                 {impact}",
                company = profile.company_name,
                industry = profile.industry,
                size = profile.size,
                headcount = headcount(&profile.size),
                description = profile.description,
            )
        }
        None => format!("COMPLETE H.R. 1 BILL CONTENT:\n{BILL_TEXT}"),
    };

    let depth = match mode {
        AnalysisMode::Detailed => DEPTH_DETAILED,
        AnalysisMode::Quick => DEPTH_QUICK,
    };

    format!(
        "{ANALYST_ROLE}\n\n{context}\n\n{ANALYSIS_INSTRUCTIONS}\n\nANALYSIS DEPTH: {depth}\n\n{RESPONSE_FORMAT}"
    )
}
