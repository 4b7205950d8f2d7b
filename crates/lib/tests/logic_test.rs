//! # Logic Tests
//!
//! Tests for the impact narratives and the prompt-assembly flow, using a mock
//! provider to capture exactly what would be sent upstream.

mod common;

use billrag::impact::describe_impact;
use billrag::prompts::{build_system_prompt, ANALYSIS_TEMPERATURE};
use billrag::{
    bill, AnalysisMode, AnalysisOptions, BusinessProfile, ChatClientBuilder, ChatMessage,
    MessageRole, PromptError,
};
use common::{setup_tracing, MockAiProvider};
use futures::StreamExt;

fn profile(industry: &str, size: &str) -> BusinessProfile {
    BusinessProfile {
        company_name: "Meridian Capital".to_string(),
        industry: industry.to_string(),
        size: size.to_string(),
        description: "Mid-market lending and advisory".to_string(),
    }
}

#[test]
fn describe_impact_without_profile_is_empty() {
    assert_eq!(describe_impact(None), "");
}

#[test]
fn finance_enterprise_impact_contains_both_blocks_in_order() {
    let analysis = describe_impact(Some(&profile("finance", "enterprise")));

    assert!(analysis.contains("Business Impact Analysis for Meridian Capital"));
    let industry_at = analysis
        .find("**Financial Services Impact:**")
        .expect("finance block missing");
    let size_at = analysis
        .find("**Larger Business Considerations:**")
        .expect("enterprise block missing");
    assert!(industry_at < size_at);
}

#[test]
fn unknown_industry_and_size_contribute_no_blocks() {
    let analysis = describe_impact(Some(&profile("zzz", "zzz")));
    assert!(analysis.contains("Business Impact Analysis for Meridian Capital"));
    assert!(!analysis.contains("**"));
}

#[test]
fn startup_and_small_share_the_small_business_block() {
    let startup = describe_impact(Some(&profile("technology", "startup")));
    let small = describe_impact(Some(&profile("technology", "small")));
    assert!(startup.contains("**Small Business Specific Benefits:**"));
    assert!(small.contains("**Small Business Specific Benefits:**"));
}

#[test]
fn system_prompt_without_profile_embeds_the_full_bill() {
    let prompt = build_system_prompt(None, AnalysisMode::Quick);
    assert!(prompt.contains("COMPLETE H.R. 1 BILL CONTENT:"));
    assert!(prompt.contains(bill::BILL_TEXT));
    assert!(!prompt.contains("BUSINESS CONTEXT:"));
}

#[test]
fn system_prompt_with_profile_embeds_context_retrieval_and_narrative() {
    let prompt = build_system_prompt(Some(&profile("finance", "small")), AnalysisMode::Quick);

    assert!(prompt.contains("BUSINESS CONTEXT:"));
    assert!(prompt.contains("- Company: Meridian Capital"));
    assert!(prompt.contains("- Size: small (11-50 employees)"));
    assert!(prompt.contains("RETRIEVED RELEVANT BILL SECTIONS FOR THIS BUSINESS:"));
    assert!(prompt.contains("2. Banking & Capital Markets (Title III)"));
    assert!(prompt.contains("**Financial Services Impact:**"));
    assert!(prompt.contains("ANALYSIS INSTRUCTIONS:"));
    assert!(prompt.contains("RESPONSE FORMAT:"));
    // The filtered path must not drag the whole bill along.
    assert!(!prompt.contains("7. Defense & Security Contracting (Title II)"));
}

#[test]
fn depth_directive_follows_the_analysis_mode() {
    let quick = build_system_prompt(None, AnalysisMode::Quick);
    let detailed = build_system_prompt(None, AnalysisMode::Detailed);
    assert!(quick.contains("ANALYSIS DEPTH: Provide focused, concise analysis"));
    assert!(detailed.contains("ANALYSIS DEPTH: Provide comprehensive, in-depth analysis"));
}

#[tokio::test]
async fn detailed_budget_exceeds_quick_budget() {
    setup_tracing();

    let mock_ai_provider = MockAiProvider::new(vec!["ok"]);
    let call_history = mock_ai_provider.call_history.clone();
    let client = ChatClientBuilder::new()
        .ai_provider(Box::new(mock_ai_provider))
        .build()
        .unwrap();

    for mode in [AnalysisMode::Quick, AnalysisMode::Detailed] {
        let options = AnalysisOptions {
            messages: vec![ChatMessage {
                role: MessageRole::User,
                content: "What changes for us?".to_string(),
            }],
            business_overview: Some(profile("finance", "enterprise")),
            analysis_mode: mode,
        };
        client
            .stream_analysis(options)
            .await
            .expect("mock stream should start");
    }

    let history = call_history.read().unwrap();
    assert_eq!(history.len(), 2, "expected one call per mode");
    let (_, _, quick_params) = &history[0];
    let (_, _, detailed_params) = &history[1];
    assert!(detailed_params.max_tokens > quick_params.max_tokens);
    assert_eq!(quick_params.temperature, ANALYSIS_TEMPERATURE);
    assert_eq!(detailed_params.temperature, ANALYSIS_TEMPERATURE);
}

#[tokio::test]
async fn stream_and_history_are_relayed_unmodified() {
    setup_tracing();

    let mock_ai_provider = MockAiProvider::new(vec!["The bill ", "extends ", "§179 expensing."]);
    let call_history = mock_ai_provider.call_history.clone();
    let client = ChatClientBuilder::new()
        .ai_provider(Box::new(mock_ai_provider))
        .build()
        .unwrap();

    let messages = vec![
        ChatMessage {
            role: MessageRole::User,
            content: "How does the bill affect my business?".to_string(),
        },
        ChatMessage {
            role: MessageRole::Assistant,
            content: "It depends on your sector.".to_string(),
        },
        ChatMessage {
            role: MessageRole::User,
            content: "We build industrial robots.".to_string(),
        },
    ];
    let options = AnalysisOptions {
        messages: messages.clone(),
        business_overview: None,
        analysis_mode: AnalysisMode::Quick,
    };

    let stream = client
        .stream_analysis(options)
        .await
        .expect("mock stream should start");
    let tokens: Vec<String> = stream
        .map(|token| token.expect("mock tokens never fail"))
        .collect()
        .await;

    assert_eq!(tokens.join(""), "The bill extends §179 expensing.");

    let history = call_history.read().unwrap();
    let (system_prompt, forwarded, _) = &history[0];
    assert_eq!(forwarded, &messages);
    assert!(system_prompt.contains("COMPLETE H.R. 1 BILL CONTENT:"));
}

#[test]
fn builder_without_provider_fails() {
    let err = ChatClientBuilder::new().build().unwrap_err();
    assert!(matches!(err, PromptError::MissingAiProvider));
}
