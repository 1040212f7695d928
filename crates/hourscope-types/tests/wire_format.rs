use hourscope_types::{AnalysisResult, ErrorBody, PreviousAnalysis, ThemePreference, Trend};

const ANALYSIS_JSON: &str = r#"{
    "subreddit": "rust",
    "timezone": "Europe/Berlin",
    "hourly_post_counts": [1,0,0,0,0,0,2,3,4,5,6,7,9,9,8,7,6,5,4,3,2,1,1,0],
    "optimal_hours": [12, 13],
    "max_post_count": 9,
    "previous_analysis": { "max_post_count": 7 }
}"#;

#[test]
fn test_analysis_result_from_endpoint_payload() {
    let result: AnalysisResult = serde_json::from_str(ANALYSIS_JSON).unwrap();

    assert_eq!(result.subreddit, "rust");
    assert_eq!(result.timezone, "Europe/Berlin");
    assert_eq!(result.hourly_post_counts.len(), 24);
    assert_eq!(result.optimal_hours, vec![12, 13]);
    assert_eq!(result.max_post_count, 9);
    assert_eq!(
        result.previous_analysis,
        Some(PreviousAnalysis { max_post_count: 7 })
    );
}

#[test]
fn test_previous_analysis_is_optional() {
    let json = r#"{
        "subreddit": "rust",
        "timezone": "UTC",
        "hourly_post_counts": [0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
        "optimal_hours": [23],
        "max_post_count": 1
    }"#;
    let result: AnalysisResult = serde_json::from_str(json).unwrap();
    assert!(result.previous_analysis.is_none());

    let back = serde_json::to_value(&result).unwrap();
    assert!(back.get("previous_analysis").is_none());
}

#[test]
fn test_error_body_shape() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"Subreddit not found."}"#).unwrap();
    assert_eq!(body.error, "Subreddit not found.");
}

#[test]
fn test_trend_serializes_lowercase() {
    insta::assert_snapshot!(serde_json::to_string(&Trend::Increasing).unwrap(), @r#""increasing""#);
    assert_eq!(Trend::default(), Trend::Stable);
    assert_eq!(Trend::Decreasing.title(), "Decreasing");
}

#[test]
fn test_theme_preference_parsing() {
    assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
    assert_eq!(" Light ".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
    assert!("sepia".parse::<ThemePreference>().is_err());
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
    assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
}
