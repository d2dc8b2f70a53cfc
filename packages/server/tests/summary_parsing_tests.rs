//! Tests for model-response JSON extraction.

use server_core::domains::insights::extract_json_payload;
use serde_json::json;

const PAYLOAD: &str = r#"{
  "main_issue": "Banjir Jakarta Selatan",
  "problem": "Luapan kali merendam permukiman",
  "suggestion": "Percepat normalisasi kali",
  "urgency_score": "90"
}"#;

#[test]
fn fenced_and_unfenced_responses_parse_identically() {
    let fenced = format!("```json\n{PAYLOAD}\n```");
    let bare = format!("Here is the summary:\n{PAYLOAD}\nLet me know if you need more.");

    let from_fenced = extract_json_payload(&fenced).unwrap();
    let from_bare = extract_json_payload(&bare).unwrap();
    assert_eq!(from_fenced, from_bare);
    assert_eq!(from_fenced["main_issue"], json!("Banjir Jakarta Selatan"));
}

#[test]
fn fence_without_language_tag_parses() {
    let fenced = format!("```\n{PAYLOAD}\n```");
    assert!(extract_json_payload(&fenced).is_ok());
}

#[test]
fn unparseable_response_surfaces_the_raw_text() {
    let raw = "The model refused to answer in JSON.";
    let err = extract_json_payload(raw).unwrap_err();
    assert_eq!(err.raw, raw);
}
