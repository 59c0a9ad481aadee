// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;
use yare::parameterized;

fn decode(raw: &str) -> StatusUpdate {
    StatusUpdate::decode(raw).unwrap()
}

#[test]
fn decode_reads_all_known_fields() {
    let update = decode(
        r#"{"type":"ping","status":"processing","progress":25,"message":"Processing transcript...","error":null}"#,
    );

    assert_eq!(update.kind.as_deref(), Some("ping"));
    assert_eq!(update.status.as_deref(), Some("processing"));
    assert_eq!(update.progress, Some(25.0));
    assert_eq!(update.message.as_deref(), Some("Processing transcript..."));
    assert_eq!(update.error, None);
    assert!(update.extra.is_empty());
}

#[test]
fn decode_keeps_unknown_fields() {
    let update = decode(r#"{"status":"processing","job_id":"job-1","stage":"modeling"}"#);

    assert_eq!(update.extra.get("job_id"), Some(&json!("job-1")));
    assert_eq!(update.extra.get("stage"), Some(&json!("modeling")));
}

#[parameterized(
    empty = { "" },
    whitespace = { "  \n" },
    not_json = { "data: nope" },
    array = { "[1, 2, 3]" },
    wrong_type = { r#"{"progress": "lots"}"# },
)]
fn decode_rejects_malformed_payloads(raw: &str) {
    assert!(StatusUpdate::decode(raw).is_err());
}

#[test]
fn bare_ping_is_ignored() {
    assert_eq!(decode(r#"{"type":"ping"}"#).interpret(), Directive::Ignore);
}

#[test]
fn ping_with_message_only_applies_message() {
    let update = decode(r#"{"type":"ping","message":"Still analyzing...","ping_count":3}"#);

    assert_eq!(
        update.interpret(),
        Directive::Progress {
            progress: None,
            message: Some("Still analyzing...".to_string()),
        }
    );
}

#[test]
fn ping_with_progress_applies_progress() {
    let update = decode(r#"{"type":"ping","status":"processing","progress":34.9,"message":"Modeling..."}"#);

    assert_eq!(
        update.interpret(),
        Directive::Progress {
            progress: Some(35),
            message: Some("Modeling...".to_string()),
        }
    );
}

#[test]
fn progress_only_leaves_message_absent() {
    assert_eq!(
        decode(r#"{"progress":40}"#).interpret(),
        Directive::Progress {
            progress: Some(40),
            message: None,
        }
    );
}

#[test]
fn message_only_leaves_progress_absent() {
    assert_eq!(
        decode(r#"{"message":"Queued"}"#).interpret(),
        Directive::Progress {
            progress: None,
            message: Some("Queued".to_string()),
        }
    );
}

#[test]
fn update_without_payload_is_ignored() {
    assert_eq!(
        decode(r#"{"status":"processing"}"#).interpret(),
        Directive::Ignore
    );
}

#[test]
fn completed_status_succeeds_with_full_payload() {
    let update = decode(
        r#"{"status":"completed","progress":100,"message":"Processing completed successfully!","report_id":7}"#,
    );

    match update.interpret() {
        Directive::Succeed { message, result } => {
            assert_eq!(
                message.as_deref(),
                Some("Processing completed successfully!")
            );
            assert_eq!(result["status"], json!("completed"));
            assert_eq!(result["report_id"], json!(7));
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn failed_status_without_error_uses_default_message() {
    assert_eq!(
        decode(r#"{"status":"failed"}"#).interpret(),
        Directive::Fail {
            error: DEFAULT_FAILURE.to_string(),
        }
    );
}

#[test]
fn error_field_fails_regardless_of_status() {
    assert_eq!(
        decode(r#"{"status":"failed","error":"Transcript analysis failed"}"#).interpret(),
        Directive::Fail {
            error: "Transcript analysis failed".to_string(),
        }
    );
    assert_eq!(
        decode(r#"{"error":"Job not found"}"#).interpret(),
        Directive::Fail {
            error: "Job not found".to_string(),
        }
    );
}

#[test]
fn empty_error_string_is_not_a_failure() {
    assert_eq!(
        decode(r#"{"error":"","progress":10}"#).interpret(),
        Directive::Progress {
            progress: Some(10),
            message: None,
        }
    );
}

#[parameterized(
    zero = { 0.0, 0 },
    fraction_down = { 12.4, 12 },
    fraction_up = { 59.5, 60 },
    full = { 100.0, 100 },
    above_range = { 150.0, 100 },
    below_range = { -5.0, 0 },
)]
fn progress_is_rounded_and_clamped(raw: f64, expected: u8) {
    let update = StatusUpdate {
        progress: Some(raw),
        ..StatusUpdate::default()
    };
    assert_eq!(update.progress_percent(), Some(expected));
}
