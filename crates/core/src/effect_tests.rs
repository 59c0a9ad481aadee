// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    open_stream = { Effect::OpenStream { job_id: "j".into(), token: SessionToken(1) }, "open_stream" },
    open_poll = { Effect::OpenPoll { job_id: "j".into(), token: SessionToken(1), interval: Duration::from_secs(2) }, "open_poll" },
    close = { Effect::CloseTransport { kind: TransportKind::Poll, token: SessionToken(1) }, "close_transport" },
    arm = { Effect::ArmTimeout { token: SessionToken(1), duration: Duration::from_secs(300) }, "arm_timeout" },
    disarm = { Effect::DisarmTimeout { token: SessionToken(1) }, "disarm_timeout" },
    publish = { Effect::Publish, "publish" },
    complete = { Effect::NotifyComplete { job_id: "j".into() }, "notify_complete" },
    error = { Effect::NotifyError { job_id: "j".into(), kind: FailureKind::TimedOut, message: "SSE timeout".into() }, "notify_error" },
    abandon = { Effect::Abandon { job_id: "j".into() }, "abandon" },
)]
fn effect_names(effect: Effect, expected: &str) {
    assert_eq!(effect.name(), expected);
}

#[test]
fn open_poll_fields_include_interval() {
    let effect = Effect::OpenPoll {
        job_id: "job-456".to_string(),
        token: SessionToken(3),
        interval: Duration::from_millis(2000),
    };

    assert_eq!(
        effect.fields(),
        vec![
            ("job_id", "job-456".to_string()),
            ("token", "#3".to_string()),
            ("interval_ms", "2000".to_string()),
        ]
    );
}

#[test]
fn notify_error_fields_carry_kind_and_message() {
    let effect = Effect::NotifyError {
        job_id: "job-1".to_string(),
        kind: FailureKind::Cancelled,
        message: "Processing cancelled".to_string(),
    };

    let fields = effect.fields();
    assert!(fields.contains(&("kind", "cancelled".to_string())));
    assert!(fields.contains(&("message", "Processing cancelled".to_string())));
}

#[test]
fn publish_has_no_fields() {
    assert!(Effect::Publish.fields().is_empty());
}

#[test]
fn session_tokens_order_by_value() {
    assert!(SessionToken(1) < SessionToken(2));
    assert_eq!(SessionToken(7).to_string(), "#7");
}
