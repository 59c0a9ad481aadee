//! Usage error specs

use crate::prelude::*;

#[test]
fn missing_command_is_a_usage_error() {
    jw().misused().stderr_has("Usage:");
}

#[test]
fn watch_requires_a_job_id() {
    jw().args(&["watch"]).misused().stderr_has("<JOB_ID>");
}

#[test]
fn unknown_command_is_rejected() {
    jw().args(&["follow", "job-1"])
        .misused()
        .stderr_has("unrecognized subcommand 'follow'");
}

#[test]
fn unknown_output_format_is_rejected() {
    jw().args(&["--output", "yaml", "status", "job-1"])
        .misused()
        .stderr_has("invalid value 'yaml'");
}
