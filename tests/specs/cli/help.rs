//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    jw().args(&["--help"])
        .passes()
        .stdout_has("watch")
        .stdout_has("status");
}

#[test]
fn help_lists_connection_flags() {
    jw().args(&["--help"])
        .passes()
        .stdout_has("--api-url")
        .stdout_has("--token")
        .stdout_has("--timeout")
        .stdout_has("--poll-interval");
}

#[test]
fn watch_help_describes_quiet() {
    jw().args(&["watch", "--help"])
        .passes()
        .stdout_has("--quiet")
        .stdout_has("<JOB_ID>");
}

#[test]
fn version_prints_name() {
    jw().args(&["--version"]).passes().stdout_has("jw ");
}
