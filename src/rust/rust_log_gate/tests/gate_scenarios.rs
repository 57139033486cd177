// *******************************************************************************
// Copyright (c) 2026 Contributors to the Eclipse Foundation
//
// See the NOTICE file(s) distributed with this work for additional
// information regarding copyright ownership.
//
// This program and the accompanying materials are made available under the
// terms of the Apache License Version 2.0 which is available at
// <https://www.apache.org/licenses/LICENSE-2.0>
//
// SPDX-License-Identifier: Apache-2.0
// *******************************************************************************
//! End-to-end gate scenarios over the public API.

use rust_log_gate::prelude::*;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Writer sharing its buffer with the test.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn terminal() -> (Arc<TerminalConsole>, SharedBuffer, SharedBuffer) {
    let stdout = SharedBuffer::default();
    let stderr = SharedBuffer::default();
    let console = TerminalConsole::with_writers(Box::new(stdout.clone()), Box::new(stderr.clone()));
    (Arc::new(console), stdout, stderr)
}

#[test]
fn log_receives_exact_arguments() {
    let mock = MockConsole::default();
    let gate = GateBuilder::new()
        .enabled(true)
        .console(Arc::new(mock.clone()))
        .build()
        .unwrap();

    gate.log(&console_args!["hello", 42]).unwrap();

    assert_eq!(
        mock.calls(),
        vec![ConsoleCall::Log(vec![
            ConsoleValue::String("hello".to_string()),
            ConsoleValue::Number(42.0),
        ])]
    );
}

#[test]
fn disabled_error_is_silent() {
    let (console, stdout, stderr) = terminal();
    let gate = Gate::new(console);

    let result = gate.error(&console_args!["boom"]);

    assert!(result.is_ok());
    assert_eq!(stdout.text(), "");
    assert_eq!(stderr.text(), "");
}

#[test]
fn profile_without_capability_is_noop() {
    let mock = MockConsole::default();
    let gate = GateBuilder::new()
        .enabled(true)
        .console(Arc::new(mock.clone()))
        .build()
        .unwrap();

    assert!(gate.profile(Some("p1")).is_ok());
    assert!(mock.calls().is_empty());
}

#[test]
fn group_then_group_end_forwarded_in_order() {
    let mock = MockConsole::default();
    let gate = GateBuilder::new()
        .enabled(true)
        .console(Arc::new(mock.clone()))
        .build()
        .unwrap();

    gate.group(Some("section")).unwrap();
    gate.group_end().unwrap();

    assert_eq!(
        mock.calls(),
        vec![
            ConsoleCall::Group(Some("section".to_string())),
            ConsoleCall::GroupEnd,
        ]
    );
}

#[test]
fn enabled_gate_matches_direct_console_output() {
    let (direct, direct_stdout, direct_stderr) = terminal();
    let (gated, gated_stdout, gated_stderr) = terminal();
    let gate = GateBuilder::new().enabled(true).console(gated).build().unwrap();

    let data = console_args!["value", 1.5, true, ()];
    let rows = ConsoleValue::parse_json(r#"[{"a": 1}, {"a": 2, "b": "x"}]"#).unwrap();

    direct.log(&data).unwrap();
    direct.warn(&data).unwrap();
    direct.group(Some("g")).unwrap();
    direct.count(Some("n")).unwrap();
    direct.table(&rows, None).unwrap();
    direct.group_end().unwrap();
    direct.assert(false, &data).unwrap();
    direct.count_reset(Some("missing")).unwrap();

    gate.log(&data).unwrap();
    gate.warn(&data).unwrap();
    gate.group(Some("g")).unwrap();
    gate.count(Some("n")).unwrap();
    gate.table(&rows, None).unwrap();
    gate.group_end().unwrap();
    gate.assert(false, &data).unwrap();
    gate.count_reset(Some("missing")).unwrap();

    assert_eq!(gated_stdout.text(), direct_stdout.text());
    assert_eq!(gated_stderr.text(), direct_stderr.text());
    assert!(!gated_stdout.text().is_empty());
}

#[test]
fn toggle_suppresses_later_calls() {
    let (console, stdout, _stderr) = terminal();
    let gate = GateBuilder::new().enabled(true).console(console).build().unwrap();

    gate.log(&console_args!["first"]).unwrap();
    gate.set_enabled(false);
    gate.log(&console_args!["second"]).unwrap();

    assert_eq!(stdout.text(), "first\n");
}

#[test]
fn capability_present_is_forwarded() {
    let mock = MockConsole::new(
        vec![Capability::Profile, Capability::ProfileEnd, Capability::TimeStamp],
        false,
    );
    let gate = GateBuilder::new()
        .enabled(true)
        .console(Arc::new(mock.clone()))
        .build()
        .unwrap();

    gate.profile(Some("p1")).unwrap();
    gate.time_stamp(None).unwrap();
    gate.profile_end(None).unwrap();

    assert_eq!(
        mock.calls(),
        vec![
            ConsoleCall::Profile(Some("p1".to_string())),
            ConsoleCall::TimeStamp(None),
            ConsoleCall::ProfileEnd(None),
        ]
    );
}

#[test]
fn console_error_reaches_caller() {
    let gate = GateBuilder::new()
        .enabled(true)
        .console(Arc::new(MockConsole::new(vec![], true)))
        .build()
        .unwrap();

    let result = gate.warn(&console_args!["lost"]);
    assert!(result.is_err_and(|e| e == ErrorCode::UnmappedError));
}
