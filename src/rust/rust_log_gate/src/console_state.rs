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

use crate::console_api::DEFAULT_LABEL;
use crate::console_value::ConsoleValue;
use crate::json_format::format_args_line;
use core::time::Duration;
use std::collections::HashMap;
use std::time::Instant;

/// Indentation added per group level.
const GROUP_INDENT: &str = "  ";

/// Counters, timers and group nesting shared by concrete consoles.
///
/// Operations return the line to print, or `Err` with a warning line
/// when the label is in an unexpected state.
#[derive(Debug, Default)]
pub(crate) struct ConsoleState {
    counters: HashMap<String, u64>,
    timers: HashMap<String, Instant>,
    group_depth: usize,
}

/// Render elapsed time: milliseconds below one second, seconds above.
pub(crate) fn format_duration(elapsed: Duration) -> String {
    let ms = elapsed.as_secs_f64() * 1000.0;
    if ms < 1000.0 {
        format!("{ms:.3}ms")
    } else {
        format!("{:.3}s", ms / 1000.0)
    }
}

impl ConsoleState {
    pub(crate) fn count(&mut self, label: Option<&str>) -> String {
        let label = label.unwrap_or(DEFAULT_LABEL);
        let counter = self.counters.entry(label.to_string()).or_insert(0);
        *counter += 1;
        format!("{label}: {counter}")
    }

    pub(crate) fn count_reset(&mut self, label: Option<&str>) -> Result<(), String> {
        let label = label.unwrap_or(DEFAULT_LABEL);
        match self.counters.get_mut(label) {
            Some(counter) => {
                *counter = 0;
                Ok(())
            }
            None => Err(format!("Count for '{label}' does not exist")),
        }
    }

    pub(crate) fn time(&mut self, label: Option<&str>) -> Result<(), String> {
        let label = label.unwrap_or(DEFAULT_LABEL);
        if self.timers.contains_key(label) {
            return Err(format!("Label '{label}' already exists for console.time()"));
        }
        self.timers.insert(label.to_string(), Instant::now());
        Ok(())
    }

    pub(crate) fn time_log(
        &self,
        label: Option<&str>,
        data: &[ConsoleValue],
    ) -> Result<String, String> {
        let label = label.unwrap_or(DEFAULT_LABEL);
        match self.timers.get(label) {
            Some(start) => {
                let mut line = format!("{label}: {}", format_duration(start.elapsed()));
                if !data.is_empty() {
                    line.push(' ');
                    line.push_str(&format_args_line(data));
                }
                Ok(line)
            }
            None => Err(format!("No such label '{label}' for console.timeLog()")),
        }
    }

    pub(crate) fn time_end(&mut self, label: Option<&str>) -> Result<String, String> {
        let label = label.unwrap_or(DEFAULT_LABEL);
        match self.timers.remove(label) {
            Some(start) => Ok(format!("{label}: {}", format_duration(start.elapsed()))),
            None => Err(format!("No such label '{label}' for console.timeEnd()")),
        }
    }

    pub(crate) fn group_start(&mut self) {
        self.group_depth += 1;
    }

    pub(crate) fn group_end(&mut self) {
        self.group_depth = self.group_depth.saturating_sub(1);
    }

    pub(crate) fn group_depth(&self) -> usize {
        self.group_depth
    }

    /// Prefix every line of `text` with current group indentation.
    pub(crate) fn indent(&self, text: &str) -> String {
        if self.group_depth() == 0 {
            return text.to_string();
        }
        let prefix = GROUP_INDENT.repeat(self.group_depth());
        text.split('\n')
            .map(|line| format!("{prefix}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod console_state_tests {
    use crate::console_state::{format_duration, ConsoleState};
    use crate::console_value::ConsoleValue;
    use core::time::Duration;

    #[test]
    fn test_count_default_label() {
        let mut state = ConsoleState::default();
        assert_eq!(state.count(None), "default: 1");
        assert_eq!(state.count(None), "default: 2");
        assert_eq!(state.count(Some("other")), "other: 1");
    }

    #[test]
    fn test_count_reset() {
        let mut state = ConsoleState::default();
        state.count(Some("x"));
        state.count(Some("x"));
        assert!(state.count_reset(Some("x")).is_ok());
        assert_eq!(state.count(Some("x")), "x: 1");
    }

    #[test]
    fn test_count_reset_missing() {
        let mut state = ConsoleState::default();
        assert_eq!(
            state.count_reset(Some("nope")),
            Err("Count for 'nope' does not exist".to_string())
        );
    }

    #[test]
    fn test_time_twice() {
        let mut state = ConsoleState::default();
        assert!(state.time(Some("t")).is_ok());
        assert_eq!(
            state.time(Some("t")),
            Err("Label 't' already exists for console.time()".to_string())
        );
    }

    #[test]
    fn test_time_log_and_end() {
        let mut state = ConsoleState::default();
        state.time(None).unwrap();

        let line = state
            .time_log(None, &[ConsoleValue::from("step"), ConsoleValue::from(1)])
            .unwrap();
        assert!(line.starts_with("default: "));
        assert!(line.ends_with("ms step 1"));

        let line = state.time_end(None).unwrap();
        assert!(line.starts_with("default: "));
        assert!(line.ends_with("ms"));

        assert_eq!(
            state.time_end(None),
            Err("No such label 'default' for console.timeEnd()".to_string())
        );
    }

    #[test]
    fn test_time_log_missing() {
        let state = ConsoleState::default();
        assert_eq!(
            state.time_log(Some("t"), &[]),
            Err("No such label 't' for console.timeLog()".to_string())
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.500ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.500s");
    }

    #[test]
    fn test_group_indent() {
        let mut state = ConsoleState::default();
        assert_eq!(state.indent("a"), "a");

        state.group_start();
        state.group_start();
        assert_eq!(state.group_depth(), 2);
        assert_eq!(state.indent("a\nb"), "    a\n    b");

        state.group_end();
        state.group_end();
        state.group_end();
        assert_eq!(state.group_depth(), 0);
    }
}
