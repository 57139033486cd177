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

use crate::console_api::{Console, DirOptions};
use crate::console_state::ConsoleState;
use crate::console_value::ConsoleValue;
use crate::error_code::ErrorCode;
use crate::json_format::{format_args_line, render_table, DEFAULT_INSPECT_DEPTH};
use std::backtrace::Backtrace;
use std::io::{IsTerminal, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Cursor to top-left, then clear screen below cursor.
const CLEAR_SEQUENCE: &str = "\x1b[1;1H\x1b[0J";

/// Output stream type.
pub type ConsoleWriter = Box<dyn Write + Send>;

/// Terminal console inner state.
struct TerminalInner {
    stdout: ConsoleWriter,
    stderr: ConsoleWriter,
    state: ConsoleState,
    clear_screen: bool,
}

impl From<PoisonError<MutexGuard<'_, TerminalInner>>> for ErrorCode {
    fn from(_cause: PoisonError<MutexGuard<'_, TerminalInner>>) -> Self {
        ErrorCode::MutexLockFailed
    }
}

/// Which stream a line goes to.
#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl TerminalInner {
    fn write_line(&mut self, stream: Stream, text: &str) -> Result<(), ErrorCode> {
        let line = self.state.indent(text);
        let writer = match stream {
            Stream::Stdout => &mut self.stdout,
            Stream::Stderr => &mut self.stderr,
        };
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}

/// Console writing to process stdout and stderr, or to provided writers.
pub struct TerminalConsole {
    inner: Mutex<TerminalInner>,
}

impl TerminalConsole {
    /// Console over process stdio.
    /// Screen clearing is enabled only if stdout is a terminal.
    pub fn stdio() -> Self {
        let clear_screen = std::io::stdout().is_terminal();
        Self::with_writers(Box::new(std::io::stdout()), Box::new(std::io::stderr()))
            .clear_screen(clear_screen)
    }

    /// Console over provided writers.
    /// Screen clearing is disabled.
    pub fn with_writers(stdout: ConsoleWriter, stderr: ConsoleWriter) -> Self {
        Self {
            inner: Mutex::new(TerminalInner {
                stdout,
                stderr,
                state: ConsoleState::default(),
                clear_screen: false,
            }),
        }
    }

    /// Set whether `clear` emits the clear-screen sequence.
    pub fn clear_screen(self, enabled: bool) -> Self {
        let mut inner = self.inner.into_inner().unwrap_or_else(PoisonError::into_inner);
        inner.clear_screen = enabled;
        Self {
            inner: Mutex::new(inner),
        }
    }

    fn write_line(&self, stream: Stream, text: &str) -> Result<(), ErrorCode> {
        let mut inner = self.inner.lock()?;
        inner.write_line(stream, text)
    }

    fn start_group(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        let mut inner = self.inner.lock()?;
        if let Some(label) = label {
            inner.write_line(Stream::Stdout, label)?;
        }
        inner.state.group_start();
        Ok(())
    }
}

impl Console for TerminalConsole {
    fn assert(&self, condition: bool, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        if condition {
            return Ok(());
        }
        let line = if data.is_empty() {
            "Assertion failed".to_string()
        } else {
            format!("Assertion failed: {}", format_args_line(data))
        };
        self.write_line(Stream::Stderr, &line)
    }

    fn clear(&self) -> Result<(), ErrorCode> {
        let mut inner = self.inner.lock()?;
        if inner.clear_screen {
            inner.stdout.write_all(CLEAR_SEQUENCE.as_bytes())?;
            inner.stdout.flush()?;
        }
        Ok(())
    }

    fn count(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        let mut inner = self.inner.lock()?;
        let line = inner.state.count(label);
        inner.write_line(Stream::Stdout, &line)
    }

    fn count_reset(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        let mut inner = self.inner.lock()?;
        match inner.state.count_reset(label) {
            Ok(()) => Ok(()),
            Err(warning) => inner.write_line(Stream::Stderr, &warning),
        }
    }

    fn debug(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.write_line(Stream::Stdout, &format_args_line(data))
    }

    fn dir(&self, item: &ConsoleValue, options: Option<&DirOptions>) -> Result<(), ErrorCode> {
        let depth = match options {
            Some(options) => options.depth,
            None => Some(DEFAULT_INSPECT_DEPTH),
        };
        self.write_line(Stream::Stdout, &item.inspect(depth))
    }

    fn dirxml(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.write_line(Stream::Stdout, &format_args_line(data))
    }

    fn error(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.write_line(Stream::Stderr, &format_args_line(data))
    }

    fn group(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.start_group(label)
    }

    fn group_collapsed(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        // Terminals have no collapsed state.
        self.start_group(label)
    }

    fn group_end(&self) -> Result<(), ErrorCode> {
        self.inner.lock()?.state.group_end();
        Ok(())
    }

    fn info(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.write_line(Stream::Stdout, &format_args_line(data))
    }

    fn log(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.write_line(Stream::Stdout, &format_args_line(data))
    }

    fn table(
        &self,
        tabular_data: &ConsoleValue,
        columns: Option<&[&str]>,
    ) -> Result<(), ErrorCode> {
        match render_table(tabular_data, columns) {
            Some(table) => self.write_line(Stream::Stdout, &table),
            None => self.log(core::slice::from_ref(tabular_data)),
        }
    }

    fn time(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        let mut inner = self.inner.lock()?;
        match inner.state.time(label) {
            Ok(()) => Ok(()),
            Err(warning) => inner.write_line(Stream::Stderr, &warning),
        }
    }

    fn time_end(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        let mut inner = self.inner.lock()?;
        match inner.state.time_end(label) {
            Ok(line) => inner.write_line(Stream::Stdout, &line),
            Err(warning) => inner.write_line(Stream::Stderr, &warning),
        }
    }

    fn time_log(&self, label: Option<&str>, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        let mut inner = self.inner.lock()?;
        match inner.state.time_log(label, data) {
            Ok(line) => inner.write_line(Stream::Stdout, &line),
            Err(warning) => inner.write_line(Stream::Stderr, &warning),
        }
    }

    fn trace(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        let mut line = "Trace".to_string();
        if !data.is_empty() {
            line.push_str(": ");
            line.push_str(&format_args_line(data));
        }
        let backtrace = Backtrace::force_capture().to_string();
        let backtrace = backtrace.trim_end();
        if !backtrace.is_empty() {
            line.push('\n');
            line.push_str(backtrace);
        }
        self.write_line(Stream::Stderr, &line)
    }

    fn warn(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.write_line(Stream::Stderr, &format_args_line(data))
    }
}
