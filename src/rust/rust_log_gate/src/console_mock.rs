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

use crate::console_api::{Capability, Console, DirOptions};
use crate::console_value::ConsoleValue;
use crate::error_code::ErrorCode;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Single call received by `MockConsole`, with owned arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum ConsoleCall {
    Assert(bool, Vec<ConsoleValue>),
    Clear,
    Count(Option<String>),
    CountReset(Option<String>),
    Debug(Vec<ConsoleValue>),
    Dir(ConsoleValue, Option<DirOptions>),
    Dirxml(Vec<ConsoleValue>),
    Error(Vec<ConsoleValue>),
    Group(Option<String>),
    GroupCollapsed(Option<String>),
    GroupEnd,
    Info(Vec<ConsoleValue>),
    Log(Vec<ConsoleValue>),
    Profile(Option<String>),
    ProfileEnd(Option<String>),
    Table(ConsoleValue, Option<Vec<String>>),
    Time(Option<String>),
    TimeEnd(Option<String>),
    TimeLog(Option<String>, Vec<ConsoleValue>),
    TimeStamp(Option<String>),
    Trace(Vec<ConsoleValue>),
    Warn(Vec<ConsoleValue>),
}

impl From<PoisonError<MutexGuard<'_, Vec<ConsoleCall>>>> for ErrorCode {
    fn from(_cause: PoisonError<MutexGuard<'_, Vec<ConsoleCall>>>) -> Self {
        ErrorCode::MutexLockFailed
    }
}

/// Console recording every call instead of producing output.
#[derive(Clone, Default)]
pub struct MockConsole {
    pub calls: Arc<Mutex<Vec<ConsoleCall>>>,
    pub capabilities: Vec<Capability>,
    pub fail: bool,
}

impl MockConsole {
    pub fn new(capabilities: Vec<Capability>, fail: bool) -> Self {
        MockConsole {
            calls: Arc::new(Mutex::new(Vec::new())),
            capabilities,
            fail,
        }
    }

    /// Snapshot of recorded calls.
    pub fn calls(&self) -> Vec<ConsoleCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: ConsoleCall) -> Result<(), ErrorCode> {
        if self.fail {
            return Err(ErrorCode::UnmappedError);
        }
        self.calls.lock()?.push(call);
        Ok(())
    }
}

fn owned(label: Option<&str>) -> Option<String> {
    label.map(str::to_string)
}

impl Console for MockConsole {
    fn assert(&self, condition: bool, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Assert(condition, data.to_vec()))
    }

    fn clear(&self) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Clear)
    }

    fn count(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Count(owned(label)))
    }

    fn count_reset(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::CountReset(owned(label)))
    }

    fn debug(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Debug(data.to_vec()))
    }

    fn dir(&self, item: &ConsoleValue, options: Option<&DirOptions>) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Dir(item.clone(), options.cloned()))
    }

    fn dirxml(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Dirxml(data.to_vec()))
    }

    fn error(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Error(data.to_vec()))
    }

    fn group(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Group(owned(label)))
    }

    fn group_collapsed(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::GroupCollapsed(owned(label)))
    }

    fn group_end(&self) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::GroupEnd)
    }

    fn info(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Info(data.to_vec()))
    }

    fn log(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Log(data.to_vec()))
    }

    fn table(
        &self,
        tabular_data: &ConsoleValue,
        columns: Option<&[&str]>,
    ) -> Result<(), ErrorCode> {
        let columns = columns.map(|c| c.iter().map(|s| s.to_string()).collect());
        self.record(ConsoleCall::Table(tabular_data.clone(), columns))
    }

    fn time(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Time(owned(label)))
    }

    fn time_end(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::TimeEnd(owned(label)))
    }

    fn time_log(&self, label: Option<&str>, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::TimeLog(owned(label), data.to_vec()))
    }

    fn trace(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Trace(data.to_vec()))
    }

    fn warn(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Warn(data.to_vec()))
    }

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    fn profile(&self, name: Option<&str>) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::Profile(owned(name)))
    }

    fn profile_end(&self, name: Option<&str>) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::ProfileEnd(owned(name)))
    }

    fn time_stamp(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.record(ConsoleCall::TimeStamp(owned(label)))
    }
}
