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
use crate::log::{debug, trace};
use crate::terminal_console::TerminalConsole;
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Console gate.
///
/// Every operation checks the `enabled` flag and, if set, forwards its arguments
/// unchanged to the console. When disabled, operations do nothing and return `Ok(())`.
/// Console errors are returned as-is.
///
/// The flag is read without synchronization against in-flight calls.
/// A call racing with `set_enabled` may observe either value.
pub struct Gate {
    /// Forwarding enabled.
    enabled: AtomicBool,

    /// Console receiving forwarded calls.
    console: RwLock<Arc<dyn Console>>,
}

impl Default for Gate {
    /// Disabled gate over process stdio.
    fn default() -> Self {
        Self::new(Arc::new(TerminalConsole::stdio()))
    }
}

impl Gate {
    /// Create disabled gate over provided console.
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self::with_state(console, false)
    }

    pub(crate) fn with_state(console: Arc<dyn Console>, enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            console: RwLock::new(console),
        }
    }

    /// Check if forwarding is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Enable or disable forwarding.
    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::Relaxed);
        if previous != enabled {
            debug!("gate enabled: {previous} -> {enabled}");
        }
    }

    /// Current console.
    pub fn console(&self) -> Arc<dyn Console> {
        // Lock only guards the handle swap, poisoning cannot leave it inconsistent.
        self.console
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace console.
    /// Calls already in flight complete on the previous console.
    pub fn set_console(&self, console: Arc<dyn Console>) {
        *self
            .console
            .write()
            .unwrap_or_else(PoisonError::into_inner) = console;
        debug!("gate console replaced");
    }

    /// Forward to console if enabled.
    fn forward<F>(&self, call: F) -> Result<(), ErrorCode>
    where
        F: FnOnce(&dyn Console) -> Result<(), ErrorCode>,
    {
        if !self.is_enabled() {
            return Ok(());
        }
        let console = self.console();
        call(console.as_ref())
    }

    /// Forward to console if enabled and console provides `capability`.
    fn forward_optional<F>(&self, capability: Capability, call: F) -> Result<(), ErrorCode>
    where
        F: FnOnce(&dyn Console) -> Result<(), ErrorCode>,
    {
        if !self.is_enabled() {
            return Ok(());
        }
        let console = self.console();
        if !console.supports(capability) {
            trace!("console does not provide `{}`, skipped", capability.name());
            return Ok(());
        }
        call(console.as_ref())
    }

    /// Write error message if `condition` is false.
    pub fn assert(&self, condition: bool, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.forward(|console| console.assert(condition, data))
    }

    /// Clear console.
    pub fn clear(&self) -> Result<(), ErrorCode> {
        self.forward(|console| console.clear())
    }

    /// Log number of times called with `label`.
    pub fn count(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.forward(|console| console.count(label))
    }

    /// Reset counter of `label`.
    pub fn count_reset(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.forward(|console| console.count_reset(label))
    }

    pub fn debug(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.forward(|console| console.debug(data))
    }

    /// List properties of `item`.
    pub fn dir(&self, item: &ConsoleValue, options: Option<&DirOptions>) -> Result<(), ErrorCode> {
        self.forward(|console| console.dir(item, options))
    }

    pub fn dirxml(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.forward(|console| console.dirxml(data))
    }

    pub fn error(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.forward(|console| console.error(data))
    }

    /// Begin nested group, ended by `group_end`.
    pub fn group(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.forward(|console| console.group(label))
    }

    /// Begin nested group, collapsed in consoles supporting it.
    pub fn group_collapsed(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.forward(|console| console.group_collapsed(label))
    }

    /// Exit group created by `group` or `group_collapsed`.
    pub fn group_end(&self) -> Result<(), ErrorCode> {
        self.forward(|console| console.group_end())
    }

    pub fn info(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.forward(|console| console.info(data))
    }

    pub fn log(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.forward(|console| console.log(data))
    }

    /// Start profile recording.
    /// Non-standard, skipped if console does not provide it.
    pub fn profile(&self, name: Option<&str>) -> Result<(), ErrorCode> {
        self.forward_optional(Capability::Profile, |console| console.profile(name))
    }

    /// Stop profile recording, most recent one if `name` is not given.
    /// Non-standard, skipped if console does not provide it.
    pub fn profile_end(&self, name: Option<&str>) -> Result<(), ErrorCode> {
        self.forward_optional(Capability::ProfileEnd, |console| console.profile_end(name))
    }

    /// Display array or object as a table.
    pub fn table(
        &self,
        tabular_data: &ConsoleValue,
        columns: Option<&[&str]>,
    ) -> Result<(), ErrorCode> {
        self.forward(|console| console.table(tabular_data, columns))
    }

    /// Start timer.
    pub fn time(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.forward(|console| console.time(label))
    }

    /// Stop timer started by `time`.
    pub fn time_end(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.forward(|console| console.time_end(label))
    }

    /// Log elapsed time of timer started by `time`, followed by `data`.
    pub fn time_log(&self, label: Option<&str>, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.forward(|console| console.time_log(label, data))
    }

    /// Mark profiler timeline.
    /// Non-standard, skipped if console does not provide it.
    pub fn time_stamp(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.forward_optional(Capability::TimeStamp, |console| console.time_stamp(label))
    }

    /// Write stack trace.
    pub fn trace(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.forward(|console| console.trace(data))
    }

    pub fn warn(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.forward(|console| console.warn(data))
    }
}

#[cfg(test)]
mod gate_tests {
    use crate::console_api::{Capability, Console, DirOptions};
    use crate::console_args;
    use crate::console_mock::{ConsoleCall, MockConsole};
    use crate::console_value::ConsoleValue;
    use crate::error_code::ErrorCode;
    use crate::gate::Gate;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::Arc;

    fn gate_with_mock(capabilities: Vec<Capability>, enabled: bool) -> (Gate, MockConsole) {
        let mock = MockConsole::new(capabilities, false);
        let gate = Gate::new(Arc::new(mock.clone()));
        gate.set_enabled(enabled);
        (gate, mock)
    }

    /// Call every gate operation once.
    fn call_all(gate: &Gate) {
        let data = console_args!["x", 1];
        let item = ConsoleValue::from("item");
        gate.assert(false, &data).unwrap();
        gate.clear().unwrap();
        gate.count(Some("c")).unwrap();
        gate.count_reset(Some("c")).unwrap();
        gate.debug(&data).unwrap();
        gate.dir(&item, None).unwrap();
        gate.dirxml(&data).unwrap();
        gate.error(&data).unwrap();
        gate.group(Some("g")).unwrap();
        gate.group_collapsed(None).unwrap();
        gate.group_end().unwrap();
        gate.info(&data).unwrap();
        gate.log(&data).unwrap();
        gate.profile(Some("p")).unwrap();
        gate.profile_end(Some("p")).unwrap();
        gate.table(&item, Some(&["a"][..])).unwrap();
        gate.time(None).unwrap();
        gate.time_end(None).unwrap();
        gate.time_log(Some("t"), &data).unwrap();
        gate.time_stamp(Some("s")).unwrap();
        gate.trace(&data).unwrap();
        gate.warn(&data).unwrap();
    }

    #[test]
    fn test_new_is_disabled() {
        let gate = Gate::new(Arc::new(MockConsole::default()));
        assert!(!gate.is_enabled());
    }

    #[test]
    fn test_default_is_disabled() {
        assert!(!Gate::default().is_enabled());
    }

    #[test]
    fn test_disabled_forwards_nothing() {
        let all = vec![
            Capability::Profile,
            Capability::ProfileEnd,
            Capability::TimeStamp,
        ];
        let (gate, mock) = gate_with_mock(all, false);
        call_all(&gate);
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn test_enabled_forwards_everything() {
        let all = vec![
            Capability::Profile,
            Capability::ProfileEnd,
            Capability::TimeStamp,
        ];
        let (gate, mock) = gate_with_mock(all, true);
        call_all(&gate);

        let data = console_args!["x", 1];
        let item = ConsoleValue::from("item");
        assert_eq!(
            mock.calls(),
            vec![
                ConsoleCall::Assert(false, data.clone()),
                ConsoleCall::Clear,
                ConsoleCall::Count(Some("c".to_string())),
                ConsoleCall::CountReset(Some("c".to_string())),
                ConsoleCall::Debug(data.clone()),
                ConsoleCall::Dir(item.clone(), None),
                ConsoleCall::Dirxml(data.clone()),
                ConsoleCall::Error(data.clone()),
                ConsoleCall::Group(Some("g".to_string())),
                ConsoleCall::GroupCollapsed(None),
                ConsoleCall::GroupEnd,
                ConsoleCall::Info(data.clone()),
                ConsoleCall::Log(data.clone()),
                ConsoleCall::Profile(Some("p".to_string())),
                ConsoleCall::ProfileEnd(Some("p".to_string())),
                ConsoleCall::Table(item, Some(vec!["a".to_string()])),
                ConsoleCall::Time(None),
                ConsoleCall::TimeEnd(None),
                ConsoleCall::TimeLog(Some("t".to_string()), data.clone()),
                ConsoleCall::TimeStamp(Some("s".to_string())),
                ConsoleCall::Trace(data.clone()),
                ConsoleCall::Warn(data),
            ]
        );
    }

    #[test]
    fn test_optional_operations_skipped_without_capability() {
        let (gate, mock) = gate_with_mock(vec![], true);
        assert!(gate.profile(Some("p1")).is_ok());
        assert!(gate.profile_end(Some("p1")).is_ok());
        assert!(gate.time_stamp(None).is_ok());
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn test_optional_capabilities_checked_individually() {
        let (gate, mock) = gate_with_mock(vec![Capability::TimeStamp], true);
        gate.profile(None).unwrap();
        gate.time_stamp(Some("mark")).unwrap();
        assert_eq!(
            mock.calls(),
            vec![ConsoleCall::TimeStamp(Some("mark".to_string()))]
        );
    }

    #[test]
    fn test_toggle_mid_sequence() {
        let (gate, mock) = gate_with_mock(vec![], true);
        gate.log(&console_args!["before"]).unwrap();
        gate.set_enabled(false);
        gate.log(&console_args!["after"]).unwrap();
        gate.set_enabled(true);
        gate.log(&console_args!["again"]).unwrap();
        assert_eq!(
            mock.calls(),
            vec![
                ConsoleCall::Log(console_args!["before"]),
                ConsoleCall::Log(console_args!["again"]),
            ]
        );
    }

    #[test]
    fn test_console_error_propagates() {
        let gate = Gate::new(Arc::new(MockConsole::new(vec![], true)));
        gate.set_enabled(true);
        let result = gate.error(&console_args!["boom"]);
        assert!(result.is_err_and(|e| e == ErrorCode::UnmappedError));
    }

    #[test]
    fn test_disabled_hides_console_error() {
        let gate = Gate::new(Arc::new(MockConsole::new(vec![], true)));
        assert!(gate.error(&console_args!["boom"]).is_ok());
    }

    #[test]
    fn test_set_console() {
        let (gate, first) = gate_with_mock(vec![], true);
        let second = MockConsole::new(vec![Capability::Profile], false);

        gate.log(&console_args![1]).unwrap();
        gate.set_console(Arc::new(second.clone()));
        gate.log(&console_args![2]).unwrap();
        gate.profile(None).unwrap();

        assert_eq!(first.calls(), vec![ConsoleCall::Log(console_args![1])]);
        assert_eq!(
            second.calls(),
            vec![ConsoleCall::Log(console_args![2]), ConsoleCall::Profile(None)]
        );
        assert!(gate.console().supports(Capability::Profile));
    }

    #[test]
    fn test_dir_options_forwarded() {
        let (gate, mock) = gate_with_mock(vec![], true);
        let options = DirOptions {
            depth: None,
            show_hidden: true,
        };
        gate.dir(&ConsoleValue::Null, Some(&options)).unwrap();
        assert_eq!(
            mock.calls(),
            vec![ConsoleCall::Dir(ConsoleValue::Null, Some(options))]
        );
    }

    #[test]
    fn test_gate_shared_between_threads() {
        let (gate, mock) = gate_with_mock(vec![], true);
        let gate = Arc::new(gate);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let gate = Arc::clone(&gate);
                std::thread::spawn(move || gate.info(&console_args![i]).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(mock.calls().len(), 4);
    }

    /// Console implementing only the required operations, all as no-ops.
    struct SilentConsole {
        panic_on_drop: bool,
    }

    impl Drop for SilentConsole {
        fn drop(&mut self) {
            if self.panic_on_drop {
                panic!("console dropped");
            }
        }
    }

    impl Console for SilentConsole {
        fn assert(&self, _c: bool, _d: &[ConsoleValue]) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn clear(&self) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn count(&self, _l: Option<&str>) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn count_reset(&self, _l: Option<&str>) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn debug(&self, _d: &[ConsoleValue]) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn dir(&self, _i: &ConsoleValue, _o: Option<&DirOptions>) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn dirxml(&self, _d: &[ConsoleValue]) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn error(&self, _d: &[ConsoleValue]) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn group(&self, _l: Option<&str>) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn group_collapsed(&self, _l: Option<&str>) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn group_end(&self) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn info(&self, _d: &[ConsoleValue]) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn log(&self, _d: &[ConsoleValue]) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn table(&self, _t: &ConsoleValue, _c: Option<&[&str]>) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn time(&self, _l: Option<&str>) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn time_end(&self, _l: Option<&str>) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn time_log(&self, _l: Option<&str>, _d: &[ConsoleValue]) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn trace(&self, _d: &[ConsoleValue]) -> Result<(), ErrorCode> {
            Ok(())
        }
        fn warn(&self, _d: &[ConsoleValue]) -> Result<(), ErrorCode> {
            Ok(())
        }
    }

    #[test]
    fn test_console_trait_object_default_capabilities() {
        let gate = Gate::new(Arc::new(SilentConsole {
            panic_on_drop: false,
        }));
        gate.set_enabled(true);
        assert!(!gate.console().supports(Capability::Profile));
        assert!(gate.profile(Some("p1")).is_ok());
        assert!(gate.time_stamp(None).is_ok());
    }

    #[test]
    fn test_console_lock_poison_recovered() {
        let gate = Gate::new(Arc::new(SilentConsole {
            panic_on_drop: true,
        }));
        gate.set_enabled(true);
        let mock = MockConsole::default();

        // Dropping the previous console panics while the write lock is held.
        let swap = catch_unwind(AssertUnwindSafe(|| gate.set_console(Arc::new(mock.clone()))));
        assert!(swap.is_err());
        assert!(gate.console.is_poisoned());

        assert!(gate.log(&console_args!["after"]).is_ok());
        assert_eq!(
            mock.calls(),
            vec![ConsoleCall::Log(console_args!["after"])]
        );

        let replacement = MockConsole::default();
        gate.set_console(Arc::new(replacement.clone()));
        assert!(gate.info(&console_args!["next"]).is_ok());
        assert_eq!(
            replacement.calls(),
            vec![ConsoleCall::Info(console_args!["next"])]
        );
        assert_eq!(mock.calls().len(), 1);
    }
}
