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

/// Ordered console object map.
/// Ordering keeps rendered output stable between runs.
pub type ConsoleMap = std::collections::BTreeMap<String, ConsoleValue>;

/// Opaque value passed through the gate to a console.
#[derive(Clone, Debug, PartialEq)]
pub enum ConsoleValue {
    /// Absent value
    Undefined,

    /// Null
    Null,

    /// Boolean
    Boolean(bool),

    /// 64-bit float
    Number(f64),

    /// String
    String(String),

    /// Array
    Array(Vec<ConsoleValue>),

    /// Object
    Object(ConsoleMap),
}

// Macro to implement From<T> for ConsoleValue for each type losslessly castable to f64.
macro_rules! impl_from_number_for_console_value {
    ($($from:ty),+) => {
        $(
            impl From<$from> for ConsoleValue {
                fn from(val: $from) -> Self {
                    ConsoleValue::Number(f64::from(val))
                }
            }
        )+
    };
}

impl_from_number_for_console_value!(i8, i16, i32, u8, u16, u32, f32, f64);

// 64-bit integers do not fit f64 exactly; large values lose precision as in any JS runtime.
macro_rules! impl_from_wide_number_for_console_value {
    ($($from:ty),+) => {
        $(
            impl From<$from> for ConsoleValue {
                fn from(val: $from) -> Self {
                    ConsoleValue::Number(val as f64)
                }
            }
        )+
    };
}

impl_from_wide_number_for_console_value!(i64, u64, isize, usize);

impl From<bool> for ConsoleValue {
    fn from(val: bool) -> Self {
        ConsoleValue::Boolean(val)
    }
}

impl From<String> for ConsoleValue {
    fn from(val: String) -> Self {
        ConsoleValue::String(val)
    }
}

impl From<&str> for ConsoleValue {
    fn from(val: &str) -> Self {
        ConsoleValue::String(val.to_string())
    }
}

impl From<Vec<ConsoleValue>> for ConsoleValue {
    fn from(val: Vec<ConsoleValue>) -> Self {
        ConsoleValue::Array(val)
    }
}

impl From<ConsoleMap> for ConsoleValue {
    fn from(val: ConsoleMap) -> Self {
        ConsoleValue::Object(val)
    }
}

// Convert unit type () to ConsoleValue::Null
impl From<()> for ConsoleValue {
    fn from(_: ()) -> Self {
        ConsoleValue::Null
    }
}

// Convert None to ConsoleValue::Undefined
impl<T: Into<ConsoleValue>> From<Option<T>> for ConsoleValue {
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => ConsoleValue::Undefined,
        }
    }
}

impl ConsoleValue {
    /// Whether value is a primitive (neither array nor object).
    pub fn is_primitive(&self) -> bool {
        !matches!(self, ConsoleValue::Array(_) | ConsoleValue::Object(_))
    }
}

/// Build variadic console arguments.
///
/// Each argument is converted with `ConsoleValue::from`.
///
/// ```
/// use rust_log_gate::prelude::*;
///
/// let args = console_args!["hello", 42, true];
/// assert_eq!(args.len(), 3);
/// assert_eq!(args[1], ConsoleValue::Number(42.0));
/// ```
#[macro_export]
macro_rules! console_args {
    () => {
        ::std::vec::Vec::<$crate::console_value::ConsoleValue>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::console_value::ConsoleValue::from($arg)),+]
    };
}
