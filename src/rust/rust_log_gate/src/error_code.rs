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

use crate::log::error;

/// Runtime Error Codes
#[derive(Debug, PartialEq)]
pub enum ErrorCode {
    /// Error that was not yet mapped
    UnmappedError,

    /// Writing to the output stream failed
    OutputFailed,

    /// JSON parser error
    JsonParserError,

    /// JSON generator error
    JsonGeneratorError,

    /// Mutex failed
    MutexLockFailed,

    /// Console name not found in registry
    UnknownConsole,

    /// Console name already registered
    ConsoleAlreadyRegistered,

    /// Gate or console parameters have unexpected type
    InvalidParameters,

    /// Key not found
    KeyNotFound,
}

impl From<std::io::Error> for ErrorCode {
    fn from(cause: std::io::Error) -> Self {
        let kind = cause.kind();
        error!("output failed: {kind}");
        ErrorCode::OutputFailed
    }
}

#[cfg(test)]
mod error_code_tests {
    use crate::error_code::ErrorCode;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_from_io_error_broken_pipe() {
        let error = Error::new(ErrorKind::BrokenPipe, "pipe closed");
        assert_eq!(ErrorCode::from(error), ErrorCode::OutputFailed);
    }

    #[test]
    fn test_from_io_error_other() {
        let error = Error::other("unknown");
        assert_eq!(ErrorCode::from(error), ErrorCode::OutputFailed);
    }
}
