// Copyright 2023-2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use int_enum::IntEnum;
use std::error::Error;
use std::fmt::{Debug, Display, Error as FmtError, Formatter};

/// Error codes, HTTP-like so they can be reported by outer services as they are.
#[repr(i16)]
#[derive(Debug, PartialEq, PartialOrd, Copy, Clone, IntEnum)]
pub enum ErrorCode {
    NotFound = 404,
    UnprocessableEntity = 422,
    InternalServerError = 500,
    NotImplemented = 501,
}

/// The error type shared by all crates of the workspace.
#[derive(PartialEq, Debug, Clone)]
pub struct HogError {
    /// The status code.
    pub status: ErrorCode,

    /// The human readable message.
    pub message: String,
}

impl Display for HogError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        write!(f, "[{:?}] {}", self.status, self.message)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        write!(f, "{}", *self as i16)
    }
}

impl From<std::io::Error> for HogError {
    fn from(err: std::io::Error) -> Self {
        HogError {
            status: ErrorCode::InternalServerError,
            message: err.to_string(),
        }
    }
}

impl Error for HogError {}

impl HogError {
    pub fn new(status: ErrorCode, message: &str) -> Self {
        HogError {
            status,
            message: message.to_string(),
        }
    }

    pub fn status(&self) -> ErrorCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create a not found error.
    pub fn not_found(msg: &str) -> HogError {
        HogError::new(ErrorCode::NotFound, msg)
    }

    /// Create an unprocessable entity error.
    pub fn unprocessable_entity(msg: &str) -> HogError {
        HogError::new(ErrorCode::UnprocessableEntity, msg)
    }

    /// Create an internal server error.
    pub fn internal_server_error(msg: &str) -> HogError {
        HogError::new(ErrorCode::InternalServerError, msg)
    }

    /// Create a not implemented error. Used when an optional capability isn't built in.
    pub fn not_implemented(msg: &str) -> HogError {
        HogError::new(ErrorCode::NotImplemented, msg)
    }
}

#[macro_export]
macro_rules! not_found {
    ($msg:expr, $($arg:tt)*) => {
        $crate::error::HogError::not_found(&format!($msg, $($arg)*))
    };
    ($msg:expr) => {
        $crate::error::HogError::not_found($msg)
    };
}

#[macro_export]
macro_rules! unprocessable_entity {
    ($msg:expr, $($arg:tt)*) => {
        $crate::error::HogError::unprocessable_entity(&format!($msg, $($arg)*))
    };
    ($msg:expr) => {
        $crate::error::HogError::unprocessable_entity($msg)
    };
}

#[macro_export]
macro_rules! internal_server_error {
    ($msg:expr, $($arg:tt)*) => {
        $crate::error::HogError::internal_server_error(&format!($msg, $($arg)*))
    };
    ($msg:expr) => {
        $crate::error::HogError::internal_server_error($msg)
    };
}

#[macro_export]
macro_rules! not_implemented {
    ($msg:expr, $($arg:tt)*) => {
        $crate::error::HogError::not_implemented(&format!($msg, $($arg)*))
    };
    ($msg:expr) => {
        $crate::error::HogError::not_implemented($msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display() {
        let err = unprocessable_entity!("Bad value {}", 42);
        assert_eq!(err.to_string(), "[UnprocessableEntity] Bad value 42");
        assert_eq!(ErrorCode::UnprocessableEntity.to_string(), "422");
    }

    #[rstest]
    #[case(not_found!("x"), ErrorCode::NotFound)]
    #[case(unprocessable_entity!("x"), ErrorCode::UnprocessableEntity)]
    #[case(internal_server_error!("x"), ErrorCode::InternalServerError)]
    #[case(not_implemented!("x"), ErrorCode::NotImplemented)]
    fn test_macros(#[case] err: HogError, #[case] status: ErrorCode) {
        assert_eq!(err.status(), status);
        assert_eq!(err.message(), "x");
    }

    #[rstest]
    fn test_from_io_error() {
        let err: HogError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert_eq!(err.status(), ErrorCode::InternalServerError);
        assert_eq!(err.message(), "no such file");
    }
}
