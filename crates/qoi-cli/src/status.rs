//! Process exit status for each failure kind.

use std::process::ExitCode;

use qoi_core::{EncodeError, LoadError};

/// Exit status of a `qoienc` run. With several inputs, the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Success = 0,
    Failure = 1,
    /// Reserved for clap, which exits on its own.
    #[allow(dead_code)]
    Usage = 2,
    NotFound = 3,
    PermissionDenied = 4,
    Undecodable = 5,
    InvalidImage = 6,
    WriteFailed = 7,
}

impl Status {
    /// Map an error's root cause to a status.
    pub fn from_error(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if let Some(e) = cause.downcast_ref::<LoadError>() {
                return match e {
                    LoadError::NotFound(_) => Status::NotFound,
                    LoadError::PermissionDenied(_) => Status::PermissionDenied,
                    LoadError::Decode(_) => Status::Undecodable,
                    LoadError::InvalidDimensions { .. } => Status::InvalidImage,
                    LoadError::Io(_) => Status::Failure,
                };
            }
            if let Some(e) = cause.downcast_ref::<EncodeError>() {
                return match e {
                    EncodeError::SinkWriteFailure(_) => Status::WriteFailed,
                    EncodeError::InvalidDimensions { .. }
                    | EncodeError::InvalidPixelData { .. }
                    | EncodeError::InvalidPixelValue { .. } => Status::InvalidImage,
                };
            }
            if let Some(e) = cause.downcast_ref::<std::io::Error>() {
                return match e.kind() {
                    std::io::ErrorKind::PermissionDenied => Status::PermissionDenied,
                    _ => Status::WriteFailed,
                };
            }
        }
        Status::Failure
    }

    /// Keep the first failure.
    pub fn merge(self, other: Status) -> Status {
        if self == Status::Success {
            other
        } else {
            self
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status as u8)
    }
}
