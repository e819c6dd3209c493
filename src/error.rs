// 크레이트 공용 에러 타입
// FFI 경계에서는 ErrorCode로 변환되어 전달됨

use std::ffi::{FromVecWithNulError, NulError};
use std::str::Utf8Error;

use thiserror::Error;

use crate::ffi::types::ErrorCode;

#[derive(Debug, Error)]
pub enum FduError {
    #[error("null pointer passed across the boundary")]
    NullPointer,

    #[error("string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("string contains an interior NUL byte: {0}")]
    InteriorNul(#[from] NulError),

    #[error("string buffer rejected: {0}")]
    InvalidCString(#[from] FromVecWithNulError),

    #[error("integer overflow in {a} + {b}")]
    Overflow { a: i32, b: i32 },

    #[error("allocation of {0} bytes failed")]
    OutOfMemory(usize),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported url scheme `{0}`")]
    UnsupportedScheme(String),

    #[error("url `{0}` has no host")]
    MissingHost(String),

    #[error("networking is disabled in this build")]
    NetworkDisabled,

    #[cfg(feature = "net")]
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("http status {0}")]
    HttpStatus(u16),

    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("memory metric unavailable: {0}")]
    Probe(#[from] std::io::Error),

    #[error("metric is not supported on this platform")]
    Unsupported,

    #[error("native call failed with status {0:?}")]
    Status(ErrorCode),

    #[error("leak detected: delta {delta} bytes over threshold {threshold} after {iterations} iterations")]
    LeakDetected {
        delta: u64,
        threshold: u64,
        iterations: u64,
    },
}

pub type Result<T> = std::result::Result<T, FduError>;

impl FduError {
    /// FFI 상태 코드로 매핑
    pub fn code(&self) -> ErrorCode {
        match self {
            FduError::NullPointer => ErrorCode::NullPointer,
            FduError::InvalidUtf8(_)
            | FduError::InteriorNul(_)
            | FduError::InvalidCString(_)
            | FduError::InvalidUrl(_)
            | FduError::UnsupportedScheme(_)
            | FduError::MissingHost(_)
            | FduError::BodyTooLarge { .. } => ErrorCode::InvalidParam,
            FduError::Overflow { .. } => ErrorCode::Overflow,
            FduError::OutOfMemory(_) => ErrorCode::OutOfMemory,
            FduError::NetworkDisabled | FduError::Unsupported => ErrorCode::Unsupported,
            #[cfg(feature = "net")]
            FduError::Http(_) => ErrorCode::Network,
            FduError::HttpStatus(_) => ErrorCode::Network,
            FduError::Probe(_) => ErrorCode::Io,
            FduError::Status(code) => *code,
            FduError::LeakDetected { .. } => ErrorCode::Unknown,
        }
    }
}
