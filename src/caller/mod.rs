// 호출자 측 모듈
// C ABI가 반환한 문자열 핸들을 Rust 소유 타입으로 감싸서
// "복사 후 해제, 정확히 한 번" 규칙을 타입으로 보장

pub mod native_string;

pub use native_string::NativeString;

use std::ffi::CString;

use crate::error::{FduError, Result};
use crate::ffi;
use crate::ffi::types::ErrorCode;

/// hello_world 호출 → 복사 → 해제
pub fn hello() -> Result<String> {
    let handle = unsafe { NativeString::from_raw(ffi::hello_world()) }
        .ok_or(FduError::OutOfMemory(ffi::GREETING.len() + 1))?;
    handle.into_string()
}

/// get_url 호출 → 복사 → 해제
pub fn fetch(url: &str) -> Result<String> {
    let url = CString::new(url)?;
    let mut out = std::ptr::null_mut();
    let code = ffi::net::get_url_ex(url.as_ptr(), &mut out);

    match unsafe { NativeString::from_raw(out) } {
        Some(handle) => handle.into_string(),
        None => Err(FduError::Status(ErrorCode::from_raw(code))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello() {
        assert_eq!(hello().unwrap(), "hello world");
    }

    #[test]
    fn test_fetch_invalid_url() {
        let err = fetch("not a url").unwrap_err();
        assert!(matches!(err, FduError::Status(ErrorCode::InvalidParam)));
        assert_eq!(err.code(), ErrorCode::InvalidParam);
    }

    #[test]
    fn test_fetch_interior_nul() {
        let err = fetch("http://a\0b").unwrap_err();
        assert!(matches!(err, FduError::InteriorNul(_)));
    }

    #[cfg(feature = "net")]
    mod net {
        use super::*;
        use crate::diag::{LeakProbe, Metric};
        use crate::net::responder::{bypass_proxy, http_response, serve};

        #[test]
        fn test_fetch_ok() {
            bypass_proxy();
            let url = serve(1, http_response("200 OK", b"hello world"));
            assert_eq!(fetch(&url).unwrap(), "hello world");
        }

        #[test]
        fn test_fetch_status_error() {
            bypass_proxy();
            let url = serve(1, http_response("404 Not Found", b""));
            let err = fetch(&url).unwrap_err();
            assert!(matches!(err, FduError::Status(ErrorCode::Network)));
        }

        #[cfg(target_os = "linux")]
        #[test]
        fn test_fetch_does_not_leak() {
            const N: usize = 200;
            bypass_proxy();
            let url = serve(N, http_response("200 OK", b"hello world"));

            // HTTP 클라이언트가 다른 스레드에서 할당하므로 RSS 기준으로 측정
            let report = LeakProbe::new(Metric::ResidentSetSize)
                .iterations(N as u64)
                .threshold(32 * 1024 * 1024)
                .run(|| fetch(&url).map(drop))
                .unwrap();

            report.check().unwrap();
        }
    }
}
