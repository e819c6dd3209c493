// get_url FFI - URL 본문을 C 문자열로 반환

use std::ffi::{c_char, CStr};

use log::warn;

use crate::config::FduConfig;
use crate::error::{FduError, Result};
use crate::ffi::alloc_c_string;
use crate::ffi::types::ErrorCode;
use crate::net;

fn get_url_internal(url: *const c_char) -> Result<*mut c_char> {
    if url.is_null() {
        return Err(FduError::NullPointer);
    }

    let url = unsafe { CStr::from_ptr(url) }.to_str()?;
    let body = net::fetch(url, &FduConfig::from_env())?;
    Ok(alloc_c_string(&body)?.into_raw())
}

/// URL 본문 가져오기
/// - 반환값은 호출자 소유 (free_string으로 해제)
/// - 실패 시 NULL (상세 코드는 get_url_ex 사용)
#[no_mangle]
pub extern "C" fn get_url(url: *const c_char) -> *mut c_char {
    match get_url_internal(url) {
        Ok(ptr) => ptr,
        Err(e) => {
            warn!("get_url: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// get_url의 상태 코드 버전
/// - out_body: 성공 시 호출자 소유 문자열, 실패 시 NULL
#[no_mangle]
pub extern "C" fn get_url_ex(url: *const c_char, out_body: *mut *mut c_char) -> i32 {
    if out_body.is_null() {
        return ErrorCode::NullPointer as i32;
    }

    let (ptr, code) = match get_url_internal(url) {
        Ok(ptr) => (ptr, ErrorCode::Success),
        Err(e) => {
            warn!("get_url_ex: {}", e);
            (std::ptr::null_mut(), e.code())
        }
    };

    unsafe {
        *out_body = ptr;
    }

    code as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_get_url_null_input() {
        assert!(get_url(std::ptr::null()).is_null());

        let mut out: *mut c_char = std::ptr::null_mut();
        assert_eq!(
            get_url_ex(std::ptr::null(), &mut out),
            ErrorCode::NullPointer as i32
        );
        assert!(out.is_null());
    }

    #[test]
    fn test_get_url_ex_null_out() {
        let url = CString::new("https://example.com").unwrap();
        assert_eq!(
            get_url_ex(url.as_ptr(), std::ptr::null_mut()),
            ErrorCode::NullPointer as i32
        );
    }

    #[test]
    fn test_get_url_invalid_utf8() {
        let url = CString::new(vec![b'h', 0xff, 0xfe]).unwrap();
        let mut out: *mut c_char = std::ptr::null_mut();
        assert_eq!(
            get_url_ex(url.as_ptr(), &mut out),
            ErrorCode::InvalidParam as i32
        );
        assert!(get_url(url.as_ptr()).is_null());
    }

    #[test]
    fn test_get_url_invalid_scheme() {
        let url = CString::new("file:///etc/passwd").unwrap();
        let mut out: *mut c_char = std::ptr::null_mut();
        assert_eq!(
            get_url_ex(url.as_ptr(), &mut out),
            ErrorCode::InvalidParam as i32
        );
        assert!(out.is_null());
    }

    #[cfg(not(feature = "net"))]
    #[test]
    fn test_get_url_unsupported_without_net() {
        let url = CString::new("https://example.com").unwrap();
        let mut out: *mut c_char = std::ptr::null_mut();
        assert_eq!(
            get_url_ex(url.as_ptr(), &mut out),
            ErrorCode::Unsupported as i32
        );
        assert!(out.is_null());
        assert!(get_url(url.as_ptr()).is_null());
    }

    #[cfg(feature = "net")]
    mod net {
        use super::*;
        use crate::ffi::free_string;
        use crate::net::responder::{bypass_proxy, http_response, serve};

        fn c_url(url: &str) -> CString {
            CString::new(url).unwrap()
        }

        #[test]
        fn test_get_url_body_released_with_free_string() {
            bypass_proxy();
            let url = c_url(&serve(1, http_response("200 OK", b"hello")));

            let body = get_url(url.as_ptr());
            assert!(!body.is_null());
            assert_eq!(unsafe { CStr::from_ptr(body) }.to_bytes(), b"hello");
            free_string(body);
        }

        #[test]
        fn test_get_url_ex_success() {
            bypass_proxy();
            let url = c_url(&serve(1, http_response("200 OK", b"hi")));

            let mut out: *mut c_char = std::ptr::null_mut();
            assert_eq!(get_url_ex(url.as_ptr(), &mut out), ErrorCode::Success as i32);
            assert_eq!(unsafe { CStr::from_ptr(out) }.to_bytes(), b"hi");
            free_string(out);
        }

        #[test]
        fn test_get_url_ex_non_success_status() {
            bypass_proxy();
            let url = c_url(&serve(1, http_response("500 Internal Server Error", b"boom")));

            let mut out: *mut c_char = std::ptr::null_mut();
            assert_eq!(get_url_ex(url.as_ptr(), &mut out), ErrorCode::Network as i32);
            assert!(out.is_null());
        }

        #[test]
        fn test_get_url_ex_body_with_nul() {
            bypass_proxy();
            let url = c_url(&serve(1, http_response("200 OK", b"a\0b")));

            let mut out: *mut c_char = std::ptr::null_mut();
            assert_eq!(
                get_url_ex(url.as_ptr(), &mut out),
                ErrorCode::InvalidParam as i32
            );
            assert!(out.is_null());
        }
    }
}
