// FFI (Foreign Function Interface) 모듈
// Go cgo / Python ctypes와 연동되는 C ABI 함수들
//
// 소유권 규칙:
// - *mut c_char 반환값은 호출자가 소유, 반드시 free_string으로 한 번만 해제
// - libc free()로 해제 금지 (할당자가 다름)

pub mod types;
pub mod net;

use std::ffi::{c_char, c_int, CString};

use log::{debug, error};

use crate::config::FduConfig;
use crate::error::{FduError, Result};
use crate::logging;
use types::{ErrorCode, ABI_VERSION};

/// hello_world가 반환하는 고정 인사말
pub const GREETING: &str = "hello world";

/// 바이트열을 새 C 문자열로 할당 (할당 실패 시 abort 대신 에러 반환)
pub(crate) fn alloc_c_string(bytes: &[u8]) -> Result<CString> {
    let len = bytes.len() + 1;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| FduError::OutOfMemory(len))?;
    buf.extend_from_slice(bytes);
    buf.push(0);
    Ok(CString::from_vec_with_nul(buf)?)
}

/// ABI 리비전 조회
#[no_mangle]
pub extern "C" fn fdu_abi_version() -> u32 {
    ABI_VERSION
}

/// env_logger 초기화 (FDU_LOG 필터), 중복 호출 무해
#[no_mangle]
pub extern "C" fn fdu_init_logging() -> i32 {
    let cfg = FduConfig::from_env();
    if logging::init(&cfg) {
        debug!("fdu_init_logging: filter `{}`", cfg.log_filter);
    }
    ErrorCode::Success as i32
}

/// Hello World 문자열 생성
/// - 반환값은 호출자 소유 (free_string으로 해제)
/// - 할당 실패 시 NULL
#[no_mangle]
pub extern "C" fn hello_world() -> *mut c_char {
    match alloc_c_string(GREETING.as_bytes()) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            error!("hello_world: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// hello_world의 상태 코드 버전
/// - out_str: 성공 시 호출자 소유 문자열, 실패 시 NULL
#[no_mangle]
pub extern "C" fn hello_world_ex(out_str: *mut *mut c_char) -> i32 {
    if out_str.is_null() {
        return ErrorCode::NullPointer as i32;
    }

    let (ptr, code) = match alloc_c_string(GREETING.as_bytes()) {
        Ok(s) => (s.into_raw(), ErrorCode::Success),
        Err(e) => {
            error!("hello_world_ex: {}", e);
            (std::ptr::null_mut(), e.code())
        }
    };

    unsafe {
        *out_str = ptr;
    }

    code as i32
}

/// 문자열 메모리 해제
/// - NULL은 무시
/// - 이 라이브러리가 반환하지 않은 포인터, 이미 해제된 포인터 전달은 UB (호출자 책임)
#[no_mangle]
pub extern "C" fn free_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(ptr));
    }
}

/// 두 정수 덧셈 (오버플로 시 2의 보수 wraparound)
#[no_mangle]
pub extern "C" fn add(a: c_int, b: c_int) -> c_int {
    a.wrapping_add(b)
}

/// 오버플로 검사 덧셈
/// - 오버플로 시 ErrorCode::Overflow, out_sum은 변경하지 않음
#[no_mangle]
pub extern "C" fn add_checked(a: c_int, b: c_int, out_sum: *mut c_int) -> i32 {
    if out_sum.is_null() {
        return ErrorCode::NullPointer as i32;
    }

    match checked_sum(a, b) {
        Ok(sum) => {
            unsafe {
                *out_sum = sum;
            }
            ErrorCode::Success as i32
        }
        Err(e) => {
            debug!("add_checked: {}", e);
            e.code() as i32
        }
    }
}

fn checked_sum(a: c_int, b: c_int) -> Result<c_int> {
    a.checked_add(b).ok_or(FduError::Overflow { a, b })
}
