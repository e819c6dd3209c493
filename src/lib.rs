// fdu 네이티브 라이브러리
// C ABI 문자열 경계 (hello_world / free_string / add / get_url) + 누수 진단 도구

pub mod caller;
pub mod config;
pub mod diag;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod net;

// FFI 함수들을 최상위에서 재export
pub use ffi::*;
pub use ffi::net::{get_url, get_url_ex};

pub use caller::NativeString;
pub use error::{FduError, Result};

// 테스트 바이너리는 할당 카운터를 전역 할당자로 사용 (diag::Metric::ThreadLiveBytes)
#[cfg(test)]
#[global_allocator]
static GLOBAL: diag::CountingAllocator = diag::CountingAllocator::new();
