// NativeString - 네이티브 할당 문자열의 소유 핸들
// Clone/Copy 불가, Drop 시 free_string으로 정확히 한 번 해제

use std::ffi::{c_char, CStr};
use std::fmt;
use std::ptr::NonNull;

use crate::error::Result;
use crate::ffi::free_string;

/// hello_world / get_url 이 반환한 문자열의 유일한 소유자
pub struct NativeString {
    ptr: NonNull<c_char>,
}

impl NativeString {
    /// 원시 포인터의 소유권을 가져옴 (NULL이면 None)
    ///
    /// # Safety
    /// `ptr`은 이 라이브러리의 `hello_world`/`get_url`이 반환했고
    /// 아직 해제되지 않았으며, 다른 곳에서 해제하지 않아야 함.
    pub unsafe fn from_raw(ptr: *mut c_char) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    pub fn as_c_str(&self) -> &CStr {
        unsafe { CStr::from_ptr(self.ptr.as_ptr()) }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.as_c_str().to_bytes()
    }

    pub fn to_str(&self) -> Result<&str> {
        Ok(self.as_c_str().to_str()?)
    }

    /// 내용을 복사한 뒤 핸들 해제 (복사 → 해제 순서)
    /// - UTF-8 에러여도 핸들은 해제됨
    pub fn into_string(self) -> Result<String> {
        let copied = self.to_str().map(str::to_owned);
        drop(self);
        copied
    }

    /// 소유권을 다시 원시 포인터로 돌려줌 (해제 책임도 함께 이전)
    pub fn into_raw(self) -> *mut c_char {
        let ptr = self.ptr.as_ptr();
        std::mem::forget(self);
        ptr
    }
}

impl Drop for NativeString {
    fn drop(&mut self) {
        free_string(self.ptr.as_ptr());
    }
}

impl fmt::Debug for NativeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeString").field(&self.as_c_str()).finish()
    }
}
