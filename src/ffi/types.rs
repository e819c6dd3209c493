// C-compatible 타입 정의
// 호출자(Go/Python/C)와 공유되는 상태 코드

/// 에러 코드 (status 반환 함수 전용, 0=성공)
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    NullPointer = 1,
    InvalidParam = 2,
    Overflow = 3,
    OutOfMemory = 4,
    Network = 5,
    Unsupported = 6,
    Io = 7,
    Unknown = 99,
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> i32 {
        code as i32
    }
}

impl ErrorCode {
    /// i32 상태 코드 복원 (알 수 없는 값은 Unknown)
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => ErrorCode::Success,
            1 => ErrorCode::NullPointer,
            2 => ErrorCode::InvalidParam,
            3 => ErrorCode::Overflow,
            4 => ErrorCode::OutOfMemory,
            5 => ErrorCode::Network,
            6 => ErrorCode::Unsupported,
            7 => ErrorCode::Io,
            _ => ErrorCode::Unknown,
        }
    }
}

/// 현재 ABI 리비전 (심볼 추가/시그니처 변경 시 증가)
pub const ABI_VERSION: u32 = 1;
