// 프로세스 RSS 조회 (Linux: /proc/self/statm)

use crate::error::{FduError, Result};

#[cfg(target_os = "linux")]
pub fn resident_set_bytes() -> Result<u64> {
    use std::io;

    let statm = std::fs::read_to_string("/proc/self/statm")?;
    let pages: u64 = statm
        .split_whitespace()
        .nth(1)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "malformed /proc/self/statm"))?;

    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if page_size <= 0 {
        return Err(FduError::Probe(io::Error::last_os_error()));
    }

    Ok(pages * page_size as u64)
}

#[cfg(not(target_os = "linux"))]
pub fn resident_set_bytes() -> Result<u64> {
    Err(FduError::Unsupported)
}
