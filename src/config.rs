// 런타임 설정 (환경 변수 기반)
// 호출마다 스냅샷을 읽음, 전역 상태 없음

use std::env;
use std::time::Duration;

use log::warn;

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_HTTP_MAX_BYTES: usize = 8 * 1024 * 1024;

/// 설정 스냅샷
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FduConfig {
    /// env_logger 필터 문자열 (FDU_LOG)
    pub log_filter: String,
    /// get_url 타임아웃 (FDU_HTTP_TIMEOUT_MS)
    pub http_timeout: Duration,
    /// get_url 응답 최대 크기 (FDU_HTTP_MAX_BYTES)
    pub http_max_bytes: usize,
    /// 시스템 프록시(HTTP_PROXY 등) 사용 여부, FDU_HTTP_NO_PROXY=1 이면 false
    pub http_system_proxy: bool,
}

impl Default for FduConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            http_timeout: Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
            http_max_bytes: DEFAULT_HTTP_MAX_BYTES,
            http_system_proxy: true,
        }
    }
}

impl FduConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 key → value 조회로부터 설정 생성 (테스트에서 환경 변수 없이 사용)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(filter) = lookup("FDU_LOG").filter(|s| !s.trim().is_empty()) {
            cfg.log_filter = filter;
        }

        if let Some(ms) = parse_positive::<u64, F>(&lookup, "FDU_HTTP_TIMEOUT_MS") {
            cfg.http_timeout = Duration::from_millis(ms);
        }

        if let Some(bytes) = parse_positive::<usize, F>(&lookup, "FDU_HTTP_MAX_BYTES") {
            cfg.http_max_bytes = bytes;
        }

        if let Some(raw) = lookup("FDU_HTTP_NO_PROXY") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => cfg.http_system_proxy = false,
                "0" | "false" | "no" | "" => {}
                _ => warn!("FDU_HTTP_NO_PROXY: ignoring invalid value `{}`", raw),
            }
        }

        cfg
    }
}

fn parse_positive<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) if v > T::default() => Some(v),
        _ => {
            warn!("{}: ignoring invalid value `{}`, using default", key, raw);
            None
        }
    }
}
