// URL 가져오기 모듈
// 기본 빌드: 입력 검증만 수행하고 NetworkDisabled 반환
// `net` feature: reqwest blocking 클라이언트 (타임아웃 + 응답 크기 제한)

use std::io::Read;

use url::Url;

use crate::config::FduConfig;
use crate::error::{FduError, Result};

/// URL 파싱 + 검증 (http/https, 호스트 필수)
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url)?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FduError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(FduError::MissingHost(url.to_string()));
    }

    Ok(parsed)
}

/// URL 본문을 바이트로 가져옴
pub fn fetch(url: &str, cfg: &FduConfig) -> Result<Vec<u8>> {
    let parsed = validate_url(url)?;
    fetch_validated(&parsed, cfg)
}

/// 최대 limit 바이트까지 읽음, 초과 시 BodyTooLarge
/// - limit + 1 바이트까지만 읽어서 초과 여부 판단
pub fn read_capped<R: Read>(reader: R, limit: usize) -> Result<Vec<u8>> {
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);

    let mut body = Vec::new();
    reader.take(cap).read_to_end(&mut body)?;

    if body.len() > limit {
        return Err(FduError::BodyTooLarge { limit });
    }

    Ok(body)
}

#[cfg(not(feature = "net"))]
fn fetch_validated(url: &Url, _cfg: &FduConfig) -> Result<Vec<u8>> {
    log::warn!("fetch: networking disabled, refusing {}", url);
    Err(FduError::NetworkDisabled)
}

#[cfg(feature = "net")]
fn fetch_validated(url: &Url, cfg: &FduConfig) -> Result<Vec<u8>> {
    use log::debug;
    use reqwest::blocking::Client;

    let mut builder = Client::builder().timeout(cfg.http_timeout);
    if !cfg.http_system_proxy {
        builder = builder.no_proxy();
    }
    let client = builder.build()?;

    debug!("fetch: GET {} (timeout {:?})", url, cfg.http_timeout);
    let response = client.get(url.as_str()).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FduError::HttpStatus(status.as_u16()));
    }

    let body = read_capped(response, cfg.http_max_bytes)?;

    debug!("fetch: {} bytes from {}", body.len(), url);
    Ok(body)
}
