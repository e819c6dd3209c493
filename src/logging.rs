// 로깅 초기화 (log + env_logger)
// 라이브러리 로드 시 자동 초기화하지 않음, 호출자가 fdu_init_logging으로 명시적 호출

use env_logger::Builder;

use crate::config::FduConfig;

/// env_logger 초기화
/// - 이미 초기화된 경우(다른 logger 포함) false 반환, 에러 아님
pub fn init(cfg: &FduConfig) -> bool {
    Builder::new()
        .parse_filters(&cfg.log_filter)
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}
