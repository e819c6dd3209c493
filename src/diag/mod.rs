// 메모리 진단 모듈
// 경계 호출 반복 시 누수 여부를 확인하는 스모크 테스트 도구

pub mod alloc;
pub mod leak;
pub mod rss;

pub use self::alloc::CountingAllocator;
pub use leak::{LeakProbe, LeakReport};

use crate::error::{FduError, Result};

/// 측정 지표
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// 현재 스레드의 live 할당 바이트 (CountingAllocator 설치 필요, 노이즈 없음)
    ThreadLiveBytes,
    /// 프로세스 RSS (할당자 캐싱/다른 스레드 영향으로 노이즈 큼)
    ResidentSetSize,
}

/// 지표 1회 측정
pub fn sample(metric: Metric) -> Result<i64> {
    match metric {
        Metric::ThreadLiveBytes => {
            if !alloc::is_installed() {
                return Err(FduError::Unsupported);
            }
            Ok(alloc::thread_live_bytes())
        }
        Metric::ResidentSetSize => {
            let rss = rss::resident_set_bytes()?;
            Ok(i64::try_from(rss).unwrap_or(i64::MAX))
        }
    }
}
