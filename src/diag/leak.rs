// 누수 탐지 프로브
// 측정값 → N회 반복 → 측정값, 차이가 임계값 이하인지 확인
// 프로브마다 측정을 따로 수행 (전역 sampler 없음)

use log::info;

use crate::diag::{sample, Metric};
use crate::error::{FduError, Result};

/// 기준 시나리오 반복 횟수
pub const REFERENCE_ITERATIONS: u64 = 10_000_000;

/// 기본 임계값 (1 MiB)
pub const DEFAULT_THRESHOLD_BYTES: u64 = 1024 * 1024;

/// 프로브 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeakReport {
    pub metric: Metric,
    pub iterations: u64,
    pub before: i64,
    pub after: i64,
    /// |after - before|
    pub delta: u64,
    pub threshold: u64,
}

impl LeakReport {
    pub fn is_within_threshold(&self) -> bool {
        self.delta <= self.threshold
    }

    /// 임계값 초과 시 LeakDetected
    pub fn check(&self) -> Result<()> {
        if self.is_within_threshold() {
            Ok(())
        } else {
            Err(FduError::LeakDetected {
                delta: self.delta,
                threshold: self.threshold,
                iterations: self.iterations,
            })
        }
    }
}

/// 누수 프로브 설정
#[derive(Debug, Clone, Copy)]
pub struct LeakProbe {
    metric: Metric,
    iterations: u64,
    threshold: u64,
}

impl Default for LeakProbe {
    fn default() -> Self {
        Self::new(Metric::ThreadLiveBytes)
    }
}

impl LeakProbe {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            iterations: REFERENCE_ITERATIONS,
            threshold: DEFAULT_THRESHOLD_BYTES,
        }
    }

    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn threshold(mut self, bytes: u64) -> Self {
        self.threshold = bytes;
        self
    }

    /// 반복 실행 후 측정 (임계값 판정은 report.check())
    /// - f가 에러를 반환하면 즉시 중단
    pub fn run<F>(&self, mut f: F) -> Result<LeakReport>
    where
        F: FnMut() -> Result<()>,
    {
        let before = sample(self.metric)?;
        for _ in 0..self.iterations {
            f()?;
        }
        let after = sample(self.metric)?;

        let report = LeakReport {
            metric: self.metric,
            iterations: self.iterations,
            before,
            after,
            delta: after.abs_diff(before),
            threshold: self.threshold,
        };

        info!(
            "leak probe ({:?}): {} iterations, memory usage delta {} bytes (threshold {})",
            report.metric, report.iterations, report.delta, report.threshold
        );

        Ok(report)
    }
}
