use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::units::Fahrenheit;

use super::cycle::{evaluate_cycle, CycleResult};
use super::design::DesignParameters;

/// 건구 온도 스윕 범위. 양 끝점을 포함해 균등 분할한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepRange {
    /// 시작 건구 온도 [°F]
    pub start_f: f64,
    /// 끝 건구 온도 [°F]
    pub end_f: f64,
    /// 계산 점 개수
    pub points: usize,
}

impl Default for SweepRange {
    fn default() -> Self {
        Self {
            start_f: 60.0,
            end_f: 100.0,
            points: 41,
        }
    }
}

impl SweepRange {
    /// 균등 간격 온도 목록. 마지막 점은 end_f 로 고정한다.
    pub fn temperatures(&self) -> Vec<Fahrenheit> {
        match self.points {
            0 => Vec::new(),
            1 => vec![Fahrenheit(self.start_f)],
            n => {
                let step = (self.end_f - self.start_f) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            Fahrenheit(self.end_f)
                        } else {
                            Fahrenheit(self.start_f + i as f64 * step)
                        }
                    })
                    .collect()
            }
        }
    }
}

/// 스윕의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub dry_bulb: Fahrenheit,
    pub result: CycleResult,
}

/// 스윕 결과 계열.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepSeries {
    pub points: Vec<SweepPoint>,
}

impl SweepSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dry_bulbs(&self) -> Vec<f64> {
        self.column(|p| p.dry_bulb.value())
    }

    pub fn thermal_efficiencies(&self) -> Vec<f64> {
        self.column(|p| p.result.thermal_efficiency_pct)
    }

    pub fn heat_rates(&self) -> Vec<f64> {
        self.column(|p| p.result.heat_rate)
    }

    pub fn net_powers(&self) -> Vec<f64> {
        self.column(|p| p.result.net_power_mw)
    }

    pub fn sfcs(&self) -> Vec<f64> {
        self.column(|p| p.result.sfc)
    }

    /// 건구 온도가 올라갈수록 순출력이 줄거나 같은지 확인한다.
    pub fn is_power_non_increasing(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[1].result.net_power_mw <= w[0].result.net_power_mw)
    }

    fn column(&self, f: impl Fn(&SweepPoint) -> f64) -> Vec<f64> {
        self.points.iter().map(f).collect()
    }
}

/// 범위의 각 건구 온도에서 독립적으로 사이클을 평가한다.
pub fn sweep(design: &DesignParameters, range: &SweepRange) -> SweepSeries {
    let points = range
        .temperatures()
        .into_iter()
        .map(|t| {
            let result = evaluate_cycle(t, design);
            if !result.is_finite() {
                warn!(dry_bulb_f = t.value(), ?result, "non-finite cycle result");
            }
            SweepPoint {
                dry_bulb: t,
                result,
            }
        })
        .collect();
    SweepSeries { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_has_41_whole_degrees() {
        let temps = SweepRange::default().temperatures();
        assert_eq!(temps.len(), 41);
        assert_eq!(temps[0], Fahrenheit(60.0));
        assert_eq!(temps[40], Fahrenheit(100.0));
        assert!((temps[15].value() - 75.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_point_counts() {
        let mut r = SweepRange::default();
        r.points = 0;
        assert!(r.temperatures().is_empty());
        r.points = 1;
        assert_eq!(r.temperatures(), vec![Fahrenheit(60.0)]);
    }

    #[test]
    fn columns_line_up() {
        let s = sweep(
            &DesignParameters::default(),
            &SweepRange {
                start_f: 70.0,
                end_f: 80.0,
                points: 3,
            },
        );
        assert_eq!(s.dry_bulbs(), vec![70.0, 75.0, 80.0]);
        assert_eq!(s.heat_rates().len(), 3);
        assert_eq!(s.sfcs()[1], s.points[1].result.sfc);
    }
}
