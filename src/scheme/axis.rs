//! # 纵轴范围
//!
//! 共享纵轴时，范围只会随核素增加而扩大，不会为较小的后续核素缩小。
//!
//! ## 依赖关系
//! - 被 `scheme/pipeline.rs` 维护
//! - 被 `scheme/plot.rs` 读取

/// 最低能级下方留白 (MeV)
const MARGIN_BELOW: f64 = 0.1;

/// 最高能级上方留白 (MeV)，留给标注文字
const MARGIN_ABOVE: f64 = 0.5;

/// 纵轴范围 (MeV)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// 包住给定激发能的紧凑范围
    pub fn tight(energies: &[f64]) -> Option<Self> {
        if energies.is_empty() {
            return None;
        }
        let min = energies.iter().copied().fold(f64::INFINITY, f64::min);
        let max = energies.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(AxisRange {
            min: min - MARGIN_BELOW,
            max: max + MARGIN_ABOVE,
        })
    }

    /// 扩大到同时包含 `other`，永不缩小
    pub fn widen(self, other: AxisRange) -> AxisRange {
        AxisRange {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// 没有能级可画时使用的范围
    pub fn fallback() -> Self {
        AxisRange {
            min: -MARGIN_BELOW,
            max: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_tight_range() {
        let range = AxisRange::tight(&[0.0, 1.2, 3.4]).unwrap();
        assert!(approx(range.min, -0.1));
        assert!(approx(range.max, 3.9));
    }

    #[test]
    fn test_tight_empty() {
        assert!(AxisRange::tight(&[]).is_none());
    }

    #[test]
    fn test_widen_never_shrinks() {
        let a = AxisRange::tight(&[0.0, 2.0]).unwrap();
        let b = AxisRange::tight(&[0.0, 1.0]).unwrap();
        assert_eq!(a.widen(b), a);

        let c = AxisRange::tight(&[0.5, 4.0]).unwrap();
        let grown = a.widen(c);
        assert!(approx(grown.min, a.min));
        assert!(approx(grown.max, c.max));
    }
}
