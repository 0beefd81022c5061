//! # 分带
//!
//! 为每个保留的能级计算横坐标（带坐标）。
//!
//! ## 依赖关系
//! - 被 `scheme/pipeline.rs` 调用
//! - 使用 `models/`

use crate::error::{LevelSchemeError, Result};
use crate::models::state::DEFAULT_BAND;
use crate::models::{BandSplit, StateCollection};

/// 按分带方式设置带坐标
///
/// 显式坐标的个数必须等于忽略筛选后保留的能级数（在去重之前检查）。
pub fn assign_bands(collection: &mut StateCollection, split: &BandSplit) -> Result<()> {
    match split {
        BandSplit::Uniform => {
            let n = collection.len();
            collection.set_bands(std::iter::repeat(DEFAULT_BAND).take(n));
        }
        BandSplit::Derived => {
            let bands: Vec<f64> = collection.states().map(|s| s.intrinsic_band_id).collect();
            collection.set_bands(bands);
        }
        BandSplit::Explicit(coords) => {
            if coords.len() != collection.len() {
                return Err(LevelSchemeError::InvalidBandSpec(format!(
                    "{} band coordinates given for {} retained states",
                    coords.len(),
                    collection.len()
                )));
            }
            collection.set_bands(coords.iter().copied());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StateRecord;
    use crate::scheme::dedup::{remove_double_states, DOUBLE_STATE_TOLERANCE};

    fn collection(rows: &[(f64, f64)]) -> StateCollection {
        let states = rows
            .iter()
            .enumerate()
            .map(|(i, &(ex, n_jp))| StateRecord {
                ordinal: (i + 1) as f64,
                spin_doubled: 4,
                parity: "+".to_string(),
                intrinsic_band_id: n_jp,
                isospin: 2,
                energy_abs: -80.0 + ex,
                energy_excitation: ex,
                provenance_tag: "log.txt".to_string(),
            })
            .collect();
        StateCollection::from_states(states)
    }

    #[test]
    fn test_derived_bands_follow_njp() {
        let mut coll = collection(&[(0.0, 1.0), (0.8, 2.0), (0.8, 3.0), (1.9, 1.0)]);
        assign_bands(&mut coll, &BandSplit::Derived).unwrap();
        assert_eq!(coll.band_coordinates(), vec![1.0, 2.0, 3.0, 1.0]);

        remove_double_states(&mut coll, DOUBLE_STATE_TOLERANCE);
        for level in coll.levels() {
            assert_eq!(level.band, level.state.intrinsic_band_id);
        }
        assert_eq!(coll.band_coordinates(), vec![1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_uniform_bands() {
        let mut coll = collection(&[(0.0, 1.0), (0.8, 2.0)]);
        assign_bands(&mut coll, &BandSplit::Derived).unwrap();
        assign_bands(&mut coll, &BandSplit::Uniform).unwrap();
        assert_eq!(coll.band_coordinates(), vec![DEFAULT_BAND, DEFAULT_BAND]);
    }

    #[test]
    fn test_explicit_bands() {
        let mut coll = collection(&[(0.0, 1.0), (0.8, 1.0), (1.2, 1.0)]);
        assign_bands(&mut coll, &BandSplit::Explicit(vec![1.0, 3.0, 5.0])).unwrap();
        assert_eq!(coll.band_coordinates(), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_explicit_length_mismatch() {
        let mut coll = collection(&[(0.0, 1.0), (0.5, 1.0), (1.0, 1.0), (1.5, 1.0), (2.0, 1.0)]);
        let result = assign_bands(&mut coll, &BandSplit::Explicit(vec![1.0, 2.0, 3.0, 4.0]));
        assert!(matches!(result, Err(LevelSchemeError::InvalidBandSpec(_))));
    }
}
