//! # 重复能级去除
//!
//! KSHELL 对不同 M 子空间分别计算时，同一个能级会以相同激发能出现多次。
//! 这里只比较相邻能级（输入应按激发能排序），相同能量的连续一段只保留第一个。
//!
//! ## 依赖关系
//! - 被 `scheme/pipeline.rs` 调用
//! - 使用 `models/state.rs`

use crate::models::StateCollection;

/// 判定两个能级相同的激发能容差 (MeV)
pub const DOUBLE_STATE_TOLERANCE: f64 = 1e-5;

/// 去除与前一个能级激发能相同的能级，返回删除的个数
///
/// 每个能级都与它在原始顺序中的前一个比较，因此三个及以上连续相同的能级
/// 会整体折叠成第一个。带坐标与能级一起删除。
pub fn remove_double_states(collection: &mut StateCollection, tolerance: f64) -> usize {
    let indices = double_state_indices(&collection.excitation_energies(), tolerance);
    collection.remove_indices(&indices);
    indices.len()
}

/// 找出需要删除的下标（升序）
fn double_state_indices(energies: &[f64], tolerance: f64) -> Vec<usize> {
    energies
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| (pair[1] - pair[0]).abs() <= tolerance)
        .map(|(i, _)| i + 1)
        .collect()
}
