//! # 能级数据模型
//!
//! 定义单个激发态记录 `StateRecord` 以及按能级顺序排列的 `StateCollection`。
//!
//! `StateCollection` 中每个能级和它的带坐标（横坐标）存放在同一个 `Level` 里，
//! 删除能级时带坐标随之删除，两者不可能错位。
//!
//! ## 依赖关系
//! - 被 `parsers/summary.rs` 创建
//! - 被 `scheme/` 修改和读取

/// 默认带坐标（不分带时所有能级放在同一列）
pub const DEFAULT_BAND: f64 = 1.0;

/// KSHELL summary 文件中的一个激发态
#[derive(Debug, Clone, PartialEq)]
pub struct StateRecord {
    /// 序号 N（文件中为浮点数，语义上是整数排名）
    pub ordinal: f64,

    /// 2J
    pub spin_doubled: i32,

    /// 宇称符号（"+" / "-"）
    pub parity: String,

    /// N_Jp，同一 J^π 下的序号，默认用作带坐标
    pub intrinsic_band_id: f64,

    /// 同位旋 T
    pub isospin: i32,

    /// 绝对能量 E (MeV)
    pub energy_abs: f64,

    /// 激发能 Ex (MeV)
    pub energy_excitation: f64,

    /// 对应的 log 文件名，原样保留
    pub provenance_tag: String,
}

impl StateRecord {
    /// 自旋宇称显示字符串：2J 为偶数时 "J+"，奇数时 "2J/2+"
    pub fn spin_parity(&self) -> String {
        format_spin_parity(self.spin_doubled, &self.parity)
    }
}

/// 格式化自旋宇称
pub fn format_spin_parity(spin_doubled: i32, parity: &str) -> String {
    if spin_doubled % 2 == 0 {
        format!("{}{}", spin_doubled / 2, parity)
    } else {
        format!("{}/2{}", spin_doubled, parity)
    }
}

/// 能级及其带坐标
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub state: StateRecord,
    pub band: f64,
}

/// 一个核素的能级集合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateCollection {
    levels: Vec<Level>,
}

impl StateCollection {
    /// 从记录创建，所有能级放在默认带
    pub fn from_states(states: Vec<StateRecord>) -> Self {
        let levels = states
            .into_iter()
            .map(|state| Level {
                state,
                band: DEFAULT_BAND,
            })
            .collect();
        StateCollection { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn states(&self) -> impl Iterator<Item = &StateRecord> {
        self.levels.iter().map(|l| &l.state)
    }

    pub fn band_coordinates(&self) -> Vec<f64> {
        self.levels.iter().map(|l| l.band).collect()
    }

    pub fn excitation_energies(&self) -> Vec<f64> {
        self.levels.iter().map(|l| l.state.energy_excitation).collect()
    }

    pub fn spin_parities(&self) -> Vec<String> {
        self.levels.iter().map(|l| l.state.spin_parity()).collect()
    }

    /// 逐个设置带坐标，调用方保证长度一致
    pub(crate) fn set_bands<I>(&mut self, bands: I)
    where
        I: IntoIterator<Item = f64>,
    {
        for (level, band) in self.levels.iter_mut().zip(bands) {
            level.band = band;
        }
    }

    /// 删除指定下标（升序）的能级
    ///
    /// 按降序删除，前面的删除不会影响后面的下标。
    pub(crate) fn remove_indices(&mut self, indices: &[usize]) {
        for &idx in indices.iter().rev() {
            if idx < self.levels.len() {
                self.levels.remove(idx);
            }
        }
    }
}
