//! # 统一错误处理模块
//!
//! 定义 levelscheme 的所有错误类型，使用 `thiserror` 派生。
//!
//! 所有错误都是致命的：任何一个核素出错都会终止整个运行，不会输出残缺的图。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// levelscheme 统一错误类型
#[derive(Error, Debug)]
pub enum LevelSchemeError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // summary 文件解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed record in {path} at line {line}\nReason: {reason}")]
    MalformedRecord {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Truncated file: {path}\nExpected {expected} state lines after the header, found {found}")]
    TruncatedFile {
        path: String,
        expected: usize,
        found: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid band specification: {0}")]
    InvalidBandSpec(String),

    #[error("Per-nucleus option '{field}' has {found} entries, expected {expected} (one per input file)")]
    ConfigLengthMismatch {
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid config file: {path}\nReason: {reason}")]
    ConfigError { path: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 核素上下文
    // ─────────────────────────────────────────────────────────────
    #[error("Nucleus #{index} ({path}): {source}")]
    Nucleus {
        index: usize,
        path: String,
        #[source]
        source: Box<LevelSchemeError>,
    },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to render figure: {0}")]
    RenderError(String),
}

impl LevelSchemeError {
    /// 附加核素序号（1 起）与文件名
    pub fn in_nucleus(self, index: usize, path: impl Into<String>) -> Self {
        LevelSchemeError::Nucleus {
            index,
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LevelSchemeError>;
