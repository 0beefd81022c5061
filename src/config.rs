//! # 运行配置
//!
//! 将命令行参数或 TOML 配置文件转换为不可变的 `RunConfig`，构建一次后
//! 以引用传给处理流程。
//!
//! ## TOML 格式
//! ```toml
//! share_y_axis = true
//!
//! [[nucleus]]
//! file = "summary_Cr54.txt"   # 相对路径以配置文件所在目录为基准
//! label = "$^{54}$Cr"
//! states = 5
//! ignore = [3]
//! remove_doubles = true
//! bands = [2, 4, 4, 5]         # 或 "njp" / "none" / 0
//! annotate = true
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `cli/nucleus.rs` 和 `models/plot_spec.rs`
//! - 使用 `serde` + `toml` 读取配置文件

use crate::cli::nucleus::NucleusArgs;
use crate::error::{LevelSchemeError, Result};
use crate::models::plot_spec::default_label;
use crate::models::{BandSplit, NucleusSpec, RunConfig};

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// 从命令行参数构建运行配置
pub fn load_run_config(args: &NucleusArgs) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => from_toml_file(path)?,
        None => from_cli(args)?,
    };

    if args.share_y {
        config.share_y_axis = true;
    }

    if config.nuclei.is_empty() {
        return Err(LevelSchemeError::InvalidArgument(
            "no nuclei given (use --input or --config)".to_string(),
        ));
    }

    Ok(config)
}

// ─────────────────────────────────────────────────────────────
// 命令行
// ─────────────────────────────────────────────────────────────

/// 按核素重复的选项：省略或与输入文件数相同
fn per_nucleus<'a, T>(field: &str, values: &'a [T], expected: usize) -> Result<Option<&'a [T]>> {
    match values.len() {
        0 => Ok(None),
        len if len == expected => Ok(Some(values)),
        found => Err(LevelSchemeError::ConfigLengthMismatch {
            field: field.to_string(),
            expected,
            found,
        }),
    }
}

/// 从命令行参数构建
pub fn from_cli(args: &NucleusArgs) -> Result<RunConfig> {
    let n = args.input.len();
    if n == 0 {
        return Err(LevelSchemeError::InvalidArgument(
            "no nuclei given (use --input or --config)".to_string(),
        ));
    }

    let states = per_nucleus("states", &args.states, n)?.ok_or_else(|| {
        LevelSchemeError::ConfigLengthMismatch {
            field: "states".to_string(),
            expected: n,
            found: 0,
        }
    })?;
    let labels = per_nucleus("label", &args.label, n)?;
    let ignores = per_nucleus("ignore", &args.ignore, n)?;
    let remove_doubles = per_nucleus("remove-doubles", &args.remove_doubles, n)?;
    let bands = per_nucleus("bands", &args.bands, n)?;
    let annotate = per_nucleus("annotate", &args.annotate, n)?;

    let mut nuclei = Vec::with_capacity(n);
    for (i, file) in args.input.iter().enumerate() {
        let mut spec = NucleusSpec::new(file.clone(), states[i]);

        if let Some(labels) = labels {
            spec.label = labels[i].clone();
        }
        if let Some(ignores) = ignores {
            spec.ignore = parse_ignore_list(&ignores[i])
                .map_err(|e| e.in_nucleus(i + 1, file.display().to_string()))?;
        }
        if let Some(flags) = remove_doubles {
            spec.remove_doubles = flags[i];
        }
        if let Some(bands) = bands {
            spec.bands = bands[i]
                .parse::<BandSplit>()
                .map_err(|e| e.in_nucleus(i + 1, file.display().to_string()))?;
        }
        if let Some(flags) = annotate {
            spec.annotate = flags[i];
        }

        nuclei.push(spec);
    }

    Ok(RunConfig {
        nuclei,
        share_y_axis: args.share_y,
    })
}

/// 解析忽略列表（逗号分隔的 1 起位置，`0`/`none`/空 表示不忽略）
pub fn parse_ignore_list(input: &str) -> Result<BTreeSet<usize>> {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case("none") {
        return Ok(BTreeSet::new());
    }

    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>().map_err(|_| {
                LevelSchemeError::InvalidArgument(format!(
                    "Invalid ignore list '{}': '{}' is not a state position",
                    input, s
                ))
            })
        })
        .filter(|pos| !matches!(pos, Ok(0)))
        .collect()
}

// ─────────────────────────────────────────────────────────────
// TOML 配置文件
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    share_y_axis: bool,
    #[serde(default)]
    nucleus: Vec<TomlNucleus>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlNucleus {
    file: PathBuf,
    label: Option<String>,
    states: usize,
    #[serde(default)]
    ignore: Vec<usize>,
    #[serde(default)]
    remove_doubles: bool,
    bands: Option<TomlBands>,
    #[serde(default = "default_annotate")]
    annotate: bool,
}

fn default_annotate() -> bool {
    true
}

/// `bands` 可以是模式字符串、整数 0（N_Jp），或坐标数组
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlBands {
    Mode(String),
    Code(i64),
    Explicit(Vec<f64>),
}

impl TomlBands {
    fn into_band_split(self) -> Result<BandSplit> {
        match self {
            TomlBands::Mode(mode) => mode.parse(),
            TomlBands::Code(0) => Ok(BandSplit::Derived),
            TomlBands::Code(other) => Err(LevelSchemeError::InvalidBandSpec(format!(
                "'{}' (expected 0, 'njp', 'none' or a list of numbers)",
                other
            ))),
            TomlBands::Explicit(coords) if coords.is_empty() => Err(
                LevelSchemeError::InvalidBandSpec("empty band list".to_string()),
            ),
            TomlBands::Explicit(coords) => Ok(BandSplit::Explicit(coords)),
        }
    }
}

/// 读取 TOML 配置文件
pub fn from_toml_file(path: &Path) -> Result<RunConfig> {
    let content = fs::read_to_string(path).map_err(|e| LevelSchemeError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    from_toml_str(&content, base_dir, &path.display().to_string())
}

/// 从字符串解析 TOML 配置，相对路径以 `base_dir` 为基准
pub fn from_toml_str(content: &str, base_dir: &Path, source: &str) -> Result<RunConfig> {
    let parsed: TomlConfig = toml::from_str(content).map_err(|e| LevelSchemeError::ConfigError {
        path: source.to_string(),
        reason: e.to_string(),
    })?;

    let mut nuclei = Vec::with_capacity(parsed.nucleus.len());
    for (i, entry) in parsed.nucleus.into_iter().enumerate() {
        let file = if entry.file.is_relative() {
            base_dir.join(&entry.file)
        } else {
            entry.file.clone()
        };

        let bands = match entry.bands {
            Some(bands) => bands
                .into_band_split()
                .map_err(|e| e.in_nucleus(i + 1, file.display().to_string()))?,
            None => BandSplit::Derived,
        };

        nuclei.push(NucleusSpec {
            label: entry.label.unwrap_or_else(|| default_label(&file)),
            states: entry.states,
            ignore: entry.ignore.into_iter().filter(|&pos| pos != 0).collect(),
            remove_doubles: entry.remove_doubles,
            bands,
            annotate: entry.annotate,
            file,
        });
    }

    Ok(RunConfig {
        nuclei,
        share_y_axis: parsed.share_y_axis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(inputs: &[&str], states: &[usize]) -> NucleusArgs {
        NucleusArgs {
            input: inputs.iter().map(PathBuf::from).collect(),
            states: states.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cli_defaults() {
        let config = from_cli(&args(&["summary_Cr54.txt"], &[25])).unwrap();
        assert_eq!(config.nuclei.len(), 1);

        let spec = &config.nuclei[0];
        assert_eq!(spec.label, "Cr54");
        assert_eq!(spec.states, 25);
        assert!(spec.ignore.is_empty());
        assert!(!spec.remove_doubles);
        assert_eq!(spec.bands, BandSplit::Derived);
        assert!(spec.annotate);
        assert!(!config.share_y_axis);
    }

    #[test]
    fn test_cli_per_nucleus_options() {
        let mut a = args(&["summary_Cr54.txt", "summary_Ca43.txt"], &[5, 5]);
        a.label = vec!["$^{54}$Cr".to_string(), "$^{43}$Ca".to_string()];
        a.ignore = vec!["0".to_string(), "2, 4".to_string()];
        a.bands = vec!["2,4,4,5,3".to_string(), "none".to_string()];
        a.annotate = vec![true, false];
        a.share_y = true;

        let config = load_run_config(&a).unwrap();
        assert!(config.share_y_axis);
        assert_eq!(config.nuclei[1].label, "$^{43}$Ca");
        assert!(config.nuclei[0].ignore.is_empty());
        assert_eq!(
            config.nuclei[1].ignore.iter().copied().collect::<Vec<_>>(),
            vec![2, 4]
        );
        assert_eq!(
            config.nuclei[0].bands,
            BandSplit::Explicit(vec![2.0, 4.0, 4.0, 5.0, 3.0])
        );
        assert_eq!(config.nuclei[1].bands, BandSplit::Uniform);
        assert!(!config.nuclei[1].annotate);
    }

    #[test]
    fn test_cli_length_mismatch() {
        let mut a = args(&["a.txt", "b.txt"], &[5, 5]);
        a.remove_doubles = vec![true];

        match from_cli(&a) {
            Err(LevelSchemeError::ConfigLengthMismatch {
                field,
                expected,
                found,
            }) => {
                assert_eq!(field, "remove-doubles");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected ConfigLengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_states_required() {
        let result = from_cli(&args(&["a.txt"], &[]));
        assert!(matches!(
            result,
            Err(LevelSchemeError::ConfigLengthMismatch { found: 0, .. })
        ));
    }

    #[test]
    fn test_cli_invalid_band_spec() {
        let mut a = args(&["a.txt", "b.txt"], &[3, 3]);
        a.bands = vec!["njp".to_string(), "diagonal".to_string()];

        match from_cli(&a) {
            Err(LevelSchemeError::Nucleus {
                index,
                path,
                source,
            }) => {
                assert_eq!(index, 2);
                assert_eq!(path, "b.txt");
                assert!(matches!(*source, LevelSchemeError::InvalidBandSpec(_)));
            }
            other => panic!("expected nucleus error, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_invalid_ignore_list() {
        let mut a = args(&["a.txt", "b.txt"], &[3, 3]);
        a.ignore = vec!["x".to_string(), "1".to_string()];

        match from_cli(&a) {
            Err(LevelSchemeError::Nucleus { index, path, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(path, "a.txt");
            }
            other => panic!("expected nucleus error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_nuclei() {
        let result = load_run_config(&NucleusArgs::default());
        assert!(matches!(result, Err(LevelSchemeError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_ignore_list() {
        assert!(parse_ignore_list("").unwrap().is_empty());
        assert!(parse_ignore_list("none").unwrap().is_empty());
        assert!(parse_ignore_list("0").unwrap().is_empty());
        assert_eq!(
            parse_ignore_list("3,1, 3").unwrap().into_iter().collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert!(parse_ignore_list("1,x").is_err());
    }

    #[test]
    fn test_toml_config() {
        let content = r#"
share_y_axis = true

[[nucleus]]
file = "summary_Cr54.txt"
label = "$^{54}$Cr"
states = 5
bands = [2, 4, 4, 5, 3]
remove_doubles = true

[[nucleus]]
file = "/data/summary_Ca43.txt"
states = 14
ignore = [0]
bands = 0
annotate = false

[[nucleus]]
file = "summary_Ni56.txt"
states = 8
bands = "none"
"#;
        let config = from_toml_str(content, Path::new("runs"), "scheme.toml").unwrap();
        assert!(config.share_y_axis);
        assert_eq!(config.nuclei.len(), 3);

        let cr = &config.nuclei[0];
        assert_eq!(cr.file, PathBuf::from("runs/summary_Cr54.txt"));
        assert_eq!(cr.bands, BandSplit::Explicit(vec![2.0, 4.0, 4.0, 5.0, 3.0]));
        assert!(cr.remove_doubles);
        assert!(cr.annotate);

        let ca = &config.nuclei[1];
        assert_eq!(ca.file, PathBuf::from("/data/summary_Ca43.txt"));
        assert_eq!(ca.label, "Ca43");
        assert!(ca.ignore.is_empty());
        assert_eq!(ca.bands, BandSplit::Derived);
        assert!(!ca.annotate);

        assert_eq!(config.nuclei[2].bands, BandSplit::Uniform);
    }

    #[test]
    fn test_toml_invalid_band_code() {
        let content = "[[nucleus]]\nfile = \"a.txt\"\nstates = 2\nbands = 3\n";
        let result = from_toml_str(content, Path::new(""), "bad.toml");
        match result {
            Err(LevelSchemeError::Nucleus { index, source, .. }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, LevelSchemeError::InvalidBandSpec(_)));
            }
            other => panic!("expected InvalidBandSpec, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_unknown_field() {
        let content = "[[nucleus]]\nfile = \"a.txt\"\nstates = 2\ncolour = \"red\"\n";
        assert!(matches!(
            from_toml_str(content, Path::new(""), "bad.toml"),
            Err(LevelSchemeError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_toml_file_with_cli_share_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scheme.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[[nucleus]]\nfile = \"summary_Cr54.txt\"\nstates = 3").unwrap();

        let a = NucleusArgs {
            config: Some(path),
            share_y: true,
            ..Default::default()
        };
        let config = load_run_config(&a).unwrap();
        assert!(config.share_y_axis);
        assert_eq!(config.nuclei[0].file, dir.path().join("summary_Cr54.txt"));
    }
}
