//! # 核素标签格式化
//!
//! 配置中的核素名常沿用 matplotlib mathtext 写法（如 `$^{54}$Cr`），
//! 这里转换为 Unicode 上标（`⁵⁴Cr`）供 plotters 直接绘制。
//!
//! ## 依赖关系
//! - 被 `scheme/plot.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;
use std::sync::LazyLock;

/// `^{...}` 或 `^x` 形式的上标
static SUPERSCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^\{([^}]*)\}|\^([0-9+\-])").unwrap());

/// 将 mathtext 风格的标签转换为纯文本
pub fn to_display_label(label: &str) -> String {
    let converted = SUPERSCRIPT.replace_all(label, |caps: &regex::Captures| {
        let body = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or("");
        body.chars().map(to_superscript).collect::<String>()
    });

    converted
        .chars()
        .filter(|c| !matches!(c, '$' | '{' | '}'))
        .collect()
}

fn to_superscript(c: char) -> char {
    match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mathtext_mass_number() {
        assert_eq!(to_display_label("$^{54}$Cr"), "⁵⁴Cr");
        assert_eq!(to_display_label("$^{43}$Ca"), "⁴³Ca");
    }

    #[test]
    fn test_single_char_superscript() {
        assert_eq!(to_display_label("$^4$He"), "⁴He");
    }

    #[test]
    fn test_plain_label_unchanged() {
        assert_eq!(to_display_label("Cr54"), "Cr54");
    }
}
