// src/normalize.rs

/// Canonicalize a raw field value for comparison.
///
/// Folds full-width ASCII variants to half-width, collapses whitespace runs
/// (including the ideographic space) to single spaces, trims, and lower-cases
/// Latin letters. Total over all inputs: blank input yields an empty string.
pub fn normalize_field(raw: &str) -> String {
    let folded: String = raw.chars().map(fold_width).collect();
    folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Map full-width ASCII (U+FF01..=U+FF5E) to its half-width form so that
/// "（北京）" and "(北京)" compare equal. CJK text is left untouched.
fn fold_width(c: char) -> char {
    match c {
        '\u{3000}' => ' ',
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_collapses_whitespace() {
        assert_eq!(normalize_field("  AI  实习生 \t"), "ai 实习生");
        assert_eq!(normalize_field("上海\u{3000}浦东"), "上海 浦东");
    }

    #[test]
    fn test_normalize_folds_full_width_ascii() {
        assert_eq!(normalize_field("３００／天"), "300/天");
        assert_eq!(normalize_field("（Ｂｅｉｊｉｎｇ）"), "(beijing)");
    }

    #[test]
    fn test_normalize_lowercases_latin_only() {
        assert_eq!(normalize_field("ByteDance 字节跳动"), "bytedance 字节跳动");
    }

    #[test]
    fn test_normalize_blank_input() {
        assert_eq!(normalize_field(""), "");
        assert_eq!(normalize_field("   \t\n"), "");
    }
}
