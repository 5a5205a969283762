//! Category title cleanup.
//!
//! Archive block titles are rendered as `"Television | Drama Series in 2015"`
//! or `"Drama Series in 2015"`. Only the category name is kept as the key.

use once_cell::sync::Lazy;
use regex::Regex;

// Only these labels are recognized; any other leading label is kept.
static SECTION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:Television|Film|\|) \| ").expect("valid prefix regex"));

static YEAR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" ?in ?[0-9]{4}$").expect("valid year suffix regex"));

/// Strip the section label prefix and the trailing `in <year>` from a title.
///
/// Everything up to and including the first `"Television | "`, `"Film | "`
/// or `"| | "` is removed, then a trailing `" in 2015"` / `"in2015"`.
/// No other whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use award_archive::normalize::normalize_title;
///
/// assert_eq!(normalize_title("Television | Best Drama in 2015"), "Best Drama");
/// assert_eq!(normalize_title("Best Drama in2015"), "Best Drama");
/// assert_eq!(normalize_title("Best Single Documentary"), "Best Single Documentary");
/// ```
pub fn normalize_title(raw: &str) -> String {
    let rest = match SECTION_PREFIX.find(raw) {
        Some(m) => &raw[m.end()..],
        None => raw,
    };

    match YEAR_SUFFIX.find(rest) {
        Some(m) => rest[..m.start()].to_string(),
        None => rest.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_prefix_and_year() {
        assert_eq!(normalize_title("Television | Best Drama in 2015"), "Best Drama");
        assert_eq!(normalize_title("Film | Best Film in 1999"), "Best Film");
    }

    #[test]
    fn test_year_without_space() {
        assert_eq!(normalize_title("Best Drama in2015"), "Best Drama");
        assert_eq!(normalize_title("Best Dramain 2015"), "Best Drama");
    }

    #[test]
    fn test_plain_title_unchanged() {
        assert_eq!(normalize_title("Best Single Documentary"), "Best Single Documentary");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn test_unknown_label_is_kept() {
        assert_eq!(normalize_title("Games | Best Game in 2010"), "Games | Best Game");
    }

    #[test]
    fn test_pipe_label() {
        assert_eq!(normalize_title("| | Special Award in 1980"), "Special Award");
    }

    #[test]
    fn test_only_first_prefix_removed() {
        assert_eq!(
            normalize_title("Television | Film | Best Adaptation"),
            "Film | Best Adaptation"
        );
    }

    #[test]
    fn test_year_must_be_at_end() {
        assert_eq!(
            normalize_title("Best Drama in 2015 (Special)"),
            "Best Drama in 2015 (Special)"
        );
        assert_eq!(normalize_title("Best Drama in 215"), "Best Drama in 215");
    }

    #[test]
    fn test_year_must_be_ascii_digits() {
        assert_eq!(normalize_title("Best Drama in ٢٠١٥"), "Best Drama in ٢٠١٥");
        assert_eq!(normalize_title("Best Drama in ２０１５"), "Best Drama in ２０１５");
    }

    #[test]
    fn test_other_whitespace_untouched() {
        assert_eq!(normalize_title("  Best Drama  in 2015"), "  Best Drama ");
        assert_eq!(normalize_title("Best Drama\n"), "Best Drama\n");
    }

    #[test]
    fn test_idempotent_on_normalized() {
        for raw in [
            "Television | Best Drama in 2015",
            "Best Drama in2015",
            "Best Single Documentary",
            "Film | Outstanding British Film in 2003",
        ] {
            let once = normalize_title(raw);
            assert_eq!(normalize_title(&once), once);
        }
    }
}
