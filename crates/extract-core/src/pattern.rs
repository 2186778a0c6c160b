//! Pattern Matcher
//!
//! Evaluates a single relative path against a single pattern string.
//! A pattern is interpreted at match time, in this order:
//!
//! 1. `re:`-prefixed regular expression (only when regex mode is on)
//! 2. glob against the base name
//! 3. `prefix/**/suffix` split on the first `**`
//! 4. glob against the full relative path
//!
//! Nothing is cached; every call compiles the pattern afresh.

use glob::{MatchOptions, Pattern};
use regex::Regex;

/// Marker that turns a pattern into a regular expression when regex mode is on.
pub const REGEX_PREFIX: &str = "re:";

const DOUBLE_STAR: &str = "**";

/// Shell-style glob options: wildcards never cross a `/`.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Check whether `path` matches `pattern`.
///
/// `path` must be relative to the scan root and use forward slashes.
/// Malformed regexes and globs never match.
pub fn matches(path: &str, pattern: &str, regex_enabled: bool) -> bool {
    if regex_enabled {
        if let Some(expr) = pattern.strip_prefix(REGEX_PREFIX) {
            return Regex::new(expr).map(|re| re.is_match(path)).unwrap_or(false);
        }
    }

    if glob_matches(pattern, base_name(path)) {
        return true;
    }

    // Only the first `**` splits; anything after it is taken literally.
    if let Some((prefix, suffix)) = pattern.split_once(DOUBLE_STAR) {
        let prefix = prefix.strip_suffix('/').unwrap_or(prefix);
        let suffix = suffix.strip_prefix('/').unwrap_or(suffix);

        return (prefix.is_empty() || path.starts_with(prefix))
            && (suffix.is_empty() || path.ends_with(suffix));
    }

    glob_matches(pattern, path)
}

/// True if any pattern in the list matches. Order is irrelevant.
pub fn matches_any<S: AsRef<str>>(path: &str, patterns: &[S], regex_enabled: bool) -> bool {
    patterns
        .iter()
        .any(|p| matches(path, p.as_ref(), regex_enabled))
}

fn glob_matches(pattern: &str, candidate: &str) -> bool {
    Pattern::new(&single_segment_glob(pattern))
        .map(|p| p.matches_with(candidate, GLOB_OPTIONS))
        .unwrap_or(false)
}

/// Rewrite a pattern into single-segment shell glob syntax.
///
/// Runs of `*` collapse to one `*` so `**` never spans directories here,
/// and a `[^` class negation becomes `[!`.
fn single_segment_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                out.push('*');
            }
            '[' if chars.peek() == Some(&'^') => {
                chars.next();
                out.push_str("[!");
            }
            _ => out.push(c),
        }
    }
    out
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
