//! Conversion between `PascalCase`/`camelCase` and `snake_case`.
//!
//! The two directions are not inverses. `to_snake_case` lower-cases
//! everything, while `to_pascal_case` only upper-cases the first letter of
//! each word, so `"UserID"` becomes `"user_id"` and then `"UserId"`.

use regex_lite::Regex;
use std::sync::LazyLock;

// A capitalized word preceded by any character, e.g. the "Server" in "HTTPServer"
static FIRST_CAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"));
// An uppercase letter directly after a lowercase letter or digit
static ALL_CAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

/// Converts `PascalCase` or `camelCase` to `snake_case`.
///
/// A run of capitals is treated as one word, with its last capital starting
/// the next word when a lowercase run follows it.
///
/// # Examples
///
/// ```
/// use utilkit::to_snake_case;
///
/// assert_eq!(to_snake_case("HelloWorld"), "hello_world");
/// assert_eq!(to_snake_case("UserID"), "user_id");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let snake = FIRST_CAP_RE.replace_all(s, "${1}_${2}");
    let snake = ALL_CAP_RE.replace_all(&snake, "${1}_${2}");
    snake.to_lowercase()
}

/// Converts `snake_case` to `PascalCase`.
///
/// Only the first letter of each word is changed; interior capitals are
/// kept as they are.
///
/// # Examples
///
/// ```
/// use utilkit::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello_wORLD"), "HelloWORLD");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let spaced = s.replace('_', " ");
    title_case(&spaced).replace(' ', "")
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = ' ';
    for c in s.chars() {
        if is_word_separator(prev) {
            out.push(title_char(c));
        } else {
            out.push(c);
        }
        prev = c;
    }
    out
}

// Characters whose upper case is several characters (e.g. 'ß') are kept
fn title_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}
