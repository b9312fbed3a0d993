//! Redis-style glob matching
//!
//! Implements the pattern dialect of Redis `KEYS`/`SCAN MATCH`:
//!
//! - `*` matches any run of characters, including none
//! - `?` matches exactly one character
//! - `[abc]`, `[a-z]` and `[^abc]` match one character of a set
//! - `\x` matches `x` literally

/// Whether `text` matches the glob `pattern`
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    match_from(&pattern, &text)
}

fn match_from(pattern: &[char], text: &[char]) -> bool {
    let mut p = 0;
    let mut t = 0;

    while p < pattern.len() {
        match pattern[p] {
            '*' => {
                while p + 1 < pattern.len() && pattern[p + 1] == '*' {
                    p += 1;
                }
                if p + 1 == pattern.len() {
                    return true;
                }
                return (t..=text.len())
                    .any(|start| match_from(&pattern[p + 1..], &text[start..]));
            }
            '?' => {
                if t == text.len() {
                    return false;
                }
                p += 1;
                t += 1;
            }
            '[' => {
                let Some(&c) = text.get(t) else {
                    return false;
                };
                let (matched, next) = match_class(pattern, p + 1, c);
                if !matched {
                    return false;
                }
                p = next;
                t += 1;
            }
            '\\' if p + 1 < pattern.len() => {
                if text.get(t) != Some(&pattern[p + 1]) {
                    return false;
                }
                p += 2;
                t += 1;
            }
            literal => {
                if text.get(t) != Some(&literal) {
                    return false;
                }
                p += 1;
                t += 1;
            }
        }
    }

    t == text.len()
}

/// Match `c` against the class starting at `start` (just past `[`)
///
/// Returns whether it matched and the pattern index after the closing `]`.
/// An unterminated class extends to the end of the pattern.
fn match_class(pattern: &[char], start: usize, c: char) -> (bool, usize) {
    let mut i = start;
    let negate = pattern.get(i) == Some(&'^');
    if negate {
        i += 1;
    }

    let mut matched = false;
    while i < pattern.len() && pattern[i] != ']' {
        if pattern[i] == '\\' && i + 1 < pattern.len() {
            matched |= pattern[i + 1] == c;
            i += 2;
        } else if i + 2 < pattern.len() && pattern[i + 1] == '-' && pattern[i + 2] != ']' {
            let (lo, hi) = if pattern[i] <= pattern[i + 2] {
                (pattern[i], pattern[i + 2])
            } else {
                (pattern[i + 2], pattern[i])
            };
            matched |= (lo..=hi).contains(&c);
            i += 3;
        } else {
            matched |= pattern[i] == c;
            i += 1;
        }
    }

    let next = if i < pattern.len() { i + 1 } else { i };
    (matched != negate, next)
}
