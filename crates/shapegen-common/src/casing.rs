//! Identifier casing for generated Rust names.
//!
//! Smithy shape names are written in `PascalCase`, but nothing stops a model
//! from using acronyms (`HTTPHeaders`), digits (`Ec2Instance`) or separators
//! (`my_shape`). Every generated module and type name goes through the same
//! word splitter so the two casings always agree on word boundaries:
//!
//! | Input | `to_snake_case` | `to_pascal_case` |
//! |-------|-----------------|------------------|
//! | `ListA` | `list_a` | `ListA` |
//! | `HTTPServer` | `http_server` | `HttpServer` |
//! | `Ec2Instance` | `ec2_instance` | `Ec2Instance` |

use smallvec::SmallVec;

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | ' ' | '.')
}

/// Split an identifier into words.
///
/// A new word starts at an uppercase letter that follows a lowercase letter
/// or digit, and at the last uppercase letter of an acronym that is followed
/// by a lowercase letter. Separators are dropped.
pub fn split_words(ident: &str) -> SmallVec<[&str; 4]> {
    let mut words = SmallVec::new();
    for segment in ident.split(is_separator) {
        if segment.is_empty() {
            continue;
        }
        let chars: SmallVec<[(usize, char); 32]> = segment.char_indices().collect();
        let mut start = 0;
        for i in 1..chars.len() {
            let (pos, cur) = chars[i];
            let prev = chars[i - 1].1;
            let next = chars.get(i + 1).map(|&(_, c)| c);
            let boundary = cur.is_uppercase()
                && (prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next.is_some_and(char::is_lowercase)));
            if boundary {
                words.push(&segment[start..pos]);
                start = pos;
            }
        }
        words.push(&segment[start..]);
    }
    words
}

/// Convert an identifier to `snake_case`.
pub fn to_snake_case(ident: &str) -> String {
    let words = split_words(ident);
    let mut out = String::with_capacity(ident.len() + words.len());
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push('_');
        }
        out.extend(word.chars().flat_map(char::to_lowercase));
    }
    out
}

/// Convert an identifier to `PascalCase`.
pub fn to_pascal_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    for word in split_words(ident) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/casing_tests.rs"]
mod tests;
