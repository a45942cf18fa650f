//! Snippet synthesis for method and function completions.
//!
//! A snippet is a parenthesized, comma-separated list of `${n:type name}`
//! placeholders. For multi-keyword selectors every argument after the first is
//! preceded by its selector keyword, so `doFoo:bar:` taking two arguments
//! becomes `(${1:TypeA argA}, bar:${2:TypeB argB})`.

use crate::model::Argument;

/// Separator between selector keywords.
pub const SELECTOR_SEPARATOR: char = ':';

/// Build the insert text for `full_name` called with `args`.
///
/// Returns an empty string when there are no arguments.
pub fn synthesize(full_name: &str, args: &[Argument]) -> String {
    // Keyword for argument i lives at keywords[i]; index 0 is the visible name.
    let keywords: Vec<&str> = if args.len() > 1 {
        selector_keywords(full_name)
    } else {
        Vec::new()
    };

    let placeholders: Vec<String> = args
        .iter()
        .enumerate()
        .map(|(i, arg)| {
            let prefix = match keywords.get(i) {
                Some(keyword) if i > 0 => format!("{}{}", keyword, SELECTOR_SEPARATOR),
                _ => String::new(),
            };
            format!(
                "{}${{{}:{} {}}}",
                prefix,
                i + 1,
                arg.declared_type,
                arg.name
            )
        })
        .collect();

    if placeholders.is_empty() {
        return String::new();
    }
    format!("({})", placeholders.join(", "))
}

/// Split a selector into its keywords, dropping trailing empty segments.
/// "doFoo:bar:" → ["doFoo", "bar"]
pub fn selector_keywords(selector: &str) -> Vec<&str> {
    let mut keywords: Vec<&str> = selector.split(SELECTOR_SEPARATOR).collect();
    while keywords.last().is_some_and(|k| k.is_empty()) {
        keywords.pop();
    }
    keywords
}

/// Text before the first selector separator, or the whole name.
/// "NSString.stringWithFormat:arguments:" → "NSString.stringWithFormat"
pub fn leading_keyword(name: &str) -> &str {
    match name.find(SELECTOR_SEPARATOR) {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn upcase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
