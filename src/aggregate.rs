//! Ordering and de-duplication of the collected completion records.

use crate::model::CompletionRecord;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[:.]").unwrap());

// Trailing " (type)" / " (value)" annotation on constants and enums.
// ASCII whitespace only: a no-break space before '(' is part of the name.
static RE_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\s)\(.*").unwrap());

/// Key used to order records: `display` without ':' and '.', cut at the
/// first annotation.
/// "NSString.stringWithString:" → "NSStringstringWithString", "MaxValue (int)" → "MaxValue"
pub fn sort_key(record: &CompletionRecord) -> String {
    let stripped = RE_SEPARATORS.replace_all(&record.display, "");
    let stripped: &str = &stripped;
    match RE_ANNOTATION.find(stripped) {
        Some(m) => stripped[..m.start()].to_string(),
        None => stripped.to_string(),
    }
}

/// Stable ascending sort by [`sort_key`], byte-wise.
pub fn sort(records: &mut [CompletionRecord]) {
    records.sort_by_cached_key(sort_key);
}

/// Drop every record whose emitted triple (display, insert, match) was
/// already seen, keeping the first occurrence.
pub fn dedup(records: Vec<CompletionRecord>) -> Vec<CompletionRecord> {
    let mut seen: HashSet<(String, Option<String>, String)> = HashSet::new();
    records
        .into_iter()
        .filter(|r| {
            seen.insert((
                r.display.clone(),
                r.insert.clone(),
                r.effective_match().to_string(),
            ))
        })
        .collect()
}

/// Sort then de-duplicate.
pub fn finalize(mut records: Vec<CompletionRecord>) -> Vec<CompletionRecord> {
    sort(&mut records);
    dedup(records)
}
