//! Property-list output: an array of `display` / `insert` / `match` dicts.

use crate::model::CompletionRecord;
use anyhow::{bail, Context, Result};
use roxmltree::{Document, Node, ParsingOptions};

const HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" ",
    "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
    "<plist version=\"1.0\">\n",
    "<array>\n",
);

const FOOTER: &str = "</array>\n</plist>\n";

/// Render records in the given order, one tag per line.
pub fn render(records: &[CompletionRecord]) -> String {
    let mut out = String::from(HEADER);
    for record in records {
        out.push_str("<dict>\n");
        write_entry(&mut out, "display", &record.display);
        if let Some(ref insert) = record.insert {
            write_entry(&mut out, "insert", insert);
        }
        write_entry(&mut out, "match", record.effective_match());
        out.push_str("</dict>\n");
    }
    out.push_str(FOOTER);
    out
}

fn write_entry(out: &mut String, key: &str, value: &str) {
    out.push_str(&format!("<key>{}</key>\n", key));
    out.push_str(&format!("<string>{}</string>\n", xml_escape(value)));
}

/// Raw '\r' would be normalized to '\n' by the reader, so it goes out as a
/// character reference.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\r', "&#13;")
}

/// Read a completion plist back into records.
///
/// A `match` equal to the default derived from `display` comes back as
/// implicit, so `render(&parse(doc)?)` reproduces `doc`.
pub fn parse(text: &str) -> Result<Vec<CompletionRecord>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options).context("malformed plist")?;
    let root = doc.root_element();
    if root.tag_name().name() != "plist" {
        bail!("expected <plist> root, found <{}>", root.tag_name().name());
    }
    let array = elements(root)
        .find(|n| n.tag_name().name() == "array")
        .context("plist has no <array>")?;

    elements(array)
        .filter(|n| n.tag_name().name() == "dict")
        .map(parse_dict)
        .collect()
}

fn parse_dict(dict: Node) -> Result<CompletionRecord> {
    let mut display = None;
    let mut insert = None;
    let mut match_name = None;

    let mut children = elements(dict);
    while let Some(key) = children.next() {
        if key.tag_name().name() != "key" {
            bail!("expected <key>, found <{}>", key.tag_name().name());
        }
        let value = children
            .next()
            .with_context(|| format!("key {:?} has no value", key.text().unwrap_or_default()))?;
        let value = value.text().unwrap_or_default().to_string();
        match key.text().unwrap_or_default() {
            "display" => display = Some(value),
            "insert" => insert = Some(value),
            "match" => match_name = Some(value),
            // unknown keys are tolerated
            _ => {}
        }
    }

    let mut record = CompletionRecord::display(display.context("dict without display")?);
    record.insert = insert;
    if let Some(m) = match_name {
        if m != record.effective_match() {
            record.match_name = Some(m);
        }
    }
    Ok(record)
}

fn elements<'a, 'input: 'a>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}
