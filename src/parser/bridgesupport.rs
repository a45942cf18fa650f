//! BridgeSupport XML reader.
//!
//! Only the elements that produce completions are kept: `class`,
//! `informal_protocol`, `function`, `constant` and `enum`. Everything else in
//! the file (structs, opaque types, aliases, return values) is ignored.

use crate::model::*;
use anyhow::{Context, Result};
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;

/// Parse one description document.
///
/// Returns `Ok(None)` when the root element has no child elements.
pub fn parse_document(source: &Path, text: &str) -> Result<Option<InterfaceFile>> {
    // BridgeSupport files declare an external DTD
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)
        .with_context(|| format!("malformed XML in {}", source.display()))?;

    let root = doc.root_element();
    if !root.children().any(|n| n.is_element()) {
        return Ok(None);
    }

    let members = root
        .children()
        .filter(|n| n.is_element())
        .filter_map(parse_member)
        .collect();

    Ok(Some(InterfaceFile {
        source: source.to_path_buf(),
        members,
    }))
}

fn parse_member(node: Node) -> Option<MemberNode> {
    let member = match node.tag_name().name() {
        "class" | "informal_protocol" => MemberNode::Type(parse_type(node)),
        "function" => MemberNode::Function(FunctionDecl {
            name: attr(node, "name"),
            args: parse_args(node),
        }),
        "constant" => MemberNode::Constant(ConstantDecl {
            name: attr(node, "name"),
            declared_type: attr(node, "declared_type"),
        }),
        "enum" => MemberNode::Enum(EnumDecl {
            name: attr(node, "name"),
            value: attr(node, "value"),
        }),
        _ => return None,
    };
    Some(member)
}

fn parse_type(node: Node) -> TypeDecl {
    let methods = children_named(node, "method")
        .map(|m| MethodDecl {
            selector: attr(m, "selector"),
            class_method: is_class_method(m),
            args: parse_args(m),
        })
        .collect();

    TypeDecl {
        name: attr(node, "name"),
        methods,
    }
}

fn parse_args(node: Node) -> Vec<Argument> {
    children_named(node, "arg")
        .map(|a| Argument {
            name: attr(a, "name"),
            declared_type: attr(a, "declared_type"),
        })
        .collect()
}

/// Present `class_method` flags the method, unless spelled out as false.
fn is_class_method(node: Node) -> bool {
    match node.attribute("class_method") {
        Some(v) => !matches!(v.trim(), "false" | "0"),
        None => false,
    }
}

fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |c| c.is_element() && c.tag_name().name() == name)
}

/// Attribute value, or empty when absent.
fn attr(node: Node, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}
