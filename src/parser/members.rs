//! Member parser: turns interface members into completion records.

use crate::model::*;
use crate::snippet::{leading_keyword, synthesize, upcase_first};

/// Produce the completion records for one member.
pub fn parse(node: &MemberNode) -> Vec<CompletionRecord> {
    match node {
        MemberNode::Type(decl) => parse_type(decl),
        MemberNode::Function(decl) => vec![parse_function(decl)],
        MemberNode::Constant(decl) => vec![annotated(&decl.name, &decl.declared_type)],
        MemberNode::Enum(decl) => vec![annotated(&decl.name, &decl.value)],
    }
}

/// The type itself followed by one record per method.
fn parse_type(decl: &TypeDecl) -> Vec<CompletionRecord> {
    let mut records = Vec::with_capacity(decl.methods.len() + 1);
    records.push(CompletionRecord::display(&decl.name));
    records.extend(decl.methods.iter().map(|m| parse_method(&decl.name, m)));
    records
}

fn parse_method(type_name: &str, method: &MethodDecl) -> CompletionRecord {
    let method_name = if method.class_method {
        format!("{}.{}", type_name, method.selector)
    } else {
        method.selector.clone()
    };

    match method.args.len() {
        0 => CompletionRecord::display(method_name),
        1 => {
            let insert = synthesize(&method_name, &method.args);
            CompletionRecord::display(method_name).with_insert(insert)
        }
        _ => {
            // Filter on the first keyword only; the snippet carries the rest
            let insert = synthesize(&method_name, &method.args);
            let match_name = leading_keyword(&method_name).to_string();
            CompletionRecord::display(method_name)
                .with_insert(insert)
                .with_match(match_name)
        }
    }
}

fn parse_function(decl: &FunctionDecl) -> CompletionRecord {
    if decl.args.is_empty() {
        return CompletionRecord::display(&decl.name);
    }
    CompletionRecord::display(&decl.name).with_insert(synthesize(&decl.name, &decl.args))
}

/// Constants and enums: "Name (secondary)", matched on the capitalized name.
fn annotated(name: &str, secondary: &str) -> CompletionRecord {
    let match_name = upcase_first(name);
    CompletionRecord::display(format!("{} ({})", match_name, secondary)).with_match(match_name)
}
