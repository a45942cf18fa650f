//! Data model for parsed interface descriptions and completion records.

use std::path::PathBuf;

/// One parsed description file.
#[derive(Debug, Default)]
pub struct InterfaceFile {
    pub source: PathBuf,
    /// Recognized members in document order
    pub members: Vec<MemberNode>,
}

/// A top-level interface member. The set of kinds is closed.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberNode {
    Type(TypeDecl),
    Function(FunctionDecl),
    Constant(ConstantDecl),
    Enum(EnumDecl),
}

/// A `<class>` or `<informal_protocol>`; both complete the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: String,
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodDecl {
    /// Full selector, e.g. "doFoo:bar:"
    pub selector: String,
    /// Invoked on the type rather than an instance
    pub class_method: bool,
    pub args: Vec<Argument>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub args: Vec<Argument>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantDecl {
    pub name: String,
    pub declared_type: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumDecl {
    pub name: String,
    pub value: String,
}

/// A positional argument of a method or function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Argument {
    pub name: String,
    pub declared_type: String,
}

impl Argument {
    pub fn new(declared_type: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
        }
    }
}

/// One entry of the completion list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompletionRecord {
    /// Label shown to the user
    pub display: String,
    /// Snippet text; `None` inserts `display` as-is
    pub insert: Option<String>,
    /// Explicit filter string; see [`CompletionRecord::effective_match`]
    pub match_name: Option<String>,
}

impl CompletionRecord {
    pub fn display(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            ..Default::default()
        }
    }

    pub fn with_insert(mut self, insert: impl Into<String>) -> Self {
        self.insert = Some(insert.into());
        self
    }

    pub fn with_match(mut self, match_name: impl Into<String>) -> Self {
        self.match_name = Some(match_name.into());
        self
    }

    /// The match string written to the plist: the explicit one, or `display`
    /// with a single trailing ':' removed.
    pub fn effective_match(&self) -> &str {
        match self.match_name {
            Some(ref m) => m,
            None => self.display.strip_suffix(':').unwrap_or(&self.display),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_match_strips_one_colon() {
        assert_eq!(CompletionRecord::display("setTitle:").effective_match(), "setTitle");
        assert_eq!(CompletionRecord::display("a::").effective_match(), "a:");
        assert_eq!(CompletionRecord::display("NSObject").effective_match(), "NSObject");
    }

    #[test]
    fn explicit_match_wins() {
        let record = CompletionRecord::display("MaxValue (int)").with_match("MaxValue");
        assert_eq!(record.effective_match(), "MaxValue");
    }
}
