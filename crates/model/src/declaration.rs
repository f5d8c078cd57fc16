//! The declaration model one pass sees.
//!
//! These are plain data mirrors of whatever the compiler front end knows
//! about each type: members in declaration order, annotation simple names,
//! and raw documentation text. The extractor never mutates them.

use serde::{Deserialize, Serialize};

/// Kind of a top-level type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Fully qualified name, namespace segments separated by `.`
    pub qualified_name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub constructors: Vec<ConstructorDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

impl TypeDeclaration {
    /// Only class declarations are scanned for markers.
    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConstructorDecl {
    /// Formal parameters in declaration order. Order is load-bearing:
    /// the runtime binder binds by position.
    #[serde(default)]
    pub parameters: Vec<ParamDecl>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub doc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParamDecl>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub doc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub doc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// Shared annotation/doc helpers for member declarations.
pub trait Documented {
    fn annotations(&self) -> &[String];
    fn doc(&self) -> Option<&str>;

    fn has_annotation(&self, simple_name: &str) -> bool {
        self.annotations().iter().any(|a| a == simple_name)
    }

    /// Substring match over the raw documentation text.
    fn doc_contains(&self, token: &str) -> bool {
        self.doc().map(|d| d.contains(token)).unwrap_or(false)
    }
}

impl Documented for ConstructorDecl {
    fn annotations(&self) -> &[String] {
        &self.annotations
    }
    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

impl Documented for MethodDecl {
    fn annotations(&self) -> &[String] {
        &self.annotations
    }
    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

impl Documented for FieldDecl {
    fn annotations(&self) -> &[String] {
        &self.annotations
    }
    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

impl ParamDecl {
    pub fn has_annotation(&self, simple_name: &str) -> bool {
        self.annotations.iter().any(|a| a == simple_name)
    }
}
