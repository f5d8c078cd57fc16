//! Exposed bean properties: per-member documentation grouped by owner.

use crate::marker;
use crate::params::type_as_path;
use staplergen_core::{Artifact, PropertySet};
use staplergen_model::TypeDeclaration;
use std::path::PathBuf;

/// Suffix of per-type documentation artifacts.
pub const DOC_SUFFIX: &str = ".javadoc";

/// Which flavor of member an exposed property came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Method,
}

/// One exposed member of a type.
///
/// `key` disambiguates a field from an accessor of the same name: fields
/// keep their name, methods get a `()` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposedMember {
    pub kind: MemberKind,
    pub key: String,
    pub doc: Option<String>,
}

impl ExposedMember {
    pub fn new(kind: MemberKind, name: &str, doc: Option<&str>) -> Self {
        Self {
            kind,
            key: member_key(kind, name),
            doc: doc.map(|d| d.trim().to_string()).filter(|d| !d.is_empty()),
        }
    }
}

/// All exposed members of one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposedType {
    pub owner: String,
    pub members: Vec<ExposedMember>,
}

impl ExposedType {
    /// The documented members as a key→docText record. Undocumented members
    /// are absent, not present with an empty value.
    pub fn doc_properties(&self) -> PropertySet {
        let mut props = PropertySet::new();
        for member in &self.members {
            if let Some(doc) = &member.doc {
                props.insert(member.key.clone(), doc.clone());
            }
        }
        props
    }

    /// Record path: `<owner-as-path>.javadoc`
    pub fn record_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", type_as_path(&self.owner), DOC_SUFFIX))
    }

    /// One artifact per exposed type, even when no member is documented
    /// (an empty record still marks the type as exposed).
    pub fn to_artifact(&self) -> Artifact {
        Artifact::new(self.record_path(), self.doc_properties().render())
    }
}

/// Key-formatting rule: field → `fieldName`, method → `methodName()`.
pub fn member_key(kind: MemberKind, name: &str) -> String {
    match kind {
        MemberKind::Field => name.to_string(),
        MemberKind::Method => format!("{}()", name),
    }
}

/// Collect the exposed members of one type, if it has any.
pub fn collect_exposed(decl: &TypeDeclaration) -> Option<ExposedType> {
    let mut members = Vec::new();

    for field in &decl.fields {
        if marker::is_exported_field(field) {
            members.push(ExposedMember::new(
                MemberKind::Field,
                &field.name,
                field.doc.as_deref(),
            ));
        }
    }

    for method in &decl.methods {
        if marker::is_exported_method(method) {
            members.push(ExposedMember::new(
                MemberKind::Method,
                &method.name,
                method.doc.as_deref(),
            ));
        }
    }

    if members.is_empty() {
        return None;
    }

    Some(ExposedType {
        owner: decl.qualified_name.clone(),
        members,
    })
}
