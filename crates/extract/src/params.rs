//! Parameter-name records for marked constructors and methods.

use crate::marker;
use staplergen_core::{Artifact, PropertySet};
use staplergen_model::{ConstructorDecl, MethodDecl, ParamDecl, TypeDeclaration};
use std::path::PathBuf;

/// Key under which the parameter list is stored, for both record kinds.
pub const PARAMS_KEY: &str = "constructor";

/// Suffix of parameter-record artifacts.
pub const RECORD_SUFFIX: &str = ".stapler";

/// A constructor that opted into parameter-name capture.
///
/// Parameter order matches declaration order exactly; the runtime binder
/// binds arguments by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedConstructor {
    pub owner: String,
    pub parameters: Vec<String>,
}

impl MarkedConstructor {
    pub fn from_decl(owner: &str, decl: &ConstructorDecl) -> Self {
        Self {
            owner: owner.to_string(),
            parameters: parameter_names(&decl.parameters),
        }
    }

    /// Record path: `<owner-as-path>.stapler`
    pub fn record_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", type_as_path(&self.owner), RECORD_SUFFIX))
    }

    pub fn to_artifact(&self) -> Artifact {
        Artifact::new(self.record_path(), render_record(&self.parameters))
    }
}

/// A method that opted into parameter-name capture. Each marked method gets
/// its own record, keyed by the method's simple name in the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedMethod {
    pub owner: String,
    pub name: String,
    pub parameters: Vec<String>,
}

impl MarkedMethod {
    pub fn from_decl(owner: &str, decl: &MethodDecl) -> Self {
        Self {
            owner: owner.to_string(),
            name: decl.name.clone(),
            parameters: parameter_names(&decl.parameters),
        }
    }

    /// Record path: `<owner-as-path>/<method>.stapler`
    pub fn record_path(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}/{}{}",
            type_as_path(&self.owner),
            self.name,
            RECORD_SUFFIX
        ))
    }

    pub fn to_artifact(&self) -> Artifact {
        Artifact::new(self.record_path(), render_record(&self.parameters))
    }
}

/// All marked constructors of one type, in declaration order.
pub fn collect_constructors(decl: &TypeDeclaration) -> Vec<MarkedConstructor> {
    decl.constructors
        .iter()
        .filter(|c| marker::is_marked_constructor(c))
        .map(|c| MarkedConstructor::from_decl(&decl.qualified_name, c))
        .collect()
}

/// All marked methods of one type, in declaration order.
pub fn collect_methods(decl: &TypeDeclaration) -> Vec<MarkedMethod> {
    decl.methods
        .iter()
        .filter(|m| marker::is_marked_method(m))
        .map(|m| MarkedMethod::from_decl(&decl.qualified_name, m))
        .collect()
}

/// Map a qualified type name onto a resource path: `org.acme.Foo` →
/// `org/acme/Foo`.
pub fn type_as_path(qualified_name: &str) -> String {
    qualified_name.replace('.', "/")
}

fn parameter_names(params: &[ParamDecl]) -> Vec<String> {
    params.iter().map(|p| p.name.clone()).collect()
}

/// `constructor=<comma-joined-names>`; zero parameters still produce the
/// key with an empty value, never a missing record.
fn render_record(parameters: &[String]) -> String {
    let mut props = PropertySet::new();
    props.insert(PARAMS_KEY, parameters.join(","));
    props.render()
}
