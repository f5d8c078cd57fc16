pub mod declaration;
pub mod source;

pub use declaration::{
    ConstructorDecl, Documented, FieldDecl, MethodDecl, ParamDecl, TypeDeclaration, TypeKind,
};
pub use source::{DeclarationSource, InMemorySource, JsonDeclarationSource};
