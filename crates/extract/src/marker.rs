//! Marker detection: which declarations opt into extraction.
//!
//! Two generations of markers are recognized. The current form is an
//! annotation on the element; the legacy form is a tag token inside the
//! element's documentation text, matched as a plain substring. The
//! annotation is checked first and short-circuits, so an element carrying
//! both is detected exactly once. Detection never fails: an unmarked
//! element is a normal outcome.

use staplergen_model::{ConstructorDecl, Documented, FieldDecl, MethodDecl};

/// Annotation marking a data-bound constructor.
pub const CONSTRUCTOR_ANNOTATION: &str = "DataBoundConstructor";
/// Legacy doc tag equivalent of [`CONSTRUCTOR_ANNOTATION`].
pub const CONSTRUCTOR_TAG: &str = "@stapler-constructor";

/// Annotation marking a web-bound method.
pub const METHOD_ANNOTATION: &str = "WebMethod";
/// Legacy doc tag equivalent of [`METHOD_ANNOTATION`].
pub const METHOD_TAG: &str = "@stapler-method";

/// Parameter-level annotation required on at least one parameter of a
/// marked method.
pub const PARAM_ANNOTATION: &str = "QueryParameter";

/// Annotation marking a field or accessor as an exposed bean property.
pub const EXPORT_ANNOTATION: &str = "Exported";
/// Earlier name of [`EXPORT_ANNOTATION`], still honored.
pub const EXPORT_ANNOTATION_LEGACY: &str = "Exposed";
/// Legacy doc tag equivalent of [`EXPORT_ANNOTATION`].
pub const EXPORT_TAG: &str = "@stapler-exported";

pub fn is_marked_constructor(ctor: &ConstructorDecl) -> bool {
    if ctor.has_annotation(CONSTRUCTOR_ANNOTATION) {
        return true;
    }
    ctor.doc_contains(CONSTRUCTOR_TAG)
}

/// A method is marked only if it carries the method-level marker AND at
/// least one of its parameters carries the parameter-level marker.
pub fn is_marked_method(method: &MethodDecl) -> bool {
    let marked = if method.has_annotation(METHOD_ANNOTATION) {
        true
    } else {
        method.doc_contains(METHOD_TAG)
    };

    marked
        && method
            .parameters
            .iter()
            .any(|p| p.has_annotation(PARAM_ANNOTATION))
}

pub fn is_exported_field(field: &FieldDecl) -> bool {
    is_export_marked(field)
}

pub fn is_exported_method(method: &MethodDecl) -> bool {
    is_export_marked(method)
}

fn is_export_marked<T: Documented>(member: &T) -> bool {
    if member.has_annotation(EXPORT_ANNOTATION) || member.has_annotation(EXPORT_ANNOTATION_LEGACY) {
        return true;
    }
    member.doc_contains(EXPORT_TAG)
}
