pub mod beans;
pub mod marker;
pub mod params;

pub use beans::{ExposedMember, ExposedType, MemberKind};
pub use params::{MarkedConstructor, MarkedMethod};
