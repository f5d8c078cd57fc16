//! Artifact output through the configured resource root

mod writer;

pub use writer::{Artifact, ResourceWriter};
