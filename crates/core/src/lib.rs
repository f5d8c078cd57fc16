pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod progress;
pub mod props;

pub use config::{OutputMode, StaplergenConfig};
pub use error::PassError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use output::{Artifact, ResourceWriter};
pub use progress::{LoggingHandler, NoOpHandler, PassEvent, ProgressHandler};
pub use props::PropertySet;
