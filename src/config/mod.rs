mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{ChecksConfig, Config, NamingConfig, ReportConfig, StructureConfig};
pub use validation::validate_config_semantics;
