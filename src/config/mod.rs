mod loader;
mod model;

pub use loader::{DEFAULT_CONFIG_NAME, load_config, load_from_path};
pub use model::{CONFIG_VERSION, Config, HeaderConfig, PatternsConfig, TestsConfig};
