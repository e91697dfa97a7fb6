mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem, USER_CONFIG_NAME,
};
pub use model::{ChartConfig, Config};
