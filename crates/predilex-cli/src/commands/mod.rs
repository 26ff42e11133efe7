//! Command implementations.

pub mod config;
pub mod evaluate;
pub mod extract;
pub mod features;

pub use self::config::execute_config;
pub use self::evaluate::execute_evaluate;
pub use self::extract::execute_extract;
pub use self::features::execute_features;
