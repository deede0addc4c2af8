pub mod config;
pub mod error;
pub mod models;
pub mod push;
pub mod report;

pub use config::*;
pub use error::*;
pub use models::*;
pub use push::*;
pub use report::*;
