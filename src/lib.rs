pub mod bot;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod logging;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
