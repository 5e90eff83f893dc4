//! Common utilities and shared types for socialgraph.
//!
//! This crate provides foundational components used across all socialgraph crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **ID Generation**: ULID-based row identifiers via [`IdGenerator`]
//!
//! # Example
//!
//! ```no_run
//! use socialgraph_common::{Config, IdGenerator};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load()?;
//!     let id = IdGenerator::new().generate();
//!     println!("{}:{} -> {id}", config.server.host, config.server.port);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod id;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use id::IdGenerator;
