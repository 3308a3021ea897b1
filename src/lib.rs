//! Portfolio mapper library

pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod mapping;
pub mod model;
pub mod output;
pub mod pipeline;

pub use config::Config;
pub use error::{PortfolioMapperError, Result};
