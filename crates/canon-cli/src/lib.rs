//! Library components of the company-name canonicalizer CLI.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
