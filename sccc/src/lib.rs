//! Library interface for the `sccc` Spring Cloud Config client.
//!
//! The binary parses the command line, layers runtime settings, and then
//! drives [`get::run_get`], which fetches each remote file, resolves its
//! `default`, `namespace` and `version` sections with [`sccc_config`], and
//! writes the result locally. The pieces are exposed here so integration
//! tests can substitute an in-memory [`fetch::Fetch`] implementation.

pub mod cli;
pub mod error;
pub mod fetch;
pub mod get;
pub mod logging;
pub mod output;
pub mod settings;
