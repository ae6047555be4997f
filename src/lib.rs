//! Workshop Setup -- Data Analytics Environment Bootstrapper
//!
//! Creates the workshop virtual environment, installs the required
//! packages, and registers the Jupyter kernel for the notebooks.

pub mod types;
pub mod config;
pub mod platform;
pub mod runner;
pub mod setup;
