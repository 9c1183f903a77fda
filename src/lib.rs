pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use core::catalogue::{programs, PROGRAM_COUNT};
pub use core::export::{CatalogueExporter, ExportFormat};
pub use domain::model::ProgramListing;
pub use utils::error::{CatalogueError, Result};
