pub mod catalogue;
pub mod export;

pub use crate::domain::model::ProgramListing;
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
