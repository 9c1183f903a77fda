use crate::domain::model::ProgramListing;
use crate::utils::error::{CatalogueError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogueError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.contains('\0') {
        return Err(CatalogueError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Checks that every field of the listing at `index` holds text.
pub fn validate_listing(index: usize, listing: &ProgramListing) -> Result<()> {
    for (field, value) in listing.fields() {
        if value.trim().is_empty() {
            return Err(CatalogueError::EmptyFieldError {
                index,
                field: field.to_string(),
            });
        }
    }
    Ok(())
}

/// Checks every listing and rejects repeated titles.
pub fn validate_catalogue(listings: &[ProgramListing]) -> Result<()> {
    let mut seen = HashSet::with_capacity(listings.len());

    for (index, listing) in listings.iter().enumerate() {
        validate_listing(index, listing)?;

        if !seen.insert(listing.title) {
            return Err(CatalogueError::DuplicateTitleError {
                title: listing.title.to_string(),
            });
        }
    }

    tracing::debug!("Validated {} program listings", listings.len());
    Ok(())
}
