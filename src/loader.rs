//! Data-standard document loading
//!
//! Parses a JSON data-standard document into the in-memory model. The wire
//! format is camelCase; every optional field has an explicit default so a
//! sparse document loads without errors. Structural problems inside a
//! well-formed document (dangling ids, broken parent chains) are not
//! validated here; the report core tolerates them by skipping.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::model::Datastandard;

/// Parse a data standard from a JSON string
pub fn from_str(content: &str) -> Result<Datastandard> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a data standard from a reader
pub fn from_reader(reader: impl Read) -> Result<Datastandard> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a data standard from a JSON file
pub fn from_file(path: impl AsRef<Path>) -> Result<Datastandard> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let standard = from_str(&content)?;
    debug!(
        path = %path.display(),
        categories = standard.categories.len(),
        attributes = standard.attributes.len(),
        groups = standard.attribute_groups.len(),
        "loaded data standard"
    );
    Ok(standard)
}
