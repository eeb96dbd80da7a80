//! Manifest files listing the elements to order.
//!
//! A manifest is a TOML document with one `[[element]]` table per element:
//!
//! ```toml
//! [[element]]
//! key = "header"
//! position = "start"
//! value = "<h1>"
//! ```
//!
//! `position` and `value` are optional. Elements keep the order they are
//! listed in, which breaks ties between equal positions.

use std::{fs, path::Path};

use log::debug;
use serde::Deserialize;

use placement::CollectionBuilder;

use crate::error::CliError;

/// One element of a manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestElement {
    key: String,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    value: Option<toml::Value>,
}

/// A parsed manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default, rename = "element")]
    elements: Vec<ManifestElement>,
}

impl Manifest {
    /// Parse a manifest from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Manifest`] if the source is not a valid manifest.
    pub fn from_toml(source: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(source).map_err(|err: toml::de::Error| CliError::Manifest {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        })
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let manifest = Self::from_toml(&source, path)?;

        debug!(
            path = path.display().to_string(),
            elements = manifest.elements.len();
            "Loaded manifest"
        );
        Ok(manifest)
    }

    /// Returns the number of listed elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the manifest lists no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Move the elements into a collection builder, in listing order.
    pub fn into_builder(self) -> CollectionBuilder<Option<toml::Value>> {
        let mut builder = CollectionBuilder::new();
        for element in self.elements {
            let key = element.key;
            match element.position {
                Some(position) => builder.insert_positioned(key, element.value, position),
                None => builder.insert(key, element.value),
            };
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Manifest, CliError> {
        Manifest::from_toml(source, Path::new("test.toml"))
    }

    #[test]
    fn test_elements_in_listing_order() {
        let manifest = parse(
            r#"
            [[element]]
            key = "second"
            position = "end"
            value = 1

            [[element]]
            key = "first"
            value = { tag = "p" }
            "#,
        )
        .unwrap();

        assert_eq!(manifest.len(), 2);
        let collection = manifest.into_builder().build().unwrap();
        assert_eq!(collection.sort().unwrap(), ["first", "second"]);
        assert_eq!(
            collection.get("second"),
            Some(&Some(toml::Value::Integer(1)))
        );
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = parse("").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let err = parse("[[element]]\nposition = \"start\"\n").unwrap_err();
        assert!(matches!(err, CliError::Manifest { .. }));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = parse("[[element]]\nkey = \"a\"\nweight = 3\n").unwrap_err();
        assert!(matches!(err, CliError::Manifest { .. }));
    }
}
