use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::Result;

/// Environment variable naming a catalog file that replaces the bundled one.
pub const CATALOG_PATH_ENV: &str = "STANDARDIZER_CATALOG_PATH";

/// Where the catalog comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogSettings {
    /// `None` selects the bundled catalog.
    pub path: Option<PathBuf>,
}

impl CatalogSettings {
    #[must_use]
    pub fn from_env() -> Self {
        let raw = std::env::var(CATALOG_PATH_ENV).ok();
        Self::from_raw(raw.as_deref())
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let path = match raw.map(str::trim) {
            Some("") => {
                log::warn!("{CATALOG_PATH_ENV} is set but empty; using the bundled catalog");
                None
            }
            Some(value) => Some(PathBuf::from(value)),
            None => None,
        };
        Self { path }
    }

    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Load the configured catalog. A configured file that cannot be read or
    /// validated is an error; it never falls back to the bundled catalog.
    pub fn load(&self) -> Result<Catalog> {
        match &self.path {
            Some(path) => Catalog::from_file(path),
            None => {
                log::debug!("catalog: using bundled catalog");
                Ok(Catalog::builtin().clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_env_values() {
        assert_eq!(CatalogSettings::from_raw(None), CatalogSettings::default());
        assert_eq!(CatalogSettings::from_raw(Some("   ")), CatalogSettings::default());
        assert_eq!(
            CatalogSettings::from_raw(Some(" /etc/catalog.toml ")),
            CatalogSettings::with_path("/etc/catalog.toml")
        );
    }

    #[test]
    fn default_loads_bundled_catalog() {
        let catalog = CatalogSettings::default().load().unwrap();
        assert_eq!(&catalog, Catalog::builtin());
    }
}
