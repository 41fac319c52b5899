use std::collections::HashSet;
use std::fmt;

use crate::config::{CATALOG, ENVIRONMENTS};
use crate::domain::{LinkCategory, LinkDefinition};

/// The ordered link catalog. Never empty.
pub fn catalog() -> &'static [LinkDefinition] {
    CATALOG
}

/// A broken data invariant in a catalog table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    PathNotRooted(&'static str),
    PathHasOrigin(&'static str),
    DuplicatePath(&'static str),
    AssetWithoutSymbol(&'static str),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "Catalog has no links"),
            CatalogError::PathNotRooted(path) => write!(f, "Path must start with '/': {}", path),
            CatalogError::PathHasOrigin(path) => {
                write!(f, "Path must not embed an origin: {}", path)
            }
            CatalogError::DuplicatePath(path) => write!(f, "Duplicate path: {}", path),
            CatalogError::AssetWithoutSymbol(title) => {
                write!(f, "Asset link has no symbol: {}", title)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Checks the invariants every cataloged link relies on.
pub fn validate_catalog(links: &[LinkDefinition]) -> Result<(), CatalogError> {
    if links.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for link in links {
        if !link.path.starts_with('/') {
            return Err(CatalogError::PathNotRooted(link.path));
        }
        if link.path.contains("://")
            || ENVIRONMENTS.iter().any(|env| {
                let host = env.domain.trim_start_matches("https://");
                link.path.contains(host)
            })
        {
            return Err(CatalogError::PathHasOrigin(link.path));
        }
        if !seen.insert(link.path) {
            return Err(CatalogError::DuplicatePath(link.path));
        }
        if link.category == LinkCategory::Asset && link.symbol.is_none() {
            return Err(CatalogError::AssetWithoutSymbol(link.title));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LinkIcon;

    fn link(path: &'static str) -> LinkDefinition {
        LinkDefinition {
            title: "t",
            path,
            description: "",
            symbol: None,
            category: LinkCategory::Navigation,
            is_new: false,
            icon: LinkIcon::Home,
        }
    }

    #[test]
    fn shipped_catalog_is_valid() {
        assert_eq!(validate_catalog(catalog()), Ok(()));
        assert_eq!(catalog().len(), 12);
    }

    #[test]
    fn shipped_catalog_uses_unified_paths() {
        for link in catalog() {
            assert!(link.path.starts_with("/perps"), "{}", link.path);
            assert!(!link.path.contains("perps-asset"), "{}", link.path);
        }
    }

    #[test]
    fn rejects_bad_tables() {
        assert_eq!(validate_catalog(&[]), Err(CatalogError::Empty));
        assert_eq!(
            validate_catalog(&[link("perps")]),
            Err(CatalogError::PathNotRooted("perps"))
        );
        assert_eq!(
            validate_catalog(&[link("/perps"), link("/perps")]),
            Err(CatalogError::DuplicatePath("/perps"))
        );
        assert_eq!(
            validate_catalog(&[link("/redirect?to=link.metamask.io/perps")]),
            Err(CatalogError::PathHasOrigin("/redirect?to=link.metamask.io/perps"))
        );

        let asset = LinkDefinition {
            category: LinkCategory::Asset,
            ..link("/perps?screen=asset")
        };
        assert_eq!(
            validate_catalog(&[asset]),
            Err(CatalogError::AssetWithoutSymbol("t"))
        );
    }
}
