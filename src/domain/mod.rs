// Domain types: environments, link definitions and their resolution
pub mod catalog;
pub mod environment;
pub mod instructions;
pub mod link;
pub mod resolver;

// Re-export commonly used types
pub use catalog::{CatalogError, catalog, validate_catalog};
pub use environment::{Environment, environment_index_by_name, environments, next_environment_index};
pub use link::{LinkCategory, LinkDefinition, LinkIcon};
pub use resolver::{ResolvedLink, group_by_category, resolve, resolve_all};
