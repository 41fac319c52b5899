//! Environment-aware URL resolution and category grouping.

use itertools::Itertools;

use crate::domain::{Environment, LinkCategory, LinkDefinition};

/// A link definition bound to one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Position in the catalog; copy feedback is keyed on it
    pub index: usize,
    pub link: &'static LinkDefinition,
    pub url: String,
}

/// Concatenates the environment origin with the link path verbatim.
pub fn resolve(link: &LinkDefinition, environment: &Environment) -> String {
    format!("{}{}", environment.domain, link.path)
}

/// Resolves every link, keeping catalog order.
pub fn resolve_all(
    links: &'static [LinkDefinition],
    environment: &Environment,
) -> Vec<ResolvedLink> {
    links
        .iter()
        .enumerate()
        .map(|(index, link)| ResolvedLink {
            index,
            link,
            url: resolve(link, environment),
        })
        .collect()
}

/// Partitions resolved links by category.
///
/// Groups follow `LinkCategory` declaration order; links keep their relative
/// order inside a group. Categories with no links are left out.
pub fn group_by_category(links: &[ResolvedLink]) -> Vec<(LinkCategory, Vec<ResolvedLink>)> {
    links
        .iter()
        .cloned()
        .into_group_map_by(|resolved| resolved.link.category)
        .into_iter()
        .sorted_by_key(|(category, _)| *category)
        .collect()
}
