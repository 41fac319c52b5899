use serde::Serialize;

use crate::config::ENVIRONMENTS;

/// A named deployment target. Environments differ only by URL origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Environment {
    pub name: &'static str,
    /// Origin with scheme and no trailing slash, e.g. `https://link.metamask.io`
    pub domain: &'static str,
    /// Branch.io style origin that redirects to the same app
    pub alt_domain: Option<&'static str>,
}

/// The ordered registry. Never empty.
pub fn environments() -> &'static [Environment] {
    ENVIRONMENTS
}

/// Flip to the next environment, wrapping over the registry length.
pub fn next_environment_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

/// Look up an environment by case-insensitive name.
pub fn environment_index_by_name(name: &str) -> Option<usize> {
    environments()
        .iter()
        .position(|env| env.name.eq_ignore_ascii_case(name))
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.domain)
    }
}
