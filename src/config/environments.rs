//! Deployment targets the catalog can be resolved against.

use crate::domain::Environment;

/// Ordered registry. Index 0 is the default selection.
pub const ENVIRONMENTS: &[Environment] = &[
    Environment {
        name: "Production",
        domain: "https://link.metamask.io",
        alt_domain: Some("https://metamask.app.link"),
    },
    Environment {
        name: "Development",
        domain: "https://link-test.metamask.io",
        alt_domain: Some("https://metamask.test-app.link"),
    },
];

/// Index used when nothing (or nothing valid) has been saved.
pub const DEFAULT_ENVIRONMENT_INDEX: usize = 0;
