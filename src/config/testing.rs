//! Values used by the testing-instructions section and the report binary.

pub struct TestingConfig {
    /// Android application id of the debug build that handles the links
    pub android_package: &'static str,
    /// Pull request that introduced the perps deep links
    pub pr_url: &'static str,
    pub pr_label: &'static str,
}

pub const TESTING: TestingConfig = TestingConfig {
    android_package: "io.metamask.debug",
    pr_url: "https://github.com/MetaMask/metamask-mobile/pull/18568",
    pr_label: "View PR #18568",
};
