//! Simulator and device commands for opening a resolved link by hand.

use crate::domain::{LinkCategory, ResolvedLink};

/// iOS simulator: `xcrun simctl openurl booted "<url>"`
pub fn ios_simulator_command(url: &str) -> String {
    format!("xcrun simctl openurl booted \"{}\"", url)
}

/// Android device or emulator, delivered as a VIEW intent to `package`.
pub fn android_command(url: &str, package: &str) -> String {
    format!(
        "adb shell am start -W -a android.intent.action.VIEW \\\n  -d \"{}\" {}",
        url, package
    )
}

/// Shell snippet: one command for the first navigation link, then one per
/// asset link (`max_assets` caps how many).
pub fn command_script(
    links: &[ResolvedLink],
    max_assets: usize,
    command: impl Fn(&str) -> String,
) -> String {
    let mut sections = Vec::new();

    if let Some(overview) = links
        .iter()
        .find(|r| r.link.category == LinkCategory::Navigation)
    {
        sections.push(format!("# Market overview\n{}", command(&overview.url)));
    }

    let assets: Vec<String> = links
        .iter()
        .filter(|r| r.link.category == LinkCategory::Asset)
        .take(max_assets)
        .map(|r| command(&r.url))
        .collect();
    if !assets.is_empty() {
        sections.push(format!("# Specific assets\n{}", assets.join("\n")));
    }

    sections.join("\n\n")
}

/// Steps shown above the command snippets
pub const MOBILE_STEPS: &[&str] = &[
    "Open this page on your mobile device or scan a QR code",
    "Ensure MetaMask Mobile is installed (debug build for testing)",
    "Tap \"Open Link\" or scan the QR code",
    "MetaMask should open to the specific perps page",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{catalog, environments, resolve_all};

    #[test]
    fn commands_quote_the_url() {
        let url = "https://link-test.metamask.io/perps?screen=asset&symbol=BTC";
        assert_eq!(
            ios_simulator_command(url),
            "xcrun simctl openurl booted \"https://link-test.metamask.io/perps?screen=asset&symbol=BTC\""
        );
        let adb = android_command(url, "io.metamask.debug");
        assert!(adb.starts_with("adb shell am start -W -a android.intent.action.VIEW"));
        assert!(adb.ends_with(&format!("-d \"{}\" io.metamask.debug", url)));
    }

    #[test]
    fn script_lists_overview_then_assets() {
        let links = resolve_all(catalog(), &environments()[1]);
        let script = command_script(&links, 2, ios_simulator_command);
        let lines: Vec<&str> = script.lines().collect();

        assert_eq!(
            lines,
            vec![
                "# Market overview",
                "xcrun simctl openurl booted \"https://link-test.metamask.io/perps\"",
                "",
                "# Specific assets",
                "xcrun simctl openurl booted \"https://link-test.metamask.io/perps?screen=asset&symbol=BTC\"",
                "xcrun simctl openurl booted \"https://link-test.metamask.io/perps?screen=asset&symbol=ETH\"",
            ]
        );
    }

    #[test]
    fn script_of_nothing_is_empty() {
        assert_eq!(command_script(&[], 3, ios_simulator_command), "");
    }
}
