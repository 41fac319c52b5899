/// User-facing strings, kept in one place.
pub struct UiText {
    pub page_title: &'static str,
    pub page_blurb: &'static str,
    pub environment_label: &'static str,
    pub environment_toggle_hint: &'static str,
    pub alt_domain_prefix: &'static str,
    pub new_badge: &'static str,
    pub hip3_dex_prefix: &'static str,
    pub copy_hint: &'static str,
    pub copied_hint: &'static str,
    pub open_link: &'static str,
    pub qr_pending: &'static str,
    pub qr_unavailable: &'static str,
    pub qr_alt_prefix: &'static str,
    pub instructions_heading: &'static str,
    pub mobile_heading: &'static str,
    pub ios_heading: &'static str,
    pub android_heading: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    page_title: "MetaMask Perps Deep Links Tester",
    page_blurb: "Test deep links for MetaMask Mobile perpetuals trading feature. \
                 Scan QR codes with your mobile device or copy links for testing.",
    environment_label: "Environment:",
    environment_toggle_hint: "Click to switch environment",
    alt_domain_prefix: "Alternate domain: ",
    new_badge: "NEW",
    hip3_dex_prefix: "HIP-3 dex: ",
    copy_hint: "Copy URL",
    copied_hint: "Copied!",
    open_link: "Open Link",
    qr_pending: "Generating QR code...",
    qr_unavailable: "QR code unavailable",
    qr_alt_prefix: "QR Code for ",
    instructions_heading: "Testing Instructions",
    mobile_heading: "📱 Mobile Testing",
    ios_heading: "🖥 iOS Simulator",
    android_heading: "🤖 Android Testing",
};
