//! The canonical deep-link catalog.
//!
//! Only the unified `/perps?screen=...` shape is listed. Order here is the
//! order cards appear in, within each category.

use crate::domain::{LinkCategory, LinkDefinition, LinkIcon};

pub const CATALOG: &[LinkDefinition] = &[
    // Navigation
    LinkDefinition {
        title: "Perps Default",
        path: "/perps",
        description: "Opens perps with no screen parameter (app decides the landing screen)",
        symbol: None,
        category: LinkCategory::Navigation,
        is_new: false,
        icon: LinkIcon::Home,
    },
    LinkDefinition {
        title: "Perps Tabs",
        path: "/perps?screen=tabs",
        description: "Opens the wallet tab view with the Perps tab selected",
        symbol: None,
        category: LinkCategory::Navigation,
        is_new: false,
        icon: LinkIcon::Tabs,
    },
    LinkDefinition {
        title: "Perps Home",
        path: "/perps?screen=home",
        description: "Opens the Perps home screen with positions and orders",
        symbol: None,
        category: LinkCategory::Navigation,
        is_new: true,
        icon: LinkIcon::Home,
    },
    // Market lists
    LinkDefinition {
        title: "Markets",
        path: "/perps?screen=markets",
        description: "Opens the markets overview",
        symbol: None,
        category: LinkCategory::MarketList,
        is_new: false,
        icon: LinkIcon::List,
    },
    LinkDefinition {
        title: "Market List",
        path: "/perps?screen=market-list",
        description: "Opens the full market list on its default tab",
        symbol: None,
        category: LinkCategory::MarketList,
        is_new: true,
        icon: LinkIcon::List,
    },
    LinkDefinition {
        title: "Market List - Crypto",
        path: "/perps?screen=market-list&tab=crypto",
        description: "Opens the market list filtered to crypto markets",
        symbol: None,
        category: LinkCategory::MarketList,
        is_new: true,
        icon: LinkIcon::Coin,
    },
    LinkDefinition {
        title: "Market List - Stocks",
        path: "/perps?screen=market-list&tab=stocks",
        description: "Opens the market list filtered to HIP-3 stock markets",
        symbol: None,
        category: LinkCategory::MarketList,
        is_new: true,
        icon: LinkIcon::Stock,
    },
    // Assets
    LinkDefinition {
        title: "Bitcoin (BTC)",
        path: "/perps?screen=asset&symbol=BTC",
        description: "Opens Bitcoin perpetual trading",
        symbol: Some("BTC"),
        category: LinkCategory::Asset,
        is_new: false,
        icon: LinkIcon::Chart,
    },
    LinkDefinition {
        title: "Ethereum (ETH)",
        path: "/perps?screen=asset&symbol=ETH",
        description: "Opens Ethereum perpetual trading",
        symbol: Some("ETH"),
        category: LinkCategory::Asset,
        is_new: false,
        icon: LinkIcon::Chart,
    },
    LinkDefinition {
        title: "Solana (SOL)",
        path: "/perps?screen=asset&symbol=SOL",
        description: "Opens Solana perpetual trading",
        symbol: Some("SOL"),
        category: LinkCategory::Asset,
        is_new: false,
        icon: LinkIcon::Chart,
    },
    LinkDefinition {
        title: "Tesla (xyz:TSLA)",
        path: "/perps?screen=asset&symbol=xyz:TSLA",
        description: "Opens a HIP-3 stock market hosted on the xyz dex",
        symbol: Some("xyz:TSLA"),
        category: LinkCategory::Asset,
        is_new: true,
        icon: LinkIcon::Stock,
    },
    LinkDefinition {
        title: "XYZ 100 (xyz:xyz100)",
        path: "/perps?screen=asset&symbol=xyz:xyz100",
        description: "Opens the HIP-3 xyz100 index market",
        symbol: Some("xyz:xyz100"),
        category: LinkCategory::Asset,
        is_new: true,
        icon: LinkIcon::Stock,
    },
];
