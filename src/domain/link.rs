use serde::Serialize;
use std::fmt;

/// Card grouping. Declaration order is display order.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, strum_macros::EnumIter,
)]
pub enum LinkCategory {
    Navigation,
    MarketList,
    Asset,
}

impl fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinkCategory::Navigation => write!(f, "Navigation"),
            LinkCategory::MarketList => write!(f, "Market Lists"),
            LinkCategory::Asset => write!(f, "Assets"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub enum LinkIcon {
    Home,
    Tabs,
    List,
    Coin,
    Stock,
    Chart,
}

impl LinkIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            LinkIcon::Home => "🏠",
            LinkIcon::Tabs => "🗂",
            LinkIcon::List => "📋",
            LinkIcon::Coin => "🪙",
            LinkIcon::Stock => "🏢",
            LinkIcon::Chart => "📈",
        }
    }
}

/// A testable deep link, independent of environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkDefinition {
    pub title: &'static str,
    /// Leading-slash path, may carry literal query parameters
    pub path: &'static str,
    pub description: &'static str,
    /// Trading symbol, `dex:symbol` for HIP-3 markets
    pub symbol: Option<&'static str>,
    pub category: LinkCategory,
    pub is_new: bool,
    pub icon: LinkIcon,
}

impl LinkDefinition {
    /// Splits a HIP-3 symbol into `(dex, symbol)`.
    /// Plain symbols (e.g. "BTC") return `None`.
    pub fn hip3_parts(&self) -> Option<(&'static str, &'static str)> {
        self.symbol?.split_once(':')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn categories_iterate_in_display_order() {
        let all: Vec<LinkCategory> = LinkCategory::iter().collect();
        assert_eq!(
            all,
            vec![
                LinkCategory::Navigation,
                LinkCategory::MarketList,
                LinkCategory::Asset
            ]
        );
    }

    #[test]
    fn hip3_symbol_splits_on_dex() {
        let link = LinkDefinition {
            title: "Tesla",
            path: "/perps?screen=asset&symbol=xyz:TSLA",
            description: "",
            symbol: Some("xyz:TSLA"),
            category: LinkCategory::Asset,
            is_new: true,
            icon: LinkIcon::Stock,
        };
        assert_eq!(link.hip3_parts(), Some(("xyz", "TSLA")));

        let plain = LinkDefinition {
            symbol: Some("BTC"),
            ..link
        };
        assert_eq!(plain.hip3_parts(), None);
    }
}
