use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use qrcode::QrCode;
use qrcode::render::unicode::Dense1x2;
use serde::Serialize;
use std::collections::HashMap;

use perps_deeplinks::config::TESTING;
use perps_deeplinks::domain::instructions::{android_command, ios_simulator_command};
use perps_deeplinks::domain::{LinkCategory, validate_catalog};
use perps_deeplinks::qr::{PngQrEncoder, QrOptions, generate_all};
use perps_deeplinks::{catalog, environments, group_by_category, parse_environment, resolve_all};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Print the resolved deep-link catalog for one environment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Environment to resolve against
    #[arg(long, value_parser = parse_environment, default_value = "production")]
    environment: usize,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Draw a terminal QR code under each link (text), or embed each code as a
    /// PNG data URI (json)
    #[arg(long, default_value_t = false)]
    qr: bool,
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    category: LinkCategory,
    title: &'a str,
    symbol: Option<&'a str>,
    is_new: bool,
    url: &'a str,
    ios: String,
    android: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    qr: Option<String>,
}

/// PNG data URIs for the resolved URLs; URLs that fail to render are left out.
fn qr_data_uris(urls: &[String]) -> HashMap<String, String> {
    generate_all(urls, &PngQrEncoder, &QrOptions::default())
        .into_iter()
        .filter_map(|(url, image)| match image.to_data_uri() {
            Ok(uri) => Some((url, uri)),
            Err(e) => {
                log::error!("Failed to export QR for {}: {}", url, e);
                None
            }
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = Args::parse();
    validate_catalog(catalog()).context("Catalog failed validation")?;

    let environment = &environments()[args.environment];
    let resolved = resolve_all(catalog(), environment);

    match args.format {
        Format::Json => {
            let mut data_uris = if args.qr {
                let urls: Vec<String> = resolved.iter().map(|r| r.url.clone()).collect();
                qr_data_uris(&urls)
            } else {
                HashMap::new()
            };
            let entries: Vec<ReportEntry> = resolved
                .iter()
                .map(|r| ReportEntry {
                    category: r.link.category,
                    title: r.link.title,
                    symbol: r.link.symbol,
                    is_new: r.link.is_new,
                    url: &r.url,
                    ios: ios_simulator_command(&r.url),
                    android: android_command(&r.url, TESTING.android_package),
                    qr: data_uris.remove(&r.url),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Format::Text => {
            println!("{}", environment);
            for (category, links) in group_by_category(&resolved) {
                println!("\n== {} ==", category);
                for r in &links {
                    let tags = [r.link.symbol, r.link.is_new.then_some("NEW")]
                        .into_iter()
                        .flatten()
                        .map(|tag| format!("[{}]", tag))
                        .join(" ");
                    println!("  {} {}", r.link.title, tags);
                    println!("    {}", r.url);
                    println!("    {}", ios_simulator_command(&r.url));

                    if args.qr {
                        let code = QrCode::new(r.url.as_bytes())
                            .with_context(|| format!("Failed to encode {}", r.url))?;
                        let art = code
                            .render::<Dense1x2>()
                            .dark_color(Dense1x2::Light)
                            .light_color(Dense1x2::Dark)
                            .build();
                        println!("{}", art);
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_url_gets_a_png_data_uri() {
        let urls: Vec<String> = resolve_all(catalog(), &environments()[0])
            .into_iter()
            .map(|r| r.url)
            .collect();
        let uris = qr_data_uris(&urls);

        assert_eq!(uris.len(), urls.len());
        assert!(uris.values().all(|uri| uri.starts_with("data:image/png;base64,")));
    }

    #[test]
    fn json_entry_omits_qr_when_not_requested() {
        let entry = ReportEntry {
            category: LinkCategory::Navigation,
            title: "Perps",
            symbol: None,
            is_new: false,
            url: "https://link.metamask.io/perps",
            ios: String::new(),
            android: String::new(),
            qr: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("qr").is_none());
        assert_eq!(json["url"], "https://link.metamask.io/perps");
    }
}
