//! CLI for printing the wish history URL.

use anyhow::{anyhow, Context, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use wishlinks_core::config::{self, WishlinksConfig};
use wishlinks_core::wish_link;

/// Print the wish history URL recorded in the game's web cache.
#[derive(Debug, Parser)]
#[command(name = "wishlinks")]
#[command(
    about = "Retrieve the Genshin Impact wish history URL from the game's web cache",
    long_about = None
)]
pub struct Cli {
    /// Show verbose output (debug events with source locations).
    #[arg(
        short,
        long,
        env = "VERBOSE",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: bool,

    /// Base path where the 'Genshin Impact' directory resides.
    #[arg(short, long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Only consider URLs containing this string.
    ///
    /// Defaults to the config file value, or gacha_info/api/getGachaLog.
    #[arg(short = 'f', long, value_name = "STRING")]
    pub url_filter: Option<String>,
}

impl Cli {
    /// Runs the lookup and returns the URL to print.
    pub fn run(self) -> Result<String> {
        let cfg = if self.root.is_some() && self.url_filter.is_some() {
            WishlinksConfig::default()
        } else {
            load_config_or_default()
        };
        let (root, url_filter) = resolve_inputs(self.root, self.url_filter, cfg)?;
        tracing::debug!(root = %root.display(), url_filter = %url_filter, "looking up wish link");

        let link = wish_link::find_wish_link(&root, &url_filter)
            .with_context(|| format!("failed to locate wish history URL under {}", root.display()))?
            .ok_or_else(|| {
                anyhow!(
                    "no wish history URL found; open the wish history in game first (filter: {:?})",
                    url_filter
                )
            })?;
        tracing::info!(
            gacha_type = %link.gacha_type,
            data_file = %link.data_file.display(),
            "selected wish history URL"
        );
        Ok(link.url)
    }
}

/// Config file values, or built-in defaults if the file cannot be loaded.
fn load_config_or_default() -> WishlinksConfig {
    match config::load_or_init() {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(err) => {
            tracing::warn!("ignoring config file: {:#}", err);
            WishlinksConfig::default()
        }
    }
}

/// Root and URL filter with precedence flag > config file > built-in default.
pub(crate) fn resolve_inputs(
    root: Option<PathBuf>,
    url_filter: Option<String>,
    cfg: WishlinksConfig,
) -> Result<(PathBuf, String)> {
    let root = root.or(cfg.root).ok_or(wishlinks_core::Error::EmptyRoot)?;
    let url_filter = url_filter.unwrap_or(cfg.url_filter);
    Ok((root, url_filter))
}
