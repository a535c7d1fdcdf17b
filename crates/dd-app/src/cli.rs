//! Command-line flags and config loading.

use anyhow::{Context, bail};
use dd_core::CanvasConfig;
use std::path::PathBuf;

pub const USAGE: &str = "\
usage: dorm-draw [--config <file.json>] [--assets <dir>] [--output <file.png>]

keys:
  b c d k f g p   place bed, chair, dresser, desk, sofa, rug, plant at the cursor
  r               rotate the item under the cursor
  backspace       delete the item under the cursor
  s               save a snapshot
mouse:
  drag an item with the left button";

/// Parsed command-line flags. Flags override values from the config file.
#[derive(Debug, Default, PartialEq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub assets: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub help: bool,
}

impl Options {
    pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut opts = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let slot = match arg.as_str() {
                "--config" => &mut opts.config,
                "--assets" => &mut opts.assets,
                "--output" => &mut opts.output,
                "-h" | "--help" => {
                    opts.help = true;
                    continue;
                }
                other => bail!("unknown argument '{other}'"),
            };
            let Some(value) = args.next() else {
                bail!("{arg} expects a value");
            };
            *slot = Some(PathBuf::from(value));
        }
        Ok(opts)
    }

    /// Read the config file if given, then apply flag overrides.
    pub fn load_config(&self) -> anyhow::Result<CanvasConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                CanvasConfig::from_json(&text)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => CanvasConfig::default(),
        };
        if let Some(dir) = &self.assets {
            config.asset_dir = dir.clone();
        }
        if let Some(file) = &self.output {
            config.snapshot_file = file.clone();
        }
        Ok(config)
    }
}
