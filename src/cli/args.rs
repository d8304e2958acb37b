//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, ProgressMode};

/// 2ch thread media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "dvach-dl",
    version,
    about = "Download media files attached to a 2ch thread",
    long_about = "A CLI tool to download every file attached to a 2ch thread.\n\n\
                  Fetches the thread's post list, collects file attachments, and downloads\n\
                  them concurrently into a per-thread folder."
)]
pub struct Args {
    /// Thread URL, e.g. https://2ch.hk/b/res/292606618.html
    pub url: String,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// Maximum number of simultaneous downloads.
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Progress reporting mode.
    #[arg(long, value_enum)]
    pub progress: Option<ProgressModeArg>,

    /// Site base URL (for mirrors such as 2ch.life).
    #[arg(long = "base-url", env = "DVACH_BASE_URL")]
    pub base_url: Option<String>,

    /// Browser user agent string.
    #[arg(short = 'a', long = "user-agent", env = "DVACH_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide the download progress line.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI progress mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressModeArg {
    /// Redraw on every completion event.
    Live,
    /// Re-read the shared counter on a fixed interval.
    Poll,
}

impl From<ProgressModeArg> for ProgressMode {
    fn from(arg: ProgressModeArg) -> Self {
        match arg {
            ProgressModeArg::Live => ProgressMode::Live,
            ProgressModeArg::Poll => ProgressMode::Poll,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(dir) = self.output_directory {
            config.options.output_directory = Some(dir);
        }

        if let Some(concurrency) = self.concurrency {
            config.options.concurrency = concurrency;
        }

        if let Some(progress) = self.progress {
            config.options.progress_mode = progress.into();
        }

        if let Some(base_url) = self.base_url {
            config.network.base_url = base_url;
        }

        if let Some(user_agent) = self.user_agent {
            config.network.user_agent = user_agent;
        }

        if self.quiet {
            config.options.show_downloads = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides() {
        let args = Args::parse_from([
            "dvach-dl",
            "https://2ch.hk/b/res/1.html",
            "-j",
            "3",
            "--progress",
            "poll",
            "--quiet",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.options.concurrency, 3);
        assert_eq!(config.options.progress_mode, ProgressMode::Poll);
        assert!(!config.options.show_downloads);
    }

    #[test]
    fn test_merge_keeps_defaults_when_unset() {
        let args = Args::parse_from(["dvach-dl", "https://2ch.hk/b/res/1.html"]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.options.concurrency, 6);
        assert_eq!(config.network.base_url, "https://2ch.hk/");
        assert!(config.options.show_downloads);
    }
}
