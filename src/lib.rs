//! dvach-dl - 2ch thread media downloader
//!
//! This library fetches a thread's post list from the 2ch mobile JSON API,
//! extracts attached media files, and downloads them concurrently under a
//! bounded concurrency limit.
//!
//! # Example
//!
//! ```no_run
//! use dvach_dl::{extract_descriptors, parse_thread_url, run_batch, Config, DvachApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let link = parse_thread_url("https://2ch.hk/b/res/292606618.html")?;
//!
//!     let api = DvachApi::new(&config.network.base_url, &config.network.user_agent)?;
//!     let thread = api.get_thread(&link).await?;
//!     let descriptors = extract_descriptors(&thread, api.base_url());
//!
//!     let target = std::path::Path::new("downloads");
//!     std::fs::create_dir_all(target)?;
//!     let report = run_batch(&api, &config, descriptors, target).await?;
//!     println!("{} downloaded, {} failed", report.succeeded, report.failed);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::DvachApi;
pub use config::{parse_thread_url, validate_config, Config, ProgressMode, ThreadLink};
pub use download::{run_batch, BatchReport};
pub use error::{Error, Result};
pub use media::{extract_descriptors, FileDescriptor};
