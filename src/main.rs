//! dvach-dl - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use dvach_dl::{
    api::DvachApi,
    cli::Args,
    config::{parse_thread_url, validate_config, Config},
    download::run_batch,
    error::{exit_codes, Error, Result},
    fs::{ensure_dir, thread_folder},
    media::extract_descriptors,
    output::{
        create_spinner, print_banner, print_batch_stats, print_config_summary, print_error,
        print_info, print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Api(_) | Error::Json(_) | Error::UrlParse(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_) | Error::Http(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let thread_url = args.url.clone();

    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration and thread link
    validate_config(&config)?;
    let link = parse_thread_url(&thread_url)?;

    print_config_summary(&config, &link);

    // Initialize API client
    let api = DvachApi::new(&config.network.base_url, &config.network.user_agent)?;

    // Fetch the thread's post list; any failure here is fatal and happens
    // before a single file is touched
    let spinner = create_spinner(&format!("Fetching thread /{}/{}...", link.board, link.thread));
    let thread = api.get_thread(&link).await;
    spinner.finish_and_clear();
    let thread = thread?;

    // Extract file descriptors
    let descriptors = extract_descriptors(&thread, api.base_url());
    if descriptors.is_empty() {
        print_warning("Thread has no file attachments");
    } else {
        let total_kb: u64 = descriptors.iter().filter_map(|d| d.size_kb).sum();
        print_info(&format!(
            "Queued {} files (~{} MiB)",
            descriptors.len(),
            total_kb / 1024
        ));
    }

    // Create the destination folder and run the batch
    let folder = thread_folder(&config, &link);
    ensure_dir(&folder)?;

    let report = run_batch(&api, &config, descriptors, &folder).await?;

    print_success("All downloads finished");
    print_batch_stats(&report, &folder);

    Ok(())
}
