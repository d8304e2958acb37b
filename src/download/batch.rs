//! Bounded-concurrency batch downloading.
//!
//! One task is spawned per descriptor; a counting semaphore keeps at most
//! `concurrency` downloads in flight. A failed file is logged and counted as
//! done, it never aborts the batch. Progress is rendered either from the
//! completion channel (live) or by a periodic reader of a shared counter
//! (poll); both render exactly `total/total` once and only once.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use indicatif::ProgressBar;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use crate::api::DvachApi;
use crate::config::{Config, ProgressMode};
use crate::download::single::download_one;
use crate::error::{Error, Result};
use crate::media::FileDescriptor;
use crate::output::{create_progress_line, print_warning};

/// How often the polling reporter re-reads the completion counter.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Aggregate counts for one finished batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: u64,
    pub failed: u64,
}

impl BatchReport {
    /// Total number of completed jobs.
    pub fn total(&self) -> u64 {
        self.succeeded + self.failed
    }
}

/// Outcome of one download job, delivered to the progress reporter.
struct JobOutcome {
    url: String,
    error: Option<Error>,
}

/// Download every descriptor into `target_dir` under the configured
/// concurrency limit. Returns once all jobs have finished, succeeded or not.
pub async fn run_batch(
    api: &DvachApi,
    config: &Config,
    descriptors: Vec<FileDescriptor>,
    target_dir: &Path,
) -> Result<BatchReport> {
    match config.options.progress_mode {
        ProgressMode::Live => run_with_events(api, config, descriptors, target_dir).await,
        ProgressMode::Poll => run_with_polling(api, config, descriptors, target_dir).await,
    }
}

/// Event-driven variant: every job sends its outcome over a channel and the
/// single consumer owns the counter, so each job contributes exactly one
/// increment and updates cannot be lost.
async fn run_with_events(
    api: &DvachApi,
    config: &Config,
    descriptors: Vec<FileDescriptor>,
    target_dir: &Path,
) -> Result<BatchReport> {
    let total = descriptors.len() as u64;
    let limit = config.options.concurrency.max(1);
    let bar = create_progress_line(total, config.options.show_downloads);

    let semaphore = Arc::new(Semaphore::new(limit));
    let (tx, mut rx) = mpsc::channel::<JobOutcome>(limit);
    let mut jobs = JoinSet::new();

    for descriptor in descriptors {
        let api = api.clone();
        let semaphore = Arc::clone(&semaphore);
        let tx = tx.clone();
        let dest = target_dir.join(&descriptor.file_name);

        jobs.spawn(async move {
            // Never closed while jobs exist, so this only waits for a slot.
            let _permit = semaphore.acquire_owned().await.expect("semaphore closed");

            let error = download_one(&api, &descriptor, &dest).await.err();
            let _ = tx
                .send(JobOutcome {
                    url: descriptor.url,
                    error,
                })
                .await;
        });
    }
    drop(tx);

    let mut report = BatchReport::default();
    while let Some(outcome) = rx.recv().await {
        match outcome.error {
            None => report.succeeded += 1,
            Some(e) => {
                report.failed += 1;
                report_failure(&bar, &outcome.url, &e);
            }
        }
        bar.set_position(report.total());
    }

    join_all(&mut jobs).await?;
    bar.finish();

    Ok(report)
}

/// Polling variant: jobs bump shared atomic counters and an independent task
/// re-reads them on an interval until the count reaches the total.
async fn run_with_polling(
    api: &DvachApi,
    config: &Config,
    descriptors: Vec<FileDescriptor>,
    target_dir: &Path,
) -> Result<BatchReport> {
    let total = descriptors.len() as u64;
    let limit = config.options.concurrency.max(1);
    let bar = create_progress_line(total, config.options.show_downloads);

    let semaphore = Arc::new(Semaphore::new(limit));
    let completed = Arc::new(AtomicU64::new(0));
    let failed = Arc::new(AtomicU64::new(0));
    let mut jobs = JoinSet::new();

    for descriptor in descriptors {
        let api = api.clone();
        let semaphore = Arc::clone(&semaphore);
        let completed = Arc::clone(&completed);
        let failed = Arc::clone(&failed);
        let bar = bar.clone();
        let dest = target_dir.join(&descriptor.file_name);

        jobs.spawn(async move {
            let _permit = semaphore.acquire_owned().await.expect("semaphore closed");

            if let Err(e) = download_one(&api, &descriptor, &dest).await {
                failed.fetch_add(1, Ordering::Relaxed);
                report_failure(&bar, &descriptor.url, &e);
            }
            // Counts both outcomes: exactly one increment per job.
            completed.fetch_add(1, Ordering::Relaxed);
        });
    }

    let reporter = {
        let completed = Arc::clone(&completed);
        let bar = bar.clone();
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(POLL_INTERVAL);
            loop {
                tick.tick().await;
                let done = completed.load(Ordering::Relaxed);
                bar.set_position(done);
                if done >= total {
                    break;
                }
            }
        })
    };

    if let Err(e) = join_all(&mut jobs).await {
        reporter.abort();
        return Err(e);
    }
    let _ = reporter.await;
    bar.finish();

    let failed = failed.load(Ordering::Relaxed);
    Ok(BatchReport {
        succeeded: total - failed,
        failed,
    })
}

/// Reap every spawned job, surfacing panics as errors.
async fn join_all(jobs: &mut JoinSet<()>) -> Result<()> {
    while let Some(res) = jobs.join_next().await {
        res.map_err(|e| Error::Download(format!("Download task panicked: {}", e)))?;
    }
    Ok(())
}

/// One user-visible line per failed file, naming the URL and the cause.
fn report_failure(bar: &ProgressBar, url: &str, error: &Error) {
    let line = format!("Failed to download {}: {}", url, error);
    tracing::debug!("{}", line);
    if bar.is_hidden() {
        print_warning(&line);
    } else {
        bar.println(line);
    }
}
