//! Download descriptor representation.

/// A single file queued for download.
///
/// Produced by the extractor, consumed exactly once by the batch downloader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Absolute download URL.
    pub url: String,

    /// Destination filename inside the thread folder.
    pub file_name: String,

    /// Size in kilobytes as reported by the API. Advisory only: used for the
    /// pre-batch summary, never to bound reads or validate completeness.
    pub size_kb: Option<u64>,
}
