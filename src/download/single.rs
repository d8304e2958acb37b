//! Single file downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::DvachApi;
use crate::error::{Error, Result};
use crate::media::FileDescriptor;

/// Download one descriptor's file to `dest`, streaming the body to disk.
///
/// The body is read until end-of-stream; the descriptor's reported size is
/// advisory and never bounds the read.
pub async fn download_one(
    api: &DvachApi,
    descriptor: &FileDescriptor,
    dest: &Path,
) -> Result<PathBuf> {
    let response = api.download_file(&descriptor.url).await?;

    let mut file = File::create(dest).await?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;

    tracing::debug!("Wrote {} ({} bytes)", dest.display(), written);

    Ok(dest.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn descriptor(url: String, file_name: &str) -> FileDescriptor {
        FileDescriptor {
            url,
            file_name: file_name.to_string(),
            size_kb: Some(1),
        }
    }

    #[tokio::test]
    async fn test_download_writes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/b/src/1/a.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"fake image bytes".to_vec()))
            .mount(&server)
            .await;

        let api = DvachApi::new(&server.uri(), "test-agent").unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("a.jpg");

        let d = descriptor(format!("{}/b/src/1/a.jpg", server.uri()), "a.jpg");
        let written = download_one(&api, &d, &dest).await.unwrap();

        assert_eq!(written, dest);
        assert_eq!(std::fs::read(&dest).unwrap(), b"fake image bytes");
    }

    #[tokio::test]
    async fn test_download_non_success_status_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let api = DvachApi::new(&server.uri(), "test-agent").unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("missing.jpg");

        let d = descriptor(format!("{}/missing.jpg", server.uri()), "missing.jpg");
        let err = download_one(&api, &d, &dest).await.unwrap_err();

        assert!(err.to_string().contains("404"));
        // No destination file is left behind for a failed status check
        assert!(!dest.exists());
    }
}
