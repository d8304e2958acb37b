//! Thread response to download descriptor conversion.

use std::collections::HashSet;

use url::Url;

use crate::api::types::ThreadResponse;
use crate::fs::naming::randomize_filename;
use crate::media::descriptor::FileDescriptor;

/// Walk the thread's posts and produce one descriptor per attached file.
///
/// Post and file order is preserved. Posts without attachments contribute
/// nothing. Each destination name gets a random prefix, regenerated on
/// collision, so two attachments sharing an original name never overwrite
/// each other.
pub fn extract_descriptors(thread: &ThreadResponse, base_url: &Url) -> Vec<FileDescriptor> {
    let mut descriptors = Vec::new();
    let mut used_names: HashSet<String> = HashSet::new();

    for post in &thread.posts {
        let Some(files) = &post.files else {
            continue;
        };

        for file in files {
            let url = match base_url.join(&file.path) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    tracing::warn!("Skipping file with unresolvable path '{}': {}", file.path, e);
                    continue;
                }
            };

            let mut file_name = randomize_filename(&file.name);
            while !used_names.insert(file_name.clone()) {
                file_name = randomize_filename(&file.name);
            }

            descriptors.push(FileDescriptor {
                url,
                file_name,
                size_kb: file.size,
            });
        }
    }

    descriptors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Post, ThreadFile};

    fn file(name: &str, path: &str, size: Option<u64>) -> ThreadFile {
        ThreadFile {
            name: name.to_string(),
            path: path.to_string(),
            size,
        }
    }

    fn base() -> Url {
        Url::parse("https://2ch.hk/").unwrap()
    }

    #[test]
    fn test_posts_without_files_are_skipped() {
        let thread = ThreadResponse {
            posts: vec![
                Post { files: None },
                Post {
                    files: Some(vec![
                        file("a.jpg", "/b/src/1/a.jpg", Some(10)),
                        file("b.png", "/b/src/1/b.png", Some(20)),
                        file("c.webm", "/b/src/1/c.webm", None),
                    ]),
                },
            ],
        };

        let descriptors = extract_descriptors(&thread, &base());
        assert_eq!(descriptors.len(), 3);

        // Original file order is preserved
        assert!(descriptors[0].file_name.ends_with("_a.jpg"));
        assert!(descriptors[1].file_name.ends_with("_b.png"));
        assert!(descriptors[2].file_name.ends_with("_c.webm"));
        assert_eq!(descriptors[2].size_kb, None);
    }

    #[test]
    fn test_urls_resolved_against_base() {
        let thread = ThreadResponse {
            posts: vec![Post {
                files: Some(vec![file("a.jpg", "/b/src/1/a.jpg", Some(10))]),
            }],
        };

        let descriptors = extract_descriptors(&thread, &base());
        assert_eq!(descriptors[0].url, "https://2ch.hk/b/src/1/a.jpg");
    }

    #[test]
    fn test_duplicate_names_get_distinct_destinations() {
        let thread = ThreadResponse {
            posts: vec![Post {
                files: Some(vec![
                    file("image.jpg", "/b/src/1/100.jpg", Some(10)),
                    file("image.jpg", "/b/src/1/200.jpg", Some(10)),
                ]),
            }],
        };

        let descriptors = extract_descriptors(&thread, &base());
        assert_eq!(descriptors.len(), 2);
        assert_ne!(descriptors[0].file_name, descriptors[1].file_name);
    }

    #[test]
    fn test_empty_thread_produces_no_descriptors() {
        let thread = ThreadResponse { posts: vec![] };
        assert!(extract_descriptors(&thread, &base()).is_empty());
    }
}
