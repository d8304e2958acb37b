//! Configuration validation and thread-URL parsing.

use regex::Regex;
use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// A thread identified by board tag and thread number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadLink {
    pub board: String,
    pub thread: String,
}

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.options.concurrency < 1 {
        return Err(Error::ConfigValidation {
            field: "concurrency".to_string(),
            message: "Concurrency limit must be at least 1".to_string(),
        });
    }

    if config.options.folder_prefix.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "folder_prefix".to_string(),
            message: "Folder prefix cannot be empty".to_string(),
        });
    }

    if Url::parse(&config.network.base_url).is_err() {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Not a valid URL: '{}'", config.network.base_url),
        });
    }

    if config.network.user_agent.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Extract board and thread number from a thread URL.
///
/// Accepts links like `https://2ch.hk/b/res/292606618.html`, with or without
/// the `.html` suffix or a trailing slash.
pub fn parse_thread_url(input: &str) -> Result<ThreadLink> {
    let input = input.trim();

    // Pattern: /<board>/res/<thread>[.html][/]
    let thread_pattern = Regex::new(r"/([a-z0-9]+)/res/(\d+)(?:\.html)?/?$").unwrap();

    if let Some(captures) = thread_pattern.captures(input) {
        let board = captures.get(1).map(|m| m.as_str().to_string());
        let thread = captures.get(2).map(|m| m.as_str().to_string());
        if let (Some(board), Some(thread)) = (board, thread) {
            return Ok(ThreadLink { board, thread });
        }
    }

    Err(Error::ConfigValidation {
        field: "thread_url".to_string(),
        message: format!(
            "Could not extract board and thread from '{}'. \
             Example: https://2ch.hk/b/res/292606618.html",
            input
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_thread_url_html() {
        let link = parse_thread_url("https://2ch.hk/b/res/292606618.html").unwrap();
        assert_eq!(link.board, "b");
        assert_eq!(link.thread, "292606618");
    }

    #[test]
    fn test_parse_thread_url_no_suffix() {
        let link = parse_thread_url("https://2ch.life/pr/res/123456").unwrap();
        assert_eq!(link.board, "pr");
        assert_eq!(link.thread, "123456");
    }

    #[test]
    fn test_parse_thread_url_trailing_slash() {
        let link = parse_thread_url("https://2ch.hk/mu/res/987654.html/").unwrap();
        assert_eq!(link.board, "mu");
        assert_eq!(link.thread, "987654");
    }

    #[test]
    fn test_parse_thread_url_surrounding_whitespace() {
        let link = parse_thread_url("  https://2ch.hk/b/res/1.html\n").unwrap();
        assert_eq!(link.board, "b");
        assert_eq!(link.thread, "1");
    }

    #[test]
    fn test_parse_thread_url_invalid() {
        assert!(parse_thread_url("https://2ch.hk/b/").is_err());
        assert!(parse_thread_url("not a url").is_err());
        assert!(parse_thread_url("https://2ch.hk/b/res/abc.html").is_err());
    }

    #[test]
    fn test_validate_config_defaults_ok() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_zero_concurrency() {
        let mut config = Config::default();
        config.options.concurrency = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_bad_base_url() {
        let mut config = Config::default();
        config.network.base_url = "not a url".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_empty_folder_prefix() {
        let mut config = Config::default();
        config.options.folder_prefix = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
