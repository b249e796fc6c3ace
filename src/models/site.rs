// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{anyhow, Context, Result};
use std::env;
use url::Url;

/// Site-wide metadata the crawl policy is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    /// Absolute base URL without a trailing slash, e.g. `https://example.com`
    pub site_url: String,
}

impl SiteMetadata {
    /// Validate and normalize a site URL.
    ///
    /// Trailing slashes are stripped so paths can be appended with a leading `/`.
    pub fn new(site_url: impl Into<String>) -> Result<Self> {
        let site_url = site_url.into();

        // The URL parser drops tabs and newlines and trims spaces, but the raw
        // value is what ends up in robots.txt lines.
        if let Some(c) = site_url
            .chars()
            .find(|c| c.is_whitespace() || c.is_control())
        {
            return Err(anyhow!(
                "SITE_URL must not contain whitespace or control characters, found: {:?}",
                c
            ));
        }

        let trimmed = site_url.trim_end_matches('/');

        let parsed = Url::parse(trimmed)
            .with_context(|| format!("SITE_URL must be an absolute http(s) URL, got: {site_url}"))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow!(
                "SITE_URL must be an absolute http(s) URL, got scheme: {}",
                parsed.scheme()
            ));
        }

        Ok(Self {
            site_url: trimmed.to_string(),
        })
    }

    /// Load site metadata from environment variables.
    pub fn from_env() -> Result<Self> {
        let site_url = env::var("SITE_URL").context("SITE_URL must be set")?;
        Self::new(site_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_url_without_trailing_slash() {
        let site = SiteMetadata::new("https://example.com").unwrap();
        assert_eq!(site.site_url, "https://example.com");
    }

    #[test]
    fn test_new_strips_trailing_slashes() {
        let site = SiteMetadata::new("https://example.com/").unwrap();
        assert_eq!(site.site_url, "https://example.com");

        let site = SiteMetadata::new("https://example.com/blog//").unwrap();
        assert_eq!(site.site_url, "https://example.com/blog");
    }

    #[test]
    fn test_new_accepts_plain_http() {
        assert!(SiteMetadata::new("http://localhost:3000").is_ok());
    }

    #[test]
    fn test_new_rejects_relative_url() {
        let err = SiteMetadata::new("example.com").unwrap_err();
        assert!(err.to_string().contains("SITE_URL must be an absolute http(s) URL"));
    }

    #[test]
    fn test_new_rejects_empty_value() {
        assert!(SiteMetadata::new("").is_err());
    }

    #[test]
    fn test_new_rejects_embedded_newline() {
        let err = SiteMetadata::new("https://example.com/x\nDisallow:/").unwrap_err();
        assert!(err.to_string().contains("whitespace or control characters"));

        assert!(SiteMetadata::new("https://example.com\r\n").is_err());
    }

    #[test]
    fn test_new_rejects_surrounding_whitespace() {
        assert!(SiteMetadata::new(" https://example.com").is_err());
        assert!(SiteMetadata::new("https://example.com ").is_err());
        assert!(SiteMetadata::new("\thttps://example.com").is_err());
    }

    #[test]
    fn test_new_rejects_inner_tab_and_nul() {
        assert!(SiteMetadata::new("https://exa\tmple.com").is_err());
        assert!(SiteMetadata::new("https://example.com/\0").is_err());
    }

    #[test]
    fn test_new_rejects_non_http_scheme() {
        let err = SiteMetadata::new("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("scheme: ftp"));
    }
}
