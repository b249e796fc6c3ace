// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Crawl policy types, shaped after the `robots.txt` metadata object that site
//! generators serialize at `/robots.txt`.

use serde::{Deserialize, Serialize};

/// Either a single value or an ordered list of values.
///
/// The two forms are kept apart so that `"*"` and `["*"]` serialize back
/// exactly as they were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// One `User-agent` block of a robots.txt file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleGroup {
    /// Agents this group applies to. An empty list renders as `*`.
    pub user_agent: OneOrMany<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<OneOrMany<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disallow: Option<OneOrMany<String>>,
    /// Seconds between requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_delay: Option<u32>,
}

impl RuleGroup {
    /// Group with the given agents and no path rules yet.
    pub fn for_agents(user_agent: impl Into<OneOrMany<String>>) -> Self {
        Self {
            user_agent: user_agent.into(),
            allow: None,
            disallow: None,
            crawl_delay: None,
        }
    }

    pub fn allow(mut self, paths: impl Into<OneOrMany<String>>) -> Self {
        self.allow = Some(paths.into());
        self
    }

    pub fn disallow(mut self, paths: impl Into<OneOrMany<String>>) -> Self {
        self.disallow = Some(paths.into());
        self
    }

    pub fn crawl_delay(mut self, seconds: u32) -> Self {
        self.crawl_delay = Some(seconds);
        self
    }
}

/// Complete crawl policy for a site.
///
/// Rule groups keep their order: crawlers pick the first group naming them
/// before falling back to the `*` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlPolicy {
    pub rules: Vec<RuleGroup>,
    pub sitemap: OneOrMany<String>,
    pub host: String,
}
