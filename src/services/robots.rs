// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Crawl policy for the site and its `robots.txt` rendering.

use crate::models::robots::{CrawlPolicy, RuleGroup};
use crate::models::site::SiteMetadata;
use anyhow::{anyhow, Result};
use texting_robots::Robot;

/// Renderer used when capturing link-preview screenshots of the site.
pub const SCREENSHOT_AGENT: &str = "vercel-screenshot/1.0";

pub const SITEMAP_PATH: &str = "/sitemap.xml";

/// Build the crawl policy for a site.
///
/// The screenshot renderer is blocked from every path and all other crawlers
/// are allowed everywhere. The site URL is used as-is.
pub fn robots(site: &SiteMetadata) -> CrawlPolicy {
    CrawlPolicy {
        rules: vec![
            RuleGroup::for_agents(vec![SCREENSHOT_AGENT]).disallow(vec!["/"]),
            RuleGroup::for_agents("*").allow("/"),
        ],
        sitemap: format!("{}{}", site.site_url, SITEMAP_PATH).into(),
        host: site.site_url.clone(),
    }
}

/// Serialize a policy as `robots.txt` text.
pub fn render_robots_txt(policy: &CrawlPolicy) -> String {
    let mut content = String::new();

    for group in &policy.rules {
        let agents = group.user_agent.as_slice();
        if agents.is_empty() {
            content.push_str("User-agent: *\n");
        }
        for agent in agents {
            content.push_str(&format!("User-agent: {agent}\n"));
        }

        for path in group.disallow.iter().flat_map(|d| d.as_slice()) {
            content.push_str(&format!("Disallow: {path}\n"));
        }
        for path in group.allow.iter().flat_map(|a| a.as_slice()) {
            content.push_str(&format!("Allow: {path}\n"));
        }

        if let Some(delay) = group.crawl_delay {
            content.push_str(&format!("Crawl-delay: {delay}\n"));
        }

        content.push('\n');
    }

    for sitemap in policy.sitemap.as_slice() {
        content.push_str(&format!("Sitemap: {sitemap}\n"));
    }
    content.push_str(&format!("Host: {}\n", policy.host));

    content
}

/// Check whether `user_agent` may fetch `path` under the rendered policy.
pub fn is_allowed(policy: &CrawlPolicy, user_agent: &str, path: &str) -> Result<bool> {
    let txt = render_robots_txt(policy);
    let robot = Robot::new(user_agent, txt.as_bytes())
        .map_err(|e| anyhow!("Failed to parse rendered robots.txt: {}", e))?;

    Ok(robot.allowed(path))
}
