//! Stroke-order diagrams scraped from per-character pages.

use reqwest::{Client, Url};
use scraper::{ElementRef, Html};

use super::StrokeImageSource;
use crate::error::Result;

/// Position of the stroke-order image on a character page.
const IMAGE_PATH: &str = "/html/body/div[2]/div/div[1]/div/div/div[4]/img";

#[derive(Debug, thiserror::Error)]
pub enum StrokeOrderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Client for a stroke-order site serving `/chinese/<character>` pages.
#[derive(Debug, Clone)]
pub struct StrokeOrderClient {
    client: Client,
    base_url: String,
}

impl StrokeOrderClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn page_url(&self, character: &str) -> Result<Url, StrokeOrderError> {
        let raw = format!("{}/chinese/{}", self.base_url, character);
        Url::parse(&raw).map_err(|e| StrokeOrderError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Absolute URL of the stroke-order image for `character`, if the page has one.
    pub async fn fetch_image_url(&self, character: &str) -> Result<Option<String>, StrokeOrderError> {
        let page = self.page_url(character)?;
        tracing::debug!("GET {}", page);

        let resp = self
            .client
            .get(page.clone())
            .send()
            .await
            .map_err(|e| StrokeOrderError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(StrokeOrderError::Http {
                status: resp.status().as_u16(),
                url: page.to_string(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| StrokeOrderError::Network(e.to_string()))?;

        let Some(src) = find_image_src(&body) else {
            return Ok(None);
        };

        page.join(&src)
            .map(|url| Some(url.to_string()))
            .map_err(|e| StrokeOrderError::InvalidUrl(format!("{}: {}", src, e)))
    }
}

impl StrokeImageSource for StrokeOrderClient {
    async fn image_url(&self, character: &str) -> Result<Option<String>> {
        Ok(self.fetch_image_url(character).await?)
    }
}

struct PathStep<'a> {
    name: &'a str,
    /// 1-based index among siblings with the same tag name; `None` matches every sibling.
    position: Option<usize>,
}

fn path_steps(path: &str) -> Vec<PathStep<'_>> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('[') {
            Some((name, index)) => PathStep {
                name,
                position: Some(index.trim_end_matches(']').parse().unwrap_or(0)),
            },
            None => PathStep {
                name: segment,
                position: None,
            },
        })
        .collect()
}

/// `src` of the first element in document order matching the fixed image path,
/// or `None` when the layout differs.
pub fn find_image_src(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let steps = path_steps(IMAGE_PATH);

    let (root, rest) = steps.split_first()?;
    let current = document.root_element();
    if current.value().name() != root.name {
        return None;
    }

    walk(current, rest)
}

/// Depth-first search down `steps`; unindexed steps try each matching child in order.
fn walk(element: ElementRef<'_>, steps: &[PathStep<'_>]) -> Option<String> {
    let Some((step, rest)) = steps.split_first() else {
        return element.value().attr("src").map(str::to_string);
    };

    let mut matching = element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == step.name);

    match step.position {
        Some(position) => walk(matching.nth(position.checked_sub(1)?)?, rest),
        None => matching.find_map(|child| walk(child, rest)),
    }
}
