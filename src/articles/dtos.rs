use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ArticlesQuery {
    /// Comma-separated article URLs.
    pub urls: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ArticlesQuery {
    /// Splits the `urls` parameter and enforces the per-request limit.
    pub fn validate(&self, url_limit: usize) -> Result<Vec<String>, String> {
        let urls: Vec<String> = self
            .urls
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect();

        if urls.is_empty() {
            return Err("no urls in request, pass them as ?urls=url1,url2".to_string());
        }
        if urls.len() > url_limit {
            return Err(format!(
                "too many urls in request, should be {url_limit} or less"
            ));
        }
        Ok(urls)
    }
}
