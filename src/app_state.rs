use std::sync::Arc;

use crate::analysis::Analyzer;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub url_limit: usize,
}

impl AppState {
    pub fn new(analyzer: Analyzer, url_limit: usize) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            url_limit,
        }
    }
}
