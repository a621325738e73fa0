use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::sanitizers::html_tools::extract_text;
use crate::sanitizers::{ArticleBody, SanitizeError, Sanitizer};

const HOST: &str = "inosmi.ru";

static ARTICLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.layout-article").unwrap());

// Notices, aggregator blocks, photo credits and the tag cloud around the text.
static BUZZ_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        ".article__notice, .article__aggr, aside, .media__copyright, \
         .article__meta, .article__info, .article__tags",
    )
    .unwrap()
});

/// Article extraction for inosmi.ru.
#[derive(Debug, Clone, Default)]
pub struct InosmiSanitizer;

impl InosmiSanitizer {
    pub fn new() -> Self {
        Self
    }
}

impl Sanitizer for InosmiSanitizer {
    fn host(&self) -> &str {
        HOST
    }

    fn sanitize(&self, html: &str) -> Result<ArticleBody, SanitizeError> {
        let document = Html::parse_document(html);
        let article = document
            .select(&ARTICLE_SELECTOR)
            .next()
            .ok_or(SanitizeError::ArticleNotFound)?;

        Ok(ArticleBody {
            text: extract_text(article, &BUZZ_SELECTOR),
        })
    }
}
