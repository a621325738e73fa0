use std::sync::Arc;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use jaundice::{
    analysis::Analyzer,
    charged_words::ChargedWords,
    fetcher::{Fetcher, build_client},
    sanitizers::{InosmiSanitizer, SanitizerRegistry, host_key},
    text::{Lemmatizer, LowercaseLemmatizer},
};

pub const INOSMI_ARTICLE: &str = include_str!("fixtures/inosmi_article.html");

/// Registry that treats the mock server as an inosmi.ru mirror.
pub fn mirror_registry(server: &MockServer) -> SanitizerRegistry {
    let address = url::Url::parse(&server.uri()).unwrap();
    let mut registry = SanitizerRegistry::new();
    registry.register_for(
        host_key(&address).unwrap(),
        Arc::new(InosmiSanitizer::new()),
    );
    registry
}

pub fn test_analyzer(registry: SanitizerRegistry, lemmatizer: Arc<dyn Lemmatizer>) -> Analyzer {
    Analyzer::new(
        Fetcher::new(build_client().unwrap()),
        lemmatizer,
        Arc::new(registry),
        Arc::new(ChargedWords::from_iter(["аутсайдер", "банкротство", "скандал"])),
    )
}

pub fn mirror_analyzer(server: &MockServer) -> Analyzer {
    test_analyzer(mirror_registry(server), Arc::new(LowercaseLemmatizer))
}

/// Minimal page in inosmi.ru layout.
pub fn article_page(body: &str) -> String {
    format!(
        r#"<html><body><div class="layout-article"><div class="article__meta"><time>09:00</time></div><article><p>{body}</p></article></div></body></html>"#
    )
}

pub async fn serve(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("Content-Type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

pub async fn serve_slow(server: &MockServer, route: &str, html: String, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("Content-Type", "text/html; charset=utf-8")
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

pub async fn serve_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
