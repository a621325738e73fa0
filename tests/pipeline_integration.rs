mod helpers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::MockServer;

use jaundice::{
    analysis::{ArticleResult, ProcessingStatus},
    sanitizers::SanitizerRegistry,
    text::{Lemmatizer, LowercaseLemmatizer},
};

use helpers::{
    INOSMI_ARTICLE, article_page, mirror_analyzer, mirror_registry, serve, serve_slow,
    serve_status, test_analyzer,
};

fn by_url(results: &[ArticleResult]) -> HashMap<&str, &ArticleResult> {
    results.iter().map(|result| (result.url(), result)).collect()
}

/// Lemmatizer that burns wall-clock time on every word.
struct SlowLemmatizer(Duration);

impl Lemmatizer for SlowLemmatizer {
    fn normal_form(&self, word: &str) -> String {
        std::thread::sleep(self.0);
        word.to_lowercase()
    }
}

/// Lemmatizer that stalls only on one marker word.
struct StallOn {
    word: &'static str,
    delay: Duration,
}

impl Lemmatizer for StallOn {
    fn normal_form(&self, word: &str) -> String {
        if word == self.word {
            std::thread::sleep(self.delay);
        }
        word.to_lowercase()
    }
}

#[tokio::test]
async fn test_scores_known_article() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/world/1.html",
        article_page("Аутсайдер и банкротство: это плохо для экономики"),
    )
    .await;

    let url = format!("{}/world/1.html", server.uri());
    let results = mirror_analyzer(&server).run([url.clone()]).await;

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.url(), url);
    assert_eq!(result.status(), ProcessingStatus::Ok);
    // аутсайдер, банкротство, это, плохо, для, экономики
    assert_eq!(result.word_count(), Some(6));
    assert_eq!(result.score(), Some(33.33));
    assert!(result.elapsed_time().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_fixture_article_is_ok() {
    let server = MockServer::start().await;
    serve(&server, "/politic/trump.html", INOSMI_ARTICLE.to_string()).await;

    let url = format!("{}/politic/trump.html", server.uri());
    let results = mirror_analyzer(&server).run([url]).await;

    let result = &results[0];
    assert_eq!(result.status(), ProcessingStatus::Ok);
    assert!(result.word_count().unwrap() > 0);
    let score = result.score().unwrap();
    assert!((0.0..=100.0).contains(&score));
}

#[tokio::test]
async fn test_failures_are_isolated() {
    let server = MockServer::start().await;
    serve(&server, "/ok", article_page("Скандал вокруг банкротства компании")).await;
    serve(&server, "/no-article", "<html><body><h1>Главная</h1></body></html>".to_string()).await;
    serve_slow(
        &server,
        "/slow",
        article_page("Опоздавшая статья"),
        Duration::from_secs(3),
    )
    .await;
    serve_status(&server, "/missing", 404).await;

    let ok = format!("{}/ok", server.uri());
    let no_article = format!("{}/no-article", server.uri());
    let slow = format!("{}/slow", server.uri());
    let missing = format!("{}/missing", server.uri());

    let analyzer = mirror_analyzer(&server).with_fetch_timeout(Duration::from_millis(300));
    let results = analyzer
        .run([ok.clone(), no_article.clone(), slow.clone(), missing.clone()])
        .await;

    assert_eq!(results.len(), 4);
    let results = by_url(&results);
    assert_eq!(results[ok.as_str()].status(), ProcessingStatus::Ok);
    assert_eq!(
        results[no_article.as_str()].status(),
        ProcessingStatus::ParsingError
    );
    assert_eq!(results[slow.as_str()].status(), ProcessingStatus::Timeout);
    assert_eq!(results[missing.as_str()].status(), ProcessingStatus::FetchError);

    for url in [&no_article, &slow, &missing] {
        let result = results[url.as_str()];
        assert!(result.stats().is_none());
        assert_eq!(result.score(), None);
        assert_eq!(result.word_count(), None);
        assert_eq!(result.elapsed_time(), None);
    }
}

#[tokio::test]
async fn test_unsupported_host_is_parsing_error() {
    let server = MockServer::start().await;
    serve(&server, "/article", article_page("Обычный текст новости")).await;

    let analyzer = test_analyzer(SanitizerRegistry::with_defaults(), Arc::new(LowercaseLemmatizer));
    let results = analyzer.run([format!("{}/article", server.uri())]).await;

    assert_eq!(results[0].status(), ProcessingStatus::ParsingError);
}

#[tokio::test]
async fn test_unreachable_and_malformed_urls_are_fetch_errors() {
    let server = MockServer::start().await;
    let analyzer = mirror_analyzer(&server);

    let results = analyzer
        .run(["http://127.0.0.1:1/article", "not a url at all"])
        .await;

    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(result.status(), ProcessingStatus::FetchError, "{}", result.url());
    }
}

#[tokio::test]
async fn test_every_url_gets_one_record_including_duplicates() {
    let server = MockServer::start().await;
    serve(&server, "/a", article_page("Первая статья про скандал")).await;
    serve(&server, "/b", article_page("Вторая статья про выборы")).await;

    let a = format!("{}/a", server.uri());
    let b = format!("{}/b", server.uri());
    let urls = vec![a.clone(), b.clone(), a.clone()];

    let results = mirror_analyzer(&server).run(urls).await;

    assert_eq!(results.len(), 3);
    let mut seen: Vec<&str> = results.iter().map(ArticleResult::url).collect();
    seen.sort_unstable();
    let mut expected = vec![a.as_str(), a.as_str(), b.as_str()];
    expected.sort_unstable();
    assert_eq!(seen, expected);
    assert!(results.iter().all(|r| r.status() == ProcessingStatus::Ok));
}

#[tokio::test]
async fn test_empty_batch() {
    let server = MockServer::start().await;
    let results = mirror_analyzer(&server).run(Vec::<String>::new()).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_repeated_runs_agree() {
    let server = MockServer::start().await;
    serve(&server, "/stable", INOSMI_ARTICLE.to_string()).await;

    let url = format!("{}/stable", server.uri());
    let analyzer = mirror_analyzer(&server);

    let first = analyzer.run([url.clone()]).await;
    let second = analyzer.run([url]).await;

    assert_eq!(first[0].status(), ProcessingStatus::Ok);
    assert_eq!(first[0].score(), second[0].score());
    assert_eq!(first[0].word_count(), second[0].word_count());
}

#[tokio::test]
async fn test_slow_tokenizing_times_out() {
    let server = MockServer::start().await;
    let long_text = "медленное слово ".repeat(100);
    serve(&server, "/long", article_page(&long_text)).await;

    let analyzer = test_analyzer(
        mirror_registry(&server),
        Arc::new(SlowLemmatizer(Duration::from_millis(5))),
    )
    .with_tokenize_budget(Duration::from_millis(100));

    let results = analyzer.run([format!("{}/long", server.uri())]).await;

    assert_eq!(results[0].status(), ProcessingStatus::Timeout);
    assert_eq!(results[0].score(), None);
}

#[tokio::test]
async fn test_run_with_timeout_overrides_default() {
    let server = MockServer::start().await;
    serve_slow(
        &server,
        "/slowish",
        article_page("Статья с задержкой"),
        Duration::from_millis(500),
    )
    .await;

    let url = format!("{}/slowish", server.uri());
    let analyzer = mirror_analyzer(&server);

    let hurried = analyzer
        .run_with_timeout([url.clone()], Duration::from_millis(100))
        .await;
    assert_eq!(hurried[0].status(), ProcessingStatus::Timeout);

    let patient = analyzer.run_with_timeout([url], Duration::from_secs(3)).await;
    assert_eq!(patient[0].status(), ProcessingStatus::Ok);
}

#[tokio::test]
async fn test_records_serialize_with_nulls() {
    let server = MockServer::start().await;
    serve_status(&server, "/gone", 410).await;

    let url = format!("{}/gone", server.uri());
    let results = mirror_analyzer(&server).run([url.clone()]).await;

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "url": url,
            "status": "FETCH_ERROR",
            "score": null,
            "word_count": null,
            "elapsed_time": null,
        }])
    );
}

#[tokio::test]
async fn test_fetch_timeout_unsupported_host_and_success_in_one_batch() {
    let server = MockServer::start().await;
    let foreign = MockServer::start().await;
    serve(&server, "/ok", article_page("Скандал вокруг банкротства компании")).await;
    serve_slow(
        &server,
        "/slow",
        article_page("Опоздавшая статья"),
        Duration::from_secs(3),
    )
    .await;
    serve(&foreign, "/article", article_page("Статья с чужого сайта")).await;

    let ok = format!("{}/ok", server.uri());
    let slow = format!("{}/slow", server.uri());
    let unsupported = format!("{}/article", foreign.uri());

    let analyzer = mirror_analyzer(&server).with_fetch_timeout(Duration::from_millis(300));
    let results = analyzer
        .run([ok.clone(), slow.clone(), unsupported.clone()])
        .await;

    assert_eq!(results.len(), 3);
    let results = by_url(&results);
    assert_eq!(results[ok.as_str()].status(), ProcessingStatus::Ok);
    assert_eq!(results[slow.as_str()].status(), ProcessingStatus::Timeout);
    assert_eq!(
        results[unsupported.as_str()].status(),
        ProcessingStatus::ParsingError
    );
}

#[tokio::test]
async fn test_slow_downloads_overlap() {
    const ARTICLES: u32 = 5;
    const DELAY: Duration = Duration::from_millis(400);

    let server = MockServer::start().await;
    let mut urls = Vec::new();
    for i in 0..ARTICLES {
        let route = format!("/delayed/{i}");
        serve_slow(&server, &route, article_page("Статья про скандал"), DELAY).await;
        urls.push(format!("{}{route}", server.uri()));
    }

    let started = Instant::now();
    let results = mirror_analyzer(&server).run(urls).await;
    let elapsed = started.elapsed();

    assert_eq!(results.len(), ARTICLES as usize);
    assert!(results.iter().all(|r| r.status() == ProcessingStatus::Ok));
    // Sequential processing would need ARTICLES * DELAY = 2s.
    assert!(
        elapsed < DELAY * 3,
        "batch took {elapsed:?}, downloads did not overlap"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn test_slow_tokenizing_does_not_starve_siblings() {
    let server = MockServer::start().await;
    serve(&server, "/heavy", article_page(&"тормоз ".repeat(400))).await;
    serve(&server, "/light", article_page("Короткая заметка про скандал")).await;

    let heavy = format!("{}/heavy", server.uri());
    let light = format!("{}/light", server.uri());

    let lemmatizer = StallOn {
        word: "тормоз",
        delay: Duration::from_millis(5),
    };
    let analyzer = test_analyzer(mirror_registry(&server), Arc::new(lemmatizer))
        .with_tokenize_budget(Duration::from_millis(500));

    let results = analyzer.run([heavy.clone(), light.clone()]).await;

    assert_eq!(results.len(), 2);
    // Records arrive in completion order.
    assert_eq!(results[0].url(), light);
    assert_eq!(results[0].status(), ProcessingStatus::Ok);
    assert_eq!(results[1].url(), heavy);
    assert_eq!(results[1].status(), ProcessingStatus::Timeout);
}
