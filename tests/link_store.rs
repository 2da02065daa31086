mod common;

use std::collections::HashSet;
use std::sync::Arc;

use snip::AppError;
use snip::domain::code_generator::is_well_formed;
use tokio::task::JoinSet;

#[tokio::test]
async fn test_shorten_resolve_stats_scenario() {
    let db = common::TestDb::new().await;
    let service = db.service();

    let first = service.shorten("https://example.com").await.unwrap();
    assert!(first.created);
    assert_eq!(first.link.clicks, 0);
    assert!(is_well_formed(&first.link.short_code));

    let again = service.shorten("https://example.com").await.unwrap();
    assert!(!again.created);
    assert_eq!(again.link, first.link);

    let resolved = service
        .resolve_and_count(&first.link.short_code)
        .await
        .unwrap();
    assert_eq!(resolved.id, first.link.id);
    assert_eq!(resolved.original_url, "https://example.com");
    assert_eq!(resolved.clicks, 1);

    let stats = service.stats(&first.link.short_code).await.unwrap();
    assert_eq!(stats.clicks, 1);

    let missing = service.resolve_and_count("doesnotexist").await;
    assert!(matches!(missing, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_resolve_missing_code_creates_nothing() {
    let db = common::TestDb::new().await;
    let service = db.service();

    assert!(service.resolve_and_count("nope23").await.is_err());
    assert!(service.stats("nope23").await.unwrap_err().is_not_found());
    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_stats_does_not_count_clicks() {
    let db = common::TestDb::new().await;
    let service = db.service();

    let link = service.shorten("https://example.com").await.unwrap().link;

    for _ in 0..3 {
        service.stats(&link.short_code).await.unwrap();
    }

    assert_eq!(service.stats(&link.short_code).await.unwrap().clicks, 0);
}

#[tokio::test]
async fn test_recent_five_of_three_returns_all_newest_first() {
    let db = common::TestDb::new().await;
    let service = db.service();

    let mut codes = Vec::new();
    for url in [
        "https://one.example.com",
        "https://two.example.com",
        "https://three.example.com",
    ] {
        codes.push(service.shorten(url).await.unwrap().link.short_code);
    }

    let recent = service.recent(5).await.unwrap();

    let recent_codes: Vec<_> = recent.into_iter().map(|l| l.short_code).collect();
    codes.reverse();
    assert_eq!(recent_codes, codes);
}

#[tokio::test]
async fn test_shorten_retries_after_collision() {
    let db = common::TestDb::new().await;

    let taken = db
        .service()
        .with_code_generator(common::ScriptedGenerator::new(&["taken2"], "unused"))
        .shorten("https://a.example.com")
        .await
        .unwrap();
    assert_eq!(taken.link.short_code, "taken2");

    let service = db
        .service()
        .with_code_generator(common::ScriptedGenerator::new(&["taken2", "taken2"], "fresh3"));

    let shortened = service.shorten("https://b.example.com").await.unwrap();

    assert!(shortened.created);
    assert_eq!(shortened.link.short_code, "fresh3");
    assert_eq!(service.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_shorten_gives_up_when_every_code_is_taken() {
    let db = common::TestDb::new().await;

    db.service()
        .with_code_generator(common::ScriptedGenerator::new(&[], "taken2"))
        .shorten("https://a.example.com")
        .await
        .unwrap();

    let service = db
        .service()
        .with_code_generator(common::ScriptedGenerator::new(&[], "taken2"))
        .with_max_attempts(5);

    let result = service.shorten("https://b.example.com").await;

    assert!(matches!(result, Err(AppError::CapacityExhausted { .. })));
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shorten_distinct_urls_yields_unique_codes() {
    let db = common::TestDb::new().await;
    let service = Arc::new(db.service());

    let mut tasks = JoinSet::new();
    for i in 0..40 {
        let service = service.clone();
        tasks.spawn(async move {
            service
                .shorten(&format!("https://example.com/page/{i}"))
                .await
        });
    }

    let mut codes = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        let shortened = result.unwrap().unwrap();
        assert!(shortened.created);
        assert!(is_well_formed(&shortened.link.short_code));
        codes.insert(shortened.link.short_code);
    }

    assert_eq!(codes.len(), 40);
    assert_eq!(service.count().await.unwrap(), 40);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shorten_same_url_yields_one_record() {
    let db = common::TestDb::new().await;
    let service = Arc::new(db.service());

    let mut tasks = JoinSet::new();
    for _ in 0..20 {
        let service = service.clone();
        tasks.spawn(async move { service.shorten("https://example.com/same").await });
    }

    let mut codes = HashSet::new();
    let mut created = 0;
    while let Some(result) = tasks.join_next().await {
        let shortened = result.unwrap().unwrap();
        if shortened.created {
            created += 1;
        }
        codes.insert(shortened.link.short_code);
    }

    assert_eq!(created, 1);
    assert_eq!(codes.len(), 1);
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_redirects_lose_no_clicks() {
    let db = common::TestDb::new().await;
    let service = Arc::new(db.service());

    let code = service
        .shorten("https://example.com")
        .await
        .unwrap()
        .link
        .short_code;
    service.resolve_and_count(&code).await.unwrap();

    let n = 50;
    let mut tasks = JoinSet::new();
    for _ in 0..n {
        let service = service.clone();
        let code = code.clone();
        tasks.spawn(async move { service.resolve_and_count(&code).await });
    }

    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    assert_eq!(service.stats(&code).await.unwrap().clicks, 1 + n);
}
