//! End-to-end tests for the query/render cycle.
//!
//! These tests exercise the full front-end workflow without a browser:
//! 1. Input: keystrokes -> debounce -> controller events
//! 2. Search: controller -> backend request -> display state
//! 3. Render: cards, snippets, pagination, full-text overlay
//!
//! The search service is replaced by the scripted `MockBackend`.

use folio_core::config::{SearchConfig, SEARCH_DEBOUNCE};
use folio_core::controller::{DisplayState, QueryEvent, SearchController, SearchOutcome};
use folio_core::debounce::Debouncer;
use folio_core::error::SearchError;
use folio_core::highlight::Segment;
use folio_core::search::{SearchResponse, TypesenseClient};
use folio_core::test_utils::{hit, hit_with_snippet, response, MockBackend};
use folio_core::view::{FullText, OpenedText};
use std::time::Duration;

// ============================================================================
// Typing Session
// ============================================================================

/// Feeds keystrokes through the debouncer and returns the texts that fired.
///
/// Each keystroke spawns its delayed invocation, then the "user" waits
/// `gap_ms` before the next one, so timers fire in virtual time order.
async fn type_keystrokes(debouncer: &Debouncer, keystrokes: &[(&str, u64)]) -> Vec<String> {
    let mut handles = Vec::new();
    for (text, gap_ms) in keystrokes {
        let pending = debouncer.schedule();
        let delay = debouncer.delay();
        let text = text.to_string();
        handles.push(tokio::spawn(async move {
            pending
                .settled(tokio::time::sleep(delay))
                .await
                .then_some(text)
        }));
        tokio::time::sleep(Duration::from_millis(*gap_ms)).await;
    }

    let mut fired = Vec::new();
    for handle in handles {
        if let Some(text) = handle.await.expect("debounce task panicked") {
            fired.push(text);
        }
    }
    fired
}

#[tokio::test(start_paused = true)]
async fn test_typing_burst_issues_one_search() {
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE);
    let fired = type_keystrokes(&debouncer, &[("k", 80), ("ka", 90), ("kat", 70), ("katz", 50)]).await;
    assert_eq!(fired, vec!["katz".to_string()]);

    let backend = MockBackend::new();
    backend.respond(response(3, 3));
    let mut controller = SearchController::new(&backend);
    for text in fired {
        controller.handle(QueryEvent::Text(text)).await;
    }

    assert_eq!(backend.call_count(), 1);
    assert_eq!(backend.requests()[0].text, "katz");
}

#[tokio::test(start_paused = true)]
async fn test_pause_between_words_issues_two_searches() {
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE);
    let fired = type_keystrokes(&debouncer, &[("die", 400), ("die katze", 0)]).await;
    assert_eq!(fired, vec!["die".to_string(), "die katze".to_string()]);
}

// ============================================================================
// Search / Render Cycle
// ============================================================================

#[tokio::test]
async fn test_rendered_cards_bounded_by_page_size() {
    for (per_page, hits) in [(10usize, 10usize), (10, 4), (20, 25), (50, 0)] {
        let backend = MockBackend::new();
        backend.respond(response(100, hits));
        let mut controller = SearchController::new(&backend);
        controller.apply(QueryEvent::PageSize(per_page));
        controller.handle(QueryEvent::Text("katze".into())).await;

        let page = controller.display().results().expect("search succeeded");
        assert_eq!(page.cards.len(), hits.min(per_page));
    }
}

#[tokio::test]
async fn test_clearing_query_empties_both_regions() {
    let backend = MockBackend::new();
    backend.respond(response(25, 10));
    let mut controller = SearchController::new(&backend);

    controller.handle(QueryEvent::Text("cat".into())).await;
    assert!(controller
        .display()
        .results()
        .is_some_and(|p| p.pagination.is_visible()));

    controller.handle(QueryEvent::Text(String::new())).await;
    assert_eq!(controller.display(), &DisplayState::Empty);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_walk_all_pages_and_back() {
    let backend = MockBackend::new();
    for _ in 0..5 {
        backend.respond(response(25, 10));
    }
    let mut controller = SearchController::new(&backend);
    controller.handle(QueryEvent::Text("cat".into())).await;

    let mut seen = vec![controller.state().current_page];
    while controller.handle(QueryEvent::NextPage).await.is_some() {
        seen.push(controller.state().current_page);
    }
    while controller.handle(QueryEvent::PreviousPage).await.is_some() {
        seen.push(controller.state().current_page);
    }

    assert_eq!(seen, vec![1, 2, 3, 2, 1]);
    let pages: Vec<usize> = backend.requests().iter().map(|r| r.page).collect();
    assert_eq!(pages, vec![1, 2, 3, 2, 1]);
}

#[tokio::test]
async fn test_rejected_search_keeps_results_and_recovers() {
    let backend = MockBackend::new();
    backend
        .respond(response(25, 10))
        .fail(SearchError::Status {
            status: 503,
            message: "Not Ready or Lagging".into(),
        })
        .respond(response(2, 2));
    let mut controller = SearchController::new(&backend);

    controller.handle(QueryEvent::Text("cat".into())).await;
    let before = controller.display().clone();

    let outcome = controller.handle(QueryEvent::NextPage).await;
    assert!(matches!(outcome, Some(SearchOutcome::Failed(SearchError::Status { status: 503, .. }))));
    assert_eq!(controller.display(), &before);

    let outcome = controller.handle(QueryEvent::Text("katze".into())).await;
    assert_eq!(outcome, Some(SearchOutcome::Updated { found: 2, shown: 2 }));
}

#[tokio::test]
async fn test_snippets_and_full_text_highlighting() {
    let mut with_text = hit("wrz", "7");
    with_text.document.ocr_text_original = "Preis: 3.50 fl. oder 3x50".into();

    let backend = MockBackend::new();
    backend.respond(SearchResponse {
        found: 2,
        hits: vec![hit_with_snippet("ibn", "1", "Die <mark>3.50</mark> fl."), with_text],
    });
    let mut controller = SearchController::new(&backend);
    controller.handle(QueryEvent::Text("3.50".into())).await;

    let page = controller.display().results().unwrap();
    assert_eq!(page.query, "3.50");
    assert!(!page.pagination.is_visible());

    let first = &page.cards[0];
    assert_eq!(first.title, "ibn - Page 1");
    assert_eq!(first.snippet[1], Segment::marked("3.50"));

    let second = &page.cards[1];
    assert!(second.snippet_is_fallback);
    match FullText::for_card(second, &page.query) {
        FullText::Highlighted { matches, .. } => assert_eq!(matches, 1),
        FullText::Unavailable => panic!("document has text"),
    }
}

#[tokio::test]
async fn test_opened_full_text_survives_new_search() {
    let mut with_text = hit("wrz", "7");
    with_text.document.ocr_text_original = "Die Katze jagt den Hund".into();

    let backend = MockBackend::new();
    backend
        .respond(SearchResponse {
            found: 1,
            hits: vec![with_text],
        })
        .respond(response(3, 3));
    let mut controller = SearchController::new(&backend);

    controller.handle(QueryEvent::Text("katze".into())).await;
    let page = controller.display().results().unwrap();
    let opened = OpenedText::new(page.cards[0].clone(), page.query.clone());

    controller.handle(QueryEvent::Text("hund".into())).await;
    assert_eq!(controller.display().results().unwrap().query, "hund");

    match opened.content() {
        FullText::Highlighted { segments, matches } => {
            assert_eq!(matches, 1);
            assert_eq!(segments[1], Segment::marked("Katze"));
        }
        FullText::Unavailable => panic!("document has text"),
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_payload_to_client() {
    let config = SearchConfig::from_json(
        r#"{
            "nodes": [{"host": "search.example.org", "port": "443", "protocol": "https", "path": ""}],
            "apiKey": "search-only",
            "connectionTimeoutSeconds": 2
        }"#,
    )
    .unwrap();

    let client = TypesenseClient::new(&config).unwrap();
    assert_eq!(
        client.endpoint().as_str(),
        "https://search.example.org/collections/documents/documents/search"
    );
}
