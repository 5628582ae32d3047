use crate::common::test_config;
use concur_client::error::AppError;
use concur_client::transport::http_client::{ConcurHttpClient, ConcurHttpClientImpl};
use concur_client::transport::pagination::{NextLocator, Page, PageSchema, paginate};
use mockito::{Matcher, Server};
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

#[test]
fn test_next_locator_distinguishes_urls_from_cursors() {
    assert_eq!(
        NextLocator::from("https://example.com/page/2".to_string()),
        NextLocator::Url("https://example.com/page/2".to_string())
    );
    assert_eq!(
        NextLocator::from("http://example.com/page/2".to_string()),
        NextLocator::Url("http://example.com/page/2".to_string())
    );
    assert_eq!(
        NextLocator::from("gWqmSl9o".to_string()),
        NextLocator::Cursor("gWqmSl9o".to_string())
    );
}

#[test]
fn test_schema_parses_items_and_next_url() {
    let schema = PageSchema::default();
    let page = schema
        .parse(json!({
            "Items": [{"ID": "a"}, {"ID": "b"}],
            "NextPage": "https://example.com/reports?page=2"
        }))
        .expect("page should parse");

    assert_eq!(page.items.len(), 2);
    assert_eq!(
        page.next,
        Some(NextLocator::Url(
            "https://example.com/reports?page=2".to_string()
        ))
    );
}

#[test]
fn test_schema_parses_custom_keys_and_cursor() {
    let schema = PageSchema::new("results", "next", "cursor");
    let page = schema
        .parse(json!({"results": [1, 2, 3], "next": "tok42"}))
        .expect("page should parse");

    assert_eq!(page.items.len(), 3);
    assert_eq!(page.next, Some(NextLocator::Cursor("tok42".to_string())));
}

#[test]
fn test_schema_missing_next_key_means_final_page() {
    let page = PageSchema::default()
        .parse(json!({"Items": [{"ID": "a"}]}))
        .expect("page should parse");
    assert!(page.next.is_none());
}

#[test]
fn test_schema_malformed_next_value_means_final_page() {
    let schema = PageSchema::default();

    let page = schema
        .parse(json!({"Items": [], "NextPage": 7}))
        .expect("page should parse");
    assert!(page.next.is_none());

    let page = schema
        .parse(json!({"Items": [], "NextPage": ""}))
        .expect("page should parse");
    assert!(page.next.is_none());
}

#[test]
fn test_schema_rejects_non_array_items() {
    let err = PageSchema::default()
        .parse(json!({"Items": "not a list"}))
        .err()
        .expect("parse should fail");
    assert!(matches!(err, AppError::ResponseParse(_)));
}

#[test]
fn test_schema_rejects_non_object_body() {
    let err = PageSchema::default()
        .parse(json!([1, 2, 3]))
        .err()
        .expect("parse should fail");
    assert!(matches!(err, AppError::ResponseParse(_)));
}

#[test]
fn test_schema_yields_entity_body_as_single_item() {
    let page = PageSchema::default()
        .parse(json!({"ID": "R1", "Name": "March travel"}))
        .expect("page should parse");

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0]["ID"], "R1");
    assert!(page.next.is_none());
}

#[test]
fn test_schema_empty_object_is_an_empty_final_page() {
    let page = PageSchema::default()
        .parse(json!({}))
        .expect("page should parse");
    assert!(page.items.is_empty());
    assert!(page.next.is_none());
}

#[test]
fn test_paginate_concatenates_pages_in_order() {
    let pages: VecDeque<Page<i32>> = VecDeque::from(vec![
        Page {
            items: vec![1, 2],
            next: Some(NextLocator::Cursor("p2".to_string())),
        },
        Page {
            items: vec![3, 4],
            next: Some(NextLocator::Cursor("p3".to_string())),
        },
        Page {
            items: vec![5],
            next: None,
        },
    ]);
    let pages = RefCell::new(pages);
    let seen_cursors = RefCell::new(Vec::new());

    let items = tokio_test::block_on(paginate(|cursor| {
        seen_cursors.borrow_mut().push(cursor.clone());
        let page = pages.borrow_mut().pop_front().expect("ran out of pages");
        async move { Ok(page) }
    }))
    .expect("pagination should succeed");

    assert_eq!(items, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        *seen_cursors.borrow(),
        vec![
            None,
            Some(NextLocator::Cursor("p2".to_string())),
            Some(NextLocator::Cursor("p3".to_string())),
        ]
    );
}

#[test]
fn test_paginate_follows_empty_page_with_locator() {
    let pages: VecDeque<Page<i32>> = VecDeque::from(vec![
        Page {
            items: vec![1],
            next: Some(NextLocator::Cursor("p2".to_string())),
        },
        // An empty page mid-stream does not stop the accumulation
        Page {
            items: vec![],
            next: Some(NextLocator::Cursor("p3".to_string())),
        },
        Page {
            items: vec![2],
            next: None,
        },
    ]);
    let pages = RefCell::new(pages);

    let items = tokio_test::block_on(paginate(|_cursor| {
        let page = pages.borrow_mut().pop_front().expect("ran out of pages");
        async move { Ok(page) }
    }))
    .expect("pagination should succeed");

    assert_eq!(items, vec![1, 2]);
    assert!(pages.borrow().is_empty(), "all three pages were fetched");
}

#[test]
fn test_paginate_single_page_without_locator() {
    let calls = Cell::new(0u32);

    let items = tokio_test::block_on(paginate(|_cursor| {
        calls.set(calls.get() + 1);
        async move {
            Ok(Page {
                items: vec!["only".to_string()],
                next: None,
            })
        }
    }))
    .expect("pagination should succeed");

    assert_eq!(items, vec!["only".to_string()]);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_paginate_propagates_fetch_errors() {
    let calls = Cell::new(0u32);

    let result: Result<Vec<i32>, AppError> = tokio_test::block_on(paginate(|_cursor| {
        let call = calls.get();
        calls.set(call + 1);
        async move {
            if call == 0 {
                Ok(Page {
                    items: vec![1],
                    next: Some(NextLocator::Cursor("p2".to_string())),
                })
            } else {
                Err(AppError::ResponseParse("broken page".to_string()))
            }
        }
    }));

    assert!(matches!(result, Err(AppError::ResponseParse(_))));
    assert_eq!(calls.get(), 2);
}

#[tokio::test]
async fn test_fetch_all_follows_next_page_urls() {
    let mut server = Server::new_async().await;

    let second_url = format!("{}/reports-page-2", server.url());
    let first = server
        .mock("GET", "/api/v3.0/expense/reports")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            json!({"Items": [{"ID": "a"}], "NextPage": second_url}).to_string(),
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", "/reports-page-2")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"Items":[{"ID":"b"}]}"#)
        .create_async()
        .await;

    let client = ConcurHttpClientImpl::new(test_config(&server.url())).expect("http client");
    let items = client
        .fetch_all("api/v3.0/expense/reports", &PageSchema::default())
        .await
        .expect("pagination should succeed");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["ID"], "a");
    assert_eq!(items[1]["ID"], "b");
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_fetch_all_reissues_opaque_cursors_as_query_params() {
    let mut server = Server::new_async().await;
    let schema = PageSchema::new("data", "cursor", "cursor");

    let first = server
        .mock("GET", "/api/v3.0/expense/entries")
        .match_query(Matcher::Exact("limit=2".to_string()))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"data":[{"ID":"e1"}],"cursor":"tok1"}"#)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/v3.0/expense/entries")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "2".into()),
            Matcher::UrlEncoded("cursor".into(), "tok1".into()),
        ]))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"data":[{"ID":"e2"}]}"#)
        .create_async()
        .await;

    let client = ConcurHttpClientImpl::new(test_config(&server.url())).expect("http client");
    let items = client
        .fetch_all("api/v3.0/expense/entries?limit=2", &schema)
        .await
        .expect("pagination should succeed");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["ID"], "e1");
    assert_eq!(items[1]["ID"], "e2");
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_fetch_all_surfaces_value_items() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v3.0/expense/attendees")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"Items":[{"FirstName":"Ada"},{"FirstName":"Grace"}]}"#)
        .create_async()
        .await;

    let client = ConcurHttpClientImpl::new(test_config(&server.url())).expect("http client");
    let items: Vec<Value> = client
        .fetch_all("api/v3.0/expense/attendees", &PageSchema::default())
        .await
        .expect("pagination should succeed");

    let names: Vec<&str> = items
        .iter()
        .filter_map(|item| item["FirstName"].as_str())
        .collect();
    assert_eq!(names, vec!["Ada", "Grace"]);
}
