mod common;

use axum::http::Method;
use common::{body_json, build_test_app, send};
use folio_core::symbols::NewSymbol;
use serde_json::json;
use tempfile::tempdir;

async fn seed(state: &folio_server::AppState, rows: Vec<NewSymbol>) {
    state.symbol_service.import_symbols(rows).await.unwrap();
}

fn reference_rows() -> Vec<NewSymbol> {
    let mut reliance = NewSymbol::new("RELIANCE", "Reliance Industries");
    reliance.exchange = Some("EQ".to_string());
    reliance.isin = Some("INE002A01018".to_string());
    vec![
        reliance,
        NewSymbol::new("RELINFRA", "Reliance Infrastructure"),
        NewSymbol::new("TCS", "Tata Consultancy Services"),
        NewSymbol::new("INFY", "Infosys"),
    ]
}

#[tokio::test]
async fn empty_query_returns_an_empty_array() {
    let tmp = tempdir().unwrap();
    let (app, state) = build_test_app(&tmp).await;
    seed(&state, reference_rows()).await;

    let response = send(&app, Method::GET, "/api/symbols", None, None).await;
    assert_eq!(response.status(), 200);
    assert_eq!(body_json(response).await, json!([]));

    let response = send(&app, Method::GET, "/api/symbols?q=%20%20", None, None).await;
    assert_eq!(response.status(), 200);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn matches_name_substring_case_insensitively_sorted_by_name() {
    let tmp = tempdir().unwrap();
    let (app, state) = build_test_app(&tmp).await;
    seed(&state, reference_rows()).await;

    let response = send(&app, Method::GET, "/api/symbols?q=reliance", None, None).await;
    assert_eq!(response.status(), 200);
    let results = body_json(response).await;
    let names: Vec<&str> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Reliance Industries", "Reliance Infrastructure"]
    );
    assert_eq!(results[0]["exchange"], "EQ");
    assert_eq!(results[1]["exchange"], serde_json::Value::Null);
    assert_eq!(results[0]["metadata"], json!({}));
}

#[tokio::test]
async fn matches_symbol_prefix_when_name_does_not_contain_the_query() {
    let tmp = tempdir().unwrap();
    let (app, state) = build_test_app(&tmp).await;
    seed(&state, reference_rows()).await;

    // "Tata Consultancy Services" does not contain "tc"; only the ticker
    // prefix matches.
    let response = send(&app, Method::GET, "/api/symbols?q=tc", None, None).await;
    let results = body_json(response).await;
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["symbol"], "TCS");
}

#[tokio::test]
async fn symbol_suffix_alone_does_not_match() {
    let tmp = tempdir().unwrap();
    let (app, state) = build_test_app(&tmp).await;
    seed(&state, reference_rows()).await;

    // "NFY" is inside the INFY ticker but not a prefix, and no name
    // contains it.
    let response = send(&app, Method::GET, "/api/symbols?q=nfy", None, None).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn response_symbol_is_uppercased_regardless_of_stored_case() {
    let tmp = tempdir().unwrap();
    let (app, state) = build_test_app(&tmp).await;
    seed(&state, vec![NewSymbol::new("itc", "ITC Limited")]).await;

    let response = send(&app, Method::GET, "/api/symbols?q=itc", None, None).await;
    let results = body_json(response).await;
    assert_eq!(results[0]["symbol"], "ITC");
}

#[tokio::test]
async fn results_are_capped_at_twenty() {
    let tmp = tempdir().unwrap();
    let (app, state) = build_test_app(&tmp).await;
    let rows: Vec<NewSymbol> = (0..25)
        .map(|i| NewSymbol::new(format!("ZED{i}"), format!("Zed Holdings {i:02}")))
        .collect();
    seed(&state, rows).await;

    let response = send(&app, Method::GET, "/api/symbols?q=zed", None, None).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn reimport_overwrites_instead_of_duplicating() {
    let tmp = tempdir().unwrap();
    let (app, state) = build_test_app(&tmp).await;
    seed(&state, vec![NewSymbol::new("TCS", "Tata Consultancy")]).await;
    seed(
        &state,
        vec![NewSymbol::new("TCS", "Tata Consultancy Services")],
    )
    .await;

    let response = send(&app, Method::GET, "/api/symbols?q=tata", None, None).await;
    let results = body_json(response).await;
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["name"], "Tata Consultancy Services");
}
