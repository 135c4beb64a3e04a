//! Integration tests for the reference data endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn units_of_measure_are_listed_in_id_order() {
    let response = get(common::build_test_app(), "/api/v1/units-of-measure").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let units = json["data"].as_array().unwrap();
    assert_eq!(units.len(), 8);
    assert_eq!(units[0]["id"], 1);
    assert_eq!(units[0]["measurement"], "Teaspoon");
    assert_eq!(units[7]["measurement"], "Pint");
}

#[tokio::test]
async fn categories_are_listed_in_id_order() {
    let response = get(common::build_test_app(), "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let descriptions: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["description"].as_str().unwrap())
        .collect();
    assert_eq!(descriptions, ["American", "Italian", "Mexican", "Fast Food"]);
}
