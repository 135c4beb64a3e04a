//! HTTP-level integration tests for `/recipes/{id}/ingredients`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{app, body_json, create_recipe, delete, get, post_json, seeded_store};
use pantry_core::store::MemoryStore;
use serde_json::json;

const TEASPOON: i64 = 1;
const CUP: i64 = 3;

/// Create a recipe holding "flour, 2 cups". Returns `(recipe_id, flour_id)`.
async fn recipe_with_flour(store: &Arc<MemoryStore>) -> (i64, i64) {
    let recipe_id = create_recipe(
        store,
        json!({
            "description": "Country Bread",
            "ingredients": [
                {"description": "flour", "amount": 2, "unit_of_measure": {"id": CUP}}
            ]
        }),
    )
    .await;
    let ingredients = list_ingredients(store, recipe_id).await;
    let flour_id = ingredients[0]["id"].as_i64().unwrap();
    (recipe_id, flour_id)
}

async fn list_ingredients(store: &Arc<MemoryStore>, recipe_id: i64) -> Vec<serde_json::Value> {
    let response = get(app(store), &format!("/api/v1/recipes/{recipe_id}/ingredients")).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].as_array().unwrap().clone()
}

// ---------------------------------------------------------------------------
// End-to-end flour / salt scenario
// ---------------------------------------------------------------------------

#[tokio::test]
async fn flour_and_salt_round_trip() {
    let store = seeded_store();
    let (recipe_id, flour_id) = recipe_with_flour(&store).await;
    let uri = format!("/api/v1/recipes/{recipe_id}/ingredients");

    // Update flour in place.
    let response = post_json(
        app(&store),
        &uri,
        json!({"id": flour_id, "description": "flour", "amount": 3, "unit_of_measure": {"id": CUP}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("location").unwrap(),
        format!("/api/v1/recipes/{recipe_id}/ingredients/{flour_id}").as_str()
    );
    let ingredients = list_ingredients(&store, recipe_id).await;
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0]["amount"], 3.0);

    // Add salt.
    let response = post_json(
        app(&store),
        &uri,
        json!({"description": "salt", "amount": 1, "unit_of_measure": {"id": TEASPOON}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let salt = body_json(response).await;
    assert_eq!(salt["data"]["description"], "salt");
    assert_eq!(salt["data"]["recipe_id"], recipe_id);
    assert_eq!(salt["data"]["unit_of_measure"]["measurement"], "Teaspoon");
    assert_eq!(list_ingredients(&store, recipe_id).await.len(), 2);

    // Remove flour.
    let response = delete(app(&store), &format!("{uri}/{flour_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "removed");
    assert_eq!(json["data"]["ingredient"]["id"], flour_id);
    assert!(json["data"]["ingredient"]["recipe_id"].is_null());

    let ingredients = list_ingredients(&store, recipe_id).await;
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0]["description"], "salt");
}

// ---------------------------------------------------------------------------
// Show / new form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn show_ingredient_returns_command() {
    let store = seeded_store();
    let (recipe_id, flour_id) = recipe_with_flour(&store).await;

    let response = get(
        app(&store),
        &format!("/api/v1/recipes/{recipe_id}/ingredients/{flour_id}"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["description"], "flour");
    assert_eq!(json["data"]["unit_of_measure"]["id"], CUP);
}

#[tokio::test]
async fn show_missing_ingredient_returns_404() {
    let store = seeded_store();
    let (recipe_id, _) = recipe_with_flour(&store).await;

    let response = get(
        app(&store),
        &format!("/api/v1/recipes/{recipe_id}/ingredients/999"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn new_ingredient_form_is_blank_with_recipe_id() {
    let store = seeded_store();
    let (recipe_id, _) = recipe_with_flour(&store).await;

    let response = get(
        app(&store),
        &format!("/api/v1/recipes/{recipe_id}/ingredients/new"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["recipe_id"], recipe_id);
    assert!(json["data"]["id"].is_null());
    assert!(json["data"]["unit_of_measure"]["id"].is_null());
}

#[tokio::test]
async fn new_ingredient_form_for_missing_recipe_returns_404() {
    let response = get(common::build_test_app(), "/api/v1/recipes/77/ingredients/new").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Save errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mismatched_recipe_id_returns_400() {
    let store = seeded_store();
    let (recipe_id, _) = recipe_with_flour(&store).await;

    let response = post_json(
        app(&store),
        &format!("/api/v1/recipes/{recipe_id}/ingredients"),
        json!({
            "recipe_id": recipe_id + 1,
            "description": "salt",
            "amount": 1,
            "unit_of_measure": {"id": TEASPOON}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn unknown_unit_of_measure_returns_404() {
    let store = seeded_store();
    let (recipe_id, _) = recipe_with_flour(&store).await;

    let response = post_json(
        app(&store),
        &format!("/api/v1/recipes/{recipe_id}/ingredients"),
        json!({"description": "salt", "amount": 1, "unit_of_measure": {"id": 99}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "UnitOfMeasure with id 99 not found");
}

#[tokio::test]
async fn ingredient_id_from_another_recipe_returns_409() {
    let store = seeded_store();
    let (_, flour_id) = recipe_with_flour(&store).await;
    let (other_recipe_id, _) = recipe_with_flour(&store).await;

    let response = post_json(
        app(&store),
        &format!("/api/v1/recipes/{other_recipe_id}/ingredients"),
        json!({"id": flour_id, "description": "flour", "amount": 1, "unit_of_measure": {"id": CUP}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn negative_amount_returns_400() {
    let store = seeded_store();
    let (recipe_id, _) = recipe_with_flour(&store).await;

    let response = post_json(
        app(&store),
        &format!("/api/v1/recipes/{recipe_id}/ingredients"),
        json!({"description": "salt", "amount": -1, "unit_of_measure": {"id": TEASPOON}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Delete outcomes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleting_from_missing_recipe_reports_absence() {
    let response = delete(common::build_test_app(), "/api/v1/recipes/5/ingredients/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "recipe_absent");
}

#[tokio::test]
async fn deleting_missing_ingredient_reports_absence_and_keeps_others() {
    let store = seeded_store();
    let (recipe_id, _) = recipe_with_flour(&store).await;

    let response = delete(
        app(&store),
        &format!("/api/v1/recipes/{recipe_id}/ingredients/999"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "ingredient_absent");
    assert_eq!(list_ingredients(&store, recipe_id).await.len(), 1);
}
