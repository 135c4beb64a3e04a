//! HTTP-level integration tests for `/recipes/{id}/image`.

mod common;

use axum::http::StatusCode;
use common::{app, body_bytes, body_json, create_recipe, get, post_multipart, seeded_store};
use serde_json::json;

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 1, 2, 3];

#[tokio::test]
async fn upload_then_download_image() {
    let store = seeded_store();
    let id = create_recipe(&store, json!({"description": "Sourdough"})).await;
    let uri = format!("/api/v1/recipes/{id}/image");

    let response = post_multipart(app(&store), &uri, "imagefile", "image/png", PNG_HEADER).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get("location").unwrap(),
        format!("/api/v1/recipes/{id}").as_str()
    );

    let response = get(app(&store), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-type").unwrap(), "image/png");
    assert_eq!(body_bytes(response).await, PNG_HEADER);

    let recipe = body_json(get(app(&store), &format!("/api/v1/recipes/{id}")).await).await;
    assert_eq!(recipe["data"]["has_image"], true);
}

#[tokio::test]
async fn updating_recipe_keeps_uploaded_image() {
    let store = seeded_store();
    let id = create_recipe(&store, json!({"description": "Sourdough"})).await;
    let uri = format!("/api/v1/recipes/{id}/image");
    post_multipart(app(&store), &uri, "imagefile", "image/jpeg", b"jpeg-bytes").await;

    let response = common::post_json(
        app(&store),
        "/api/v1/recipes",
        json!({"id": id, "description": "Rye Sourdough"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app(&store), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"jpeg-bytes");
}

#[tokio::test]
async fn upload_to_missing_recipe_returns_404() {
    let response = post_multipart(
        common::build_test_app(),
        "/api/v1/recipes/404/image",
        "imagefile",
        "image/png",
        PNG_HEADER,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upload_without_imagefile_field_returns_400() {
    let store = seeded_store();
    let id = create_recipe(&store, json!({"description": "Sourdough"})).await;

    let response = post_multipart(
        app(&store),
        &format!("/api/v1/recipes/{id}/image"),
        "attachment",
        "image/png",
        PNG_HEADER,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "multipart field 'imagefile' is required");
}

#[tokio::test]
async fn image_of_recipe_without_upload_returns_404() {
    let store = seeded_store();
    let id = create_recipe(&store, json!({"description": "Sourdough"})).await;

    let response = get(app(&store), &format!("/api/v1/recipes/{id}/image")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], format!("RecipeImage with id {id} not found"));
}

#[tokio::test]
async fn upload_over_configured_limit_is_rejected() {
    let store = seeded_store();
    let id = create_recipe(&store, json!({"description": "Sourdough"})).await;

    let mut config = common::test_config();
    config.upload_limit_bytes = Some(64);
    let limited = common::build_test_app_with(std::sync::Arc::clone(&store), config);

    let response = post_multipart(
        limited,
        &format!("/api/v1/recipes/{id}/image"),
        "imagefile",
        "image/png",
        &[0u8; 1024],
    )
    .await;

    assert_ne!(response.status(), StatusCode::CREATED);
    assert!(!response.status().is_success());

    let response = get(app(&store), &format!("/api/v1/recipes/{id}/image")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
