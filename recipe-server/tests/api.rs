//! End-to-end tests driving the router in-process against in-memory SQLite

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use recipe_server::db::{bootstrap, create_pool_with_options};
use recipe_server::{build_router, ServerConfig};

async fn app() -> Router {
    let pool = create_pool_with_options("sqlite::memory:", 1)
        .await
        .expect("pool creation failed");
    bootstrap(&pool).await.expect("schema bootstrap failed");
    build_router(pool, &ServerConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

fn bread() -> Value {
    json!({ "name": "Bread", "category": "Baking", "picture": "p.jpg" })
}

fn flour() -> Value {
    json!({ "name": "Flour", "unit": "g" })
}

#[tokio::test]
async fn bread_and_flour_scenario() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/Ingredients", Some(flour())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, body) = send(&app, "POST", "/Recipes", Some(bread())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, body) = send(
        &app,
        "POST",
        "/Recipe_Ingredients",
        Some(json!({ "recipeId": 1, "ingredientId": 1, "quantity": 500 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["recipeId"], 1);
    assert_eq!(body["ingredientId"], 1);

    let (status, body) = send(&app, "GET", "/Recipe_Ingredients/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let lines = body.as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["recipeId"], 1);
    assert_eq!(lines[0]["ingredientId"], 1);
    assert_eq!(lines[0]["ingredientName"], "Flour");
    assert_eq!(lines[0]["quantity"].as_f64(), Some(500.0));
    assert_eq!(lines[0]["unit"], "g");
}

#[tokio::test]
async fn missing_recipe_is_404() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/Recipes/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Recipe not found" }));
}

#[tokio::test]
async fn create_then_get_returns_input() {
    let app = app().await;
    let input = json!({
        "name": "Soup",
        "description": "Warming",
        "category": "Starter",
        "instructions": "Simmer",
        "picture": "soup.png"
    });

    let (_, created) = send(&app, "POST", "/Recipes", Some(input.clone())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, recipe) = send(&app, "GET", &format!("/Recipes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    for field in ["name", "description", "category", "instructions", "picture"] {
        assert_eq!(recipe[field], input[field], "{field}");
    }
}

#[tokio::test]
async fn replace_is_full_overwrite() {
    let app = app().await;
    let (_, created) = send(
        &app,
        "POST",
        "/Recipes",
        Some(json!({
            "name": "Bread",
            "description": "Crusty",
            "category": "Baking",
            "picture": "p.jpg"
        })),
    )
    .await;
    let uri = format!("/Recipes/{}", created["id"]);

    let replacement = json!({ "name": "Rye", "category": "Baking", "picture": "rye.jpg" });
    let (status, body) = send(&app, "PUT", &uri, Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe updated successfully");

    let (_, recipe) = send(&app, "GET", &uri, None).await;
    assert_eq!(recipe["name"], "Rye");
    assert_eq!(recipe["picture"], "rye.jpg");
    assert_eq!(recipe["description"], Value::Null);
}

#[tokio::test]
async fn get_and_delete_agree_on_existence() {
    let app = app().await;
    let (_, created) = send(&app, "POST", "/Ingredients", Some(flour())).await;
    let uri = format!("/Ingredients/{}", created["id"]);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Ingredient not found");
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn replace_missing_is_404() {
    let app = app().await;
    let (status, _) = send(&app, "PUT", "/Ingredients/7", Some(flour())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_ids_are_400() {
    let app = app().await;
    for (method, uri) in [
        ("GET", "/Recipes/abc"),
        ("DELETE", "/Recipes/1.5"),
        ("GET", "/Ingredients/-1"),
        ("GET", "/Recipe_Ingredients/xyz"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert!(body["error"].is_string());
    }

    let (status, _) = send(&app, "PUT", "/Recipes/zero", Some(bread())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_required_fields_are_400() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/Recipes",
        Some(json!({ "name": "Bread", "picture": "p.jpg" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "category is required");

    let (status, _) = send(&app, "POST", "/Ingredients", Some(json!({ "name": "Salt" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/Recipe_Ingredients",
        Some(json!({ "recipeId": 1, "ingredientId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "DELETE", "/Recipe_Ingredients", Some(json!({ "recipeId": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was written by the rejected requests
    let (_, recipes) = send(&app, "GET", "/Recipes", None).await;
    assert_eq!(recipes, json!([]));
}

#[tokio::test]
async fn unparseable_body_is_400() {
    let app = app().await;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/Recipes")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/Ingredients", Some(json!({ "name": 5, "unit": "g" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn association_update_then_list_shows_new_quantity() {
    let app = app().await;
    send(&app, "POST", "/Ingredients", Some(flour())).await;
    send(&app, "POST", "/Recipes", Some(bread())).await;
    send(
        &app,
        "POST",
        "/Recipe_Ingredients",
        Some(json!({ "recipeId": 1, "ingredientId": 1, "quantity": 500 })),
    )
    .await;

    let (status, body) = send(
        &app,
        "PUT",
        "/Recipe_Ingredients",
        Some(json!({ "recipeId": 1, "ingredientId": 1, "quantity": 650 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe ingredient updated successfully");

    let (_, lines) = send(&app, "GET", "/Recipe_Ingredients/1", None).await;
    assert_eq!(lines[0]["quantity"].as_f64(), Some(650.0));
}

#[tokio::test]
async fn association_update_absent_pair_is_404() {
    let app = app().await;
    send(&app, "POST", "/Recipes", Some(bread())).await;
    let (status, body) = send(
        &app,
        "PUT",
        "/Recipe_Ingredients",
        Some(json!({ "recipeId": 1, "ingredientId": 3, "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Recipe ingredient not found");
}

#[tokio::test]
async fn association_second_delete_is_404() {
    let app = app().await;
    send(&app, "POST", "/Ingredients", Some(flour())).await;
    send(&app, "POST", "/Recipes", Some(bread())).await;
    send(
        &app,
        "POST",
        "/Recipe_Ingredients",
        Some(json!({ "recipeId": 1, "ingredientId": 1, "quantity": 500 })),
    )
    .await;

    let key = json!({ "recipeId": 1, "ingredientId": 1 });
    let (status, _) = send(&app, "DELETE", "/Recipe_Ingredients", Some(key.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", "/Recipe_Ingredients", Some(key)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_ingredient_list_is_not_an_error() {
    let app = app().await;
    send(&app, "POST", "/Recipes", Some(bread())).await;

    let (status, body) = send(&app, "GET", "/Recipe_Ingredients/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, "GET", "/Recipe_Ingredients/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Recipe not found");
}

#[tokio::test]
async fn duplicate_or_dangling_association_is_409() {
    let app = app().await;
    send(&app, "POST", "/Ingredients", Some(flour())).await;
    send(&app, "POST", "/Recipes", Some(bread())).await;
    let assoc = json!({ "recipeId": 1, "ingredientId": 1, "quantity": 500 });

    let (status, _) = send(&app, "POST", "/Recipe_Ingredients", Some(assoc.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(&app, "POST", "/Recipe_Ingredients", Some(assoc)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Recipe ingredient already exists");

    let (status, _) = send(
        &app,
        "POST",
        "/Recipe_Ingredients",
        Some(json!({ "recipeId": 1, "ingredientId": 42, "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn deleting_recipe_removes_its_associations() {
    let app = app().await;
    send(&app, "POST", "/Ingredients", Some(flour())).await;
    send(&app, "POST", "/Recipes", Some(bread())).await;
    send(
        &app,
        "POST",
        "/Recipe_Ingredients",
        Some(json!({ "recipeId": 1, "ingredientId": 1, "quantity": 500 })),
    )
    .await;

    let (status, _) = send(&app, "DELETE", "/Ingredients/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/Recipe_Ingredients/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_returns_every_row() {
    let app = app().await;
    send(&app, "POST", "/Ingredients", Some(flour())).await;
    send(
        &app,
        "POST",
        "/Ingredients",
        Some(json!({ "name": "Milk", "calories": 42.5, "unit": "ml" })),
    )
    .await;

    let (status, body) = send(&app, "GET", "/Ingredients", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    let milk = rows.iter().find(|r| r["name"] == "Milk").unwrap();
    assert_eq!(milk["calories"].as_f64(), Some(42.5));
    assert_eq!(milk["unit"], "ml");
}

#[tokio::test]
async fn root_and_health() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("Hello world".into()));

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
