use astrodata_protocol::model::star::Star;
use astrodata_server::Builder;
use axum::{
    body::Body,
    http::{
        self,
        Request,
        StatusCode,
    },
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn app() -> Router {
    Builder::default().build()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

const SIRIUS: &str =
    r#"{"name":"Sirius","magnitude":-1.46,"distance":8.6,"spectral_type":"A1V"}"#;

#[tokio::test]
async fn status_is_ok() {
    let response = app().oneshot(get("/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let status: serde_json::Value = body_json(response).await;
    assert_eq!(status["server_version"], "0.1.0");
    assert!(status["up_since"].is_string());
}

#[tokio::test]
async fn list_stars_empty() {
    let response = app().oneshot(get("/stars")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stars: Vec<Star> = body_json(response).await;
    assert!(stars.is_empty());
}

#[tokio::test]
async fn create_star_returns_201_with_record() {
    let response = app()
        .oneshot(post_json("/stars", SIRIUS))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // The response body is the created record, with the wire field in
    // underscore form and a service-assigned integer id.
    let star: serde_json::Value = body_json(response).await;
    assert_eq!(star["id"], 1);
    assert_eq!(star["name"], "Sirius");
    assert_eq!(star["magnitude"], -1.46);
    assert_eq!(star["distance"], 8.6);
    assert_eq!(star["spectral_type"], "A1V");
}

#[tokio::test]
async fn create_star_duplicate_name_returns_409() {
    let app = app();

    let response = app.clone().oneshot(post_json("/stars", SIRIUS)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.clone().oneshot(post_json("/stars", SIRIUS)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let message = body_text(response).await;
    assert!(message.contains("already exists"), "message: {message}");
}

#[tokio::test]
async fn create_star_missing_field_is_rejected() {
    let response = app()
        .oneshot(post_json("/stars", r#"{"name":"Vega"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_star_null_magnitude_is_rejected() {
    // A non-finite magnitude serializes as `null` on the wire; the service
    // rejects the body rather than storing it.
    let response = app()
        .oneshot(post_json(
            "/stars",
            r#"{"name":"Vega","magnitude":null,"distance":25.04,"spectral_type":"A0V"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_star_not_found() {
    let response = app().oneshot(get("/stars/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_star_bad_id_returns_400() {
    let response = app().oneshot(get("/stars/not-a-number")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_star_not_found() {
    let response = app().oneshot(delete("/stars/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_lifecycle() {
    let app = app();

    // create
    let response = app.clone().oneshot(post_json("/stars", SIRIUS)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Star = body_json(response).await;

    // list contains exactly the created record
    let response = app.clone().oneshot(get("/stars")).await.unwrap();
    let stars: Vec<Star> = body_json(response).await;
    assert_eq!(stars, vec![created.clone()]);

    // get by id
    let response = app.clone().oneshot(get("/stars/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Star = body_json(response).await;
    assert_eq!(fetched, created);

    // delete
    let response = app.clone().oneshot(delete("/stars/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // gone
    let response = app.clone().oneshot(get("/stars/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = app.clone().oneshot(get("/stars")).await.unwrap();
    let stars: Vec<Star> = body_json(response).await;
    assert!(stars.is_empty());
}
