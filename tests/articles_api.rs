use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

mod support;

fn titles(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|a| a["titre"].as_str().unwrap())
        .collect()
}

fn new_article(titre: &str) -> Value {
    json!({
        "titre": titre,
        "description": "desc",
        "prix": 10.5,
        "stock": 3,
        "categorie": "Divers"
    })
}

#[tokio::test]
async fn list_slices_with_skip_and_limit() {
    let app = support::seeded_router();

    let first_two = support::call(&app, Method::GET, "/api/articles?skip=0&limit=2", None, StatusCode::OK).await;
    assert_eq!(
        titles(&first_two),
        vec!["Laptop Dell XPS 13", "Casque Sony WH-1000XM4"]
    );

    let all = support::call(&app, Method::GET, "/api/articles", None, StatusCode::OK).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let past_end = support::call(&app, Method::GET, "/api/articles?skip=10", None, StatusCode::OK).await;
    assert_eq!(past_end, json!([]));
}

#[tokio::test]
async fn list_rejects_malformed_query() {
    let app = support::seeded_router();
    let resp = support::send(&app, Method::GET, "/api/articles?limit=-1", None).await;
    support::assert_error_response(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn get_article_embeds_reviews() {
    let app = support::seeded_router();

    let article = support::call(&app, Method::GET, "/api/articles/1", None, StatusCode::OK).await;
    assert_eq!(article["id"], 1);
    assert_eq!(article["titre"], "Laptop Dell XPS 13");
    let notes: Vec<i64> = article["avis"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["note"].as_i64().unwrap())
        .collect();
    assert_eq!(notes, vec![5, 4]);
}

#[tokio::test]
async fn get_missing_article_is_404_with_id() {
    let app = support::seeded_router();
    let resp = support::send(&app, Method::GET, "/api/articles/999", None).await;
    let message = support::assert_error_response(resp, StatusCode::NOT_FOUND).await;
    assert!(message.contains("999"));
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = support::seeded_router();
    let resp = support::send(&app, Method::GET, "/api/articles/abc/avis", None).await;
    support::assert_error_response(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn created_ids_keep_increasing() {
    let app = support::empty_router();

    let mut last = 0;
    for titre in ["A", "B", "C"] {
        let created = support::call(
            &app,
            Method::POST,
            "/api/articles",
            Some(new_article(titre)),
            StatusCode::CREATED,
        )
        .await;
        let id = created["id"].as_u64().unwrap();
        assert!(id > last);
        last = id;
        assert_eq!(created["avis"], json!([]));
        assert!(created["date_ajout"].is_string());
    }

    support::call(&app, Method::DELETE, "/api/articles/2", None, StatusCode::OK).await;
    let created = support::call(
        &app,
        Method::POST,
        "/api/articles",
        Some(new_article("D")),
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["id"], 4);
}

#[tokio::test]
async fn create_with_missing_field_is_bad_request() {
    let app = support::empty_router();
    let resp = support::send(
        &app,
        Method::POST,
        "/api/articles",
        Some(json!({ "titre": "Sans prix", "description": "", "stock": 1, "categorie": "X" })),
    )
    .await;
    let message = support::assert_error_response(resp, StatusCode::BAD_REQUEST).await;
    assert!(message.contains("prix"));

    let all = support::call(&app, Method::GET, "/api/articles", None, StatusCode::OK).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn create_with_negative_price_is_bad_request() {
    let app = support::empty_router();
    let mut body = new_article("Gratuit");
    body["prix"] = json!(-5.0);

    let resp = support::send(&app, Method::POST, "/api/articles", Some(body)).await;
    support::assert_error_response(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let app = support::seeded_router();
    let before = support::call(&app, Method::GET, "/api/articles/3", None, StatusCode::OK).await;

    let after = support::call(
        &app,
        Method::PUT,
        "/api/articles/3",
        Some(json!({ "prix": 129.99, "titre": null })),
        StatusCode::OK,
    )
    .await;

    assert_eq!(after["prix"], 129.99);
    assert_eq!(after["titre"], before["titre"]);
    assert_eq!(after["stock"], before["stock"]);
    assert_eq!(after["categorie"], before["categorie"]);
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["date_ajout"], before["date_ajout"]);
}

#[tokio::test]
async fn update_missing_article_is_404() {
    let app = support::seeded_router();
    let resp = support::send(
        &app,
        Method::PUT,
        "/api/articles/42",
        Some(json!({ "stock": 1 })),
    )
    .await;
    let message = support::assert_error_response(resp, StatusCode::NOT_FOUND).await;
    assert!(message.contains("42"));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let app = support::seeded_router();

    let confirmation = support::call(&app, Method::DELETE, "/api/articles/77", None, StatusCode::OK).await;
    assert!(confirmation["message"].as_str().unwrap().contains("77"));
    let all = support::call(&app, Method::GET, "/api/articles", None, StatusCode::OK).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    support::call(&app, Method::DELETE, "/api/articles/1", None, StatusCode::OK).await;
    support::call(&app, Method::DELETE, "/api/articles/1", None, StatusCode::OK).await;
    let resp = support::send(&app, Method::GET, "/api/articles/1", None).await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn search_by_title_is_case_insensitive() {
    let app = support::seeded_router();
    let found = support::call(&app, Method::GET, "/api/articles/search?titre=dell", None, StatusCode::OK).await;
    assert_eq!(titles(&found), vec!["Laptop Dell XPS 13"]);
}

#[tokio::test]
async fn search_filters_compose() {
    let app = support::seeded_router();

    let audio = support::call(&app, Method::GET, "/api/articles/search?categorie=AUDIO", None, StatusCode::OK).await;
    assert_eq!(titles(&audio), vec!["Casque Sony WH-1000XM4"]);

    let mid_range = support::call(
        &app,
        Method::GET,
        "/api/articles/search?prix_min=150&prix_max=350",
        None,
        StatusCode::OK,
    )
    .await;
    assert_eq!(
        titles(&mid_range),
        vec!["Casque Sony WH-1000XM4", "Clavier Mécanique Corsair"]
    );

    let none = support::call(
        &app,
        Method::GET,
        "/api/articles/search?titre=clavier&prix_max=100",
        None,
        StatusCode::OK,
    )
    .await;
    assert_eq!(none, json!([]));

    let all = support::call(&app, Method::GET, "/api/articles/search", None, StatusCode::OK).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn search_rejects_malformed_bound() {
    let app = support::seeded_router();
    let resp = support::send(&app, Method::GET, "/api/articles/search?prix_min=cher", None).await;
    support::assert_error_response(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn health_and_root() {
    let app = support::seeded_router();

    let health = support::call(&app, Method::GET, "/health", None, StatusCode::OK).await;
    assert_eq!(health["status"], "OK");
    assert_eq!(health["total_articles"], 3);
    assert_eq!(health["total_reviews"], 3);

    let root = support::call(&app, Method::GET, "/", None, StatusCode::OK).await;
    assert!(root["message"].is_string());
}

#[tokio::test]
async fn root_points_to_docs_and_docs_are_served() {
    let app = support::seeded_router();

    let root = support::call(&app, Method::GET, "/", None, StatusCode::OK).await;
    assert_eq!(root["documentation"], "/docs");

    let resp = support::send(&app, Method::GET, "/docs/", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let doc = support::call(&app, Method::GET, "/api-docs/openapi.json", None, StatusCode::OK).await;
    assert!(doc["openapi"].is_string());
    assert!(doc["paths"]["/api/articles/{id}/avis-externes"].is_object());
    assert!(doc["components"]["schemas"]["ReviewStats"].is_object());
}

#[tokio::test]
async fn zero_price_ceiling_keeps_only_free_items() {
    let app = support::seeded_router();
    let mut free = new_article("Autocollant");
    free["prix"] = json!(0.0);
    support::call(&app, Method::POST, "/api/articles", Some(free), StatusCode::CREATED).await;

    let found = support::call(&app, Method::GET, "/api/articles/search?prix_max=0", None, StatusCode::OK).await;
    assert_eq!(titles(&found), vec!["Autocollant"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writes_get_distinct_contiguous_ids() {
    const WRITES: usize = 50;
    let app = support::seeded_router();

    let mut articles = Vec::with_capacity(WRITES);
    let mut reviews = Vec::with_capacity(WRITES);
    for i in 0..WRITES {
        let article_app = app.clone();
        articles.push(tokio::spawn(async move {
            support::call(
                &article_app,
                Method::POST,
                "/api/articles",
                Some(new_article(&format!("Article {}", i))),
                StatusCode::CREATED,
            )
            .await["id"]
                .as_u64()
                .unwrap()
        }));

        let review_app = app.clone();
        reviews.push(tokio::spawn(async move {
            support::call(
                &review_app,
                Method::POST,
                "/api/articles/1/avis",
                Some(json!({ "utilisateur": format!("client{}", i), "note": 1 + (i % 5), "commentaire": "" })),
                StatusCode::CREATED,
            )
            .await["id"]
                .as_u64()
                .unwrap()
        }));
    }

    let mut article_ids = Vec::with_capacity(WRITES);
    for handle in articles {
        article_ids.push(handle.await.unwrap());
    }
    let mut review_ids = Vec::with_capacity(WRITES);
    for handle in reviews {
        review_ids.push(handle.await.unwrap());
    }
    article_ids.sort_unstable();
    review_ids.sort_unstable();

    // Seed catalog holds 3 articles and 3 reviews
    let expected: Vec<u64> = (4..4 + WRITES as u64).collect();
    assert_eq!(article_ids, expected);
    assert_eq!(review_ids, expected);

    let health = support::call(&app, Method::GET, "/health", None, StatusCode::OK).await;
    assert_eq!(health["total_articles"], 3 + WRITES);
    assert_eq!(health["total_reviews"], 3 + WRITES);

    let stats = support::call(
        &app,
        Method::GET,
        "/api/articles/1/avis/statistiques",
        None,
        StatusCode::OK,
    )
    .await;
    assert_eq!(stats["count"], 2 + WRITES);
}
