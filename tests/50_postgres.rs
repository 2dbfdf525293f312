mod common;

use std::sync::Arc;

use anyhow::{Context, Result};
use common::{sample_movie, TestServer};
use movie_catalog_api::config::AppConfig;
use movie_catalog_api::database::{DatabaseManager, PgStore};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

async fn postgres_server() -> Result<TestServer> {
    let config = AppConfig::from_env();
    config.database.url.as_ref().context("DATABASE_URL must be set")?;

    let pool = DatabaseManager::connect(&config.database).await?;
    let store = Arc::new(PgStore::new(pool));
    TestServer::spawn_with(store.clone(), store).await
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a disposable Postgres database"]
async fn postgres_duplicate_signup_conflicts() -> Result<()> {
    let server = postgres_server().await?;
    let username = format!("user_{}", Uuid::new_v4().simple());

    assert_eq!(server.signup(&username, "pw").await?, StatusCode::CREATED);
    assert_eq!(server.signup(&username, "pw").await?, StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a disposable Postgres database"]
async fn postgres_movie_lifecycle() -> Result<()> {
    let server = postgres_server().await?;
    let auth = server.authorize(&format!("user_{}", Uuid::new_v4().simple())).await?;
    let title = format!("Movie {}", Uuid::new_v4().simple());
    let path = format!("/movies/{}", title.replace(' ', "%20"));

    let (status, _) = server.create_movie(&auth, &sample_movie(&title)).await?;
    assert_eq!(status, StatusCode::CREATED);

    let res = server
        .client
        .put(server.url(&path))
        .header("Authorization", &auth)
        .json(&json!({ "genre": "Comedy", "actors": ["D", "E", "F"] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["movie"]["genre"], "Comedy");
    assert_eq!(body["movie"]["releaseDate"], "2020");
    assert_eq!(body["movie"]["actors"], json!(["D", "E", "F"]));

    let res = server.client.delete(server.url(&path)).header("Authorization", &auth).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = server.client.get(server.url(&path)).header("Authorization", &auth).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
