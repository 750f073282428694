use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

/// A post in the JSONPlaceholder shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Debug)]
pub struct Fixtures {
    pub posts: Vec<Post>,
    pub users: Vec<Value>,
}

pub type Db = Arc<Fixtures>;

pub fn seed() -> Fixtures {
    let posts = vec![
        Post {
            user_id: 1,
            id: 1,
            title: "sunt aut facere".to_string(),
            body: "quia et suscipit".to_string(),
        },
        Post {
            user_id: 1,
            id: 2,
            title: "qui est esse".to_string(),
            body: "est rerum tempore vitae".to_string(),
        },
        Post {
            user_id: 2,
            id: 3,
            title: "ea molestias, quasi".to_string(),
            body: "et iusto sed quo iure".to_string(),
        },
    ];
    let users = vec![
        json!({
            "id": 1,
            "name": "Leanne Graham",
            "address": {"street": "Kulas Light", "city": "Gwenborough"}
        }),
        json!({
            "id": 2,
            "name": "Ervin Howell",
            "address": {"street": "Victor Plains", "city": "Wisokyburgh"}
        }),
    ];
    Fixtures { posts, users }
}

pub fn app() -> Router {
    let db: Db = Arc::new(seed());
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post))
        .route("/users", get(list_users))
        .route("/status/{code}", get(status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.posts.clone())
}

async fn list_users(State(db): State<Db>) -> Json<Vec<Value>> {
    Json(db.users.clone())
}

/// Unknown ids answer 404 with an empty object, like the real service.
async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> (StatusCode, Json<Value>) {
    match db.posts.iter().find(|post| post.id == id) {
        Some(post) => (StatusCode::OK, Json(json!(post))),
        None => (StatusCode::NOT_FOUND, Json(json!({}))),
    }
}

/// Echoes the payload back with the next id. Nothing is stored.
async fn create_post(
    State(db): State<Db>,
    Json(mut input): Json<Map<String, Value>>,
) -> (StatusCode, Json<Map<String, Value>>) {
    let id = db.posts.len() as u64 + 1;
    input.insert("id".to_string(), Value::from(id));
    (StatusCode::CREATED, Json(input))
}

/// Answers with the requested status code and a small JSON body.
async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(json!({ "status": code }))))
}
