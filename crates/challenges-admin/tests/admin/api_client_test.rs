use axum::{
    extract::{Multipart, Path, Query},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use challenges_admin::{ChallengeApi, ChallengeForm, MemorySessionStore};
use challenges_core::{BadgeUpload, ChallengeCategory, GoalsType, ListFilter};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use uuid::Uuid;

use crate::helpers::{api_client, sample_badge, sample_challenge, sample_invite, spawn_stub};

type Seen<T> = Arc<Mutex<Vec<T>>>;

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

#[tokio::test]
async fn test_get_challenge_unwraps_data_and_sends_bearer_token() {
    let id = Uuid::now_v7();
    let seen: Seen<(String, Option<String>)> = Arc::default();

    let recorder = seen.clone();
    let router = Router::new().route(
        "/v1/challenges/{id}",
        get(move |Path(path_id): Path<String>, headers: HeaderMap| {
            let recorder = recorder.clone();
            async move {
                recorder
                    .lock()
                    .unwrap()
                    .push((path_id.clone(), authorization(&headers)));
                let id = Uuid::parse_str(&path_id).unwrap();
                Json(json!({ "data": sample_challenge(id) }))
            }
        }),
    );
    let base_url = spawn_stub(router).await;
    let client = api_client(&base_url, Arc::new(MemorySessionStore::with_token("s3cret")));

    let challenge = client.get_challenge(&id).await.unwrap();

    assert_eq!(challenge.id, id);
    assert_eq!(challenge.name, "Worked All States");
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, id.to_string());
    assert_eq!(seen[0].1.as_deref(), Some("Bearer s3cret"));
}

#[tokio::test]
async fn test_base_url_path_is_kept() {
    let router = Router::new().route(
        "/api/v1/challenges/{id}",
        get(|Path(path_id): Path<String>| async move {
            let id = Uuid::parse_str(&path_id).unwrap();
            Json(json!({ "data": sample_challenge(id) }))
        }),
    );
    let base_url = spawn_stub(router).await.join("api").unwrap();
    let client = api_client(&base_url, Arc::new(MemorySessionStore::new()));

    let id = Uuid::now_v7();
    assert_eq!(client.get_challenge(&id).await.unwrap().id, id);
    assert!(client.base_url.path().ends_with("/api/"));
}

#[tokio::test]
async fn test_missing_token_sends_no_authorization_header() {
    let seen: Seen<Option<String>> = Arc::default();

    let recorder = seen.clone();
    let router = Router::new().route(
        "/v1/challenges",
        get(move |headers: HeaderMap| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(authorization(&headers));
                Json(json!({ "data": { "challenges": [], "total": 0 } }))
            }
        }),
    );
    let base_url = spawn_stub(router).await;
    let client = api_client(&base_url, Arc::new(MemorySessionStore::new()));

    let list = client.list_challenges(&ListFilter::default()).await.unwrap();

    assert!(list.challenges.is_empty());
    assert_eq!(list.total, 0);
    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

#[tokio::test]
async fn test_list_sends_only_set_filters() {
    let seen: Seen<HashMap<String, String>> = Arc::default();

    let recorder = seen.clone();
    let router = Router::new().route(
        "/v1/challenges",
        get(move |Query(query): Query<HashMap<String, String>>| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(query);
                Json(json!({
                    "data": {
                        "challenges": [{
                            "id": Uuid::now_v7(),
                            "name": "Parks",
                            "description": "",
                            "category": "event",
                            "type": "collection",
                            "participantCount": 12,
                            "isActive": true
                        }],
                        "total": 1,
                        "limit": 50,
                        "offset": 0
                    }
                }))
            }
        }),
    );
    let base_url = spawn_stub(router).await;
    let client = api_client(&base_url, Arc::new(MemorySessionStore::new()));

    let filter = ListFilter {
        category: Some(ChallengeCategory::Event),
        challenge_type: None,
        active: Some(true),
    };
    let list = client.list_challenges(&filter).await.unwrap();

    assert_eq!(list.challenges[0].participant_count, 12);
    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].get("category").map(String::as_str), Some("event"));
    assert_eq!(seen[0].get("active").map(String::as_str), Some("true"));
    assert!(!seen[0].contains_key("type"));
}

#[tokio::test]
async fn test_error_envelope_message_is_surfaced() {
    let id = Uuid::now_v7();
    let router = Router::new().route(
        "/v1/admin/challenges/{id}",
        delete(|| async {
            (
                StatusCode::FORBIDDEN,
                Json(json!({ "error": { "code": "FORBIDDEN", "message": "Not authorized" } })),
            )
        }),
    );
    let base_url = spawn_stub(router).await;
    let client = api_client(&base_url, Arc::new(MemorySessionStore::with_token("expired")));

    let err = client.delete_challenge(&id).await.unwrap_err();

    assert_eq!(err.to_string(), "Not authorized");
    assert_eq!(err.code(), Some("FORBIDDEN"));
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_error_without_envelope_falls_back_to_status_text() {
    let id = Uuid::now_v7();
    let router = Router::new().route(
        "/v1/challenges/{id}",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_stub(router).await;
    let client = api_client(&base_url, Arc::new(MemorySessionStore::new()));

    let err = client.get_challenge(&id).await.unwrap_err();

    assert_eq!(err.code(), Some("UNKNOWN"));
    assert_eq!(err.to_string(), "Internal Server Error");
}

#[tokio::test]
async fn test_create_posts_cumulative_goals_without_items() {
    let seen: Seen<Value> = Arc::default();

    let recorder = seen.clone();
    let router = Router::new().route(
        "/v1/admin/challenges",
        post(move |Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(body.clone());
                let mut challenge = body;
                challenge["id"] = json!(Uuid::now_v7());
                challenge["version"] = json!(1);
                (StatusCode::CREATED, Json(json!({ "data": challenge })))
            }
        }),
    );
    let base_url = spawn_stub(router).await;
    let client = api_client(&base_url, Arc::new(MemorySessionStore::with_token("t")));

    let mut form = ChallengeForm::default();
    form.name = "100 contacts".to_string();
    form.set_goals_type(GoalsType::Cumulative);
    let created = client.create_challenge(&form.to_draft()).await.unwrap();

    assert_eq!(created.version, 1);
    let seen = seen.lock().unwrap();
    let goals = &seen[0]["configuration"]["goals"];
    assert_eq!(goals["type"], "cumulative");
    assert_eq!(goals["targetValue"].as_f64(), Some(100.0));
    assert_eq!(goals["unit"], "contacts");
    assert!(goals.get("items").is_none());
    assert!(seen[0].get("id").is_none());
    assert!(seen[0].get("version").is_none());
}

#[tokio::test]
async fn test_upload_badge_sends_multipart_form() {
    let challenge_id = Uuid::now_v7();
    let seen: Seen<(String, Option<String>, Option<String>, Vec<u8>)> = Arc::default();

    let recorder = seen.clone();
    let router = Router::new().route(
        "/v1/admin/challenges/{id}/badges",
        post(move |mut multipart: Multipart| {
            let recorder = recorder.clone();
            async move {
                let mut name = String::new();
                while let Some(field) = multipart.next_field().await.unwrap() {
                    let field_name = field.name().unwrap_or_default().to_string();
                    let file_name = field.file_name().map(String::from);
                    let content_type = field.content_type().map(String::from);
                    let bytes = field.bytes().await.unwrap().to_vec();
                    if field_name == "name" {
                        name = String::from_utf8(bytes.clone()).unwrap();
                    }
                    recorder
                        .lock()
                        .unwrap()
                        .push((field_name, file_name, content_type, bytes));
                }
                Json(json!({ "data": sample_badge(Uuid::now_v7(), &name) }))
            }
        }),
    );
    let base_url = spawn_stub(router).await;
    let client = api_client(&base_url, Arc::new(MemorySessionStore::with_token("t")));

    let upload = BadgeUpload {
        file_name: "gold.png".to_string(),
        content_type: "image/png".to_string(),
        image: vec![1, 2, 3],
        name: "Gold".to_string(),
        tier_id: Some("tier-1".to_string()),
    };
    let badge = client.upload_badge(&challenge_id, upload).await.unwrap();

    assert_eq!(badge.name, "Gold");
    let seen = seen.lock().unwrap();
    let image = seen.iter().find(|field| field.0 == "image").unwrap();
    assert_eq!(image.1.as_deref(), Some("gold.png"));
    assert_eq!(image.2.as_deref(), Some("image/png"));
    assert_eq!(image.3, vec![1, 2, 3]);
    let tier = seen.iter().find(|field| field.0 == "tierId").unwrap();
    assert_eq!(tier.3, b"tier-1".to_vec());
}

#[tokio::test]
async fn test_badge_and_invite_lists_are_unwrapped() {
    let challenge_id = Uuid::now_v7();
    let badge_id = Uuid::now_v7();
    let router = Router::new()
        .route(
            "/v1/admin/challenges/{id}/badges",
            get(move || async move {
                Json(json!({ "data": { "badges": [sample_badge(badge_id, "Gold")] } }))
            }),
        )
        .route(
            "/v1/admin/challenges/{id}/invites",
            get(|| async { Json(json!({ "data": { "invites": [sample_invite("abc")] } })) }),
        );
    let base_url = spawn_stub(router).await;
    let client = api_client(&base_url, Arc::new(MemorySessionStore::new()));

    let badges = client.list_badges(&challenge_id).await.unwrap();
    let invites = client.list_invites(&challenge_id).await.unwrap();

    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0].id, badge_id);
    assert_eq!(invites[0].token, "abc");
}

#[tokio::test]
async fn test_revoke_invite_ignores_empty_body() {
    let seen: Seen<String> = Arc::default();

    let recorder = seen.clone();
    let router = Router::new().route(
        "/v1/admin/invites/{token}",
        delete(move |Path(token): Path<String>| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(token);
                StatusCode::NO_CONTENT
            }
        }),
    );
    let base_url = spawn_stub(router).await;
    let client = api_client(&base_url, Arc::new(MemorySessionStore::with_token("t")));

    client.revoke_invite("inv-123").await.unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["inv-123".to_string()]);
}
