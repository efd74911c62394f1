//! Invite API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use guest_list::domain::Presence;
use guest_list::shared::messages::Locale;

use crate::common::{body_json, fake_guest, mint_token, TestApp, JWT_SECRET};

fn ali() -> serde_json::Value {
    json!({
        "first_name": "Ali",
        "last_name": "Hassan",
        "description": "VIP guest",
        "phone": "0501234567"
    })
}

#[tokio::test]
async fn test_guest_lifecycle() {
    let app = TestApp::new();

    let response = app.post_json("/api/invites", &ali()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invite created successfully");
    assert_eq!(json["Invite"]["presence"], "UNREGISTERED");
    assert_eq!(json["Invite"]["first_name"], "Ali");
    let id = json["Invite"]["id"].as_i64().unwrap();

    let response = app
        .put_json(
            &format!("/api/invites/{id}/presence"),
            &json!({ "presence": "PRESENT" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invite presence updated successfully");
    assert_eq!(json["Invite"]["presence"], "PRESENT");

    let response = app
        .put_json(&format!("/api/invites/{id}"), &json!({ "first_name": "Sara" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["Invite"]["first_name"], "Sara");
    assert_eq!(json["Invite"]["last_name"], "Hassan");
    assert_eq!(json["Invite"]["presence"], "PRESENT");

    let response = app.delete(&format!("/api/invites/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invite deleted successfully");
    assert!(json.get("Invite").is_none());

    let response = app.get(&format!("/api/invites/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Invite not found");
}

#[tokio::test]
async fn test_list_returns_all_invites_in_id_order() {
    let app = TestApp::new();
    let first = app.create_invite(&fake_guest()).await;
    let second = app.create_invite(&fake_guest()).await;

    let response = app.get("/api/invites").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<i64> = json["Invites"]
        .as_array()
        .unwrap()
        .iter()
        .map(|invite| invite["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn test_list_empty() {
    let app = TestApp::new();

    let json = body_json(app.get("/api/invites").await).await;

    assert_eq!(json["Invites"], json!([]));
}

#[tokio::test]
async fn test_create_with_eleven_digit_phone_is_rejected() {
    let app = TestApp::new();
    let mut body = ali();
    body["phone"] = json!("05012345678");

    let response = app.post_json("/api/invites", &body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["message"], "The given data was invalid");
    assert!(json["errors"]["phone"][0].as_str().unwrap().contains("10"));
    assert_eq!(app.repo.count(), 0);
}

#[tokio::test]
async fn test_create_missing_fields_lists_each_field() {
    let app = TestApp::new();

    let response = app.post_json("/api/invites", &json!({})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body_json(response).await["errors"].clone();
    for field in ["first_name", "last_name", "description", "phone"] {
        assert!(errors.get(field).is_some(), "missing error for {field}");
    }
}

#[tokio::test]
async fn test_create_ignores_client_presence() {
    let app = TestApp::new();
    let mut body = fake_guest();
    body["presence"] = json!("PRESENT");

    let id = app.create_invite(&body).await;

    assert_eq!(app.repo.get(id).unwrap().presence, Presence::Unregistered);
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = TestApp::new();
    let id = app.create_invite(&ali()).await;

    let response = app
        .patch_json(
            &format!("/api/invites/{id}"),
            &json!({ "description": "Family" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let stored = app.repo.get(id).unwrap();
    assert_eq!(stored.description, "Family");
    assert_eq!(stored.first_name, "Ali");
    assert_eq!(stored.phone.as_deref(), Some("0501234567"));
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let app = TestApp::new();
    let id = app.create_invite(&ali()).await;
    let body = json!({ "first_name": "Omar", "phone": "0559876543" });

    let first = body_json(app.put_json(&format!("/api/invites/{id}"), &body).await).await;
    let second = body_json(app.put_json(&format!("/api/invites/{id}"), &body).await).await;

    for field in ["first_name", "last_name", "description", "phone", "presence"] {
        assert_eq!(first["Invite"][field], second["Invite"][field]);
    }
}

#[test_case(json!({}) ; "empty object")]
#[test_case(json!({ "presence": "PRESENT" }) ; "presence only")]
#[test_case(json!({ "nickname": "Al" }) ; "unknown field only")]
#[tokio::test]
async fn test_empty_update_is_rejected_without_errors(body: serde_json::Value) {
    let app = TestApp::new();
    let id = app.create_invite(&ali()).await;
    let before = app.repo.get(id).unwrap();

    let response = app.put_json(&format!("/api/invites/{id}"), &body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["message"], "No data was submitted for update");
    assert!(json.get("errors").is_none());
    assert_eq!(app.repo.get(id).unwrap(), before);
}

#[tokio::test]
async fn test_update_with_empty_body_is_empty_update() {
    let app = TestApp::new();
    let id = app.create_invite(&ali()).await;

    let response = app
        .send("PUT", &format!("/api/invites/{id}"), None, Some(&app.token))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_invalid_field_leaves_record_untouched() {
    let app = TestApp::new();
    let id = app.create_invite(&ali()).await;

    let response = app
        .put_json(
            &format!("/api/invites/{id}"),
            &json!({ "first_name": "Sara", "phone": "invalid_phone_number" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"].get("phone").is_some());
    assert_eq!(app.repo.get(id).unwrap().first_name, "Ali");
}

#[test_case("invalid_status" ; "unknown word")]
#[test_case("present" ; "lowercase")]
#[tokio::test]
async fn test_invalid_presence_is_rejected(presence: &str) {
    let app = TestApp::new();
    let id = app.create_invite(&ali()).await;

    let response = app
        .put_json(
            &format!("/api/invites/{id}/presence"),
            &json!({ "presence": presence }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["errors"].get("presence").is_some());
    assert_eq!(app.repo.get(id).unwrap().presence, Presence::Unregistered);
}

#[tokio::test]
async fn test_presence_on_missing_invite() {
    let app = TestApp::new();

    let response = app
        .put_json("/api/invites/999/presence", &json!({ "presence": "ABSENT" }))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test_case("GET" ; "show")]
#[test_case("PUT" ; "update")]
#[test_case("DELETE" ; "delete")]
#[tokio::test]
async fn test_non_numeric_id_is_not_found(method: &str) {
    let app = TestApp::new();

    let response = app
        .send(method, "/api/invites/abc", Some("{}".into()), Some(&app.token))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .send(
            "POST",
            "/api/invites",
            Some("first_name=Ali".into()),
            Some(&app.token),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "The request body is not valid JSON"
    );
}

#[test_case("/api/invites/create" ; "create form")]
#[test_case("/api/invites/3/edit" ; "edit form")]
#[tokio::test]
async fn test_form_routes_are_unsupported(uri: &str) {
    let app = TestApp::new();

    let response = app.get(uri).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body_json(response).await["message"],
        "This operation is not supported on this platform"
    );
}

#[test_case("POST" ; "post")]
#[test_case("PUT" ; "put")]
#[test_case("PATCH" ; "patch")]
#[test_case("DELETE" ; "delete")]
#[tokio::test]
async fn test_create_form_rejects_every_method(method: &str) {
    let app = TestApp::new();

    let response = app
        .send(method, "/api/invites/create", Some("{}".into()), Some(&app.token))
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body_json(response).await["message"],
        "This operation is not supported on this platform"
    );
    assert_eq!(app.repo.count(), 0);
}

#[test_case("POST", "/api/invites/5" ; "post on invite")]
#[test_case("DELETE", "/api/invites" ; "delete on collection")]
#[test_case("POST", "/api/invites/5/presence" ; "post on presence")]
#[tokio::test]
async fn test_unmapped_method_has_message_body(method: &str, uri: &str) {
    let app = TestApp::new();

    let response = app
        .send(method, uri, Some("{}".into()), Some(&app.token))
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body_json(response).await["message"],
        "This operation is not supported on this platform"
    );
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.send("GET", "/api/invites", None, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "Unauthenticated");
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::new();
    let expired = mint_token("1", -3600, JWT_SECRET);

    let response = app.send("GET", "/api/invites", None, Some(&expired)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_with_text_subject_is_accepted() {
    let app = TestApp::new();
    let token = mint_token("organizer@example.com", 3600, JWT_SECRET);

    let response = app.send("GET", "/api/invites", None, Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_arabic_locale_messages() {
    let app = TestApp::with_locale(Locale::Ar);

    let response = app.get("/api/invites/42").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "المدعو غير موجود");
}
