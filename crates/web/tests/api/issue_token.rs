use auth_core::{SignedToken, VerifyError};
use claims::assert_ok;

use crate::helpers::spawn_app;

#[tokio::test]
async fn issued_tokens_verify_against_the_configured_secret() {
    let app = spawn_app().await;
    let subject_id = app.operator.subject_id.clone();

    let response = app
        .post_token(&serde_json::json!({ "subject_id": subject_id }))
        .await;

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["subject_id"], subject_id.as_str());
    assert_eq!(body["expires_in_secs"], 5);

    let token = SignedToken::from(body["token"].as_str().unwrap().to_string());
    let verified = assert_ok!(app.token_service.verify(&token));
    assert_eq!(verified, subject_id);
}

#[tokio::test]
async fn a_requested_zero_validity_yields_an_already_expired_token() {
    let app = spawn_app().await;

    let response = app
        .post_token(&serde_json::json!({
            "subject_id": app.operator.subject_id,
            "validity_secs": 0,
        }))
        .await;

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();

    let token = SignedToken::from(body["token"].as_str().unwrap().to_string());
    assert_eq!(app.token_service.verify(&token), Err(VerifyError::Expired));
}

#[tokio::test]
async fn an_empty_subject_is_rejected_with_400() {
    let app = spawn_app().await;

    let response = app
        .post_token(&serde_json::json!({ "subject_id": "" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn a_body_without_a_subject_is_rejected_with_400() {
    let app = spawn_app().await;

    let response = app
        .post_token(&serde_json::json!({ "validity_secs": 30 }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}
