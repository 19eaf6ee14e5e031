use challenges_admin::{AdminError, BadgeManager, InviteManager};
use challenges_core::BadgeUpload;
use std::{cell::RefCell, sync::Arc};
use uuid::Uuid;

use crate::helpers::{api_error, sample_badge, sample_invite, MockApiClient};

fn upload(name: &str, image: Vec<u8>) -> BadgeUpload {
    BadgeUpload {
        file_name: "badge.png".to_string(),
        content_type: "image/png".to_string(),
        image,
        name: name.to_string(),
        tier_id: None,
    }
}

#[tokio::test]
async fn test_badge_upload_requires_name_and_image() {
    let mut api = MockApiClient::new();
    api.expect_upload_badge().never();
    let mut badges = BadgeManager::new(Arc::new(api), Uuid::now_v7());

    let err = badges.upload(upload("  ", vec![1])).await.unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));
    assert_eq!(badges.error(), Some("validation failed: badge name is required"));

    assert!(badges.upload(upload("Gold", Vec::new())).await.is_err());
    assert!(badges.badges().is_empty());
}

#[tokio::test]
async fn test_badge_upload_appends_and_delete_confirms_by_name() {
    let challenge_id = Uuid::now_v7();
    let (existing, uploaded) = (Uuid::now_v7(), Uuid::now_v7());
    let mut api = MockApiClient::new();
    api.expect_list_badges()
        .withf(move |id| *id == challenge_id)
        .returning(move |_| Ok(vec![sample_badge(existing, "Bronze")]));
    api.expect_upload_badge()
        .withf(move |id, upload| *id == challenge_id && upload.name == "Gold")
        .times(1)
        .returning(move |_, upload| Ok(sample_badge(uploaded, &upload.name)));
    api.expect_delete_badge()
        .withf(move |id| *id == existing)
        .times(1)
        .returning(|_| Ok(()));

    let mut badges = BadgeManager::new(Arc::new(api), challenge_id);
    badges.load().await.unwrap();
    badges.upload(upload("Gold", vec![1, 2])).await.unwrap();

    let names: Vec<&str> = badges.badges().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Bronze", "Gold"]);

    let prompts = RefCell::new(Vec::new());
    let confirm = |prompt: &str| {
        prompts.borrow_mut().push(prompt.to_string());
        true
    };
    assert!(badges.delete(&existing, &confirm).await.unwrap());
    assert_eq!(prompts.into_inner(), vec!["Delete badge \"Bronze\"?".to_string()]);
    assert_eq!(badges.badges().len(), 1);
    assert_eq!(badges.badges()[0].id, uploaded);
}

#[tokio::test]
async fn test_invite_generate_prepends() {
    let challenge_id = Uuid::now_v7();
    let mut api = MockApiClient::new();
    api.expect_list_invites()
        .returning(|_| Ok(vec![sample_invite("older")]));
    api.expect_generate_invite()
        .withf(|_, request| request.max_uses == Some(10) && request.expires_at.is_none())
        .times(1)
        .returning(|_, request| {
            let mut invite = sample_invite("newer");
            invite.max_uses = request.max_uses;
            Ok(invite)
        });

    let mut invites = InviteManager::new(Arc::new(api), challenge_id);
    invites.load().await.unwrap();
    let invite = invites.generate(Some(10), None).await.unwrap();
    assert_eq!(invite.max_uses, Some(10));

    let tokens: Vec<&str> = invites.invites().iter().map(|i| i.token.as_str()).collect();
    assert_eq!(tokens, vec!["newer", "older"]);
}

#[tokio::test]
async fn test_invite_revoke_needs_confirmation() {
    let mut api = MockApiClient::new();
    api.expect_list_invites()
        .returning(|_| Ok(vec![sample_invite("abc"), sample_invite("def")]));
    api.expect_revoke_invite()
        .withf(|token| token == "def")
        .times(1)
        .returning(|_| Ok(()));

    let mut invites = InviteManager::new(Arc::new(api), Uuid::now_v7());
    invites.load().await.unwrap();

    let prompts = RefCell::new(Vec::new());
    let decline = |prompt: &str| {
        prompts.borrow_mut().push(prompt.to_string());
        false
    };
    assert!(!invites.revoke("abc", &decline).await.unwrap());
    assert_eq!(
        prompts.into_inner(),
        vec!["Revoke this invite? It will no longer be usable.".to_string()]
    );

    assert!(invites.revoke("def", &|_: &str| true).await.unwrap());
    let tokens: Vec<&str> = invites.invites().iter().map(|i| i.token.as_str()).collect();
    assert_eq!(tokens, vec!["abc"]);
}

#[tokio::test]
async fn test_invite_revoke_failure_keeps_invite() {
    let mut api = MockApiClient::new();
    api.expect_list_invites()
        .returning(|_| Ok(vec![sample_invite("abc")]));
    api.expect_revoke_invite()
        .returning(|_| Err(api_error(404, "NOT_FOUND", "Invite not found")));

    let mut invites = InviteManager::new(Arc::new(api), Uuid::now_v7());
    invites.load().await.unwrap();

    assert!(invites.revoke("abc", &|_: &str| true).await.is_err());
    assert_eq!(invites.error(), Some("Invite not found"));
    assert_eq!(invites.invites().len(), 1);
}

#[tokio::test]
async fn test_badge_reload_clears_previous_error() {
    let mut api = MockApiClient::new();
    let mut calls = 0;
    api.expect_list_badges()
        .times(2)
        .returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(api_error(503, "UNAVAILABLE", "Service unavailable"))
            } else {
                Ok(vec![sample_badge(Uuid::now_v7(), "Gold")])
            }
        });

    let mut badges = BadgeManager::new(Arc::new(api), Uuid::now_v7());
    assert!(badges.load().await.is_err());
    assert_eq!(badges.error(), Some("Service unavailable"));

    badges.load().await.unwrap();
    assert!(badges.error().is_none());
    assert_eq!(badges.badges().len(), 1);
}

#[tokio::test]
async fn test_invite_reload_clears_previous_error() {
    let mut api = MockApiClient::new();
    let mut calls = 0;
    api.expect_list_invites()
        .times(2)
        .returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(api_error(503, "UNAVAILABLE", "Service unavailable"))
            } else {
                Ok(vec![sample_invite("abc")])
            }
        });

    let mut invites = InviteManager::new(Arc::new(api), Uuid::now_v7());
    assert!(invites.load().await.is_err());
    assert_eq!(invites.error(), Some("Service unavailable"));

    invites.load().await.unwrap();
    assert!(invites.error().is_none());
}
