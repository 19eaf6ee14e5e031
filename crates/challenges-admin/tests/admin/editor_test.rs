use challenges_admin::{AdminError, ChallengeEditor, Panel};
use challenges_core::{ChallengeTemplate, GoalsConfig, GoalsType, MatchRule};
use std::sync::Arc;
use uuid::Uuid;

use crate::helpers::{api_error, challenge_from_draft, sample_challenge, MockApiClient};

#[tokio::test]
async fn test_new_challenge_cumulative_submit_creates_without_items() {
    let new_id = Uuid::now_v7();
    let mut api = MockApiClient::new();
    api.expect_create_challenge()
        .withf(|draft| {
            let goals = serde_json::to_value(&draft.configuration.goals).unwrap();
            goals["type"] == "cumulative"
                && goals["targetValue"].as_f64() == Some(100.0)
                && goals["unit"] == "contacts"
                && goals.get("items").is_none()
        })
        .times(1)
        .returning(move |draft| Ok(challenge_from_draft(new_id, 1, draft)));

    let mut editor = ChallengeEditor::new(Arc::new(api));
    editor.form_mut().name = "Make 100 contacts".to_string();
    editor.form_mut().set_goals_type(GoalsType::Cumulative);

    let created = editor.submit().await.unwrap();

    assert_eq!(created.id, new_id);
    assert_eq!(editor.id(), Some(new_id));
    assert!(editor.error().is_none());
    // a saved challenge unlocks badges and invites
    editor.select_panel(Panel::Badges).unwrap();
    assert_eq!(editor.panel(), Panel::Badges);
    assert_eq!(editor.badges().unwrap().challenge_id(), new_id);
}

#[tokio::test]
async fn test_badges_and_invites_blocked_before_first_save() {
    let mut editor = ChallengeEditor::new(Arc::new(MockApiClient::new()));

    editor.select_panel(Panel::Tiers).unwrap();
    let err = editor.select_panel(Panel::Badges).unwrap_err();
    assert_eq!(err.to_string(), "Save the challenge first to manage badges.");
    let err = editor.select_panel(Panel::Invites).unwrap_err();
    assert_eq!(err.to_string(), "Save the challenge first to manage invites.");
    assert_eq!(editor.panel(), Panel::Tiers);

    assert!(matches!(editor.badges(), Err(AdminError::Unsaved(_))));
    assert!(matches!(editor.invites(), Err(AdminError::Unsaved(_))));
}

#[tokio::test]
async fn test_blank_name_is_rejected_without_request() {
    let mut api = MockApiClient::new();
    api.expect_create_challenge().never();

    let mut editor = ChallengeEditor::new(Arc::new(api));
    let err = editor.submit().await.unwrap_err();

    assert!(matches!(err, AdminError::Validation(_)));
    assert_eq!(editor.error(), Some("validation failed: name is required"));
    assert_eq!(editor.id(), None);

    editor.dismiss_error();
    assert!(editor.error().is_none());
}

#[tokio::test]
async fn test_load_hydrates_and_submit_updates_same_id() {
    let id = Uuid::now_v7();
    let mut api = MockApiClient::new();
    api.expect_get_challenge()
        .withf(move |requested| *requested == id)
        .times(1)
        .returning(|id| Ok(sample_challenge(*id)));
    api.expect_update_challenge()
        .withf(move |requested, draft| {
            *requested == id
                && draft.name == "Worked All States"
                && draft.configuration.goals.items().len() == 1
        })
        .times(1)
        .returning(|id, draft| Ok(challenge_from_draft(*id, 2, draft)));
    api.expect_create_challenge().never();

    let mut editor = ChallengeEditor::open(Arc::new(api), id).await.unwrap();

    let form = editor.form();
    assert_eq!(form.author, "K1ABC");
    assert_eq!(form.match_rules, vec![MatchRule::blank()]);
    assert!(form.is_active);

    editor.form_mut().goals.add("US-ME", "Maine").unwrap();
    let updated = editor.submit().await.unwrap();

    assert_eq!(updated.version, 2);
    assert_eq!(editor.saved().map(|c| c.version), Some(2));
}

#[tokio::test]
async fn test_load_failure_sets_banner() {
    let mut api = MockApiClient::new();
    api.expect_get_challenge()
        .returning(|_| Err(api_error(404, "NOT_FOUND", "Challenge not found")));

    let mut editor = ChallengeEditor::new(Arc::new(api));
    let err = editor.load(Uuid::now_v7()).await.unwrap_err();

    assert_eq!(err.to_string(), "Challenge not found");
    assert_eq!(editor.error(), Some("Challenge not found"));
    assert_eq!(editor.id(), None);
}

#[tokio::test]
async fn test_save_failure_keeps_edits() {
    let mut api = MockApiClient::new();
    api.expect_create_challenge()
        .times(1)
        .returning(|_| Err(api_error(400, "VALIDATION_ERROR", "Tier thresholds must increase")));

    let mut editor = ChallengeEditor::new(Arc::new(api));
    editor.form_mut().name = "Tiered".to_string();
    editor.form_mut().tiers.add("Gold", 50.0);

    assert!(editor.submit().await.is_err());
    assert_eq!(editor.error(), Some("Tier thresholds must increase"));
    assert_eq!(editor.form().tiers.len(), 1);
    assert_eq!(editor.id(), None);
}

#[tokio::test]
async fn test_export_reflects_unsaved_edits() {
    let mut editor = ChallengeEditor::new(Arc::new(MockApiClient::new()));
    editor.form_mut().name = "Draft".to_string();
    editor
        .form_mut()
        .goals
        .import_csv("id,name\nUS-CA,California\n");

    let json = editor.export_json().unwrap();
    let template = ChallengeTemplate::from_json(&json).unwrap();

    assert_eq!(template.name, "Draft");
    match template.configuration.goals {
        GoalsConfig::Collection { items } => assert_eq!(items[0].id, "US-CA"),
        other => panic!("expected collection goals, got {:?}", other),
    }
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("id").is_none());
    assert!(value.get("isActive").is_none());
}

#[tokio::test]
async fn test_template_seeds_new_challenge() {
    let mut source = ChallengeEditor::new(Arc::new(MockApiClient::new()));
    source.form_mut().name = "Shared".to_string();
    let template = ChallengeTemplate::from_json(&source.export_json().unwrap()).unwrap();

    let new_id = Uuid::now_v7();
    let mut api = MockApiClient::new();
    api.expect_create_challenge()
        .withf(|draft| draft.name == "Shared")
        .times(1)
        .returning(move |draft| Ok(challenge_from_draft(new_id, 1, draft)));

    let mut editor = ChallengeEditor::from_template(Arc::new(api), &template);
    assert_eq!(editor.submit().await.unwrap().id, new_id);
}

#[tokio::test]
async fn test_successful_load_clears_previous_error() {
    let id = Uuid::now_v7();
    let mut api = MockApiClient::new();
    let mut calls = 0;
    api.expect_get_challenge()
        .times(2)
        .returning(move |id| {
            calls += 1;
            if calls == 1 {
                Err(api_error(503, "UNAVAILABLE", "Service unavailable"))
            } else {
                Ok(sample_challenge(*id))
            }
        });

    let mut editor = ChallengeEditor::new(Arc::new(api));
    assert!(editor.load(id).await.is_err());
    assert_eq!(editor.error(), Some("Service unavailable"));

    editor.load(id).await.unwrap();
    assert!(editor.error().is_none());
    assert_eq!(editor.id(), Some(id));
}
