use ngo_connect::errors::PlatformError;
use ngo_connect::metrics;
use ngo_connect::store::campaigns;
use ngo_connect::store::campaigns::CampaignForm;
use ngo_connect::store::models::{Campaign, CampaignStatus};
use ngo_connect::Platform;

fn form(name: &str, goal: &str) -> CampaignForm {
    CampaignForm {
        name: name.to_string(),
        description: "test campaign".to_string(),
        goal: goal.to_string(),
        start_date: "2025-04-01".to_string(),
        status: CampaignStatus::Active,
    }
}

#[test]
fn create_assigns_increasing_ids_from_empty_store() {
    let platform = Platform::new();

    let first = campaigns::create_campaign(&platform, &form("First", "1000")).expect("create");
    let second = campaigns::create_campaign(&platform, &form("Second", "2000")).expect("create");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.raised, 0.0);
    assert_eq!(first.start_date.to_string(), "2025-04-01");
}

#[test]
fn create_continues_after_existing_ids() {
    let platform = Platform::with_sample_data();

    let created = campaigns::create_campaign(&platform, &form("Test", "1000")).expect("create");

    assert_eq!(created.id, 4);
    assert_eq!(created.raised, 0.0);
    assert_eq!(campaigns::list_campaigns(&platform).len(), 4);
}

#[test]
fn create_rejects_blank_name_and_bad_goal() {
    let platform = Platform::new();

    let err = campaigns::create_campaign(&platform, &form("  ", "1000")).unwrap_err();
    assert_eq!(err, PlatformError::MissingField("name"));

    let err = campaigns::create_campaign(&platform, &form("Valid", "not-a-number")).unwrap_err();
    assert_eq!(err, PlatformError::InvalidGoal("not-a-number".to_string()));

    let err = campaigns::create_campaign(&platform, &form("Valid", "-50")).unwrap_err();
    assert_eq!(err, PlatformError::InvalidGoal("-50".to_string()));

    assert!(campaigns::list_campaigns(&platform).is_empty());
}

#[test]
fn update_replaces_fields_but_preserves_raised() {
    let platform = Platform::with_sample_data();
    let before = campaigns::get_campaign(&platform, 1).expect("seed campaign");
    assert_eq!(before.raised, 32500.0);

    let mut edit = form("Clean Water Initiative 2.0", "60000");
    edit.status = CampaignStatus::Paused;
    let updated = campaigns::update_campaign(&platform, 1, &edit).expect("update");

    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "Clean Water Initiative 2.0");
    assert_eq!(updated.goal, 60000.0);
    assert_eq!(updated.raised, 32500.0);
    assert_eq!(updated.status, CampaignStatus::Paused);

    let stored = campaigns::get_campaign(&platform, 1).expect("still there");
    assert_eq!(stored, updated);
}

#[test]
fn update_unknown_campaign_fails() {
    let platform = Platform::with_sample_data();
    let err = campaigns::update_campaign(&platform, 99, &form("Ghost", "1000")).unwrap_err();
    assert_eq!(err, PlatformError::CampaignNotFound(99));
}

#[test]
fn delete_handshake_removes_once_and_is_idempotent() {
    let platform = Platform::with_sample_data();

    let token = campaigns::request_delete(&platform, 2).expect("request delete");
    assert_eq!(token.campaign_id, 2);

    assert!(campaigns::confirm_delete(&platform, token));
    assert_eq!(campaigns::list_campaigns(&platform).len(), 2);
    assert!(campaigns::get_campaign(&platform, 2).is_none());

    // Reusing the token is a no-op, not an error.
    assert!(!campaigns::confirm_delete(&platform, token));
    assert_eq!(campaigns::list_campaigns(&platform).len(), 2);
}

#[test]
fn delete_request_for_unknown_campaign_fails() {
    let platform = Platform::with_sample_data();
    let err = campaigns::request_delete(&platform, 42).unwrap_err();
    assert_eq!(err, PlatformError::CampaignNotFound(42));
}

#[test]
fn percent_funded_is_exact_and_unclamped() {
    let platform = Platform::with_sample_data();
    let seeded = campaigns::get_campaign(&platform, 1).expect("seed campaign");
    assert_eq!(metrics::percent_funded(&seeded), 65.0);

    let overfunded = Campaign { raised: 45000.0, goal: 30000.0, ..seeded.clone() };
    assert_eq!(metrics::percent_funded(&overfunded), 150.0);

    // Zero goal divides through to infinity; the display layer shows it as-is.
    let zero_goal = Campaign { goal: 0.0, ..seeded };
    assert!(metrics::percent_funded(&zero_goal).is_infinite());
}

#[test]
fn campaign_totals_count_by_status() {
    let platform = Platform::with_sample_data();
    let totals = metrics::campaign_totals(&campaigns::list_campaigns(&platform));

    assert_eq!(totals.total, 3);
    assert_eq!(totals.active, 2);
    assert_eq!(totals.completed, 1);
    assert_eq!(totals.paused, 0);
    assert_eq!(totals.total_raised, 110500.0);
}

#[test]
fn campaign_serializes_to_presentation_shape() {
    let platform = Platform::with_sample_data();
    let campaign = campaigns::get_campaign(&platform, 3).expect("seed campaign");

    let json = serde_json::to_value(&campaign).expect("serialize");
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Healthcare Outreach");
    assert_eq!(json["status"], "Completed");
    assert_eq!(json["start_date"], "2024-11-01");
    assert_eq!(json["goal"], 30000.0);
}
