use civic_core::{
    CivicStorage, IssueStatus, IssueUpdate, MemStorage, NewCitizenIssue, StoreCounts,
};

fn pothole() -> NewCitizenIssue {
    NewCitizenIssue {
        title: "Pothole".to_string(),
        description: String::new(),
        category: "infrastructure".to_string(),
        location: "X".to_string(),
        zipcode: "00000".to_string(),
    }
}

#[test]
fn create_assigns_server_defaults() {
    let store = MemStorage::seeded().unwrap();
    let existing = store
        .list_citizen_issues()
        .into_iter()
        .map(|issue| issue.id)
        .collect::<Vec<_>>();

    let issue = store.create_citizen_issue(pothole());
    assert_eq!(issue.votes, 0);
    assert_eq!(issue.status, IssueStatus::Pending);
    assert!(issue.matched_activity_id.is_none());
    assert_eq!(issue.title, "Pothole");
    assert!(!existing.contains(&issue.id));
}

#[test]
fn match_update_changes_only_status_and_reference() {
    let store = MemStorage::empty();
    let original = store.create_citizen_issue(pothole());
    store.upvote_citizen_issue(&original.id).unwrap();
    let before = store.get_citizen_issue(&original.id).unwrap();

    let updated = store
        .update_citizen_issue(&original.id, IssueUpdate::matched_to("activity-42"))
        .unwrap();

    assert_eq!(updated.status, IssueStatus::Matched);
    assert_eq!(updated.matched_activity_id.as_deref(), Some("activity-42"));
    assert_eq!(updated.votes, before.votes);
    assert_eq!(updated.created_at, before.created_at);
    assert_eq!(updated.title, before.title);
    assert_eq!(updated.description, before.description);
    assert_eq!(updated.category, before.category);
    assert_eq!(updated.location, before.location);
    assert_eq!(updated.zipcode, before.zipcode);
    assert_eq!(updated.id, before.id);
    assert_eq!(store.get_citizen_issue(&original.id), Some(updated));
}

#[test]
fn update_unknown_id_returns_none_and_keeps_counts() {
    let store = MemStorage::seeded().unwrap();
    let before: StoreCounts = store.counts();

    let result = store.update_citizen_issue("missing", IssueUpdate::matched_to("x"));
    assert!(result.is_none());
    assert_eq!(store.counts(), before);
}

#[test]
fn update_from_json_patch_keeps_unspecified_fields() {
    let store = MemStorage::empty();
    let issue = store.create_citizen_issue(pothole());

    let patch: IssueUpdate =
        serde_json::from_str(r#"{"title": "Huge pothole", "votes": 7}"#).unwrap();
    let updated = store.update_citizen_issue(&issue.id, patch).unwrap();

    assert_eq!(updated.title, "Huge pothole");
    assert_eq!(updated.votes, 7);
    assert_eq!(updated.status, IssueStatus::Pending);
    assert_eq!(updated.created_at, issue.created_at);
}

#[test]
fn upvote_never_decrements() {
    let store = MemStorage::empty();
    let issue = store.create_citizen_issue(pothole());

    let mut last = 0;
    for _ in 0..5 {
        let votes = store.upvote_citizen_issue(&issue.id).unwrap().votes;
        assert!(votes > last);
        last = votes;
    }
    assert_eq!(last, 5);
    assert!(store.upvote_citizen_issue("missing").is_none());
}
