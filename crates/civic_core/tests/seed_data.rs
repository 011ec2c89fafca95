use civic_core::{
    ActionType, AreaType, CivicStorage, IssueStatus, MemStorage, StoreCounts,
};
use std::collections::HashSet;

#[test]
fn seeded_store_has_fixture_counts() {
    let store = MemStorage::seeded().unwrap();
    assert_eq!(
        store.counts(),
        StoreCounts {
            users: 0,
            government_activities: 5,
            citizen_issues: 5,
            officials: 3,
            vote_records: 2,
            statistics: 6,
            action_plans: 3,
        }
    );
}

#[test]
fn empty_store_has_no_records() {
    assert_eq!(MemStorage::empty().counts(), StoreCounts::default());
}

#[test]
fn statistic_by_area_finds_seeded_zipcode() {
    let store = MemStorage::seeded().unwrap();
    let stat = store.statistic_by_area("94102").unwrap();
    assert_eq!(stat.area_type, AreaType::Zipcode);
    assert_eq!(stat.population, 28_500);
    assert_eq!(stat.year, 2024);

    let state = store.statistic_by_area("california").unwrap();
    assert_eq!(state.area_type, AreaType::State);
}

#[test]
fn seeded_statistic_areas_are_unique_per_type() {
    let store = MemStorage::seeded().unwrap();
    let stats = store.list_statistics();
    let keys = stats
        .iter()
        .map(|stat| (stat.area.clone(), stat.area_type))
        .collect::<HashSet<_>>();
    assert_eq!(keys.len(), stats.len());
}

#[test]
fn matched_issues_point_at_seeded_activities() {
    let store = MemStorage::seeded().unwrap();
    let issues = store.list_citizen_issues();

    let matched = issues
        .iter()
        .filter(|issue| issue.status == IssueStatus::Matched)
        .collect::<Vec<_>>();
    assert_eq!(matched.len(), 2);
    for issue in matched {
        let activity_id = issue.matched_activity_id.as_deref().unwrap();
        assert!(store.get_government_activity(activity_id).is_some());
    }

    let votes = issues.iter().map(|issue| issue.votes).collect::<Vec<_>>();
    assert_eq!(votes, vec![127, 89, 56, 72, 43]);
    assert!(issues[2..]
        .iter()
        .all(|issue| issue.status == IssueStatus::Pending && issue.matched_activity_id.is_none()));
}

#[test]
fn seeded_relationships_resolve() {
    let store = MemStorage::seeded().unwrap();

    for record in store.list_vote_records() {
        assert!(store.get_official(&record.official_id).is_some());
        assert!(store.get_government_activity(&record.activity_id).is_some());
    }

    for plan in store.list_action_plans() {
        assert!(store.get_citizen_issue(&plan.issue_id).is_some());
        if let Some(official_id) = &plan.official_id {
            assert!(store.get_official(official_id).is_some());
        }
        if let Some(activity_id) = &plan.activity_id {
            assert!(store.get_government_activity(activity_id).is_some());
        }
    }

    let officials = store.list_officials();
    assert_eq!(officials[0].name, "Sarah Johnson");
    assert_eq!(officials[0].committees.len(), 2);
    assert_eq!(store.vote_records_by_official(&officials[0].id).len(), 1);
    assert!(store.vote_records_by_official(&officials[2].id).is_empty());
}

#[test]
fn grocery_issue_has_two_action_plans() {
    let store = MemStorage::seeded().unwrap();
    let grocery = &store.list_citizen_issues()[1];

    let plans = store.action_plans_for_issue(&grocery.id);
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].action_type, ActionType::Attend);
    assert_eq!(plans[1].action_type, ActionType::Email);
    assert!(plans[1].activity_id.is_none());
}

#[test]
fn separate_stores_do_not_share_state() {
    let first = MemStorage::seeded().unwrap();
    let second = MemStorage::seeded().unwrap();

    let first_ids = first
        .list_officials()
        .into_iter()
        .map(|official| official.id)
        .collect::<HashSet<_>>();
    assert!(second
        .list_officials()
        .iter()
        .all(|official| !first_ids.contains(&official.id)));
}
