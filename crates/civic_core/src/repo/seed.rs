//! Fixture dataset loaded into a fresh store at startup.
//!
//! # Responsibility
//! - Populate every entity kind with a small, internally consistent dataset.
//! - Exercise each relationship: issue -> activity, vote -> official/activity,
//!   action plan -> issue/official/activity.
//!
//! # Invariants
//! - Seed records go through the regular `CivicStorage` create/update paths.
//! - Statistic areas are unique per area type.

use crate::model::action_plan::{ActionType, NewActionPlan, Priority};
use crate::model::activity::{
    ActivityStatus, ActivityType, GovernmentActivity, NewGovernmentActivity, VoteResult,
};
use crate::model::issue::{CitizenIssue, IssueUpdate, NewCitizenIssue};
use crate::model::official::{NewOfficial, Official};
use crate::model::statistic::{AreaType, NewStatistic};
use crate::model::vote::{Ballot, NewVoteRecord};
use crate::repo::storage::CivicStorage;
use crate::repo::{StoreError, StoreResult};
use chrono::{DateTime, NaiveDate, Utc};

const STATISTICS_YEAR: i32 = 2024;

/// Loads the fixture dataset into `store`.
///
/// # Errors
/// - Returns `StoreError::InvalidSeed` when a fixture date is invalid or a
///   freshly created issue cannot be found again.
pub fn seed_store(store: &impl CivicStorage) -> StoreResult<()> {
    let officials = seed_officials(store);
    let activities = seed_activities(store)?;
    let issues = seed_issues(store, &activities)?;
    seed_vote_records(store, &officials, &activities)?;
    seed_statistics(store);
    seed_action_plans(store, &issues, &officials, &activities)?;
    Ok(())
}

fn seed_officials(store: &impl CivicStorage) -> Vec<Official> {
    let official = |name: &str,
                    role: &str,
                    district: &str,
                    party: &str,
                    phone: &str,
                    email: &str,
                    committees: &[&str]| NewOfficial {
        name: name.to_string(),
        role: role.to_string(),
        district: district.to_string(),
        party: party.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        photo_url: String::new(),
        committees: committees.iter().map(|c| c.to_string()).collect(),
    };

    [
        official(
            "Sarah Johnson",
            "City Council Member",
            "District 5",
            "Democratic",
            "(555) 123-4567",
            "sarah.johnson@citycouncil.gov",
            &["Transportation Committee", "Public Safety Committee"],
        ),
        official(
            "Michael Chen",
            "State Senator",
            "District 11",
            "Democratic",
            "(555) 234-5678",
            "michael.chen@senate.gov",
            &["Health & Human Services", "Education"],
        ),
        official(
            "Emily Rodriguez",
            "Mayor",
            "",
            "Independent",
            "(555) 345-6789",
            "mayor@city.gov",
            &["Executive Office"],
        ),
    ]
    .into_iter()
    .map(|input| store.create_official(input))
    .collect()
}

fn seed_activities(store: &impl CivicStorage) -> StoreResult<Vec<GovernmentActivity>> {
    let agenda = |items: &[&str]| Some(items.iter().map(|i| i.to_string()).collect::<Vec<_>>());

    let inputs = vec![
        NewGovernmentActivity {
            kind: ActivityType::Bill,
            title: "Safe Streets Initiative - HB 2847".to_string(),
            description: "Comprehensive bill to improve pedestrian safety through enhanced crosswalks, traffic calming measures, and increased penalties for reckless driving in residential areas.".to_string(),
            category: "infrastructure".to_string(),
            date: seed_date(2025, 11, 15)?,
            status: ActivityStatus::InProgress,
            location: "State Capitol".to_string(),
            agenda_items: None,
            vote_result: Some(VoteResult::Pending),
        },
        NewGovernmentActivity {
            kind: ActivityType::Meeting,
            title: "City Council Public Health Committee Meeting".to_string(),
            description: "Discussion on expanding access to healthy food options in underserved neighborhoods, including farmers market subsidies and grocery store incentives.".to_string(),
            category: "health".to_string(),
            date: seed_date(2025, 11, 5)?,
            status: ActivityStatus::Upcoming,
            location: "City Hall, Room 400".to_string(),
            agenda_items: agenda(&[
                "Farmers market expansion proposal",
                "Grocery store tax incentives",
                "Community health metrics review",
                "Public comment period",
            ]),
            vote_result: None,
        },
        NewGovernmentActivity {
            kind: ActivityType::Vote,
            title: "Public Safety Budget Allocation - Resolution 2024-089".to_string(),
            description: "Vote on allocating $2.5M to community policing programs, mental health crisis response teams, and neighborhood watch support.".to_string(),
            category: "safety".to_string(),
            date: seed_date(2025, 10, 20)?,
            status: ActivityStatus::Completed,
            location: "City Council Chambers".to_string(),
            agenda_items: None,
            vote_result: Some(VoteResult::Passed),
        },
        NewGovernmentActivity {
            kind: ActivityType::Budget,
            title: "FY 2026 Education Budget Proposal".to_string(),
            description: "Proposed $450M budget for public schools including teacher salary increases, facility upgrades, and expanded after-school programs.".to_string(),
            category: "education".to_string(),
            date: seed_date(2025, 12, 1)?,
            status: ActivityStatus::Upcoming,
            location: "School Board Office".to_string(),
            agenda_items: agenda(&[
                "Budget overview",
                "Revenue projections",
                "Expenditure breakdown",
                "Public input session",
            ]),
            vote_result: None,
        },
        NewGovernmentActivity {
            kind: ActivityType::Meeting,
            title: "Environmental Committee: Climate Action Plan".to_string(),
            description: "Review and discussion of the city's 2025-2030 climate action plan, including renewable energy targets and emissions reduction strategies.".to_string(),
            category: "environment".to_string(),
            date: seed_date(2025, 11, 12)?,
            status: ActivityStatus::Upcoming,
            location: "Virtual Meeting".to_string(),
            agenda_items: agenda(&[
                "Renewable energy goals",
                "Public transit expansion",
                "Green building requirements",
                "Community feedback",
            ]),
            vote_result: None,
        },
    ];

    Ok(inputs
        .into_iter()
        .map(|input| store.create_government_activity(input))
        .collect())
}

fn seed_issues(
    store: &impl CivicStorage,
    activities: &[GovernmentActivity],
) -> StoreResult<Vec<CitizenIssue>> {
    let issue = |title: &str, description: &str, category: &str, location: &str, zipcode: &str| {
        NewCitizenIssue {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            location: location.to_string(),
            zipcode: zipcode.to_string(),
        }
    };

    // (input, votes, index of the matched activity)
    let fixtures = vec![
        (
            issue(
                "Dangerous intersection at Main St and 5th Ave",
                "This intersection has had 3 accidents in the past month. There are no traffic lights and visibility is poor. We need a stop light or at least stop signs on all corners.",
                "infrastructure",
                "Downtown District",
                "94102",
            ),
            127,
            Some(0),
        ),
        (
            issue(
                "No grocery stores within walking distance",
                "Our neighborhood doesn't have a single grocery store selling fresh produce. The nearest one is 2 miles away, making it difficult for elderly residents and those without cars to access healthy food.",
                "health",
                "Sunset District",
                "94103",
            ),
            89,
            Some(1),
        ),
        (
            issue(
                "Inadequate street lighting in residential area",
                "Our street has very poor lighting at night, creating safety concerns. Several residents have reported feeling unsafe walking home after dark.",
                "safety",
                "Mission District",
                "94110",
            ),
            56,
            None,
        ),
        (
            issue(
                "Overcrowded elementary school classrooms",
                "The local elementary school has class sizes of 35+ students, making it difficult for teachers to provide individual attention. We need more funding for additional classrooms and teachers.",
                "education",
                "Richmond District",
                "94102",
            ),
            72,
            None,
        ),
        (
            issue(
                "Park needs better maintenance and playground equipment",
                "Lincoln Park hasn't been properly maintained. The playground equipment is rusty and potentially dangerous, and the grass areas are overgrown.",
                "environment",
                "Lincoln Park",
                "94103",
            ),
            43,
            None,
        ),
    ];

    let mut issues = Vec::with_capacity(fixtures.len());
    for (input, votes, matched) in fixtures {
        let created = store.create_citizen_issue(input);
        let mut update = match matched {
            Some(index) => IssueUpdate::matched_to(fixture(activities, index)?.id.clone()),
            None => IssueUpdate::default(),
        };
        update.votes = Some(votes);

        let updated = store
            .update_citizen_issue(&created.id, update)
            .ok_or_else(|| {
                StoreError::InvalidSeed(format!("seeded issue {} disappeared", created.id))
            })?;
        issues.push(updated);
    }
    Ok(issues)
}

fn seed_vote_records(
    store: &impl CivicStorage,
    officials: &[Official],
    activities: &[GovernmentActivity],
) -> StoreResult<()> {
    store.create_vote_record(NewVoteRecord {
        official_id: fixture(officials, 0)?.id.clone(),
        activity_id: fixture(activities, 2)?.id.clone(),
        vote: Ballot::Yes,
        issue: "Public Safety Budget Allocation".to_string(),
        date: seed_date(2025, 10, 20)?,
    });
    store.create_vote_record(NewVoteRecord {
        official_id: fixture(officials, 1)?.id.clone(),
        activity_id: fixture(activities, 0)?.id.clone(),
        vote: Ballot::Yes,
        issue: "Safe Streets Initiative".to_string(),
        date: seed_date(2025, 10, 18)?,
    });
    Ok(())
}

fn seed_statistics(store: &impl CivicStorage) {
    // (area, type, crime rate, median income, education score, housing cost, population)
    let rows: [(&str, AreaType, u32, u64, u32, u64, u64); 6] = [
        ("94102", AreaType::Zipcode, 42, 85_000, 78, 950_000, 28_500),
        ("94103", AreaType::Zipcode, 38, 72_000, 72, 850_000, 22_300),
        ("94110", AreaType::Zipcode, 45, 68_000, 70, 780_000, 31_200),
        ("oakland", AreaType::City, 52, 73_000, 68, 720_000, 440_000),
        ("berkeley", AreaType::City, 35, 95_000, 85, 1_200_000, 124_000),
        ("california", AreaType::State, 40, 78_000, 75, 650_000, 39_500_000),
    ];

    for (area, area_type, crime_rate, median_income, education_score, housing_cost, population) in
        rows
    {
        store.create_statistic(NewStatistic {
            area: area.to_string(),
            area_type,
            crime_rate,
            median_income,
            education_score,
            housing_cost,
            population,
            year: STATISTICS_YEAR,
        });
    }
}

fn seed_action_plans(
    store: &impl CivicStorage,
    issues: &[CitizenIssue],
    officials: &[Official],
    activities: &[GovernmentActivity],
) -> StoreResult<()> {
    let plans = vec![
        NewActionPlan {
            issue_id: fixture(issues, 0)?.id.clone(),
            official_id: Some(fixture(officials, 0)?.id.clone()),
            activity_id: Some(fixture(activities, 0)?.id.clone()),
            action_type: ActionType::Call,
            title: "Contact Council Member Johnson about Safe Streets Initiative".to_string(),
            description: "Call Council Member Sarah Johnson to express support for the Safe Streets Initiative (HB 2847). Mention the dangerous intersection at Main St and 5th Ave as a specific example of why this legislation is needed.".to_string(),
            due_date: seed_date(2025, 11, 10)?,
            priority: Priority::High,
        },
        NewActionPlan {
            issue_id: fixture(issues, 1)?.id.clone(),
            official_id: Some(fixture(officials, 1)?.id.clone()),
            activity_id: Some(fixture(activities, 1)?.id.clone()),
            action_type: ActionType::Attend,
            title: "Attend Public Health Committee Meeting".to_string(),
            description: "Attend the City Council Public Health Committee meeting on November 5th to voice concerns about food access in the Sunset District during the public comment period.".to_string(),
            due_date: seed_date(2025, 11, 5)?,
            priority: Priority::High,
        },
        NewActionPlan {
            issue_id: fixture(issues, 1)?.id.clone(),
            official_id: Some(fixture(officials, 2)?.id.clone()),
            activity_id: None,
            action_type: ActionType::Email,
            title: "Email Mayor Rodriguez about Food Desert Issues".to_string(),
            description: "Send an email to Mayor Emily Rodriguez highlighting the lack of grocery stores in underserved neighborhoods and requesting support for grocery store incentives.".to_string(),
            due_date: seed_date(2025, 11, 15)?,
            priority: Priority::Medium,
        },
    ];

    for plan in plans {
        store.create_action_plan(plan);
    }
    Ok(())
}

/// Midnight UTC on the given calendar day.
fn seed_date(year: i32, month: u32, day: u32) -> StoreResult<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| StoreError::InvalidSeed(format!("invalid date {year}-{month}-{day}")))
}

fn fixture<T>(records: &[T], index: usize) -> StoreResult<&T> {
    records
        .get(index)
        .ok_or_else(|| StoreError::InvalidSeed(format!("missing fixture record #{index}")))
}

#[cfg(test)]
mod tests {
    use super::seed_date;
    use crate::repo::StoreError;

    #[test]
    fn seed_date_is_midnight_utc() {
        let date = seed_date(2025, 11, 15).expect("valid date");
        assert_eq!(date.to_rfc3339(), "2025-11-15T00:00:00+00:00");
    }

    #[test]
    fn seed_date_rejects_impossible_day() {
        let err = seed_date(2025, 2, 30).expect_err("february 30th must fail");
        assert!(matches!(err, StoreError::InvalidSeed(message) if message.contains("2025-2-30")));
    }
}
