use civic_core::{CivicStorage, MemStorage, NewCitizenIssue};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn issue_input(n: usize) -> NewCitizenIssue {
    NewCitizenIssue {
        title: format!("Issue {n}"),
        description: String::new(),
        category: "safety".to_string(),
        location: "Downtown".to_string(),
        zipcode: "94102".to_string(),
    }
}

#[test]
fn parallel_creates_never_collide_or_lose_records() {
    let store = MemStorage::seeded().unwrap();
    let before = store.list_citizen_issues().len();

    let created = thread::scope(|scope| {
        let handles = (0..8)
            .map(|worker| {
                let store = &store;
                scope.spawn(move || {
                    (0..25)
                        .map(|i| store.create_citizen_issue(issue_input(worker * 100 + i)).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    let unique = created.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), 200);
    assert_eq!(store.list_citizen_issues().len(), before + 200);
}

#[test]
fn parallel_upvotes_are_not_lost() {
    let store = Arc::new(MemStorage::empty());
    let issue = store.create_citizen_issue(issue_input(0));

    let handles = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let id = issue.id.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    store.upvote_citizen_issue(&id).unwrap();
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.get_citizen_issue(&issue.id).unwrap().votes, 400);
}
