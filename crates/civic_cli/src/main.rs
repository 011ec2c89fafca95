//! Civic store startup entry point.
//!
//! # Responsibility
//! - Load configuration and start logging before anything else.
//! - Construct the one store instance for this process and hand it out.
//! - Print a deterministic summary so local runs can be sanity-checked.

use civic_core::{core_version, init_logging, CivicStorage, CoreConfig, MemStorage, StoreCounts};
use log::{error, info};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("civic: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(&config.logging) {
        eprintln!("civic: {err}");
        return ExitCode::FAILURE;
    }

    // Seed failure is fatal: nothing is served from a half-built store.
    let store = if config.seed {
        match MemStorage::seeded() {
            Ok(store) => store,
            Err(err) => {
                error!("event=app_start module=cli status=error error={err}");
                eprintln!("civic: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        MemStorage::empty()
    };
    let store = Arc::new(store);
    info!(
        "event=app_start module=cli status=ok version={} seed={}",
        core_version(),
        config.seed
    );

    print_summary(store.as_ref());
    ExitCode::SUCCESS
}

fn print_summary(store: &MemStorage) {
    let StoreCounts {
        users,
        government_activities,
        citizen_issues,
        officials,
        vote_records,
        statistics,
        action_plans,
    } = store.counts();

    println!("civic_core version={}", core_version());
    println!("users={users}");
    println!("government_activities={government_activities}");
    println!("citizen_issues={citizen_issues}");
    println!("officials={officials}");
    println!("vote_records={vote_records}");
    println!("statistics={statistics}");
    println!("action_plans={action_plans}");

    for stat in store.list_statistics() {
        println!(
            "statistic area={} population={} year={}",
            stat.area, stat.population, stat.year
        );
    }
}
