use crate::error::MigrationError;
use crate::migration::MigrationLocator;
use crate::tests::utils::build_migration;
use crate::types::version::MigrationVersion;
use rstest::*;
use std::sync::{Arc, Mutex};

fn versions(locator: &MigrationLocator) -> Vec<MigrationVersion> {
    locator.all_migrations().iter().map(|migration| migration.version()).collect()
}

#[rstest]
fn locator_orders_registered_migrations_ascending() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let locator = MigrationLocator::new(vec![
        build_migration(2, 0, "backfill", &log),
        build_migration(1, 0, "init", &log),
        build_migration(1, 1, "add-index", &log),
    ])
    .unwrap();

    assert_eq!(
        versions(&locator),
        vec![MigrationVersion::new(1, 0), MigrationVersion::new(1, 1), MigrationVersion::new(2, 0)]
    );
}

#[rstest]
fn locator_rejects_duplicate_versions() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let result = MigrationLocator::new(vec![
        build_migration(1, 0, "init", &log),
        build_migration(1, 1, "add-index", &log),
        build_migration(1, 1, "add-index-again", &log),
    ]);

    assert!(matches!(result, Err(MigrationError::DuplicateVersion(v)) if v == MigrationVersion::new(1, 1)));
}

#[rstest]
fn locator_rejects_the_reserved_baseline_version() {
    let log = Arc::new(Mutex::new(Vec::new()));
    // 0.0 would sort below any last-applied version and never run
    let result = MigrationLocator::new(vec![
        build_migration(1, 0, "init", &log),
        build_migration(0, 0, "noop", &log),
    ]);

    assert!(matches!(result, Err(MigrationError::ReservedVersion(v)) if v == MigrationVersion::MIN));
}

#[rstest]
fn locator_latest_version_is_the_maximum() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let locator = MigrationLocator::new(vec![
        build_migration(1, 0, "init", &log),
        build_migration(2, 0, "backfill", &log),
        build_migration(1, 1, "add-index", &log),
    ])
    .unwrap();

    assert_eq!(locator.latest_version().unwrap(), MigrationVersion::new(2, 0));
}

#[rstest]
fn locator_latest_version_fails_when_empty() {
    let locator = MigrationLocator::new(Vec::new()).unwrap();
    assert!(matches!(locator.latest_version(), Err(MigrationError::NoMigrationsFound)));
}

#[rstest]
#[case(MigrationVersion::MIN, vec![MigrationVersion::new(1, 0), MigrationVersion::new(1, 1), MigrationVersion::new(2, 0)])]
#[case(MigrationVersion::new(1, 0), vec![MigrationVersion::new(1, 1), MigrationVersion::new(2, 0)])]
#[case(MigrationVersion::new(1, 5), vec![MigrationVersion::new(2, 0)])]
#[case(MigrationVersion::new(2, 0), vec![])]
fn locator_migrations_after_is_strictly_greater_and_ascending(
    #[case] after: MigrationVersion,
    #[case] expected: Vec<MigrationVersion>,
) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let locator = MigrationLocator::new(vec![
        build_migration(1, 1, "add-index", &log),
        build_migration(2, 0, "backfill", &log),
        build_migration(1, 0, "init", &log),
    ])
    .unwrap();

    let pending: Vec<MigrationVersion> =
        locator.migrations_after(after).map(|migration| migration.version()).collect();
    assert_eq!(pending, expected);
}
