use crate::error::MigrationError;
use crate::types::version::MigrationVersion;
use mongodb::bson::{self, Bson};
use rstest::*;

#[rstest]
#[case("1.0", 1, 0)]
#[case("0.1", 0, 1)]
#[case("10.25", 10, 25)]
fn version_parses_valid_representations(#[case] input: &str, #[case] major: i64, #[case] minor: i64) {
    let version: MigrationVersion = input.parse().unwrap();
    assert_eq!(version, MigrationVersion::new(major, minor));
}

#[rstest]
#[case("")]
#[case("1")]
#[case("1.2.3")]
#[case("a.b")]
#[case("1.x")]
#[case("-1.0")]
#[case("1.-2")]
#[case("+1.0")]
#[case("1.+2")]
#[case("1.")]
#[case(".1")]
fn version_rejects_malformed_representations(#[case] input: &str) {
    let result = input.parse::<MigrationVersion>();
    assert!(matches!(result, Err(MigrationError::InvalidVersionFormat(_))), "accepted {:?}", input);
}

#[rstest]
fn version_display_round_trips() {
    let version = MigrationVersion::new(2, 7);
    assert_eq!(version.to_string(), "2.7");
    assert_eq!(version.to_string().parse::<MigrationVersion>().unwrap(), version);
}

#[rstest]
fn version_orders_lexicographically_over_major_then_minor() {
    let mut versions = vec![
        MigrationVersion::new(2, 0),
        MigrationVersion::new(1, 9),
        MigrationVersion::new(1, 0),
        MigrationVersion::new(0, 5),
        MigrationVersion::new(1, 10),
    ];
    versions.sort();

    assert_eq!(
        versions,
        vec![
            MigrationVersion::new(0, 5),
            MigrationVersion::new(1, 0),
            MigrationVersion::new(1, 9),
            MigrationVersion::new(1, 10),
            MigrationVersion::new(2, 0),
        ]
    );
    assert!(MigrationVersion::MIN < versions[0]);
}

/// The stored form is a structured sub-document, so MongoDB sorting on
/// `version.major` / `version.minor` agrees with the in-memory ordering.
#[rstest]
fn version_serializes_to_structured_bson_document() {
    let version = MigrationVersion::new(3, 14);
    let bson = bson::to_bson(&version).unwrap();

    let Bson::Document(document) = &bson else {
        panic!("expected a document, got {:?}", bson);
    };
    assert_eq!(document.get_i64("major").unwrap(), 3);
    assert_eq!(document.get_i64("minor").unwrap(), 14);

    let round_tripped: MigrationVersion = bson::from_bson(bson).unwrap();
    assert_eq!(round_tripped, version);
}
