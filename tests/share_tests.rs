//! Integration tests for share-token round trips.

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use surestake::domain::settle;
use surestake::error::ShareError;
use surestake::share::{share_url, ShareSnapshot};
use surestake::testkit::outcome::{anchored, back, freebet, lay};

fn snapshot() -> ShareSnapshot {
    let outcomes = vec![
        back(dec!(2.10)),
        lay(dec!(2.00), dec!(4.5)),
        freebet(dec!(3.50)),
        anchored(dec!(1.90), dec!(80)),
    ];
    let result = settle(&outcomes);
    let captured = Utc.with_ymd_and_hms(2024, 11, 2, 18, 45, 0).unwrap();

    ShareSnapshot::capture(&outcomes, &result, captured)
}

#[test]
fn token_round_trips_the_whole_position() {
    let original = snapshot();
    let token = original.encode().unwrap();
    let decoded = ShareSnapshot::decode(&token).unwrap();

    assert_eq!(decoded, original);
    assert_eq!(decoded.outcome_count, 4);

    // The rebuilt outcomes settle to the same result that was shared.
    let replayed = settle(&decoded.rebuild_outcomes());
    assert_eq!(replayed.profit, decoded.results.profit);
    assert_eq!(replayed.total_investment, decoded.results.total_investment);
}

#[test]
fn token_is_url_safe() {
    let token = snapshot().encode().unwrap();

    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '%' | '-' | '_' | '.' | '~')));

    let url = share_url("https://surestake.example", &token);
    assert!(url.starts_with("https://surestake.example?shared="));
}

#[test]
fn malformed_tokens_fail_with_typed_errors() {
    assert!(matches!(
        ShareSnapshot::decode("@@@").unwrap_err(),
        ShareError::Decode(_)
    ));

    let not_json = urlencoding::encode(&base64_of("hello")).into_owned();
    assert!(matches!(
        ShareSnapshot::decode(&not_json).unwrap_err(),
        ShareError::Json(_)
    ));
}

fn base64_of(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    STANDARD.encode(text.as_bytes())
}
