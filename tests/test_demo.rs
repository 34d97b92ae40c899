//! Demo mode behavior: deterministic fixtures, no network, harmless writes.
//! Every test runs against an unroutable backend so any live dispatch
//! would fail loudly.

mod common;

use tiltcheck::domain::values::activation_status::ActivationStatus;
use tiltcheck::domain::values::bql_state::BqlState;
use tiltcheck::domain::values::edge_class::EdgeClass;
use tiltcheck::TiltCheck;

fn demo() -> TiltCheck {
    let tc = common::setup();
    tc.enter_demo().unwrap();
    tc
}

#[tokio::test]
async fn overview_fixture_shows_the_expected_snapshot() {
    let tc = demo();
    let overview = tc.overview().await.unwrap();

    assert_eq!(overview.bql_state, BqlState::Mediocre);
    assert_eq!(overview.discipline_tax_30d, 810.0);

    let breakdown_total: f64 = overview
        .discipline_tax_breakdown
        .iter()
        .map(|c| c.amount)
        .sum();
    assert_eq!(breakdown_total, overview.discipline_tax_30d);

    assert!(overview.flagged_trades_30d < overview.trades_30d);
    assert!(!overview.recent_costly_errors.is_empty());
}

#[tokio::test]
async fn reads_are_deterministic_across_calls() {
    let tc = demo();
    assert_eq!(tc.overview().await.unwrap(), tc.overview().await.unwrap());
    assert_eq!(tc.alerts().await.unwrap(), tc.alerts().await.unwrap());
    assert_eq!(
        tc.shadow_boxing().await.unwrap(),
        tc.shadow_boxing().await.unwrap()
    );
}

#[tokio::test]
async fn edge_portfolio_covers_every_classification() {
    let tc = demo();
    let edges = tc.edge_portfolio().await.unwrap();

    for class in [EdgeClass::Prime, EdgeClass::Stable, EdgeClass::Decayed] {
        assert!(
            edges.iter().any(|e| e.classification == class),
            "missing {class} edge"
        );
    }
    let decayed = edges
        .iter()
        .find(|e| e.classification == EdgeClass::Decayed)
        .unwrap();
    assert!(decayed.win_rate < 0.5);
}

#[tokio::test]
async fn slump_fixture_carries_a_full_prescription() {
    let tc = demo();
    let slump = tc.slump_prescription().await.unwrap();

    assert!(slump.in_slump);
    let rx = slump.prescription.unwrap();
    assert!(rx.max_trades_per_session > 0);
    assert!(!rx.banned_symbols.is_empty());
    assert!(!rx.rules.is_empty());
    assert!(!rx.recovery_criteria.is_empty());
}

#[tokio::test]
async fn writes_never_mutate_the_fixtures() {
    let tc = demo();
    let before = tc.overview().await.unwrap();

    tc.upload_csv("trades.csv", b"NQ,long,2\nES,short,1\n".to_vec())
        .await
        .unwrap();
    tc.submit_trades("NQ,long,2\n").await.unwrap();

    assert_eq!(tc.overview().await.unwrap(), before);
}

#[tokio::test]
async fn preview_counts_rows_symbols_and_issues() {
    let tc = demo();
    let pasted = "symbol,side,qty\nNQ,long,2\nnq,short,1\nbadrow\nTSLA,long,5\n";
    let preview = tc.preview_trades(pasted).await.unwrap();

    assert_eq!(preview.rows, 4);
    assert_eq!(preview.symbols, vec!["NQ".to_string(), "TSLA".to_string()]);
    assert_eq!(preview.issues.len(), 1);
}

#[tokio::test]
async fn upload_skips_malformed_rows() {
    let tc = demo();
    let result = tc
        .upload_csv("trades.csv", b"NQ,long,2\nbadrow\nES,short,1\n".to_vec())
        .await
        .unwrap();

    assert_eq!(result.rows_imported, 2);
    assert_eq!(result.skipped, 1);
}

#[tokio::test]
async fn submit_accepts_every_data_row() {
    let tc = demo();
    let result = tc.submit_trades("NQ,long,2\nES,short,1\n").await.unwrap();
    assert_eq!(result.accepted, 2);
}

#[tokio::test]
async fn activation_always_verifies_in_demo() {
    let tc = demo();
    let outcome = tc.verify_activation("any-order-code").await.unwrap();
    assert_eq!(outcome.status, ActivationStatus::Ready);
}

#[tokio::test]
async fn contact_and_checkout_answer_locally() {
    let tc = demo();

    let receipt = tc
        .send_contact(&tiltcheck::domain::entities::site::ContactMessage {
            name: "Demo Trader".into(),
            email: "demo@example.com".into(),
            message: "hello".into(),
        })
        .await
        .unwrap();
    assert!(receipt.received);

    let session = tc.create_checkout("pro").await.unwrap();
    assert!(session.payment_url.starts_with("https://"));
}
