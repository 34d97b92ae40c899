//! Canned dashboard data for demo mode. Everything here is deterministic
//! (fixed timestamps, fixed ids) so repeated reads return identical
//! snapshots and the UI can be exercised without a backend or account.

use crate::domain::entities::alert::{Alert, AlertKind, AlertSeverity};
use crate::domain::entities::edge::{EdgeItem, EdgeStats};
use crate::domain::entities::overview::{
    CostlyError, DashboardOverview, LoyaltyProgress, StreakRecord, TaxCause,
};
use crate::domain::entities::shadow_boxing::PropFirmSimulation;
use crate::domain::entities::slump::{SlumpPrescription, SlumpStatus};
use crate::domain::values::bql_state::BqlState;
use crate::domain::values::edge_class::EdgeClass;
use chrono::{DateTime, TimeZone, Utc};

fn ts(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, day, hour, min, 0).unwrap()
}

pub fn overview() -> DashboardOverview {
    DashboardOverview {
        bql_state: BqlState::Mediocre,
        bql_score: 61.0,
        simulated_edge_drift: -0.042,
        ruin_probability: 0.18,
        discipline_tax_30d: 810.0,
        discipline_tax_breakdown: vec![
            TaxCause {
                cause: "revenge_trading".into(),
                amount: 390.0,
            },
            TaxCause {
                cause: "oversized_position".into(),
                amount: 240.0,
            },
            TaxCause {
                cause: "fomo_entry".into(),
                amount: 180.0,
            },
        ],
        trades_30d: 142,
        flagged_trades_30d: 23,
        edges: edge_portfolio(),
        recent_costly_errors: vec![
            CostlyError {
                occurred_at: ts(14, 15, 42),
                symbol: "NQ".into(),
                label: "Re-entered 90 seconds after a stop-out".into(),
                cost: 312.0,
            },
            CostlyError {
                occurred_at: ts(12, 10, 5),
                symbol: "TSLA".into(),
                label: "Position 3.1x normal size into earnings".into(),
                cost: 240.0,
            },
            CostlyError {
                occurred_at: ts(7, 19, 58),
                symbol: "ES".into(),
                label: "Chased a move after the setup window closed".into(),
                cost: 180.0,
            },
        ],
        loyalty: LoyaltyProgress {
            tier: "Bronze".into(),
            points: 310,
            next_tier_at: 500,
        },
        streak: StreakRecord {
            current_clean_days: 3,
            best_clean_days: 11,
        },
    }
}

pub fn edge_portfolio() -> Vec<EdgeItem> {
    vec![
        EdgeItem {
            name: "Opening range breakout".into(),
            classification: EdgeClass::Prime,
            win_rate: 0.62,
            stats: Some(EdgeStats {
                pnl: 4_820.0,
                trades: 58,
                avg_r: 1.8,
                expectancy: 0.74,
                sharpe: 1.9,
                max_drawdown: 920.0,
                best_month: "2025-09".into(),
            }),
        },
        EdgeItem {
            name: "VWAP reversion fade".into(),
            classification: EdgeClass::Stable,
            win_rate: 0.54,
            stats: Some(EdgeStats {
                pnl: 1_460.0,
                trades: 41,
                avg_r: 1.2,
                expectancy: 0.21,
                sharpe: 0.9,
                max_drawdown: 640.0,
                best_month: "2025-10".into(),
            }),
        },
        EdgeItem {
            name: "News momentum chase".into(),
            classification: EdgeClass::Decayed,
            win_rate: 0.38,
            stats: None,
        },
    ]
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "demo-alert-1".into(),
            created_at: ts(15, 9, 31),
            kind: AlertKind::CrucialMoment,
            severity: AlertSeverity::High,
            title: "Two stop-outs in a row on NQ".into(),
            detail: "Your historical win rate drops to 29% on the next trade after \
                     back-to-back stops. Consider stepping away for 20 minutes."
                .into(),
            acknowledged: false,
        },
        Alert {
            id: "demo-alert-2".into(),
            created_at: ts(14, 16, 2),
            kind: AlertKind::SlumpWarning,
            severity: AlertSeverity::Medium,
            title: "Expectancy trending down over 10 sessions".into(),
            detail: "Rolling expectancy fell from 0.6R to 0.1R. A slump prescription \
                     is active."
                .into(),
            acknowledged: false,
        },
        Alert {
            id: "demo-alert-3".into(),
            created_at: ts(11, 8, 45),
            kind: AlertKind::MarginOfSafety,
            severity: AlertSeverity::Low,
            title: "Account buffer back above threshold".into(),
            detail: "Drawdown buffer recovered to 12% of account equity.".into(),
            acknowledged: true,
        },
        Alert {
            id: "demo-alert-4".into(),
            created_at: ts(10, 7, 0),
            kind: AlertKind::Info,
            severity: AlertSeverity::Info,
            title: "Weekly behavioral report ready".into(),
            detail: "Your week-over-week discipline summary has been generated.".into(),
            acknowledged: true,
        },
    ]
}

pub fn slump_status() -> SlumpStatus {
    SlumpStatus {
        in_slump: true,
        prescription: Some(SlumpPrescription {
            max_trades_per_session: 2,
            banned_symbols: vec!["NQ".into(), "TSLA".into()],
            position_size_cap_pct: 50.0,
            cooldown_hours: 48,
            rules: vec![
                "Only A+ setups from your PRIME edges".into(),
                "No entries in the first 15 minutes of the session".into(),
                "Hard stop after two losses".into(),
            ],
            recovery_criteria: vec![
                "Three consecutive sessions with zero flagged trades".into(),
                "Rolling expectancy back above 0.4R".into(),
            ],
        }),
    }
}

pub fn shadow_boxing() -> Vec<PropFirmSimulation> {
    vec![
        PropFirmSimulation {
            firm: "Apex 50k".into(),
            account_size: 50_000.0,
            profit_target_pct: 6.0,
            max_drawdown_pct: 5.0,
            actual_return_pct: 7.4,
            actual_drawdown_pct: 3.8,
            passed: true,
            pass_probability: 0.71,
            failure_reason: None,
            success_note: Some(
                "Your last 60 days would have cleared this evaluation with room to spare."
                    .into(),
            ),
        },
        PropFirmSimulation {
            firm: "FundedNext 100k".into(),
            account_size: 100_000.0,
            profit_target_pct: 8.0,
            max_drawdown_pct: 4.0,
            actual_return_pct: 9.1,
            actual_drawdown_pct: 6.2,
            passed: false,
            pass_probability: 0.34,
            failure_reason: Some(
                "Max drawdown breached on day 9 — the oversized TSLA position alone \
                 consumed 2.4% of the account."
                    .into(),
            ),
            success_note: None,
        },
        PropFirmSimulation {
            firm: "Topstep 150k".into(),
            account_size: 150_000.0,
            profit_target_pct: 6.0,
            max_drawdown_pct: 3.0,
            actual_return_pct: 5.2,
            actual_drawdown_pct: 3.1,
            passed: false,
            pass_probability: 0.22,
            failure_reason: Some("Trailing drawdown clipped during the Nov 14 session.".into()),
            success_note: None,
        },
    ]
}
