use crate::domain::entities::alert::Alert;
use crate::domain::entities::auth::ActivationOutcome;
use crate::domain::entities::edge::EdgeItem;
use crate::domain::entities::overview::DashboardOverview;
use crate::domain::entities::shadow_boxing::PropFirmSimulation;
use crate::domain::entities::site::{CheckoutSession, ContactMessage, ContactReceipt};
use crate::domain::entities::slump::SlumpStatus;
use crate::domain::entities::trades::{SubmitResult, TradePreview, UploadResult};
use crate::domain::error::ApiError;
use crate::domain::ports::dashboard_source::DashboardSource;
use crate::domain::values::activation_status::ActivationStatus;
use crate::infrastructure::demo::fixtures;
use async_trait::async_trait;
use std::time::Duration;

/// Fixture-backed source for demo mode. Reads return canned data after a
/// short artificial delay so loading states render; writes never touch the
/// network and never mutate the fixtures, they compute a local
/// approximation shaped like the live result.
pub struct DemoSource {
    latency: Duration,
}

impl DemoSource {
    pub fn new() -> Self {
        Self {
            // Within the 200-1000ms band that mimics real network latency.
            latency: Duration::from_millis(400),
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-empty lines with a header row (symbol/date/ticker column names)
/// stripped when present.
fn data_rows(text: &str) -> Vec<&str> {
    let mut rows: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if let Some(first) = rows.first() {
        let lowered = first.to_lowercase();
        if lowered.contains("symbol") || lowered.contains("ticker") || lowered.contains("date") {
            rows.remove(0);
        }
    }
    rows
}

fn preview_rows(text: &str) -> TradePreview {
    let rows = data_rows(text);
    let mut symbols: Vec<String> = Vec::new();
    let mut issues: Vec<String> = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let fields: Vec<&str> = row
            .split(|c: char| c == ',' || c == '\t' || c == ';')
            .map(str::trim)
            .collect();
        if fields.len() < 2 {
            issues.push(format!("row {} has too few columns", i + 1));
            continue;
        }
        let symbol = fields[0].to_uppercase();
        let plausible = !symbol.is_empty()
            && symbol.len() <= 6
            && symbol.chars().all(|c| c.is_ascii_alphabetic());
        if plausible && !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }

    TradePreview {
        rows: rows.len(),
        symbols,
        issues,
    }
}

#[async_trait]
impl DashboardSource for DemoSource {
    async fn overview(&self) -> Result<DashboardOverview, ApiError> {
        self.simulate_latency().await;
        Ok(fixtures::overview())
    }

    async fn alerts(&self) -> Result<Vec<Alert>, ApiError> {
        self.simulate_latency().await;
        Ok(fixtures::alerts())
    }

    async fn edge_portfolio(&self) -> Result<Vec<EdgeItem>, ApiError> {
        self.simulate_latency().await;
        Ok(fixtures::edge_portfolio())
    }

    async fn slump_prescription(&self) -> Result<SlumpStatus, ApiError> {
        self.simulate_latency().await;
        Ok(fixtures::slump_status())
    }

    async fn shadow_boxing(&self) -> Result<Vec<PropFirmSimulation>, ApiError> {
        self.simulate_latency().await;
        Ok(fixtures::shadow_boxing())
    }

    async fn verify_activation(&self, _order_code: &str) -> Result<ActivationOutcome, ApiError> {
        self.simulate_latency().await;
        Ok(ActivationOutcome {
            status: ActivationStatus::Ready,
            message: None,
        })
    }

    async fn preview_trades(&self, pasted: &str) -> Result<TradePreview, ApiError> {
        self.simulate_latency().await;
        Ok(preview_rows(pasted))
    }

    async fn upload_csv(&self, _filename: &str, contents: Vec<u8>) -> Result<UploadResult, ApiError> {
        self.simulate_latency().await;
        let text = String::from_utf8_lossy(&contents);
        let preview = preview_rows(&text);
        Ok(UploadResult {
            rows_imported: preview.rows - preview.issues.len(),
            skipped: preview.issues.len(),
        })
    }

    async fn submit_trades(&self, pasted: &str) -> Result<SubmitResult, ApiError> {
        self.simulate_latency().await;
        Ok(SubmitResult {
            accepted: data_rows(pasted).len(),
        })
    }

    async fn send_contact(&self, _message: &ContactMessage) -> Result<ContactReceipt, ApiError> {
        self.simulate_latency().await;
        Ok(ContactReceipt { received: true })
    }

    async fn create_checkout(&self, _plan: &str) -> Result<CheckoutSession, ApiError> {
        self.simulate_latency().await;
        Ok(CheckoutSession {
            payment_url: "https://checkout.tiltcheck.app/demo".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_is_skipped() {
        let text = "symbol,side,qty\nNQ,long,2\nES,short,1\n";
        let rows = data_rows(text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "NQ,long,2");
    }

    #[test]
    fn preview_collects_unique_symbols_and_issues() {
        let text = "symbol,side\nNQ,long\nNQ,short\nbadrow\nTSLA,long\n";
        let preview = preview_rows(text);
        assert_eq!(preview.rows, 4);
        assert_eq!(preview.symbols, vec!["NQ".to_string(), "TSLA".to_string()]);
        assert_eq!(preview.issues.len(), 1);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let text = "\nNQ,long,2\n\n\nES,short,1\n";
        assert_eq!(data_rows(text).len(), 2);
    }
}
