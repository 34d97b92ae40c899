use crate::domain::entities::alert::Alert;
use crate::domain::entities::auth::ActivationOutcome;
use crate::domain::entities::edge::EdgeItem;
use crate::domain::entities::overview::DashboardOverview;
use crate::domain::entities::shadow_boxing::PropFirmSimulation;
use crate::domain::entities::site::{CheckoutSession, ContactMessage, ContactReceipt};
use crate::domain::entities::slump::SlumpStatus;
use crate::domain::entities::trades::{SubmitResult, TradePreview, UploadResult};
use crate::domain::error::ApiError;
use async_trait::async_trait;

/// Every operation the dashboard UI needs, behind one port so the live
/// HTTP gateway and the demo fixture source are interchangeable. Call
/// sites never branch on demo mode; the facade picks the implementation
/// from the session state.
///
/// Reads are snapshots fetched per page view. Writes (upload, submit,
/// contact, checkout) are dispatched exactly once, never retried.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn overview(&self) -> Result<DashboardOverview, ApiError>;
    async fn alerts(&self) -> Result<Vec<Alert>, ApiError>;
    async fn edge_portfolio(&self) -> Result<Vec<EdgeItem>, ApiError>;
    async fn slump_prescription(&self) -> Result<SlumpStatus, ApiError>;
    async fn shadow_boxing(&self) -> Result<Vec<PropFirmSimulation>, ApiError>;

    async fn verify_activation(&self, order_code: &str) -> Result<ActivationOutcome, ApiError>;
    async fn preview_trades(&self, pasted: &str) -> Result<TradePreview, ApiError>;
    async fn upload_csv(&self, filename: &str, contents: Vec<u8>) -> Result<UploadResult, ApiError>;
    async fn submit_trades(&self, pasted: &str) -> Result<SubmitResult, ApiError>;
    async fn send_contact(&self, message: &ContactMessage) -> Result<ContactReceipt, ApiError>;
    async fn create_checkout(&self, plan: &str) -> Result<CheckoutSession, ApiError>;
}
