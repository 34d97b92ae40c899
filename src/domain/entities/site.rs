use serde::{Deserialize, Serialize};

/// Outgoing contact-form message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub received: bool,
}

/// Checkout session pointing at an external payment provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub payment_url: String,
}
