use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tiltcheck", about = "TiltCheck trading-psychology dashboard client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with email and password
    Login { email: String, password: String },
    /// Create an account
    Register { email: String, password: String },
    /// Enter demo mode (canned dashboard data, no backend needed)
    Demo,
    /// Clear the stored session
    Logout,
    /// Show the current session state
    Status,
    /// Dashboard overview metrics
    Overview,
    /// Behavioral alerts
    Alerts,
    /// Edge portfolio with classifications
    Edges,
    /// Slump status and prescription
    Slump,
    /// Prop-firm challenge simulations
    ShadowBoxing,
    /// Verify an activation order code
    Activate {
        /// Order code from the purchase confirmation
        order_code: String,
    },
    /// Preview trade rows from a file without submitting
    Preview { file: PathBuf },
    /// Upload a trade CSV
    Upload { file: PathBuf },
    /// Submit previewed trade rows from a file
    Submit { file: PathBuf },
    /// Send a contact message
    Contact {
        /// JSON with name, email, message
        json: String,
    },
    /// Create a checkout session for a plan
    Checkout { plan: String },
    /// Get, or set, the theme preference
    Theme { value: Option<String> },
    /// Mark onboarding as complete
    Onboarded,
}
