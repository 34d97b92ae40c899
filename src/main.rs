use clap::Parser;
use tiltcheck::cli::commands::{Cli, Commands};
use tiltcheck::domain::entities::site::ContactMessage;
use tiltcheck::TiltCheck;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let db_path = std::env::var("TILTCHECK_DB").unwrap_or_else(|_| "./tiltcheck.db".into());

    let tc = match TiltCheck::new(&db_path) {
        Ok(tc) => tc,
        Err(e) => {
            eprintln!("Error initializing TiltCheck: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(tc, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(tc: TiltCheck, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Login { email, password } => {
            let result = tc.login(&email, &password).await?;
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        }
        Commands::Register { email, password } => {
            let result = tc.register(&email, &password).await?;
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        }
        Commands::Demo => {
            tc.enter_demo()?;
            println!("Demo mode active. Dashboard commands now return fixture data.");
        }
        Commands::Logout => {
            tc.logout()?;
            println!("Signed out.");
        }
        Commands::Status => {
            let state = tc.session_state();
            println!("{}", serde_json::to_string_pretty(&state).unwrap());
        }
        Commands::Overview => {
            let overview = tc.overview().await?;
            println!("{}", serde_json::to_string_pretty(&overview).unwrap());
        }
        Commands::Alerts => {
            let alerts = tc.alerts().await?;
            println!("{}", serde_json::to_string_pretty(&alerts).unwrap());
        }
        Commands::Edges => {
            let edges = tc.edge_portfolio().await?;
            println!("{}", serde_json::to_string_pretty(&edges).unwrap());
        }
        Commands::Slump => {
            let slump = tc.slump_prescription().await?;
            println!("{}", serde_json::to_string_pretty(&slump).unwrap());
        }
        Commands::ShadowBoxing => {
            let sims = tc.shadow_boxing().await?;
            println!("{}", serde_json::to_string_pretty(&sims).unwrap());
        }
        Commands::Activate { order_code } => {
            let outcome = tc.verify_activation(&order_code).await?;
            println!("{}", serde_json::to_string_pretty(&outcome).unwrap());
        }
        Commands::Preview { file } => {
            let pasted = std::fs::read_to_string(&file)?;
            let preview = tc.preview_trades(&pasted).await?;
            println!("{}", serde_json::to_string_pretty(&preview).unwrap());
        }
        Commands::Upload { file } => {
            let contents = std::fs::read(&file)?;
            let filename = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("trades.csv")
                .to_string();
            let result = tc.upload_csv(&filename, contents).await?;
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        }
        Commands::Submit { file } => {
            let pasted = std::fs::read_to_string(&file)?;
            let result = tc.submit_trades(&pasted).await?;
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        }
        Commands::Contact { json } => {
            let message: ContactMessage = serde_json::from_str(&json)?;
            let receipt = tc.send_contact(&message).await?;
            println!("{}", serde_json::to_string_pretty(&receipt).unwrap());
        }
        Commands::Checkout { plan } => {
            let session = tc.create_checkout(&plan).await?;
            println!("{}", serde_json::to_string_pretty(&session).unwrap());
        }
        Commands::Theme { value } => match value {
            Some(theme) => {
                tc.set_theme(&theme)?;
                println!("Theme set to {theme}");
            }
            None => match tc.theme()? {
                Some(theme) => println!("{theme}"),
                None => println!("(no theme set)"),
            },
        },
        Commands::Onboarded => {
            tc.mark_onboarded()?;
            println!("Onboarding marked complete.");
        }
    }
    Ok(())
}
