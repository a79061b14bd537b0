use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use weekly_meals::{AppState, config::Config};
use weekly_meals_mealplan::MealPlanRequest;

/// weekly-meals - Weekly meal plans with a priced shopping list
#[derive(Parser)]
#[command(name = "weekly-meals")]
#[command(about = "Weekly meal plans with a priced shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print a meal plan and its shopping list as JSON
    Plan {
        #[arg(long, default_value_t = 1)]
        nights: u32,

        #[arg(long, default_value = "Any")]
        style: String,

        #[arg(long, default_value = "Any")]
        health: String,

        #[arg(long)]
        adults: Option<u32>,

        #[arg(long)]
        kids: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    weekly_meals::observability::init_observability(
        "weekly-meals",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Plan {
            nights,
            style,
            health,
            adults,
            kids,
        } => {
            let request = MealPlanRequest {
                nights,
                style: style.into(),
                health: health.into(),
                adults,
                kids,
            };
            plan_command(config, request).await
        }
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting weekly-meals server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let state = AppState::from_config(&config)?;
    tracing::info!(source = ?config.planner.source, "Recipe source ready");

    let app = weekly_meals::router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C signal"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await
        }
    }
}

#[tracing::instrument(skip(config))]
async fn plan_command(config: Config, request: MealPlanRequest) -> Result<()> {
    let state = AppState::from_config(&config)?;

    let plan = state.planner.plan(&request).await.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "meal plan generation failed");
        Vec::new()
    });
    let shopping_list = state.shopping.build(&plan);

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "plan": plan,
            "shoppingList": shopping_list,
        }))?
    );

    Ok(())
}
