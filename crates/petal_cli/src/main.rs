use clap::Parser;
use petal_clients::roboflow::{DEFAULT_PROJECT, DEFAULT_VERSION};
use petal_clients::{GeminiModel, RoboflowClassifier};
use petal_core::{Classifier, TextModel};
use petal_web::AppState;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Flower identification and Q&A web service", long_about = None)]
struct Cli {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 3000)]
    port: u16,
    /// Roboflow project id of the classification model
    #[arg(long, default_value = DEFAULT_PROJECT)]
    roboflow_project: String,
    /// Roboflow model version within the project
    #[arg(long, default_value_t = DEFAULT_VERSION)]
    roboflow_version: u32,
    /// Overrides the ROBOFLOW_API_KEY environment variable
    #[arg(long)]
    roboflow_api_key: Option<String>,
    /// Overrides the GEMINI_API_KEY environment variable
    #[arg(long)]
    gemini_api_key: Option<String>,
}

fn key_from_flag_or_env(flag: Option<String>, var: &str) -> Option<String> {
    flag.or_else(|| std::env::var(var).ok())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // A missing key is fatal: the whole session depends on both clients.
    let classifier = RoboflowClassifier::new(
        key_from_flag_or_env(cli.roboflow_api_key, "ROBOFLOW_API_KEY"),
        &cli.roboflow_project,
        cli.roboflow_version,
    )?;
    info!(
        "🔍 Classifier ready (using {}, project {}/{})",
        classifier.name(),
        cli.roboflow_project,
        cli.roboflow_version
    );

    let text_model = GeminiModel::new(key_from_flag_or_env(cli.gemini_api_key, "GEMINI_API_KEY"))?;
    info!("🧠 Text model ready (using {})", text_model.name());

    let state = AppState {
        classifier: Arc::new(classifier),
        text_model: Arc::new(text_model),
    };
    let app = petal_web::create_app(state).await;

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!("🌸 Serving on http://{}:{}", cli.host, cli.port);
    axum::serve(listener, app).await?;

    Ok(())
}
