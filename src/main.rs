use dotenv::dotenv;
use log::debug;
use numeracy_quiz::config::AppConfig;
use numeracy_quiz::history::{HistoryStore, JsonFileHistory};
use numeracy_quiz::quiz::{QuestionGenerator, ScenarioCatalog};
use numeracy_quiz::{QuizError, Result};

#[tokio::main]
async fn main() {
    // A missing .env is fine, the variables may come from the environment.
    dotenv().ok();
    pretty_env_logger::init();

    if let Err(err) = run().await {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    debug!("Configuration: {:?}", config);

    let command = std::env::args().nth(1).unwrap_or_else(|| "quiz".to_string());
    match command.as_str() {
        "quiz" => print_quiz(&config),
        "history" => print_history(&config).await,
        other => Err(QuizError::UnknownCommand(other.to_string())),
    }
}

fn print_quiz(config: &AppConfig) -> Result<()> {
    let catalog = ScenarioCatalog::load(&config.scenarios_path);
    let mut generator = QuestionGenerator::new(catalog);

    let mix = config.mix.mix();
    log::info!("Building a '{}' quiz ({} questions)", config.mix, mix.total());
    let quiz = generator.build_quiz(&mix);

    println!("{}", serde_json::to_string_pretty(&quiz)?);
    Ok(())
}

async fn print_history(config: &AppConfig) -> Result<()> {
    let store = JsonFileHistory::new(&config.history_path);
    let history = store.load_all().await?;
    log::info!(
        "Loaded {} submissions from {}",
        history.len(),
        store.path().display()
    );

    println!("{}", serde_json::to_string_pretty(&history)?);
    Ok(())
}
