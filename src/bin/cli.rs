use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trivia_api::db;
use trivia_api::db::queries::categories::{get_all_categories, import_categories};
use trivia_api::db::queries::questions::{get_all_questions, import_questions};
use trivia_api::db::seed::{read_from, write_to, CATEGORIES_FILE, QUESTIONS_FILE};
use trivia_api::db::{Category, Question};
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path
    db_path: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Export categories.csv and questions.csv into a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let db_path = cli.db_path.display().to_string();
    let pool = db::establish_connection(&db_path)
        .await
        .with_context(|| format!("Cannot connect to {db_path}"))?;
    db::run_migrations(&pool).await?;

    match cli.command {
        Commands::Export { path } => {
            let categories = get_all_categories(&pool).await?;
            let questions = get_all_questions(&pool).await?;
            if !path.exists() {
                std::fs::create_dir_all(&path)?
            }
            write_to(&path.join(CATEGORIES_FILE), &categories)?;
            write_to(&path.join(QUESTIONS_FILE), &questions)?;
            tracing::info!(
                categories = categories.len(),
                questions = questions.len(),
                "Exported to {}",
                path.display()
            );
        }
        Commands::Import { path } => {
            let categories: Vec<Category> = read_from(&path.join(CATEGORIES_FILE))?;
            let questions: Vec<Question> = read_from(&path.join(QUESTIONS_FILE))?;
            let counts = (categories.len(), questions.len());
            import_categories(&pool, categories).await?;
            import_questions(&pool, questions).await?;
            tracing::info!(
                categories = counts.0,
                questions = counts.1,
                "Imported from {}",
                path.display()
            );
        }
    }
    Ok(())
}
