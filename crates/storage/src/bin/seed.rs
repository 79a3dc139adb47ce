use clap::{Parser, Subcommand};
use storage::{
    Database,
    catalog::standard_events,
    models::{Gender, NewBowler},
    repository::{BowlerRepository, EventRepository},
};

#[derive(Parser)]
#[command(name = "seed", about = "Seed the tournament database")]
struct Cli {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert the standard event catalogue, skipping events already present
    Events,
    /// Create a bowler, or replace every attribute of the bowler with this name
    Bowler {
        #[arg(long)]
        name: String,
        #[arg(long)]
        gender: Gender,
        #[arg(long)]
        average: i32,
        #[arg(long)]
        senior: bool,
        #[arg(long)]
        vet: bool,
        #[arg(long)]
        all_events: bool,
        #[arg(long)]
        senior_all_events: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let db = Database::new(&cli.database_url).await?;
    db.run_migrations().await?;

    match cli.command {
        Command::Events => {
            let mut inserted = 0;
            for event in standard_events()? {
                if db.find_event(&event.key()).await?.is_some() {
                    continue;
                }
                db.insert_event(&event).await?;
                inserted += 1;
            }
            tracing::info!(inserted, "Event catalogue seeded");
        }
        Command::Bowler {
            name,
            gender,
            average,
            senior,
            vet,
            all_events,
            senior_all_events,
        } => {
            let bowler = NewBowler {
                name,
                gender,
                average,
                is_senior: senior,
                is_vet: vet,
                is_in_all_events: all_events,
                is_in_senior_all_events: senior_all_events,
            };
            let stored = db.upsert_bowler(&bowler).await?;
            tracing::info!(
                bowler_id = stored.bowler_id,
                name = %stored.name,
                "Bowler upserted"
            );
        }
    }

    Ok(())
}
