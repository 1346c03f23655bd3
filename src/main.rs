use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use friendbook::cli::{Args, Cmd};
use friendbook::config::Config;
use friendbook::models::Friend;
use friendbook::{repository, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "friendbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;
    tracing::debug!("Configuration loaded successfully");

    let db = Database::new();
    db.start(&config.pool)?;

    let result = run(&db, args.command()).await;

    // Stop the pool on every path before reporting the outcome
    db.stop().await;

    result
}

async fn run(db: &Database, cmd: Cmd) -> anyhow::Result<()> {
    match cmd {
        Cmd::Demo => {
            repository::initialize_store(db).await?;
            repository::insert_friend(db, "Tomas", Some("Tom")).await?;
            print_friends(&repository::list_all_friends(db).await?);
        }
        Cmd::Init => {
            repository::initialize_store(db).await?;
            println!("Seeded {} friends", repository::SEED_FRIENDS.len());
        }
        Cmd::List { json } => {
            let friends = repository::list_all_friends(db).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&friends)?);
            } else {
                print_friends(&friends);
            }
        }
        Cmd::Add { name, nick } => {
            let friend = repository::insert_friend(db, &name, nick.as_deref()).await?;
            println!("{} {} {}", friend.id, friend.name, friend.display_nick());
        }
    }

    Ok(())
}

fn print_friends(friends: &[Friend]) {
    for friend in friends {
        println!("{} {}", friend.name, friend.display_nick());
    }
}
