//! Database inspection tool.
//!
//! Disposable diagnostic with no runtime role in the application: connects
//! straight to Postgres and prints what the site has accumulated. Handy
//! when deciding whether the chat table needs pruning or a visitor needs
//! deleting.

use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("database query failed: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Parser, Debug)]
#[command(name = "atrium-db", about = "Atrium database inspection tool")]
struct Cli {
    /// Postgres connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the tables the application owns, with row counts.
    Tables,
    /// Show the most recent chat messages.
    Chat {
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
    /// Show unexpired sessions.
    Sessions,
    /// Show registered visitors.
    Visitors,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let pool = match PgPoolOptions::new()
        .max_connections(1)
        .connect(&cli.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("connection failed: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Tables => tables(&pool).await,
        Command::Chat { limit } => chat(&pool, limit).await,
        Command::Sessions => sessions(&pool).await,
        Command::Visitors => visitors(&pool).await,
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

const APP_TABLES: [&str; 4] = ["visitors", "sessions", "ws_tickets", "chat_messages"];

async fn tables(pool: &PgPool) -> Result<(), CliError> {
    for table in APP_TABLES {
        // Identifier comes from the fixed list above, never from input.
        let row = sqlx::query(&format!("SELECT count(*) AS n FROM {table}"))
            .fetch_one(pool)
            .await?;
        let n: i64 = row.get("n");
        println!("{table:<16} {n:>8}");
    }
    Ok(())
}

async fn chat(pool: &PgPool, limit: i64) -> Result<(), CliError> {
    let rows = sqlx::query(
        r"SELECT author, body, sent_at
          FROM chat_messages
          ORDER BY sent_at DESC
          LIMIT $1",
    )
    .bind(limit.clamp(1, 500))
    .fetch_all(pool)
    .await?;

    for row in rows.iter().rev() {
        let author: String = row.get("author");
        let body: String = row.get("body");
        let sent_at: i64 = row.get("sent_at");
        println!("[{sent_at}] {author}: {body}");
    }
    println!("({} messages)", rows.len());
    Ok(())
}

async fn sessions(pool: &PgPool) -> Result<(), CliError> {
    let rows = sqlx::query(
        r"SELECT s.token, v.name, v.identity_uid IS NULL AS guest
          FROM sessions s
          JOIN visitors v ON v.id = s.visitor_id
          WHERE s.expires_at > now()
          ORDER BY s.created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    for row in &rows {
        let token: String = row.get("token");
        let name: String = row.get("name");
        let guest: bool = row.get("guest");
        let kind = if guest { "guest" } else { "verified" };
        println!("{}…  {name} ({kind})", &token[..8.min(token.len())]);
    }
    println!("({} active sessions)", rows.len());
    Ok(())
}

async fn visitors(pool: &PgPool) -> Result<(), CliError> {
    let rows = sqlx::query(
        r"SELECT id, name, email, identity_uid IS NULL AS guest, created_at::text AS created
          FROM visitors
          ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    for row in &rows {
        let id: Uuid = row.get("id");
        let name: String = row.get("name");
        let email: Option<String> = row.get("email");
        let guest: bool = row.get("guest");
        let created: String = row.get("created");
        let kind = if guest { "guest" } else { "verified" };
        println!(
            "{id}  {name:<20} {kind:<8} {}  {created}",
            email.as_deref().unwrap_or("-")
        );
    }
    println!("({} visitors)", rows.len());
    Ok(())
}
