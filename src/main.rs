use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod board;
mod cli;
mod config;
mod fixtures;
mod models;
mod tui;

use cli::{Cli, Commands};
use config::Config;
use models::BoardKind;

fn main() -> Result<()> {
    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "commu=info");
    }

    // Initialize logging to both console and file
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    // Create a file appender for logging
    let file_appender = tracing_appender::rolling::never(".", "commu.log");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = &cli.fixture {
        config.fixture_path = Some(path.clone());
    }
    config.validate()?;

    match &cli.command {
        Commands::List {
            board,
            category,
            query,
            sort,
            page,
        } => {
            let kind = Commands::parse_board(board)?;
            let sort = Commands::parse_sort(sort)?;

            let fixture = fixtures::load(config.fixture_path.as_deref())?;
            let store = board::BoardStore::new(fixture.into_board(kind));

            let mut list_query = board::ListQuery::default();
            list_query.set_category(category.clone());
            if let Some(q) = query {
                list_query.set_query(q.clone());
            }
            list_query.set_sort(sort);
            list_query.set_page(*page);

            let view = board::derive(
                store.posts(),
                &list_query,
                &config.identity(),
                config.page_size,
            );

            println!(
                "{} - {} posts (page {} of {})",
                kind.title(),
                view.total_matches,
                view.page,
                view.total_pages
            );
            for row in &view.rows {
                println!(
                    "{:4} │ {} │ {} │ {} │ {} │ {} │ {}{}",
                    row.id,
                    row.date,
                    row.category,
                    row.author,
                    tui::ui::format_count(row.views),
                    tui::ui::format_count(row.likes),
                    row.title,
                    if row.tags.is_empty() {
                        String::new()
                    } else {
                        format!("  {}", row.tags.join(" "))
                    }
                );
            }

            let strip: Vec<String> = view
                .strip
                .iter()
                .map(|c| {
                    if c.active {
                        format!("[{}]", c.label)
                    } else {
                        c.label.clone()
                    }
                })
                .collect();
            println!("{}", strip.join(" "));
        }

        Commands::Boards => {
            let fixture = fixtures::load(config.fixture_path.as_deref())?;
            for kind in BoardKind::ALL {
                println!(
                    "{:12} {} ({} posts)",
                    kind.as_str(),
                    kind.title(),
                    fixture.board(kind).len()
                );
            }
        }

        Commands::Tui { board } => {
            info!("Launching TUI interface");

            let start_board = board
                .as_deref()
                .map(Commands::parse_board)
                .transpose()?;

            match tui::run_tui(&config, start_board) {
                Ok(_) => info!("TUI exited successfully"),
                Err(e) => error!("TUI failed: {}", e),
            }
        }
    }

    Ok(())
}
