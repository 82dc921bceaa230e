use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::{BoardKind, SortKey};

#[derive(Parser)]
#[command(name = "commu")]
#[command(about = "Terminal client for browsing and managing community board posts")]
#[command(version)]
pub struct Cli {
    /// JSON fixture file replacing the embedded seed posts
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of a board's filtered, sorted post list
    List {
        /// Board to list (cover-letter, free, hot-issue)
        #[arg(short, long, default_value = "hot-issue")]
        board: String,

        /// Category filter (exact match, e.g. 공지)
        #[arg(short, long)]
        category: Option<String>,

        /// Free-text query over title, tags and body
        #[arg(short, long)]
        query: Option<String>,

        /// Sort key (latest, views, likes)
        #[arg(short, long, default_value = "latest")]
        sort: String,

        /// Page number (clamped to the available range)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// List available boards with their post counts
    Boards,

    /// Launch the terminal UI
    Tui {
        /// Board to open first (cover-letter, free, hot-issue)
        #[arg(short, long)]
        board: Option<String>,
    },
}

impl Commands {
    pub fn parse_board(board: &str) -> Result<BoardKind, anyhow::Error> {
        match board.to_lowercase().as_str() {
            "cover-letter" | "cover_letter" | "cover" => Ok(BoardKind::CoverLetter),
            "free" | "free-board" => Ok(BoardKind::Free),
            "hot-issue" | "hot_issue" | "hot" => Ok(BoardKind::HotIssue),
            other => Err(anyhow::anyhow!(
                "Unknown board: {}. Supported boards: cover-letter, free, hot-issue",
                other
            )),
        }
    }

    pub fn parse_sort(sort: &str) -> Result<SortKey, anyhow::Error> {
        match sort.to_lowercase().as_str() {
            "latest" | "date" => Ok(SortKey::Latest),
            "views" => Ok(SortKey::Views),
            "likes" => Ok(SortKey::Likes),
            other => Err(anyhow::anyhow!(
                "Unknown sort key: {}. Supported keys: latest, views, likes",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_board_aliases() {
        assert_eq!(
            Commands::parse_board("Cover-Letter").unwrap(),
            BoardKind::CoverLetter
        );
        assert_eq!(Commands::parse_board("hot_issue").unwrap(), BoardKind::HotIssue);
        assert!(Commands::parse_board("notice").is_err());
    }

    #[test]
    fn parses_sort_keys() {
        assert_eq!(Commands::parse_sort("latest").unwrap(), SortKey::Latest);
        assert_eq!(Commands::parse_sort("VIEWS").unwrap(), SortKey::Views);
        assert!(Commands::parse_sort("hot").is_err());
    }
}
