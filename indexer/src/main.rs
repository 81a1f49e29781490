mod display;

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use crawler::{comic_url, parse_base, ClientConfig, XkcdClient, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};
use xkcd_core::cursor::KNOWN_MISSING;
use xkcd_core::{load_state, save_state, search, DocId, IndexBuilder, IndexPaths, MissingIds};

#[derive(Parser, Debug)]
#[command(name = "xkcd-search")]
#[command(about = "Incrementally index xkcd transcripts and search them by keywords")]
struct Cli {
    /// Keywords separated by single spaces; every keyword must match
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    keywords: String,
    /// Search the existing index without fetching new comics
    #[arg(long, default_value_t = false)]
    no_update: bool,
    /// Directory holding the index snapshot
    #[arg(long, default_value = "./index")]
    index_dir: String,
    /// Base URL of the comic source
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Comic IDs that never exist and are skipped without a request (repeatable)
    #[arg(long = "skip-id", default_values_t = KNOWN_MISSING.to_vec())]
    skip_ids: Vec<DocId>,
    /// Request timeout seconds; no timeout when omitted
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// User-Agent sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Results shown per page
    #[arg(long, default_value_t = 5)]
    page_size: usize,
    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    tracing::debug!(update = !cli.no_update, keywords = %cli.keywords, "parsed arguments");

    let paths = IndexPaths::new(&cli.index_dir);
    let mut state = load_state(&paths).context("loading index")?;
    let base = parse_base(&cli.base_url)?;

    if !cli.no_update {
        println!("start to update index");
        let client = XkcdClient::new(&ClientConfig {
            base_url: cli.base_url.clone(),
            user_agent: cli.user_agent.clone(),
            timeout: cli.timeout_secs.map(Duration::from_secs),
        })?;
        let missing: MissingIds = cli.skip_ids.iter().copied().collect();
        let (next, report) = IndexBuilder::new(&client)
            .with_missing(missing)
            .run(state)
            .await
            .context("index update failed, nothing from this pass was saved")?;
        save_state(&paths, &next).context("saving index")?;
        tracing::info!(
            start = report.start,
            cursor = report.cursor,
            indexed = report.indexed,
            skipped_malformed = ?report.skipped_malformed,
            skipped_missing = ?report.skipped_missing,
            "index update finished"
        );
        println!("update finished");
        state = next;
    }

    println!("start to search");
    let results = search(&state.index, &cli.keywords);
    if results.is_empty() {
        tracing::info!(keywords = %cli.keywords, words = state.index.len(), "search no match");
    }

    let reference = |id: DocId| comic_url(&base, id).map(|u| u.to_string()).unwrap_or_else(|_| id.to_string());
    display::show_results(&results, cli.page_size, reference, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn init_logging(log_file: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            fmt().with_env_filter(filter).with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => fmt().with_env_filter(filter).with_writer(io::stderr).init(),
    }
    Ok(())
}

/// Open `path` for appending, creating missing parent directories.
fn open_log_file(path: &str) -> Result<File> {
    if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir).with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn log_file_creates_parent_dirs_and_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs/nested/xkcd.log");
        let path = path.to_str().unwrap();
        open_log_file(path).unwrap().write_all(b"one\n").unwrap();
        open_log_file(path).unwrap().write_all(b"two\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn log_dir_blocked_by_a_file_is_reported() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, b"").unwrap();
        let path = blocker.join("xkcd.log");
        let err = open_log_file(path.to_str().unwrap()).unwrap_err();
        assert!(format!("{err:#}").contains("creating log directory"));
    }
}
