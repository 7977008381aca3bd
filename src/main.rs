use clap::Parser;

use casewatch::client::SearchClient;
use casewatch::config::CONFIG;
use casewatch::controller::{FormSubmitController, SubmitEvent};
use casewatch::form::SearchForm;
use casewatch::view::TerminalView;

/// Look up case counts for a zipcode and date against a running search
/// server.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    zipcode: String,

    /// YYYY-MM-DD; defaults to today.
    #[arg(long)]
    date: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    let form = SearchForm::new(vec![
        ("zipcode".to_string(), args.zipcode),
        ("date".to_string(), date),
    ]);
    let client = SearchClient::new(CONFIG.search_base_url.as_str());

    let mut controller = FormSubmitController::bind(form, client, TerminalView);
    let mut event = SubmitEvent::new();
    controller.handle_submit(&mut event).await;

    Ok(())
}
