#![warn(clippy::uninlined_format_args)]

mod cli;
mod counter;
mod infrastructure;

use cli::{InputSource, Invocation};
use fairshare_application::{CalculationProcessor, ClipboardWriter, SharedQuery};
use fairshare_i18n as i18n;
use fairshare_presentation::{ResultsPresenter, error_presenter::format_validation_error};
use infrastructure::{AppPaths, CommandClipboard, FileSalaryStore};
use std::{borrow::Cow, env, process};

const DEFAULT_BASE_URL: &str = "https://fairshare.app/calculator";

type CliResult<T> = Result<T, Cow<'static, str>>;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let invocation = Invocation::parse(env::args().skip(1))?;

    let paths = AppPaths::new()?;
    let store = FileSalaryStore::new(paths.salaries_file());
    let processor = CalculationProcessor::new(&store);

    let query = resolve_query(&processor, invocation.source)?;

    let result = match processor.calculate(&query) {
        Ok(result) => result,
        Err(report) => return Err(format_validation_error(&report).into()),
    };

    let view = ResultsPresenter::render(&result);
    println!("{}", i18n::RESULTS_HEADING);
    println!();
    println!("{}", view.summary);
    println!();
    print!("{}", view.table);
    println!();
    counter::count_up(i18n::YOUR_SHARE, result.totals.total_share_a).await;
    counter::count_up(i18n::THEIR_SHARE, result.totals.total_share_b).await;

    if invocation.share {
        share_results(&processor, &query).await;
    }

    Ok(())
}

fn resolve_query(
    processor: &CalculationProcessor<'_>,
    source: InputSource,
) -> CliResult<SharedQuery> {
    match source {
        InputSource::SharedState(url) => {
            let restored = processor.restore(Some(&url));
            if !restored.auto_calculate {
                return Err("Shared state is incomplete or malformed".into());
            }
            Ok(restored.query)
        }
        InputSource::Direct {
            salary_a,
            salary_b,
            expenses,
        } => Ok(SharedQuery {
            salary_a,
            salary_b,
            expenses,
        }),
        InputSource::Saved { expenses } => {
            let restored = processor.restore(None);
            if restored.query.salary_a.is_empty() || restored.query.salary_b.is_empty() {
                return Err(
                    "No saved salaries found; run a calculation with explicit salaries first"
                        .into(),
                );
            }
            Ok(SharedQuery {
                expenses,
                ..restored.query
            })
        }
    }
}

async fn share_results(processor: &CalculationProcessor<'_>, query: &SharedQuery) {
    let base_url = env::var("FAIRSHARE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let link = format!("{base_url}?{}", processor.share_query(query));
    println!("{link}");

    let text = link.clone();
    match tokio::task::spawn_blocking(move || CommandClipboard.write(&text)).await {
        Ok(Ok(())) => println!("{}", i18n::LINK_COPIED),
        Ok(Err(err)) => tracing::warn!("Failed to copy share link: {err}"),
        Err(err) => tracing::warn!("Clipboard task failed: {err}"),
    }
}
