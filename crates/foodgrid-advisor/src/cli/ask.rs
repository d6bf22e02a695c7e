// crates/foodgrid-advisor/src/cli/ask.rs
// One-shot question from the command line

use anyhow::Result;
use foodgrid::config::FoodGridConfig;
use foodgrid::{Advisor, AdvisoryOutcome, QueryContext};

pub async fn run_ask(
    query: String,
    context: Vec<(String, String)>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let file_config = FoodGridConfig::load();
    let advisor = Advisor::from_env(&file_config);

    let context: QueryContext = context.into_iter().collect();
    let context = (!context.is_empty()).then_some(&context);

    let outcome = advisor.ask_detailed(&query, context).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(outcome.response())?);
        return Ok(());
    }

    let response = outcome.response();
    println!("{}", response.response_text);

    if !response.suggestions.is_empty() {
        println!();
        println!("You could also ask:");
        for suggestion in &response.suggestions {
            println!("  - {}", suggestion);
        }
    }

    if verbose {
        println!();
        match &outcome {
            AdvisoryOutcome::Live {
                request_id, model, ..
            } => println!(
                "[live: {} | request {} | confidence {:.2}]",
                model, request_id, response.confidence
            ),
            AdvisoryOutcome::Fallback { topic, reason, .. } => println!(
                "[offline: {} | {} | confidence {:.2}]",
                topic, reason, response.confidence
            ),
        }
    }

    Ok(())
}
