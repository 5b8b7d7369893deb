//! `innkeep seed`: load the sample staff roster.

use anyhow::Result;
use console::style;

use innkeep_infra::seed::seed_sample_data;

use crate::cli::spinner;
use crate::state::AppState;

pub async fn seed(state: &AppState, json: bool) -> Result<()> {
    let spinner = spinner("cyan", "Loading sample roster...")?;
    let result = seed_sample_data(state.employee_service.as_ref()).await;
    spinner.finish_and_clear();
    let added = result?;

    if json {
        println!("{}", serde_json::json!({"added": added}));
    } else if added == 0 {
        println!(
            "  {} Employee directory already has data; nothing loaded.",
            style("i").blue().bold()
        );
    } else {
        println!(
            "  {} Loaded {} sample employees.",
            style("✓").green().bold(),
            added
        );
    }

    Ok(())
}
