//! Headcount and payroll statistics command.

use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table, presets};
use console::style;

use crate::state::AppState;

/// Print staff-wide statistics, or the per-department breakdown.
pub async fn stats(state: &AppState, departments: bool, json: bool) -> Result<()> {
    if departments {
        return department_stats(state, json).await;
    }

    let stats = state.employee_service.employee_statistics().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("── Headcount ──").dim());
    println!("  Total:     {}", style(stats.total_employees).bold());
    println!("  Active:    {}", style(stats.active_employees).green());
    println!("  Inactive:  {}", style(stats.inactive_employees).dim());
    println!("  On leave:  {}", style(stats.on_leave_employees).yellow());
    println!();
    println!("  {}", style("── Payroll ──").dim());
    println!("  Average salary:  {:.2}", stats.average_salary);
    println!("  Total expense:   {}", style(format!("{:.2}", stats.total_salary_expense)).bold());
    println!();

    Ok(())
}

async fn department_stats(state: &AppState, json: bool) -> Result<()> {
    let stats = state.employee_service.department_statistics().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if stats.is_empty() {
        println!();
        println!("  {} No employees yet.", style("i").blue().bold());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Department").fg(Color::White),
        Cell::new("Employees").fg(Color::White),
        Cell::new("Active").fg(Color::White),
        Cell::new("Average salary").fg(Color::White),
        Cell::new("Total salary").fg(Color::White),
    ]);

    for d in &stats {
        let name = if d.department.is_empty() {
            Cell::new("(none)").fg(Color::DarkGrey)
        } else {
            Cell::new(&d.department)
        };
        table.add_row(vec![
            name,
            Cell::new(d.employee_count).set_alignment(CellAlignment::Right),
            Cell::new(d.active_count)
                .fg(Color::Green)
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", d.average_salary)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", d.total_salary)).set_alignment(CellAlignment::Right),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    Ok(())
}
