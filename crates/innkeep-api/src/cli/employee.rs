//! Employee directory CLI commands.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::{Confirm, Input};

use innkeep_types::employee::{Employee, EmployeeId, EmployeeRecord, status};

use crate::cli::spinner;
use crate::state::AppState;

/// Employee subcommands.
#[derive(Subcommand)]
pub enum EmployeeCommand {
    /// Add an employee (prompts for missing names, email and salary).
    Add {
        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// List employees, optionally filtered by an exact field value.
    #[command(alias = "ls")]
    List {
        /// Exact department (case-sensitive).
        #[arg(long, group = "filter")]
        department: Option<String>,

        /// Exact status (case-sensitive).
        #[arg(long, group = "filter")]
        status: Option<String>,

        /// Exact position (case-sensitive).
        #[arg(long, group = "filter")]
        position: Option<String>,
    },

    /// Show one employee by id.
    Show { id: EmployeeId },

    /// Find an employee by email.
    Find { email: String },

    /// Case-sensitive substring search on first or last name.
    Search { term: String },

    /// Replace an employee's fields. Omitted flags keep their current value.
    Update {
        id: EmployeeId,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// Set only the status of an employee.
    Status { id: EmployeeId, status: String },

    /// Delete an employee.
    #[command(alias = "rm")]
    Delete {
        id: EmployeeId,

        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}

/// Employee record fields as CLI flags.
#[derive(Args, Default)]
pub struct EmployeeFields {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Job title, e.g. "Head Chef".
    #[arg(long)]
    pub position: Option<String>,
    /// e.g. FRONT_DESK, HOUSEKEEPING, KITCHEN.
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub salary: Option<f64>,
    /// YYYY-MM-DD. Defaults to today on add.
    #[arg(long)]
    pub hire_date: Option<NaiveDate>,
    /// Defaults to ACTIVE on add.
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

impl EmployeeFields {
    /// Overlay the provided flags on an existing record.
    pub fn merge_into(self, mut record: EmployeeRecord) -> EmployeeRecord {
        if let Some(v) = self.first_name {
            record.first_name = v;
        }
        if let Some(v) = self.last_name {
            record.last_name = v;
        }
        if let Some(v) = self.email {
            record.email = v;
        }
        if let Some(v) = self.phone {
            record.phone = v;
        }
        if let Some(v) = self.position {
            record.position = v;
        }
        if let Some(v) = self.department {
            record.department = v;
        }
        if let Some(v) = self.salary {
            record.salary = v;
        }
        if let Some(v) = self.hire_date {
            record.hire_date = v;
        }
        if let Some(v) = self.status {
            record.status = v;
        }
        if let Some(v) = self.address {
            record.address = v;
        }
        record
    }
}

/// Handle an employee subcommand.
pub async fn handle_employee_command(cmd: EmployeeCommand, state: &AppState, json: bool) -> Result<()> {
    match cmd {
        EmployeeCommand::Add { fields } => add_employee(state, fields, json).await,
        EmployeeCommand::List {
            department,
            status,
            position,
        } => list_employees(state, department, status, position, json).await,
        EmployeeCommand::Show { id } => show_employee(state, id, json).await,
        EmployeeCommand::Find { email } => find_employee(state, &email, json).await,
        EmployeeCommand::Search { term } => search_employees(state, &term, json).await,
        EmployeeCommand::Update { id, fields } => update_employee(state, id, fields, json).await,
        EmployeeCommand::Status { id, status } => update_status(state, id, &status, json).await,
        EmployeeCommand::Delete { id, force } => delete_employee(state, id, force, json).await,
    }
}

async fn add_employee(state: &AppState, fields: EmployeeFields, json: bool) -> Result<()> {
    let prompt = |label: &str, value: Option<String>| -> Result<String> {
        match value {
            Some(v) => Ok(v),
            None => Ok(Input::<String>::new().with_prompt(label).interact_text()?),
        }
    };

    let first_name = prompt("First name", fields.first_name.clone())?;
    let last_name = prompt("Last name", fields.last_name.clone())?;
    let email = match fields.email.clone() {
        Some(e) => e,
        None => Input::<String>::new()
            .with_prompt("Email")
            .default(format!(
                "{}.{}@hotel.com",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ))
            .interact_text()?,
    };
    let salary = match fields.salary {
        Some(s) => s,
        None => Input::<f64>::new().with_prompt("Salary").interact_text()?,
    };

    let base = EmployeeRecord {
        first_name,
        last_name,
        email,
        phone: String::new(),
        position: String::new(),
        department: String::new(),
        salary,
        hire_date: chrono::Local::now().date_naive(),
        status: status::ACTIVE.to_string(),
        address: String::new(),
    };
    let record = fields.merge_into(base);

    let spinner = spinner("cyan", "Adding employee...")?;
    let result = state.employee_service.create_employee(record).await;
    spinner.finish_and_clear();
    let employee = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&employee)?);
        return Ok(());
    }

    println!();
    println!("  {} Employee added.", style("✓").green().bold());
    print_employee(&employee);
    Ok(())
}

async fn list_employees(
    state: &AppState,
    department: Option<String>,
    status: Option<String>,
    position: Option<String>,
    json: bool,
) -> Result<()> {
    let svc = &state.employee_service;
    let employees = match (department, status, position) {
        (Some(d), _, _) => svc.list_by_department(&d).await?,
        (_, Some(s), _) => svc.list_by_status(&s).await?,
        (_, _, Some(p)) => svc.list_by_position(&p).await?,
        _ => svc.list_employees().await?,
    };

    print_employee_list(&employees, json)
}

async fn show_employee(state: &AppState, id: EmployeeId, json: bool) -> Result<()> {
    let Some(employee) = state.employee_service.get_employee(id).await? else {
        bail!("employee not found with id: {id}");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&employee)?);
    } else {
        print_employee(&employee);
    }
    Ok(())
}

async fn find_employee(state: &AppState, email: &str, json: bool) -> Result<()> {
    let Some(employee) = state.employee_service.get_employee_by_email(email).await? else {
        bail!("employee not found with email: {email}");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&employee)?);
    } else {
        print_employee(&employee);
    }
    Ok(())
}

async fn search_employees(state: &AppState, term: &str, json: bool) -> Result<()> {
    let employees = state.employee_service.search_by_name(term).await?;
    print_employee_list(&employees, json)
}

async fn update_employee(
    state: &AppState,
    id: EmployeeId,
    fields: EmployeeFields,
    json: bool,
) -> Result<()> {
    let Some(current) = state.employee_service.get_employee(id).await? else {
        bail!("employee not found with id: {id}");
    };

    let record = fields.merge_into(current.to_record());
    let updated = state.employee_service.update_employee(id, record).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
        return Ok(());
    }

    println!();
    println!("  {} Employee updated.", style("✓").green().bold());
    print_employee(&updated);
    Ok(())
}

async fn update_status(state: &AppState, id: EmployeeId, new_status: &str, json: bool) -> Result<()> {
    let updated = state.employee_service.update_status(id, new_status).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!(
            "  {} {} is now {}",
            style("✓").green().bold(),
            updated.full_name(),
            status_cell_text(&updated.status)
        );
    }
    Ok(())
}

async fn delete_employee(state: &AppState, id: EmployeeId, force: bool, json: bool) -> Result<()> {
    let Some(employee) = state.employee_service.get_employee(id).await? else {
        bail!("employee not found with id: {id}");
    };

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Permanently delete employee '{}'?",
                style(employee.full_name()).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.employee_service.delete_employee(id).await?;

    if json {
        println!("{}", serde_json::json!({"deleted": true, "id": id}));
    } else {
        println!(
            "  {} Employee '{}' deleted.",
            style("✓").red().bold(),
            employee.full_name()
        );
    }
    Ok(())
}

fn status_cell_text(value: &str) -> String {
    if status::matches(value, status::ACTIVE) {
        format!("{}", style(format!("● {value}")).green())
    } else if status::matches(value, status::ON_LEAVE) {
        format!("{}", style(format!("◐ {value}")).yellow())
    } else {
        format!("{}", style(format!("○ {value}")).dim())
    }
}

fn status_cell(value: &str) -> Cell {
    if status::matches(value, status::ACTIVE) {
        Cell::new(format!("● {value}")).fg(Color::Green)
    } else if status::matches(value, status::ON_LEAVE) {
        Cell::new(format!("◐ {value}")).fg(Color::Yellow)
    } else {
        Cell::new(format!("○ {value}")).fg(Color::DarkGrey)
    }
}

fn print_employee_list(employees: &[Employee], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(employees)?);
        return Ok(());
    }

    if employees.is_empty() {
        println!();
        println!(
            "  {} No employees found. Add one with: {}",
            style("i").blue().bold(),
            style("innkeep employee add").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Email").fg(Color::White),
        Cell::new("Position").fg(Color::White),
        Cell::new("Department").fg(Color::White),
        Cell::new("Salary").fg(Color::White),
        Cell::new("Status").fg(Color::White),
    ]);

    for e in employees {
        table.add_row(vec![
            Cell::new(e.id.to_string()).fg(Color::DarkGrey),
            Cell::new(e.full_name()),
            Cell::new(&e.email),
            Cell::new(&e.position),
            Cell::new(&e.department),
            Cell::new(format!("{:.2}", e.salary)),
            status_cell(&e.status),
        ]);
    }

    println!();
    println!("{table}");
    println!(
        "  {} employee{}",
        employees.len(),
        if employees.len() == 1 { "" } else { "s" }
    );
    println!();
    Ok(())
}

fn print_employee(e: &Employee) {
    println!();
    println!("  {}  {}", style("Name:").bold(), style(e.full_name()).cyan());
    println!("  {}  {}", style("ID:").bold(), style(e.id.to_string()).dim());
    println!("  {}  {}", style("Email:").bold(), e.email);
    println!("  {}  {}", style("Phone:").bold(), e.phone);
    println!("  {}  {}", style("Position:").bold(), e.position);
    println!("  {}  {}", style("Department:").bold(), e.department);
    println!("  {}  {:.2}", style("Salary:").bold(), e.salary);
    println!("  {}  {}", style("Hired:").bold(), e.hire_date);
    println!("  {}  {}", style("Status:").bold(), status_cell_text(&e.status));
    println!("  {}  {}", style("Address:").bold(), e.address);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EmployeeRecord {
        EmployeeRecord {
            first_name: "Emily".to_string(),
            last_name: "Davis".to_string(),
            email: "emily.davis@hotel.com".to_string(),
            phone: "1234567893".to_string(),
            position: "Housekeeping Manager".to_string(),
            department: "HOUSEKEEPING".to_string(),
            salary: 48000.0,
            hire_date: NaiveDate::from_ymd_opt(2021, 5, 1).unwrap(),
            status: "ACTIVE".to_string(),
            address: "321 Elm St, City".to_string(),
        }
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let fields = EmployeeFields {
            salary: Some(50000.0),
            department: Some("MANAGEMENT".to_string()),
            ..EmployeeFields::default()
        };

        let merged = fields.merge_into(record());
        assert_eq!(merged.salary, 50000.0);
        assert_eq!(merged.department, "MANAGEMENT");
        assert_eq!(merged.email, "emily.davis@hotel.com");
        assert_eq!(merged.status, "ACTIVE");
    }

    #[test]
    fn test_merge_with_no_flags_is_identity() {
        assert_eq!(EmployeeFields::default().merge_into(record()), record());
    }
}
