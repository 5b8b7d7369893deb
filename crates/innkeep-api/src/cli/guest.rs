//! Guest registration CLI commands.

use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use innkeep_types::guest::CreateGuestRequest;

use crate::state::AppState;

#[derive(Subcommand)]
pub enum GuestCommand {
    /// Register a guest.
    Add {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,
    },

    /// List registered guests.
    #[command(alias = "ls")]
    List,
}

pub async fn handle_guest_command(cmd: GuestCommand, state: &AppState, json: bool) -> Result<()> {
    match cmd {
        GuestCommand::Add {
            first_name,
            last_name,
            email,
            phone,
        } => {
            let guest = state
                .guest_service
                .register_guest(CreateGuestRequest {
                    first_name,
                    last_name,
                    email,
                    phone,
                })
                .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&guest)?);
            } else {
                println!(
                    "  {} Guest {} {} registered with id {}",
                    style("✓").green().bold(),
                    guest.first_name,
                    guest.last_name,
                    style(guest.id.to_string()).cyan()
                );
            }
            Ok(())
        }
        GuestCommand::List => {
            let guests = state.guest_service.list_guests().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&guests)?);
                return Ok(());
            }

            if guests.is_empty() {
                println!();
                println!(
                    "  {} No guests yet. Register one with: {}",
                    style("i").blue().bold(),
                    style("innkeep guest add").yellow()
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
                Cell::new("Phone").fg(Color::White),
            ]);
            for g in &guests {
                table.add_row(vec![
                    Cell::new(g.id.to_string()).fg(Color::DarkGrey),
                    Cell::new(format!("{} {}", g.first_name, g.last_name)),
                    Cell::new(&g.email),
                    Cell::new(&g.phone),
                ]);
            }

            println!();
            println!("{table}");
            println!();
            Ok(())
        }
    }
}
