//! Reservation ledger CLI commands.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use innkeep_types::guest::GuestId;
use innkeep_types::reservation::{CreateReservationRequest, ReservationId};

use crate::state::AppState;

#[derive(Subcommand)]
pub enum ReservationCommand {
    /// Book a room for an existing guest.
    Add {
        #[arg(long)]
        guest: GuestId,

        #[arg(long)]
        room: String,

        /// YYYY-MM-DD.
        #[arg(long)]
        check_in: NaiveDate,

        /// YYYY-MM-DD. Not checked against the check-in date.
        #[arg(long)]
        check_out: NaiveDate,

        #[arg(long, default_value = "CONFIRMED")]
        status: String,
    },

    /// List reservations, optionally for one guest.
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        guest: Option<GuestId>,
    },

    /// Delete a reservation. Succeeds even if the id does not exist.
    #[command(alias = "rm")]
    Delete { id: ReservationId },
}

pub async fn handle_reservation_command(
    cmd: ReservationCommand,
    state: &AppState,
    json: bool,
) -> Result<()> {
    match cmd {
        ReservationCommand::Add {
            guest,
            room,
            check_in,
            check_out,
            status,
        } => {
            let request = CreateReservationRequest {
                guest_id: guest,
                room_id: room,
                check_in_date: check_in,
                check_out_date: check_out,
                status,
            };
            let reservation = state.reservation_service.create_reservation(request).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&reservation)?);
            } else {
                println!(
                    "  {} Reservation {} booked: room {} for guest {}, {} to {}",
                    style("✓").green().bold(),
                    style(reservation.id.to_string()).cyan(),
                    reservation.room_id,
                    reservation.guest_id,
                    reservation.check_in_date,
                    reservation.check_out_date
                );
            }
            Ok(())
        }
        ReservationCommand::List { guest } => {
            let reservations = match guest {
                Some(guest_id) => state.reservation_service.list_by_guest(guest_id).await?,
                None => state.reservation_service.list_reservations().await?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&reservations)?);
                return Ok(());
            }

            if reservations.is_empty() {
                println!();
                println!("  {} No reservations found.", style("i").blue().bold());
                println!();
                return Ok(());
            }

            let mut table = Table::new();
            table.load_preset(presets::UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![
                Cell::new("ID").fg(Color::White),
                Cell::new("Guest").fg(Color::White),
                Cell::new("Room").fg(Color::White),
                Cell::new("Check-in").fg(Color::White),
                Cell::new("Check-out").fg(Color::White),
                Cell::new("Status").fg(Color::White),
                Cell::new("Booked").fg(Color::White),
            ]);
            for r in &reservations {
                table.add_row(vec![
                    Cell::new(r.id.to_string()).fg(Color::DarkGrey),
                    Cell::new(r.guest_id.to_string()),
                    Cell::new(&r.room_id),
                    Cell::new(r.check_in_date.to_string()),
                    Cell::new(r.check_out_date.to_string()),
                    Cell::new(&r.status),
                    Cell::new(r.created_at.format("%Y-%m-%d %H:%M").to_string()),
                ]);
            }

            println!();
            println!("{table}");
            println!();
            Ok(())
        }
        ReservationCommand::Delete { id } => {
            let deleted = state.reservation_service.delete_reservation(id).await?;

            if json {
                println!("{}", serde_json::json!({"deleted": deleted, "id": id}));
            } else {
                println!("  {} Reservation {} deleted.", style("✓").red().bold(), id);
            }
            Ok(())
        }
    }
}
