//! Application state wiring all services together.
//!
//! Services are generic over repository traits; AppState pins them to the
//! SQLite implementations.

use std::path::PathBuf;
use std::sync::Arc;

use innkeep_core::service::employee::EmployeeService;
use innkeep_core::service::guest::GuestService;
use innkeep_core::service::reservation::ReservationService;
use innkeep_infra::config::{load_config, resolve_data_dir, resolve_database_url};
use innkeep_infra::sqlite::employee::SqliteEmployeeRepository;
use innkeep_infra::sqlite::guest::SqliteGuestRepository;
use innkeep_infra::sqlite::pool::DatabasePool;
use innkeep_infra::sqlite::reservation::SqliteReservationRepository;
use innkeep_types::config::AppConfig;

pub type ConcreteEmployeeService = EmployeeService<SqliteEmployeeRepository>;

pub type ConcreteReservationService =
    ReservationService<SqliteReservationRepository, SqliteGuestRepository>;

pub type ConcreteGuestService = GuestService<SqliteGuestRepository>;

/// Shared application state, used by both CLI commands and REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<ConcreteEmployeeService>,
    pub reservation_service: Arc<ConcreteReservationService>,
    pub guest_service: Arc<ConcreteGuestService>,
    pub config: Arc<AppConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory, load config, open the database and wire
    /// services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        let db_url = resolve_database_url(&config, &data_dir);
        let db_pool = DatabasePool::new(&db_url).await?;

        Ok(Self::from_parts(db_pool, config, data_dir))
    }

    pub fn from_parts(db_pool: DatabasePool, config: AppConfig, data_dir: PathBuf) -> Self {
        let employee_service = EmployeeService::new(SqliteEmployeeRepository::new(db_pool.clone()));
        let reservation_service = ReservationService::new(
            SqliteReservationRepository::new(db_pool.clone()),
            SqliteGuestRepository::new(db_pool.clone()),
        );
        let guest_service = GuestService::new(SqliteGuestRepository::new(db_pool));

        Self {
            employee_service: Arc::new(employee_service),
            reservation_service: Arc::new(reservation_service),
            guest_service: Arc::new(guest_service),
            config: Arc::new(config),
            data_dir,
        }
    }
}

#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    let dir = tempfile::tempdir().unwrap();
    let url = innkeep_infra::sqlite::pool::default_database_url(dir.path());
    let data_dir = dir.path().to_path_buf();
    // Leak tempdir so it lives for the test
    std::mem::forget(dir);
    let pool = DatabasePool::new(&url).await.unwrap();
    AppState::from_parts(pool, AppConfig::default(), data_dir)
}
