//! Guest repository trait definition.
//!
//! The reservation ledger only ever calls `get_by_id`; registration and
//! listing back the guest endpoints.

use innkeep_types::error::RepositoryError;
use innkeep_types::guest::{CreateGuestRequest, Guest, GuestId};

pub trait GuestRepository: Send + Sync {
    fn create(
        &self,
        request: &CreateGuestRequest,
    ) -> impl std::future::Future<Output = Result<Guest, RepositoryError>> + Send;

    fn get_by_id(
        &self,
        id: GuestId,
    ) -> impl std::future::Future<Output = Result<Option<Guest>, RepositoryError>> + Send;

    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Guest>, RepositoryError>> + Send;
}
