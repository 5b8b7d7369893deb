//! Guest registration and lookup.

use innkeep_types::error::GuestError;
use innkeep_types::guest::{CreateGuestRequest, Guest, GuestId};

use crate::repository::guest::GuestRepository;

pub struct GuestService<G: GuestRepository> {
    repo: G,
}

impl<G: GuestRepository> GuestService<G> {
    pub fn new(repo: G) -> Self {
        Self { repo }
    }

    /// Register a guest. First and last name are required.
    pub async fn register_guest(&self, request: CreateGuestRequest) -> Result<Guest, GuestError> {
        if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
            return Err(GuestError::InvalidGuest(
                "first and last name are required".to_string(),
            ));
        }

        let guest = self
            .repo
            .create(&request)
            .await
            .map_err(|e| GuestError::StorageError(e.to_string()))?;
        tracing::info!(guest_id = %guest.id, "registered guest");
        Ok(guest)
    }

    pub async fn get_guest(&self, id: GuestId) -> Result<Guest, GuestError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| GuestError::StorageError(e.to_string()))?
            .ok_or(GuestError::NotFound(id))
    }

    pub async fn list_guests(&self) -> Result<Vec<Guest>, GuestError> {
        self.repo
            .list()
            .await
            .map_err(|e| GuestError::StorageError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::MockGuestRepository;

    #[tokio::test]
    async fn test_register_and_get() {
        let svc = GuestService::new(MockGuestRepository::default());
        let guest = svc
            .register_guest(CreateGuestRequest {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                email: "grace@example.com".to_string(),
                phone: String::new(),
            })
            .await
            .unwrap();

        let found = svc.get_guest(guest.id).await.unwrap();
        assert_eq!(found, guest);
        assert_eq!(svc.list_guests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_requires_names() {
        let svc = GuestService::new(MockGuestRepository::default());
        let err = svc
            .register_guest(CreateGuestRequest {
                first_name: " ".to_string(),
                last_name: "Hopper".to_string(),
                email: String::new(),
                phone: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GuestError::InvalidGuest(_)));
    }

    #[tokio::test]
    async fn test_get_missing_guest() {
        let svc = GuestService::new(MockGuestRepository::default());
        let err = svc.get_guest(GuestId(3)).await.unwrap_err();
        assert!(matches!(err, GuestError::NotFound(GuestId(3))));
    }
}
