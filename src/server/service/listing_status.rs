//! Listing moderation: status write, owner lookup, token lookup, then push.
//!
//! The three lookups run in order and stop at the first failure, which is reported
//! together with the step that failed. Earlier steps are not undone, so a failed
//! owner or token lookup leaves the new status committed. The push itself runs in
//! the background and never affects the result.

use crate::server::{
    data::listing::ListingStatusStore,
    error::{AppError, TransitionStep},
    model::listing::{NotificationRequest, StatusChange, StatusTransition},
    service::{notification::NotificationDispatcher, user_directory::UserDirectory},
};

pub struct ListingStatusService<'a> {
    store: &'a dyn ListingStatusStore,
    directory: &'a dyn UserDirectory,
    dispatcher: &'a NotificationDispatcher,
}

impl<'a> ListingStatusService<'a> {
    pub fn new(
        store: &'a dyn ListingStatusStore,
        directory: &'a dyn UserDirectory,
        dispatcher: &'a NotificationDispatcher,
    ) -> Self {
        Self {
            store,
            directory,
            dispatcher,
        }
    }

    #[tracing::instrument(
        skip(self, transition),
        fields(
            kind = %transition.kind,
            listing_id = transition.listing_id,
            status = %transition.status,
        )
    )]
    pub async fn change_status(
        &self,
        transition: StatusTransition,
    ) -> Result<StatusChange, AppError> {
        let StatusTransition {
            kind,
            listing_id,
            status,
            message,
        } = transition;

        self.store
            .update_status(kind, listing_id, status)
            .await
            .map_err(|e| AppError::at_step(TransitionStep::UpdateStatus, e))?;

        let owner_id = self
            .store
            .owner_of(kind, listing_id)
            .await
            .map_err(|e| AppError::at_step(TransitionStep::OwnerLookup, e))?;

        let token = self
            .directory
            .delivery_token(owner_id)
            .await
            .map_err(|e| AppError::at_step(TransitionStep::TokenLookup, e))?;

        tracing::info!(owner_id, "Listing status changed, notifying owner");
        drop(self.dispatcher.dispatch(NotificationRequest { message, token }));

        Ok(StatusChange {
            kind,
            listing_id,
            status,
            owner_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use mockall::{predicate::eq, Sequence};
    use sea_orm::DbErr;
    use test_utils::{builder::TestBuilder, factory};
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::server::{
        data::listing::{ListingRepository, MockListingStatusStore},
        model::listing::{ListingKind, ListingStatus},
        service::user_directory::{DirectoryError, MockUserDirectory},
    };

    fn transition(kind: ListingKind, listing_id: i32) -> StatusTransition {
        StatusTransition {
            kind,
            listing_id,
            status: ListingStatus::Accepted,
            message: "Your listing is live".to_string(),
        }
    }

    fn dispatcher(url: &str) -> NotificationDispatcher {
        NotificationDispatcher::new(url, Duration::from_secs(2)).unwrap()
    }

    /// Waits until the background dispatch reached the gateway.
    async fn wait_for_requests(server: &MockServer, count: usize) -> usize {
        for _ in 0..100 {
            let received = server.received_requests().await.unwrap_or_default().len();
            if received >= count {
                return received;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        server.received_requests().await.unwrap_or_default().len()
    }

    fn step_of(err: &AppError) -> Option<TransitionStep> {
        match err {
            AppError::StatusTransition { step, .. } => Some(*step),
            _ => None,
        }
    }

    #[tokio::test]
    async fn runs_steps_in_order_and_sends_one_push() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/push/send-push"))
            .and(body_json(serde_json::json!({
                "message": "Your listing is live",
                "token": "device-7",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut seq = Sequence::new();
        let mut store = MockListingStatusStore::new();
        store
            .expect_update_status()
            .with(eq(ListingKind::Car), eq(3), eq(ListingStatus::Accepted))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, id, _| Ok(id));
        store
            .expect_owner_of()
            .with(eq(ListingKind::Car), eq(3))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(77));

        let mut directory = MockUserDirectory::new();
        directory
            .expect_delivery_token()
            .with(eq(77))
            .times(1)
            .returning(|_| Ok("device-7".to_string()));

        let dispatcher = dispatcher(&server.uri());
        let service = ListingStatusService::new(&store, &directory, &dispatcher);
        let change = service
            .change_status(transition(ListingKind::Car, 3))
            .await
            .unwrap();

        assert_eq!(
            change,
            StatusChange {
                kind: ListingKind::Car,
                listing_id: 3,
                status: ListingStatus::Accepted,
                owner_id: 77,
            }
        );
        assert_eq!(wait_for_requests(&server, 1).await, 1);
    }

    #[tokio::test]
    async fn update_failure_stops_before_lookups() {
        let mut store = MockListingStatusStore::new();
        store
            .expect_update_status()
            .returning(|_, id, _| Err(DbErr::RecordNotFound(format!("car {} not found", id))));
        store.expect_owner_of().never();

        let mut directory = MockUserDirectory::new();
        directory.expect_delivery_token().never();

        let dispatcher = dispatcher("http://127.0.0.1:1");
        let service = ListingStatusService::new(&store, &directory, &dispatcher);
        let err = service
            .change_status(transition(ListingKind::Car, 3))
            .await
            .unwrap_err();

        assert_eq!(step_of(&err), Some(TransitionStep::UpdateStatus));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn owner_lookup_failure_skips_token_lookup() {
        let mut store = MockListingStatusStore::new();
        store.expect_update_status().returning(|_, id, _| Ok(id));
        store
            .expect_owner_of()
            .returning(|_, _| Err(DbErr::Custom("connection reset".to_string())));

        let mut directory = MockUserDirectory::new();
        directory.expect_delivery_token().never();

        let dispatcher = dispatcher("http://127.0.0.1:1");
        let service = ListingStatusService::new(&store, &directory, &dispatcher);
        let err = service
            .change_status(transition(ListingKind::Moto, 4))
            .await
            .unwrap_err();

        assert_eq!(step_of(&err), Some(TransitionStep::OwnerLookup));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn token_failure_keeps_status_and_sends_nothing() {
        let test = TestBuilder::new()
            .with_listing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let car = factory::listing::create_car(db, 42).await.unwrap();

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let store = ListingRepository::new(db);
        let mut directory = MockUserDirectory::new();
        directory
            .expect_delivery_token()
            .with(eq(42))
            .returning(|id| Err(DirectoryError::NotFound(id)));

        let dispatcher = dispatcher(&server.uri());
        let service = ListingStatusService::new(&store, &directory, &dispatcher);
        let err = service
            .change_status(transition(ListingKind::Car, car.id))
            .await
            .unwrap_err();

        assert_eq!(step_of(&err), Some(TransitionStep::TokenLookup));
        let stored = ListingRepository::new(db)
            .get_by_id(ListingKind::Car, car.id)
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(
            stored,
            crate::server::model::listing::Listing::Car(ref c) if c.status == "accepted"
        ));
    }

    #[tokio::test]
    async fn unreachable_gateway_keeps_status_and_succeeds() {
        let test = TestBuilder::new()
            .with_listing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let truck = factory::listing::create_truck(db, 8, "pending").await.unwrap();

        let store = ListingRepository::new(db);
        let mut directory = MockUserDirectory::new();
        directory
            .expect_delivery_token()
            .with(eq(8))
            .times(1)
            .returning(|_| Ok("device-8".to_string()));

        let dispatcher = dispatcher("http://127.0.0.1:1");
        let service = ListingStatusService::new(&store, &directory, &dispatcher);
        let change = service
            .change_status(transition(ListingKind::Truck, truck.id))
            .await
            .unwrap();

        assert_eq!(change.owner_id, 8);
        let stored = ListingRepository::new(db)
            .get_by_id(ListingKind::Truck, truck.id)
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(
            stored,
            crate::server::model::listing::Listing::Truck(ref t) if t.status == "accepted"
        ));
    }
}
