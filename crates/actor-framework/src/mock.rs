//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a queue
//! of expectations instead of a running actor. Use it to test client wrappers and orchestration
//! code without spawning the actor or touching its storage.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires reproducing the state |
//!
//! ## Testing Strategies
//!
//! 1. **Client logic (pure mock)**: build the client from [`MockClient::client`] and queue the
//!    replies the code under test should see.
//! 2. **Request inspection**: [`create_mock_client`] returns the raw receiver; pair it with
//!    [`expect_create`], [`expect_get`] or [`expect_action`] to assert on the exact payload sent.
//! 3. **Single actor**: spawn `ResourceActor::new(..).run(ctx)` directly.
//! 4. **Full system**: start the application's orchestrator and drive it end to end.
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Product>::new();
//! mock.expect_action(ArticleId(10000))
//!     .return_err(FrameworkError::NotFound("10000".into()));
//!
//! let catalog = CatalogClient::new(mock.client());
//! assert!(catalog.adjust_stock(ArticleId(10000), "5", StockDirection::Decrease).await.is_err());
//! mock.verify();
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply the mock sends back for it.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    NextId {
        response: Result<T::Id, FrameworkError>,
    },
    Delete {
        response: Result<Option<T>, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<(Option<<T as ActorEntity>::Id>, Expectation<T>)>>>;

fn push<T: ActorEntity>(
    expectations: &Expectations<T>,
    id: Option<T::Id>,
    expectation: Expectation<T>,
) {
    expectations
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push_back((id, expectation));
}

fn answer<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were queued. A request that does not match the
/// next expectation (wrong kind, or wrong id when one was given) panics the mock task, which
/// surfaces in the test as `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();
                let Some((expected_id, expectation)) = next else {
                    panic!("Unexpected request: no expectations left");
                };

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Expectation::Get { response }) => {
                        assert_id(expected_id.as_ref(), &id);
                        answer(respond_to, response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Expectation::Create { response }) => {
                        answer(respond_to, response);
                    }
                    (ResourceRequest::List { respond_to }, Expectation::List { response }) => {
                        answer(respond_to, response);
                    }
                    (ResourceRequest::NextId { respond_to }, Expectation::NextId { response }) => {
                        answer(respond_to, response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Expectation::Delete { response }) => {
                        assert_id(expected_id.as_ref(), &id);
                        answer(respond_to, response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Expectation::Action { response },
                    ) => {
                        assert_id(expected_id.as_ref(), &id);
                        answer(respond_to, response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self, Some(id), |response| Expectation::Get { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self, None, |response| Expectation::Create { response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self, None, |response| Expectation::List { response })
    }

    /// Expects a `next_id` operation.
    pub fn expect_next_id(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self, None, |response| Expectation::NextId { response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self, Some(id), |response| Expectation::Delete { response })
    }

    /// Expects an `action` operation on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self, Some(id), |response| Expectation::Action { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

fn assert_id<Id: PartialEq + std::fmt::Debug>(expected: Option<&Id>, actual: &Id) {
    if let Some(expected) = expected {
        assert_eq!(expected, actual, "request sent for an unexpected id");
    }
}

/// Builder that queues the reply for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    id: Option<T::Id>,
    expectations: Expectations<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        mock: &MockClient<T>,
        id: Option<T::Id>,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> Self {
        Self {
            id,
            expectations: mock.expectations.clone(),
            wrap,
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        push(&self.expectations, self.id, (self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, self.id, (self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client and hands back the receiver its requests arrive on.
///
/// Useful when a test needs to look at the payload a client sent, or to control exactly when
/// the reply is delivered. For queued canned replies, prefer [`MockClient`].
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Sku {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct SkuCreate {
        label: String,
    }

    #[derive(Debug)]
    enum SkuAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Sku error")]
    struct SkuError;

    #[async_trait]
    impl ActorEntity for Sku {
        type Id = u32;
        type Create = SkuCreate;
        type Action = SkuAction;
        type ActionResult = ();
        type Context = ();
        type Error = SkuError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn next_id(store: &[Self], _ctx: &()) -> u32 {
            store.len() as u32 + 1
        }

        fn from_create_params(id: u32, params: SkuCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn handle_action(&mut self, action: SkuAction, _ctx: &()) -> Result<(), SkuError> {
            match action {}
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_create_payload() {
        let (client, mut receiver) = create_mock_client::<Sku>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(SkuCreate {
                    label: "Shaker".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "Shaker");
        responder.send(Ok(7)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn test_mock_client_replies_in_queue_order() {
        let mut mock = MockClient::<Sku>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Sku {
            id: 1,
            label: "Shaker".to_string(),
        }));
        mock.expect_delete(1).return_ok(None);
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = mock.client();
        let id = client
            .create(SkuCreate {
                label: "Shaker".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().label, "Shaker");

        assert!(client.delete(1).await.unwrap().is_none());
        assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_mismatch_drops_reply() {
        let mut mock = MockClient::<Sku>::new();
        mock.expect_next_id().return_ok(3);

        let client = mock.client();
        let result = client.list().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
