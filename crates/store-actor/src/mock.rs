//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of expectations instead of a running actor. It lets you test code that
//! *depends* on an actor (e.g. the reservation actor calling the hotel actor) without
//! spawning the dependency or touching storage.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! 1. **Client logic** – [`create_mock_client`] plus [`expect_action`]/[`expect_get`] to
//!    inspect each request and answer it by hand.
//! 2. **Single actor** – spawn one `ResourceActor` over a `MemoryStore`.
//! 3. **Actor with mocked dependencies** – a real actor whose context holds clients built
//!    from [`MockClient`]s (see `tests/reservation_actor_test.rs` in `hotel-reservations`).
//! 4. **Full system** – every actor real, end to end.
//!
//! ## Fluent Expectations
//!
//! ```rust,ignore
//! let mut hotels = MockClient::<Hotel>::new();
//! hotels.expect_get("H1".to_string()).return_ok(Some(hotel));
//! hotels.expect_action("H1".to_string()).return_err(FrameworkError::ActorClosed);
//!
//! let client = HotelClient::new(hotels.client());
//! // ... exercise code using `client` ...
//! hotels.verify(); // every expectation consumed, no unexpected request
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next expectation
//! (wrong kind or wrong id) is recorded, its response channel is dropped (the caller sees
//! `FrameworkError::ActorDropped`), and [`MockClient::verify`] fails.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request to the mock client and the response to give.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    mismatches: Vec<String>,
}

type SharedState<T> = Arc<Mutex<MockState<T>>>;

fn lock<T: ActorEntity>(state: &SharedState<T>) -> MutexGuard<'_, MockState<T>> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: SharedState<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: SharedState<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            mismatches: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = lock(&task_state);
                let expectation = state.expectations.pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response }))
                        if id == expected =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let found = describe_request(&request);
                        let wanted = expectation
                            .as_ref()
                            .map(describe_expectation)
                            .unwrap_or_else(|| "nothing".to_string());
                        state
                            .mismatches
                            .push(format!("unexpected {found}, expected {wanted}"));
                        // `request` is dropped here, closing its response channel.
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            state: self.state.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            state: self.state.clone(),
        }
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.mismatches.is_empty() {
            panic!("Mock received unexpected requests: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

fn describe_request<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("Create({params:?})"),
        ResourceRequest::Get { id, .. } => format!("Get({id})"),
        ResourceRequest::List { .. } => "List".to_string(),
        ResourceRequest::Update { id, .. } => format!("Update({id})"),
        ResourceRequest::Delete { id, .. } => format!("Delete({id})"),
        ResourceRequest::Action { id, action, .. } => format!("Action({id}, {action:?})"),
    }
}

fn describe_expectation<T: ActorEntity>(expectation: &Expectation<T>) -> String {
    match expectation {
        Expectation::Get { id, .. } => format!("Get({id})"),
        Expectation::List { .. } => "List".to_string(),
        Expectation::Create { .. } => "Create".to_string(),
        Expectation::Action { id, .. } => format!("Action({id})"),
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    state: SharedState<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        lock(&self.state).expectations.push_back(Expectation::Get {
            id: self.id,
            response,
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    state: SharedState<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        lock(&self.state)
            .expectations
            .push_back(Expectation::List { response: Ok(items) });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.state)
            .expectations
            .push_back(Expectation::List {
                response: Err(error),
            });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    state: SharedState<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    /// Sets the expectation to return the stored entity.
    pub fn return_ok(self, item: T) {
        lock(&self.state)
            .expectations
            .push_back(Expectation::Create { response: Ok(item) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.state)
            .expectations
            .push_back(Expectation::Create {
                response: Err(error),
            });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    state: SharedState<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        lock(&self.state).expectations.push_back(Expectation::Action {
            id: self.id,
            response,
        });
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when a test wants to inspect each request and answer it by hand; see
/// [`MockClient`] for the fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
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
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Guest {
        guest_id: String,
        name: String,
    }

    #[derive(Debug)]
    struct GuestCreate {
        guest_id: String,
        name: String,
    }

    #[derive(Debug)]
    enum GuestAction {
        CheckIn,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Guest error")]
    struct GuestError;

    #[async_trait]
    impl ActorEntity for Guest {
        type Id = String;
        type Create = GuestCreate;
        type Update = ();
        type Action = GuestAction;
        type ActionResult = bool;
        type Context = ();
        type Error = GuestError;

        const COLLECTION: &'static str = "guests";

        fn id(&self) -> &String {
            &self.guest_id
        }

        fn from_create_params(params: GuestCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                guest_id: params.guest_id,
                name: params.name,
            })
        }

        async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _action: GuestAction, _ctx: &()) -> Result<bool, Self::Error> {
            Ok(true)
        }
    }

    fn guest(id: &str) -> Guest {
        Guest {
            guest_id: id.to_string(),
            name: "Test Guest".to_string(),
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers_answer_requests() {
        let (client, mut receiver) = create_mock_client::<Guest>(10);

        let task = tokio::spawn(async move { client.perform_action("G1".into(), GuestAction::CheckIn).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "G1");
        assert!(matches!(action, GuestAction::CheckIn));
        responder.send(Ok(true)).unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Guest>::new();
        mock.expect_create().return_ok(guest("G1"));
        mock.expect_get("G1".into()).return_ok(Some(guest("G1")));
        mock.expect_list().return_ok(vec![guest("G1")]);

        let client = mock.client();

        let created = client
            .create(GuestCreate {
                guest_id: "G1".into(),
                name: "Test Guest".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.guest_id, "G1");
        assert_eq!(client.get("G1".into()).await.unwrap(), Some(guest("G1")));
        assert_eq!(client.list().await.unwrap().len(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_returns_injected_errors() {
        let mut mock = MockClient::<Guest>::new();
        mock.expect_get("G1".into()).return_err(FrameworkError::ActorClosed);

        let result = mock.client().get("G1".into()).await;

        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "unexpected")]
    async fn test_verify_fails_on_wrong_id() {
        let mut mock = MockClient::<Guest>::new();
        mock.expect_get("G1".into()).return_ok(None);

        let result = mock.client().get("G2".into()).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "remaining")]
    async fn test_verify_fails_on_unmet_expectation() {
        let mut mock = MockClient::<Guest>::new();
        mock.expect_list().return_ok(Vec::new());

        mock.verify();
    }
}
