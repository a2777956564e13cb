//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get` and `list` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read operations.
///
/// Writes stay on the concrete clients: not every resource allows every write
/// (hotels and reservations are never deleted, for instance).
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct HotelClient {
///     inner: ResourceClient<Hotel>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Hotel> for HotelClient {
///     type Error = HotelError;
///
///     fn inner(&self) -> &ResourceClient<Hotel> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         HotelError::from(e)
///     }
/// }
///
/// // get() and list() are provided automatically!
/// let hotel = hotel_client.get("H1".to_string()).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID. Absence is `Ok(None)`, not an error.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch the whole collection in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
