//! # Customer Client
//!
//! Provides a high‑level API for interacting with the `Customer` actor.
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerUpdate};
use async_trait::async_trait;
use store_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CustomerError::from)
    }

    #[instrument(skip(self))]
    pub async fn rename_customer(&self, id: String, name: String) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner
            .update(id, CustomerUpdate { name })
            .await
            .map_err(CustomerError::from)
    }

    /// Removes the customer. Reservations referencing it are left as they are.
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: String) -> Result<(), CustomerError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(CustomerError::from)
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CustomerError::from(e)
    }
}
