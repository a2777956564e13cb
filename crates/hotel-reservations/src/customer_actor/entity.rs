//! [`ActorEntity`] implementation for [`Customer`].
//!
//! Customers have no dependencies and no custom actions: create, rename and delete.

use super::CustomerError;
use crate::model::{non_empty, Customer, CustomerCreate, CustomerUpdate};
use async_trait::async_trait;
use store_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Customer {
    type Id = String;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    const COLLECTION: &'static str = "customers";

    fn id(&self) -> &String {
        &self.customer_id
    }

    /// Trims and validates the id and name.
    fn from_create_params(params: CustomerCreate) -> Result<Self, CustomerError> {
        let customer_id = non_empty(&params.customer_id)
            .ok_or_else(|| CustomerError::Validation("customer_id must not be empty".into()))?;
        let name = non_empty(&params.name)
            .ok_or_else(|| CustomerError::Validation("name must not be empty".into()))?;
        Ok(Self::new(customer_id, name))
    }

    fn is_consistent(&self) -> bool {
        !self.customer_id.trim().is_empty()
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), CustomerError> {
        self.name = non_empty(&update.name)
            .ok_or_else(|| CustomerError::Validation("name must not be empty".into()))?;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CustomerError> {
        Ok(())
    }
}
