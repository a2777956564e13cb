use serde::{Deserialize, Serialize};

/// A customer who can hold reservations.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](store_actor::ActorEntity) trait and is stored
/// in the `customers` collection by a [`ResourceActor`](store_actor::ResourceActor).
///
/// Customers may be deleted while reservations still reference them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
}

impl Customer {
    pub fn new(customer_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
        }
    }
}

/// Payload for creating a customer.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub customer_id: String,
    pub name: String,
}

/// Payload for renaming a customer.
#[derive(Debug, Clone)]
pub struct CustomerUpdate {
    pub name: String,
}
