use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

impl Customer {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A per-customer preference row. `customer_id` refers to [`Customer::id`]
/// but is neither guaranteed unique nor present for every customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerPreference {
    pub customer_id: i64,
    pub total: i64,
}

impl CustomerPreference {
    pub const fn new(customer_id: i64, total: i64) -> Self {
        Self { customer_id, total }
    }
}

/// A customer paired with its (optional) preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAggregate {
    pub id: i64,
    pub name: String,
    pub preference: Option<CustomerPreference>,
}

impl CustomerAggregate {
    pub fn from_customer(customer: &Customer, preference: Option<CustomerPreference>) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            preference,
        }
    }

    pub const fn is_matched(&self) -> bool {
        self.preference.is_some()
    }
}
