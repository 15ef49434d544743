use crate::model::{Customer, CustomerPreference};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIZE: usize = 20_000;
pub const DEFAULT_NAME_PREFIX: &str = "Customer";

/// Shape of the synthetic input collections.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct SeedOptions {
    #[builder(default = "DEFAULT_SIZE")]
    pub size: usize,
    #[builder(default = "String::from(DEFAULT_NAME_PREFIX)")]
    pub name_prefix: String,
    /// Leave every N-th customer without a preference.
    #[builder(default)]
    pub sparse_every: Option<usize>,
    /// Give every N-th customer a second preference.
    #[builder(default)]
    pub duplicate_every: Option<usize>,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            name_prefix: String::from(DEFAULT_NAME_PREFIX),
            sparse_every: None,
            duplicate_every: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub preferences: Vec<CustomerPreference>,
}

impl Dataset {
    /// Customers get ids `0..size`; preference `i` has `total = i * 2`,
    /// duplicates have `total = i * 3`.
    pub fn seed(options: &SeedOptions) -> Self {
        let hits = |every: Option<usize>, position: usize| {
            every.is_some_and(|n| n > 0 && (position + 1) % n == 0)
        };

        let mut customers = Vec::with_capacity(options.size);
        let mut preferences = Vec::with_capacity(options.size);

        for (position, id) in (0_i64..).take(options.size).enumerate() {
            customers.push(Customer::new(id, format!("{} {id}", options.name_prefix)));

            if hits(options.sparse_every, position) {
                continue;
            }
            preferences.push(CustomerPreference::new(id, id * 2));
            if hits(options.duplicate_every, position) {
                preferences.push(CustomerPreference::new(id, id * 3));
            }
        }

        log::debug!(
            "seeded {} customers and {} preferences",
            customers.len(),
            preferences.len()
        );

        Self {
            customers,
            preferences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_is_one_to_one() {
        let data = Dataset::seed(&SeedOptionsBuilder::default().size(5_usize).build().unwrap());

        assert_eq!(data.customers.len(), 5);
        assert_eq!(data.preferences.len(), 5);
        assert_eq!(data.customers[3], Customer::new(3, "Customer 3"));
        assert_eq!(data.preferences[3], CustomerPreference::new(3, 6));
    }

    #[test]
    fn test_sparse_every_skips_preferences() {
        let options = SeedOptionsBuilder::default()
            .size(10_usize)
            .sparse_every(Some(5))
            .build()
            .unwrap();
        let data = Dataset::seed(&options);

        let ids: Vec<_> = data.preferences.iter().map(|p| p.customer_id).collect();
        assert_eq!(data.customers.len(), 10);
        assert_eq!(ids, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_duplicate_every_adds_second_row() {
        let options = SeedOptionsBuilder::default()
            .size(4_usize)
            .duplicate_every(Some(2))
            .name_prefix("Javad")
            .build()
            .unwrap();
        let data = Dataset::seed(&options);

        assert_eq!(data.customers[0].name, "Javad 0");
        assert_eq!(
            data.preferences,
            vec![
                CustomerPreference::new(0, 0),
                CustomerPreference::new(1, 2),
                CustomerPreference::new(1, 3),
                CustomerPreference::new(2, 4),
                CustomerPreference::new(3, 6),
                CustomerPreference::new(3, 9),
            ]
        );
    }

    #[test]
    fn test_zero_size_is_empty() {
        let data = Dataset::seed(&SeedOptionsBuilder::default().size(0_usize).build().unwrap());
        assert_eq!(data, Dataset::default());
    }
}
