use crate::error::Result;
use crate::index::{self, PreferenceIndex};
use crate::model::{Customer, CustomerAggregate, CustomerPreference};
use crate::options::{DuplicatePolicy, Strategy};
use hashbrown::HashMap;

/// Pair every customer with its preference using `strategy`.
///
/// The output has one aggregate per customer, in input order. A customer
/// without a preference gets `preference: None`.
///
/// Duplicate preference ids are a caller hazard. Under
/// [`DuplicatePolicy::KeepFirst`] an ambiguous key resolves to the first row,
/// except for strategies where [`Strategy::is_single_match`] holds, which
/// report no match. Under [`DuplicatePolicy::Reject`] every strategy fails on
/// the first repeated id in `preferences`, whether or not a customer carries it.
///
/// # Errors
///
/// Returns [`EngineError::PreferenceLookupAmbiguous`](crate::error::EngineError)
/// when `policy` rejects duplicates and one is found.
pub fn aggregate(
    customers: &[Customer],
    preferences: &[CustomerPreference],
    strategy: Strategy,
    policy: DuplicatePolicy,
) -> Result<Vec<CustomerAggregate>> {
    match strategy {
        Strategy::LinearScan => linear_scan(customers, preferences, policy),
        Strategy::HashJoin => hash_join(customers, preferences, policy),
        Strategy::QueryJoin => query_join(customers, preferences, policy),
        // No caller-supplied index here, so build one up front.
        Strategy::PreIndexed => {
            let index = PreferenceIndex::build(preferences, policy)?;
            Ok(aggregate_with_index(customers, &index))
        }
    }
}

/// Look customers up in an index that was built beforehand.
pub fn aggregate_with_index(
    customers: &[Customer],
    index: &PreferenceIndex,
) -> Vec<CustomerAggregate> {
    customers
        .iter()
        .map(|customer| CustomerAggregate::from_customer(customer, index.get(customer.id)))
        .collect()
}

/// Nested scan: for each customer, look through every preference.
///
/// A key must match exactly once; an ambiguous key counts as no match.
pub fn linear_scan(
    customers: &[Customer],
    preferences: &[CustomerPreference],
    policy: DuplicatePolicy,
) -> Result<Vec<CustomerAggregate>> {
    if policy == DuplicatePolicy::Reject {
        index::ensure_unique(preferences)?;
    }

    let mut ambiguous = 0;
    let mut out = Vec::with_capacity(customers.len());

    for customer in customers {
        let preference = match single_match(preferences, customer.id) {
            SingleMatch::Absent => None,
            SingleMatch::One(pref) => Some(pref),
            SingleMatch::Many { first, count } => {
                ambiguous += 1;
                resolve_ambiguous(Strategy::LinearScan, customer.id, count, first)
            }
        };
        out.push(CustomerAggregate::from_customer(customer, preference));
    }

    warn_ambiguous(Strategy::LinearScan, ambiguous);
    Ok(out)
}

pub fn hash_join(
    customers: &[Customer],
    preferences: &[CustomerPreference],
    policy: DuplicatePolicy,
) -> Result<Vec<CustomerAggregate>> {
    let index = PreferenceIndex::build(preferences, policy)?;
    Ok(aggregate_with_index(customers, &index))
}

/// Declarative left join: group preferences by key, then map customers onto
/// their groups.
pub fn query_join(
    customers: &[Customer],
    preferences: &[CustomerPreference],
    policy: DuplicatePolicy,
) -> Result<Vec<CustomerAggregate>> {
    if policy == DuplicatePolicy::Reject {
        index::ensure_unique(preferences)?;
    }

    let groups = preferences.iter().fold(
        HashMap::<i64, Vec<CustomerPreference>>::with_capacity(preferences.len()),
        |mut acc, pref| {
            acc.entry(pref.customer_id).or_default().push(*pref);
            acc
        },
    );

    let mut ambiguous = 0;
    let out = customers
        .iter()
        .map(|customer| {
            let preference = match groups.get(&customer.id).map(Vec::as_slice) {
                None | Some([]) => None,
                Some([only]) => Some(*only),
                Some(group @ [first, ..]) => {
                    ambiguous += 1;
                    resolve_ambiguous(Strategy::QueryJoin, customer.id, group.len(), *first)
                }
            };
            CustomerAggregate::from_customer(customer, preference)
        })
        .collect();

    warn_ambiguous(Strategy::QueryJoin, ambiguous);
    Ok(out)
}

enum SingleMatch {
    Absent,
    One(CustomerPreference),
    Many {
        first: CustomerPreference,
        count: usize,
    },
}

fn single_match(preferences: &[CustomerPreference], customer_id: i64) -> SingleMatch {
    let mut matches = preferences.iter().filter(|p| p.customer_id == customer_id);
    match (matches.next(), matches.next()) {
        (None, _) => SingleMatch::Absent,
        (Some(pref), None) => SingleMatch::One(*pref),
        (Some(first), Some(_)) => SingleMatch::Many {
            first: *first,
            count: 2 + matches.count(),
        },
    }
}

/// Pick the result for a key several preferences share. Only reached under
/// [`DuplicatePolicy::KeepFirst`].
fn resolve_ambiguous(
    strategy: Strategy,
    customer_id: i64,
    count: usize,
    first: CustomerPreference,
) -> Option<CustomerPreference> {
    log::debug!("{strategy}: customer {customer_id} has {count} preferences");
    if strategy.is_single_match() {
        None
    } else {
        Some(first)
    }
}

fn warn_ambiguous(strategy: Strategy, ambiguous: usize) {
    if ambiguous > 0 {
        log::warn!("{strategy}: {ambiguous} customers matched more than one preference");
    }
}
