use crate::error::{EngineError, Result};
use crate::model::CustomerPreference;
use crate::options::DuplicatePolicy;
use hashbrown::{HashMap, HashSet};
use hashbrown::hash_map::Entry;

/// Lookup table from customer id to its preference.
///
/// Built once in O(m) so that each customer resolves in O(1) amortized.
/// When the source holds several preferences for one id, the first one wins
/// under [`DuplicatePolicy::KeepFirst`]; callers that need every row for a key
/// must not rely on this index.
#[derive(Debug, Clone, Default)]
pub struct PreferenceIndex {
    entries: HashMap<i64, CustomerPreference>,
    duplicates: usize,
}

impl PreferenceIndex {
    /// Build the index from `preferences`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PreferenceLookupAmbiguous`] for the first
    /// duplicated id when `policy` is [`DuplicatePolicy::Reject`].
    pub fn build(preferences: &[CustomerPreference], policy: DuplicatePolicy) -> Result<Self> {
        if policy == DuplicatePolicy::Reject {
            ensure_unique(preferences)?;
        }

        let mut entries: HashMap<i64, CustomerPreference> =
            HashMap::with_capacity(preferences.len());
        // Only populated for keys seen more than once.
        let mut repeated: HashMap<i64, usize> = HashMap::new();

        for pref in preferences {
            match entries.entry(pref.customer_id) {
                Entry::Vacant(slot) => {
                    slot.insert(*pref);
                }
                Entry::Occupied(_) => {
                    *repeated.entry(pref.customer_id).or_insert(1) += 1;
                }
            }
        }

        let duplicates: usize = repeated.values().map(|count| count - 1).sum();
        if duplicates > 0 {
            for (customer_id, count) in &repeated {
                log::debug!("customer {customer_id}: {count} preferences, keeping the first");
            }
            log::warn!(
                "{} customer ids have duplicate preferences; kept the first of each and dropped \
                 {duplicates}",
                repeated.len()
            );
        }

        Ok(Self {
            entries,
            duplicates,
        })
    }

    pub fn get(&self, customer_id: i64) -> Option<CustomerPreference> {
        self.entries.get(&customer_id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of preferences discarded because their id was already indexed.
    pub const fn duplicates(&self) -> usize {
        self.duplicates
    }
}

/// Fail on the first id that repeats, in input order, whether or not any
/// customer carries it.
///
/// # Errors
///
/// Returns [`EngineError::PreferenceLookupAmbiguous`] with the id and how many
/// preferences share it.
pub fn ensure_unique(preferences: &[CustomerPreference]) -> Result<()> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(preferences.len());
    match preferences.iter().find(|p| !seen.insert(p.customer_id)) {
        None => Ok(()),
        Some(repeat) => {
            let count = preferences
                .iter()
                .filter(|p| p.customer_id == repeat.customer_id)
                .count();
            Err(EngineError::PreferenceLookupAmbiguous {
                customer_id: repeat.customer_id,
                count,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(rows: &[(i64, i64)]) -> Vec<CustomerPreference> {
        rows.iter()
            .map(|&(id, total)| CustomerPreference::new(id, total))
            .collect()
    }

    #[test]
    fn test_build_indexes_every_unique_key() {
        let index =
            PreferenceIndex::build(&prefs(&[(1, 2), (2, 4), (3, 6)]), DuplicatePolicy::KeepFirst)
                .unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.duplicates(), 0);
        assert_eq!(index.get(2), Some(CustomerPreference::new(2, 4)));
        assert_eq!(index.get(9), None);
    }

    #[test]
    fn test_keep_first_retains_first_duplicate() {
        let index = PreferenceIndex::build(
            &prefs(&[(5, 10), (6, 12), (5, 99), (5, 100)]),
            DuplicatePolicy::KeepFirst,
        )
        .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.duplicates(), 2);
        assert_eq!(index.get(5), Some(CustomerPreference::new(5, 10)));
    }

    #[test]
    fn test_reject_reports_id_and_count() {
        let err = PreferenceIndex::build(
            &prefs(&[(5, 10), (6, 12), (5, 99), (5, 100)]),
            DuplicatePolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(
            err,
            EngineError::PreferenceLookupAmbiguous {
                customer_id: 5,
                count: 3
            }
        );
    }

    #[test]
    fn test_ensure_unique_reports_first_repeat_in_order() {
        assert_eq!(ensure_unique(&prefs(&[(1, 1), (2, 2), (3, 3)])), Ok(()));

        let err = ensure_unique(&prefs(&[(7, 1), (8, 1), (8, 2), (7, 2), (7, 3)])).unwrap_err();
        assert_eq!(
            err,
            EngineError::PreferenceLookupAmbiguous {
                customer_id: 8,
                count: 2
            }
        );
    }

    #[test]
    fn test_empty_input_builds_empty_index() {
        let index = PreferenceIndex::build(&[], DuplicatePolicy::Reject).unwrap();
        assert!(index.is_empty());
    }
}
