use crate::date_key::DateKey;
use crate::errors::CalendarError;
use crate::store::{KEY_LAST_MESSAGE, KEY_LAST_OPENED_DATE, KEY_USED_INDICES, KeyValueStore};

/// The most recent day opened and what it revealed.
///
/// A record from an earlier day is never pruned; it is only shadowed by the
/// date comparison in [`RevealState::message_for`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    pub date_key: Option<String>,
    pub message: Option<String>,
}

impl RevealState {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            date_key: store.get(KEY_LAST_OPENED_DATE),
            message: store.get(KEY_LAST_MESSAGE),
        }
    }

    pub fn opened_on(&self, today: &DateKey) -> bool {
        self.date_key.as_deref() == Some(today.as_str())
    }

    /// The stored message, if it belongs to `today` and is non-empty.
    pub fn message_for(&self, today: &DateKey) -> Option<&str> {
        if !self.opened_on(today) {
            return None;
        }
        self.message.as_deref().filter(|message| !message.is_empty())
    }
}

pub fn save_reveal(store: &mut impl KeyValueStore, today: &DateKey, message: &str) {
    store.set(KEY_LAST_OPENED_DATE, today.to_string());
    store.set(KEY_LAST_MESSAGE, message.to_string());
}

pub fn clear_reveal(store: &mut impl KeyValueStore) {
    store.remove(KEY_LAST_OPENED_DATE);
    store.remove(KEY_LAST_MESSAGE);
}

/// Absent means nothing has been revealed yet.
pub fn load_used_indices(store: &impl KeyValueStore) -> Result<Vec<usize>, CalendarError> {
    match store.get(KEY_USED_INDICES) {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(&raw).map_err(|source| CalendarError::Parse {
            key: KEY_USED_INDICES,
            source,
        }),
    }
}

pub fn save_used_indices(store: &mut impl KeyValueStore, used: &[usize]) {
    let encoded = serde_json::Value::from(used.to_vec()).to_string();
    store.set(KEY_USED_INDICES, encoded);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreData;
    use chrono::NaiveDate;

    fn day(d: u32) -> DateKey {
        DateKey::from_date(NaiveDate::from_ymd_opt(2025, 12, d).unwrap())
    }

    #[test]
    fn yesterdays_reveal_is_stale_but_kept() {
        let mut store = StoreData::default();
        save_reveal(&mut store, &day(4), "yesterday");

        let state = RevealState::load(&store);
        assert_eq!(state.message_for(&day(5)), None);
        assert_eq!(state.message_for(&day(4)), Some("yesterday"));
        assert_eq!(store.get(KEY_LAST_MESSAGE).as_deref(), Some("yesterday"));
    }

    #[test]
    fn empty_message_is_not_a_valid_reveal() {
        let mut store = StoreData::default();
        save_reveal(&mut store, &day(5), "");
        let state = RevealState::load(&store);
        assert!(state.opened_on(&day(5)));
        assert_eq!(state.message_for(&day(5)), None);
    }

    #[test]
    fn used_indices_default_to_empty() {
        let store = StoreData::default();
        assert!(load_used_indices(&store).unwrap().is_empty());
    }

    #[test]
    fn used_indices_are_stored_as_json_array() {
        let mut store = StoreData::default();
        save_used_indices(&mut store, &[3, 0, 7]);
        assert_eq!(store.get(KEY_USED_INDICES).as_deref(), Some("[3,0,7]"));
        assert_eq!(load_used_indices(&store).unwrap(), vec![3, 0, 7]);
    }

    #[test]
    fn malformed_used_indices_surface_a_parse_error() {
        let mut store = StoreData::default();
        store.set(KEY_USED_INDICES, "[1, oops".into());
        let err = load_used_indices(&store).unwrap_err();
        assert!(matches!(err, CalendarError::Parse { key: KEY_USED_INDICES, .. }));
    }
}
