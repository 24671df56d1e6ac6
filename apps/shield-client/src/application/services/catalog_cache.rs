//! Session-lifetime cache of the remote food-box catalog.

use tracing::warn;

use crate::application::ports::{CatalogPort, RemoteError};
use crate::domain::food_box::FoodBox;

/// Lazily populated cache of all food boxes the remote authority offers.
///
/// The catalog is fetched at most once, on first demand. A failed fetch
/// latches for the rest of the session: dependent reads keep failing
/// without touching the network until the caller explicitly triggers a
/// fresh attempt with [`Self::refresh`].
///
/// Cached instances are immutable templates; callers must deep-copy
/// (`Clone`) before storing a box into candidate or order state.
#[derive(Debug, Default)]
pub struct CatalogCache {
    state: Option<Result<Vec<FoodBox>, RemoteError>>,
}

impl CatalogCache {
    /// Create an unpopulated cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { state: None }
    }

    /// The cached catalog, fetching it on first demand.
    ///
    /// # Errors
    ///
    /// Replays the original [`RemoteError`] if the one permitted fetch
    /// attempt failed earlier in the session.
    pub fn boxes<C: CatalogPort>(&mut self, port: &C) -> Result<&[FoodBox], RemoteError> {
        let state = self.state.get_or_insert_with(|| {
            port.fetch_all_food_boxes()
                .inspect_err(|err| warn!(error = %err, "food box catalog fetch failed"))
        });
        match state {
            Ok(boxes) => Ok(boxes.as_slice()),
            Err(err) => Err(err.clone()),
        }
    }

    /// Look up a catalog box by its numeric id.
    ///
    /// # Errors
    ///
    /// Same as [`Self::boxes`].
    pub fn find<C: CatalogPort>(
        &mut self,
        port: &C,
        food_box_id: u32,
    ) -> Result<Option<&FoodBox>, RemoteError> {
        let id = food_box_id.to_string();
        Ok(self.boxes(port)?.iter().find(|b| b.id() == id))
    }

    /// Discard any cached or latched state and fetch the catalog again.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, which also latches as the new state.
    pub fn refresh<C: CatalogPort>(&mut self, port: &C) -> Result<(), RemoteError> {
        self.state = None;
        self.boxes(port).map(|_| ())
    }

    /// Whether the cache currently holds a catalog.
    #[must_use]
    pub const fn is_populated(&self) -> bool {
        matches!(self.state, Some(Ok(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockCatalogPort;
    use crate::domain::food_box::DietaryPreference;

    fn one_box() -> Vec<FoodBox> {
        vec![FoodBox::new("1", "box a", DietaryPreference::None, vec![])]
    }

    #[test]
    fn fetches_exactly_once() {
        let mut port = MockCatalogPort::new();
        port.expect_fetch_all_food_boxes()
            .times(1)
            .returning(|| Ok(one_box()));

        let mut cache = CatalogCache::new();
        assert_eq!(cache.boxes(&port).unwrap().len(), 1);
        assert_eq!(cache.boxes(&port).unwrap().len(), 1);
        assert!(cache.is_populated());
    }

    #[test]
    fn fetch_failure_latches_for_the_session() {
        let mut port = MockCatalogPort::new();
        port.expect_fetch_all_food_boxes().times(1).returning(|| {
            Err(RemoteError::Transport {
                message: "connection refused".into(),
            })
        });

        let mut cache = CatalogCache::new();
        assert!(cache.boxes(&port).is_err());
        // Second read must not hit the port again.
        assert!(cache.boxes(&port).is_err());
        assert!(!cache.is_populated());
    }

    #[test]
    fn refresh_retries_after_a_failure() {
        let mut port = MockCatalogPort::new();
        let mut attempts = 0;
        port.expect_fetch_all_food_boxes()
            .times(2)
            .returning(move || {
                attempts += 1;
                if attempts == 1 {
                    Err(RemoteError::Transport {
                        message: "connection refused".into(),
                    })
                } else {
                    Ok(one_box())
                }
            });

        let mut cache = CatalogCache::new();
        assert!(cache.boxes(&port).is_err());
        cache.refresh(&port).unwrap();
        assert_eq!(cache.boxes(&port).unwrap().len(), 1);
    }

    #[test]
    fn find_matches_on_stringified_id() {
        let mut port = MockCatalogPort::new();
        port.expect_fetch_all_food_boxes()
            .returning(|| Ok(one_box()));

        let mut cache = CatalogCache::new();
        assert!(cache.find(&port, 1).unwrap().is_some());
        assert!(cache.find(&port, 2).unwrap().is_none());
    }
}
