// Process-wide catalog state with a single writer transition
use crate::{models::Catalog, source::CatalogSource, Error, Result};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Where the catalog is in its one-time load
#[derive(Debug, Clone)]
pub enum LoadState {
    Unloaded,
    Loading,
    Ready(Arc<Catalog>),
    /// Permanent for the session; carries the failure detail for logs
    Failed(String),
}

impl LoadState {
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Ready(_) | LoadState::Failed(_))
    }
}

/// Holds the catalog once it has been loaded
///
/// Readiness is tracked explicitly so a catalog that legitimately has zero
/// entries is never mistaken for one that has not arrived yet.
pub struct CatalogStore {
    state: watch::Sender<LoadState>,
}

impl CatalogStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(LoadState::Unloaded);
        Self { state }
    }

    /// Build a store that is already ready. Handy for tests and one-shot CLI use.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let (state, _) = watch::channel(LoadState::Ready(Arc::new(catalog)));
        Self { state }
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Watch for the load to settle
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.state.borrow(), LoadState::Ready(_))
    }

    pub fn catalog(&self) -> Option<Arc<Catalog>> {
        match &*self.state.borrow() {
            LoadState::Ready(catalog) => Some(Arc::clone(catalog)),
            _ => None,
        }
    }

    /// Load the catalog from `source`, once.
    ///
    /// Only the first call fetches. Later calls report the outcome of the
    /// first one (or `NotReady` while it is still in flight).
    pub async fn load(&self, source: &dyn CatalogSource) -> Result<Arc<Catalog>> {
        let claimed = self.state.send_if_modified(|state| {
            if matches!(state, LoadState::Unloaded) {
                *state = LoadState::Loading;
                true
            } else {
                false
            }
        });

        if !claimed {
            debug!("Catalog load already attempted, not fetching again");
            return match self.state() {
                LoadState::Ready(catalog) => Ok(catalog),
                LoadState::Failed(detail) => Err(Error::LoadError(detail)),
                LoadState::Unloaded | LoadState::Loading => Err(Error::NotReady),
            };
        }

        info!("Loading catalog from {}", source.describe());

        match source.fetch().await {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                info!("Catalog ready: {}", catalog.counts());
                self.state.send_replace(LoadState::Ready(Arc::clone(&catalog)));
                Ok(catalog)
            }
            Err(e) => {
                let detail = match e {
                    Error::LoadError(detail) => detail,
                    other => other.to_string(),
                };
                warn!("Failed to load travel data: {}", detail);
                self.state.send_replace(LoadState::Failed(detail.clone()));
                Err(Error::LoadError(detail))
            }
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Destination, resolver::search, source::MockCatalogSource};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::{oneshot, Mutex};

    /// Source whose fetch blocks until the test hands it a catalog
    struct GatedSource {
        gate: Mutex<Option<oneshot::Receiver<Catalog>>>,
        fetches: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl CatalogSource for GatedSource {
        async fn fetch(&self) -> Result<Catalog> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let gate = self.gate.lock().await.take();
            match gate {
                Some(rx) => rx.await.map_err(|_| Error::LoadError("gate dropped".into())),
                None => Err(Error::LoadError("fetched twice".into())),
            }
        }

        fn describe(&self) -> String {
            "gated".to_string()
        }
    }

    fn mock_source(result: fn() -> Result<Catalog>) -> MockCatalogSource {
        let mut source = MockCatalogSource::new();
        source.expect_describe().return_const("mock".to_string());
        source.expect_fetch().times(1).returning(move || result());
        source
    }

    #[test]
    fn test_new_store_is_not_loaded() {
        let store = CatalogStore::new();
        assert!(!store.is_loaded());
        assert!(store.catalog().is_none());
        assert!(matches!(store.state(), LoadState::Unloaded));
    }

    #[tokio::test]
    async fn test_successful_load_becomes_ready() {
        let store = CatalogStore::new();
        let source = mock_source(|| Ok(Catalog::default()));

        let catalog = store.load(&source).await.unwrap();
        assert_eq!(catalog.all_destinations().count(), 0);
        // An empty catalog is still a loaded catalog
        assert!(store.is_loaded());
    }

    #[tokio::test]
    async fn test_failed_load_is_permanent() {
        let store = CatalogStore::new();
        let source = mock_source(|| Err(Error::LoadError("404 Not Found".into())));

        let first = store.load(&source).await;
        assert!(matches!(first, Err(Error::LoadError(ref d)) if d == "404 Not Found"));
        assert!(!store.is_loaded());

        // fetch is expected exactly once; a second load must not call it
        let second = store.load(&source).await;
        assert!(matches!(second, Err(Error::LoadError(_))));
        assert!(matches!(store.state(), LoadState::Failed(_)));
    }

    #[tokio::test]
    async fn test_second_load_reuses_catalog() {
        let store = CatalogStore::new();
        let source = mock_source(|| Ok(Catalog::default()));

        let first = store.load(&source).await.unwrap();
        let second = store.load(&source).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_subscribers_see_completion() {
        let store = CatalogStore::new();
        let mut rx = store.subscribe();
        let source = mock_source(|| Ok(Catalog::default()));

        store.load(&source).await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_settled());
    }

    #[tokio::test]
    async fn test_in_flight_load_reports_not_ready() {
        let (tx, rx) = oneshot::channel();
        let source = Arc::new(GatedSource {
            gate: Mutex::new(Some(rx)),
            fetches: AtomicUsize::new(0),
        });
        let store = Arc::new(CatalogStore::new());
        let mut state = store.subscribe();

        let loader = {
            let store = Arc::clone(&store);
            let source = Arc::clone(&source);
            tokio::spawn(async move { store.load(source.as_ref()).await })
        };

        state
            .wait_for(|s| matches!(s, LoadState::Loading))
            .await
            .unwrap();

        // Still loading: searches are not ready, never "no results"
        assert!(!store.is_loaded());
        assert!(matches!(search("bora", &store), Err(Error::NotReady)));
        assert!(matches!(search("beaches", &store), Err(Error::NotReady)));

        // A concurrent load does not fetch again
        assert!(matches!(store.load(source.as_ref()).await, Err(Error::NotReady)));
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);

        let catalog = Catalog {
            beaches: vec![Destination {
                id: "1".into(),
                name: "Bora Bora".into(),
                description: String::new(),
                image_url: String::new(),
                time_zone: Some("Pacific/Tahiti".into()),
            }],
            ..Default::default()
        };
        tx.send(catalog).unwrap();

        loader.await.unwrap().unwrap();
        assert!(store.is_loaded());
        assert_eq!(search("bora", &store).unwrap().len(), 1);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }
}
