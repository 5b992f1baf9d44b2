use super::{DataError, Fetch};
use crate::shared::config::DataConfig;
use contracts::dashboards::d100_cohort_analysis::CohortDataset;
use contracts::dashboards::d200_rfm_segmentation::RfmDataset;
use contracts::dashboards::d300_descriptive::DescriptiveDataset;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const COHORT_KEY: &str = "cohort";
pub const RFM_KEY: &str = "rfm";
pub const DESCRIPTIVE_KEY: &str = "descriptive";

/// Fetches JSON documents by logical key and caches them for the session.
///
/// Concurrent misses on the same key are not coalesced: each issues its own
/// request and the last response to arrive stays in the cache.
pub struct DataService {
    fetcher: Rc<dyn Fetch>,
    config: DataConfig,
    cache: RefCell<HashMap<String, Rc<Value>>>,
}

impl DataService {
    pub fn new(fetcher: Rc<dyn Fetch>, config: DataConfig) -> Self {
        Self {
            fetcher,
            config,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// URL of a logical key. Unknown keys are taken as URLs themselves.
    pub fn resolve_url(&self, key: &str) -> String {
        let file = match key {
            COHORT_KEY => &self.config.cohort,
            RFM_KEY => &self.config.rfm,
            DESCRIPTIVE_KEY => &self.config.descriptive,
            _ => return key.to_string(),
        };
        let base = self.config.base_path.trim_end_matches('/');
        if base.is_empty() {
            file.clone()
        } else {
            format!("{}/{}", base, file)
        }
    }

    pub fn is_cached(&self, key: &str) -> bool {
        self.cache.borrow().contains_key(key)
    }

    /// Returns the document for `key`, from the cache when `use_cache` is set
    /// and the key was loaded before. A cache hit hands out the same `Rc`.
    pub async fn fetch_data(&self, key: &str, use_cache: bool) -> Result<Rc<Value>, DataError> {
        if use_cache {
            if let Some(hit) = self.cache.borrow().get(key) {
                log::debug!("cache hit for '{}'", key);
                return Ok(hit.clone());
            }
        }

        let url = self.resolve_url(key);
        log::debug!("fetching '{}' from {}", key, url);

        let response = self
            .fetcher
            .get(&url)
            .await
            .map_err(|message| DataError::Network {
                key: key.to_string(),
                message,
            })?;

        if !response.ok() {
            return Err(DataError::Fetch {
                key: key.to_string(),
                status: response.status,
            });
        }

        let document: Value =
            serde_json::from_str(&response.body).map_err(|err| DataError::Parse {
                key: key.to_string(),
                message: err.to_string(),
            })?;

        let document = Rc::new(document);
        self.cache
            .borrow_mut()
            .insert(key.to_string(), document.clone());
        Ok(document)
    }

    /// Drops one cached key, or everything with `None`.
    pub fn clear_cache(&self, key: Option<&str>) {
        let mut cache = self.cache.borrow_mut();
        match key {
            Some(key) => {
                cache.remove(key);
            }
            None => cache.clear(),
        }
    }

    /// Warms the cache with the three datasets. Failures are logged only.
    pub async fn preload_all(&self) {
        let (cohort, rfm, descriptive) = futures::join!(
            self.fetch_data(COHORT_KEY, true),
            self.fetch_data(RFM_KEY, true),
            self.fetch_data(DESCRIPTIVE_KEY, true),
        );

        let failures: Vec<DataError> = [cohort, rfm, descriptive]
            .into_iter()
            .filter_map(Result::err)
            .collect();

        if failures.is_empty() {
            log::info!("all datasets preloaded");
        }
        for err in failures {
            log::error!("preload failed: {}", err);
        }
    }

    pub async fn load_cohort_data(&self) -> Result<CohortDataset, DataError> {
        self.load_typed(COHORT_KEY).await
    }

    pub async fn load_rfm_data(&self) -> Result<RfmDataset, DataError> {
        self.load_typed(RFM_KEY).await
    }

    pub async fn load_descriptive_data(&self) -> Result<DescriptiveDataset, DataError> {
        self.load_typed(DESCRIPTIVE_KEY).await
    }

    async fn load_typed<T: DeserializeOwned>(&self, key: &str) -> Result<T, DataError> {
        let document = self.fetch_data(key, true).await?;
        T::deserialize(&*document).map_err(|err| DataError::Parse {
            key: key.to_string(),
            message: err.to_string(),
        })
    }
}
