use crate::constants::{
    CATEGORIES_ERROR_MSG, CATEGORIES_PATH, MEALS_ERROR_MSG, MEALS_PATH, RANDOM_DINNER_PATH,
    REQUEST_ERROR_MSG,
};
use crate::data_types::dinner_data_types::{DinnerSuggestion, Dish};
use crate::data_types::Category;
use crate::errors::DinnerError;

use serde::de::DeserializeOwned;
use std::{sync::Arc, time::Instant};
use tokio::sync::RwLock;

/// Builds the random dinner URL. An empty category list requests an
/// unfiltered dinner.
pub fn dinner_url(base: &str, categories: &[Category]) -> String {
    let mut url = format!("{}{}", base.trim_end_matches('/'), RANDOM_DINNER_PATH);
    if !categories.is_empty() {
        let category_params = categories
            .iter()
            .map(Category::as_str)
            .collect::<Vec<&str>>()
            .join(",");
        url += &format!("?categories={}", category_params);
    }
    url
}

#[derive(Clone, Debug)]
pub struct DinnerClient {
    client: reqwest::Client,
    base_url: String,
}

impl DinnerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_dinner(
        &self,
        categories: &[Category],
    ) -> Result<DinnerSuggestion, DinnerError> {
        let url = dinner_url(&self.base_url, categories);
        self.get_json(&url, REQUEST_ERROR_MSG).await
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, DinnerError> {
        let url = format!("{}{}", self.base_url, CATEGORIES_PATH);
        self.get_json(&url, CATEGORIES_ERROR_MSG).await
    }

    pub async fn get_meals(&self) -> Result<Vec<Dish>, DinnerError> {
        let url = format!("{}{}", self.base_url, MEALS_PATH);
        self.get_json(&url, MEALS_ERROR_MSG).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        status_msg: &'static str,
    ) -> Result<T, DinnerError> {
        let now = Instant::now();
        let resp = self.client.get(url).send().await?;
        log::info!("GET {} -> {}: {:.2?}", url, resp.status(), now.elapsed());

        if !resp.status().is_success() {
            return Err(DinnerError::Request(status_msg));
        }

        Ok(resp.json::<T>().await?)
    }
}

/// Observable fetch state, shared between the fetch task and whoever renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    pub dinner: Option<DinnerSuggestion>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Wraps a [`DinnerClient`] and keeps the last result, the loading flag and
/// the last error. Calls are not serialized: overlapping calls race and the
/// last one to resolve wins.
#[derive(Clone, Debug)]
pub struct DinnerFetcher {
    client: DinnerClient,
    state: Arc<RwLock<FetchState>>,
}

impl DinnerFetcher {
    pub fn new(client: DinnerClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(FetchState::default())),
        }
    }

    pub fn client(&self) -> &DinnerClient {
        &self.client
    }

    pub async fn snapshot(&self) -> FetchState {
        self.state.read().await.clone()
    }

    pub async fn get_random_dinner(&self, categories: &[Category]) {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.client.fetch_dinner(categories).await;

        let mut state = self.state.write().await;
        match result {
            Ok(dinner) => state.dinner = Some(dinner),
            Err(e) => {
                log::warn!("Random dinner request failed: {}", e);
                state.error = Some(e.to_string());
            }
        }
        state.loading = false;
    }
}
