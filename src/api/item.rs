//! Item Endpoints

use gloo_net::http::Request;
use web_sys::AbortSignal;

use super::{ensure_success, ApiClient, ApiError};
use crate::models::{Item, NewItem};

impl ApiClient {
    /// `GET /items`, in whatever order the backend returns them
    pub async fn list_items(&self, signal: Option<&AbortSignal>) -> Result<Vec<Item>, ApiError> {
        let response = Request::get(&self.url("/items"))
            .abort_signal(signal)
            .send()
            .await?;
        Ok(ensure_success(response)?.json::<Vec<Item>>().await?)
    }

    /// `POST /items`; returns the stored item with its server-assigned id and timestamp
    pub async fn create_item(
        &self,
        new_item: &NewItem,
        signal: Option<&AbortSignal>,
    ) -> Result<Item, ApiError> {
        let response = Request::post(&self.url("/items"))
            .abort_signal(signal)
            .json(new_item)?
            .send()
            .await?;
        Ok(ensure_success(response)?.json::<Item>().await?)
    }
}
