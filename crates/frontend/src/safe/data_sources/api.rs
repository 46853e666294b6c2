use contracts::safe::data_sources::DataSourcesResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the list of connectors
pub async fn fetch_data_sources(api_port: u16) -> Result<DataSourcesResponse, String> {
    let response = Request::get(&api_url(api_port, "/api/safe/data-sources"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch data sources: {}", response.status()));
    }

    response
        .json::<DataSourcesResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
