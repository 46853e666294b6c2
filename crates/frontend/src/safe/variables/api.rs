use contracts::safe::user_variable::UserVariablesResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch curated and custom variables of the current safe
pub async fn fetch_user_variables(
    api_port: u16,
    safe_address: &str,
) -> Result<UserVariablesResponse, String> {
    let path = variables_path(safe_address);
    let response = Request::get(&api_url(api_port, &path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch variables: {}", response.status()));
    }

    response
        .json::<UserVariablesResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

fn variables_path(safe_address: &str) -> String {
    format!("/api/safe/{}/variables", urlencoding::encode(safe_address))
}
