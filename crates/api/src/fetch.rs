//! Download of remote IGC files.

use crate::error::AppError;

/// Fetch the contents of an IGC file by URL.
///
/// Any transport failure or non-2xx response is surfaced to the caller as
/// an upstream error; it never takes the server down.
pub async fn fetch_igc(client: &reqwest::Client, url: &str) -> Result<String, AppError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| AppError::UpstreamParse(format!("could not fetch '{url}': {err}")))?;

    if !response.status().is_success() {
        return Err(AppError::UpstreamParse(format!(
            "'{url}' returned HTTP {}",
            response.status()
        )));
    }

    response
        .text()
        .await
        .map_err(|err| AppError::UpstreamParse(format!("could not read '{url}': {err}")))
}
