//! Relay Liveness Probe
//!
//! One `GET /` against a running relay. Passes only on a JSON body whose
//! `ok` field is `true`.

use std::time::Duration;

use serde_json::Value;

use crate::report::{Finding, Report};

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// `server-probe`
pub async fn probe_liveness(url: &str, timeout: Duration) -> Report {
    let fail = |message: String| Report::new().with(Finding::fatal(2, message));

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build();
    let client = match client {
        Ok(client) => client,
        Err(e) => return fail(format!("Could not build HTTP client: {e}")),
    };

    let body = match client.get(url).send().await {
        Ok(response) => match response.text().await {
            Ok(body) => body,
            Err(e) => return fail(format!("Error reading server response: {e}")),
        },
        Err(e) => return fail(format!("Error connecting to server: {e}")),
    };
    tracing::debug!(%url, %body, "probe response");

    match serde_json::from_str::<Value>(&body) {
        Ok(value) if value.get("ok") == Some(&Value::Bool(true)) => {
            Report::new().with(Finding::ok("Server test OK — received { ok: true }"))
        }
        Ok(_) => fail(format!("Unexpected server response: {body}")),
        Err(e) => fail(format!("Server response not JSON: {e}")),
    }
}
