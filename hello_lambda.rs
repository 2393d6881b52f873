use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

pub mod config;

pub const GREETING: &str = "Hello from Lambda!";

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    /// JSON-encoded payload, so a plain string ends up quoted.
    pub body: String,
}

pub fn greeting_response() -> Result<Response, Error> {
    Ok(Response {
        status_code: 200,
        body: serde_json::to_string(GREETING)?,
    })
}

/// The event payload is accepted as-is and never inspected.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    info!("Handling invocation {}", event.context.request_id);

    let response = greeting_response()?;

    info!("Responding with status {}", response.status_code);

    Ok(response)
}
