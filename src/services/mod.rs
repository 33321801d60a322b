//! Service layer: one module per API resource.
//!
//! Every operation follows the same shape: validate the request model
//! locally (mutating operations fail here without touching the network),
//! issue exactly one transport call, then either decode the success body
//! into its typed model or decode the gateway's error envelope. No
//! operation retries or holds state across calls.

pub mod account;
pub mod cards;
pub mod charges;
pub mod customers;
pub mod tokens;
pub mod transactions;
pub mod transfers;

pub use account::Accounts;
pub use cards::Cards;
pub use charges::Charges;
pub use customers::Customers;
pub use tokens::Tokens;
pub use transactions::Transactions;
pub use transfers::Transfers;

use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    error::{Error, Result},
    params::RequestParams,
    transport::TransportResponse,
};

/// Error envelope returned by the gateway on non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    code: String,
    message: String,
    #[serde(default)]
    location: Option<String>,
}

/// Validates a request model and renders its form-encoded body.
///
/// This is the single gate between request models and the wire: an
/// invalid model fails here with the full field map and nothing is sent.
pub(crate) fn form_body<P: RequestParams>(info: &P) -> Result<String> {
    info.validate().map_err(Error::Validation)?;
    Ok(info.to_params().encode())
}

/// Appends a model's encoded parameters to a path as a query string.
pub(crate) fn paged_path<P: RequestParams>(base: &str, params: &P) -> String {
    let query = params.to_params().encode();
    if query.is_empty() { base.to_owned() } else { format!("{base}?{query}") }
}

/// Maps a transport response to its decoded success model.
///
/// Non-2xx responses become [`Error::Api`] carrying the server's own
/// code and message; undecodable success bodies become [`Error::Decode`]
/// with the offending payload attached.
pub(crate) fn decode_response<M: DeserializeOwned>(
    response: TransportResponse,
    context: &'static str,
) -> Result<M> {
    if !response.is_success() {
        return Err(api_error(&response));
    }
    serde_json::from_slice(&response.body).map_err(|e| Error::decode(context, &e, &response.body))
}

/// Decodes the gateway error envelope out of a non-2xx response.
///
/// An error body that does not match the envelope shape degrades to a
/// generic code with the raw body as the message, so the status is never
/// swallowed.
fn api_error(response: &TransportResponse) -> Error {
    match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
        Ok(envelope) => Error::Api {
            status: response.status,
            code: envelope.code,
            message: envelope.message,
            location: envelope.location,
        },
        Err(_) => Error::Api {
            status: response.status,
            code: "unknown".to_owned(),
            message: String::from_utf8_lossy(&response.body).into_owned(),
            location: None,
        },
    }
}
