//! Client for the external enquiry-relay form service.
//!
//! A single request-response round trip, no retries: the user's enquiry is
//! translated into the relay's JSON shape and the relay's own `success`
//! flag decides the outcome. Network failures degrade to a non-success
//! outcome like every other outbound call in this crate.

use serde::Deserialize;
use serde_json::json;
use trove_core::ItemId;

const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";
const RECIPIENT_NAME: &str = "Catalog Team";

/// A user-submitted enquiry about one item.
#[derive(Debug, Clone)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub item_name: String,
    pub item_id: ItemId,
    pub message: String,
}

/// Relay result as surfaced to the UI: success with a confirmation, or a
/// dismissible error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl RelayOutcome {
    fn sent() -> Self {
        Self {
            success: true,
            message: Some("Enquiry sent successfully!".to_string()),
            error: None,
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EnquiryRelay {
    http: reqwest::Client,
    endpoint: String,
    access_key: Option<String>,
}

impl EnquiryRelay {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_key: Some(access_key.into()),
        }
    }

    /// Read the access key from `TROVE_RELAY_ACCESS_KEY`; an unconfigured
    /// relay still constructs, but every submit fails fast.
    pub fn from_env() -> Self {
        let access_key = std::env::var("TROVE_RELAY_ACCESS_KEY").ok();
        if access_key.is_none() {
            tracing::warn!("TROVE_RELAY_ACCESS_KEY not set; enquiry relay disabled");
        }
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_key,
        }
    }

    /// Point at a different relay endpoint (tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.access_key.is_some()
    }

    /// The relay's request body for `form`.
    fn payload(&self, form: &EnquiryForm, access_key: &str) -> serde_json::Value {
        let phone = form.phone.as_deref().unwrap_or("");
        let body = format!(
            "Item: {item} (ID: {id})\n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             \n\
             Message:\n\
             {message}",
            item = form.item_name,
            id = form.item_id,
            name = form.name,
            email = form.email,
            phone = form.phone.as_deref().unwrap_or("Not provided"),
            message = form.message,
        );

        json!({
            "access_key": access_key,
            "name": form.name,
            "email": form.email,
            "phone": phone,
            "subject": format!("Enquiry for {}", form.item_name),
            "message": body,
            "from_name": form.name,
            "to_name": RECIPIENT_NAME,
        })
    }

    /// Submit `form`. One round trip; no retry.
    pub async fn submit(&self, form: &EnquiryForm) -> RelayOutcome {
        let Some(access_key) = self.access_key.as_deref() else {
            return RelayOutcome::failed("Enquiry relay access key not configured");
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.payload(form, access_key))
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "enquiry relay request failed");
                return RelayOutcome::failed("Network error occurred while sending enquiry");
            }
        };

        let status_ok = response.status().is_success();
        match response.json::<RelayResponse>().await {
            Ok(relay) if status_ok && relay.success => RelayOutcome::sent(),
            Ok(relay) => RelayOutcome::failed(
                relay
                    .message
                    .unwrap_or_else(|| "Failed to send enquiry".to_string()),
            ),
            Err(_) => RelayOutcome::failed("Failed to send enquiry"),
        }
    }
}
