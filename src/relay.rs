//! Form Relay Bindings
//!
//! Frontend binding to the hosted form relay that forwards contact
//! messages by email. One POST per submission, no retry, no timeout.

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::FORM_RELAY_ENDPOINT;
use crate::contact::{classify_status, ContactSubmission, SubmitError};

// ========================
// Reply Types
// ========================

/// JSON reply sent when the request carries `Accept: application/json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelayReply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub errors: Vec<RelayFieldError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayFieldError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

impl RelayReply {
    /// One line per rejected field, for the console
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| match &e.field {
                Some(field) => format!("{}: {}", field, e.message),
                None => e.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// ========================
// Commands
// ========================

/// POST the submission; Ok only for a 2xx response
pub async fn submit_contact(submission: &ContactSubmission) -> Result<(), SubmitError> {
    let window = web_sys::window().ok_or_else(|| SubmitError::Request("no window".to_string()))?;

    let headers = web_sys::Headers::new().map_err(|e| SubmitError::Request(js_error(e)))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| SubmitError::Request(js_error(e)))?;
    headers
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(|e| SubmitError::Request(js_error(e)))?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web_sys::RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&submission.to_form_body()));

    let request = web_sys::Request::new_with_str_and_init(FORM_RELAY_ENDPOINT, &init)
        .map_err(|e| SubmitError::Request(js_error(e)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| SubmitError::Network(js_error(e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| SubmitError::Network(js_error(e)))?;

    let status = response.status();
    web_sys::console::log_1(&format!("[RELAY] POST {} -> {}", FORM_RELAY_ENDPOINT, status).into());

    if let Err(err) = classify_status(status) {
        if let Some(reply) = read_reply(&response).await {
            web_sys::console::error_1(&format!("[RELAY] Rejected: {}", reply.summary()).into());
        }
        return Err(err);
    }
    Ok(())
}

async fn read_reply(response: &web_sys::Response) -> Option<RelayReply> {
    let promise = response.json().ok()?;
    let value = JsFuture::from(promise).await.ok()?;
    serde_wasm_bindgen::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_summary_lists_field_errors() {
        let reply: RelayReply = serde_json::from_str(
            r#"{"errors":[{"field":"email","code":"TYPE_EMAIL","message":"should be an email"},{"message":"form not found"}]}"#,
        )
        .unwrap();
        assert!(!reply.ok);
        assert_eq!(reply.summary(), "email: should be an email; form not found");
    }

    #[test]
    fn test_success_reply_ignores_extra_fields() {
        let reply: RelayReply = serde_json::from_str(r#"{"ok":true,"next":"/thanks"}"#).unwrap();
        assert!(reply.ok);
        assert!(reply.errors.is_empty());
        assert_eq!(reply.summary(), "");
    }
}
