use contracts::usecases::u101_contact_form::{
    ContactForm, EndpointReply, ErrorBody, FormEndpoint, SubmitError,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, FormData, RequestInit, RequestMode, Response};

/// Form endpoint client backed by the browser `fetch` API
pub struct FetchEndpoint {
    url: String,
}

impl FetchEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl FormEndpoint for FetchEndpoint {
    async fn post(&self, form: &ContactForm) -> Result<EndpointReply, SubmitError> {
        let response = post_form(&self.url, form).await.map_err(|description| {
            log::warn!("contact form: request to {} failed: {}", self.url, description);
            SubmitError::transport(Some(&description))
        })?;

        if response.ok() {
            return Ok(EndpointReply::Accepted);
        }

        log::debug!("contact form: endpoint answered {}", response.status());
        Ok(EndpointReply::Rejected(read_error_body(&response).await))
    }
}

/// POST the fields as multipart form data, asking for a JSON reply.
///
/// The error string is the failure's own description and may be empty.
async fn post_form(url: &str, form: &ContactForm) -> Result<Response, String> {
    let window = window().ok_or("No window object")?;

    let data = FormData::new().map_err(|e| describe_js_error(&e))?;
    for (name, value) in form.fields() {
        data.append_with_str(name, value)
            .map_err(|e| describe_js_error(&e))?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&data);

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| describe_js_error(&e))?;

    // No Content-Type: the browser adds the multipart boundary itself
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| describe_js_error(&e))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| describe_js_error(&e))?;

    response_value
        .dyn_into::<Response>()
        .map_err(|_| "Not a Response".to_string())
}

/// Decode `{ errors: [...] }` from a rejected reply; `None` if the body is
/// missing or not that shape.
async fn read_error_body(response: &Response) -> Option<ErrorBody> {
    let promise = response.json().ok()?;
    let json = JsFuture::from(promise).await.ok()?;
    serde_wasm_bindgen::from_value(json).ok()
}

/// `message` property of whatever was thrown; empty when it has none.
/// A bare thrown string has no `message`, so it yields an empty description.
fn describe_js_error(err: &JsValue) -> String {
    if !err.is_object() {
        return String::new();
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_default()
}
