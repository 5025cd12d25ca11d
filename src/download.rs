//! CV Download Trigger

use wasm_bindgen::JsCast;

use crate::config::{RESUME_FILE_NAME, RESUME_URL};

/// Click a transient <a download> pointing at the résumé.
///
/// Failures of the remote file are left to the browser's download UI.
pub fn download_cv() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(link) = document
        .create_element("a")
        .map(|el| el.unchecked_into::<web_sys::HtmlAnchorElement>())
    else {
        return;
    };

    link.set_href(RESUME_URL);
    link.set_target("_blank");
    link.set_download(RESUME_FILE_NAME);

    if body.append_child(&link).is_ok() {
        link.click();
        let _ = body.remove_child(&link);
        web_sys::console::log_1(&"[DOWNLOAD] Résumé requested".into());
    }
}
