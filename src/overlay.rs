use crate::constants::{PROCESSING_ID, RETRY_PROMPT, UPLOAD_ERROR_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show_error(document: &web::Document, detail: &str) {
    if let Some(el) = document.get_element_by_id(UPLOAD_ERROR_ID) {
        el.set_text_content(Some(RETRY_PROMPT));
        _ = el.set_attribute("title", detail);
        dom::set_hidden(&el, false);
    }
}

#[inline]
pub fn hide_error(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(UPLOAD_ERROR_ID) {
        dom::set_hidden(&el, true);
    }
}

#[inline]
pub fn set_processing(document: &web::Document, processing: bool) {
    if let Some(el) = document.get_element_by_id(PROCESSING_ID) {
        dom::set_hidden(&el, !processing);
    }
}
