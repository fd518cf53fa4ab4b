use crate::constants::backing_size;
use morph_core::{MorphError, SectionRect};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn find_canvas(
    document: &web::Document,
    id: &str,
) -> Result<web::HtmlCanvasElement, MorphError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .ok_or_else(|| MorphError::MissingDomTarget(id.to_string()))
}

pub fn find_section(document: &web::Document, id: &str) -> Result<web::Element, MorphError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MorphError::MissingDomTarget(id.to_string()))
}

/// Keep the canvas backing store at CSS size times the (capped) pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
}

pub fn section_rect(section: &web::Element) -> SectionRect {
    let rect = section.get_bounding_client_rect();
    SectionRect {
        top: rect.top() as f32,
        height: rect.height() as f32,
    }
}

pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}
