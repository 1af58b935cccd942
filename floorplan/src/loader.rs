//! Floor image loading.
//!
//! The image is fetched once at startup. The returned future settles when the
//! browser fires `load` (success) or `error` (failure); there is no timeout
//! and no retry.

use js_sys::Promise;
use log::{info, warn};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::error::FloorplanError;
use crate::extent::Extent;

/// A fully loaded floor image and its pixel dimensions.
pub struct FloorImage {
    element: HtmlImageElement,
    width: f64,
    height: f64,
}

impl FloorImage {
    /// Wrap an image element that has finished loading.
    #[must_use]
    pub fn from_element(element: HtmlImageElement) -> Self {
        let width = f64::from(element.natural_width());
        let height = f64::from(element.natural_height());
        Self { element, width, height }
    }

    #[must_use]
    pub fn element(&self) -> &HtmlImageElement {
        &self.element
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Extent `[0, 0, width, height]` of the image in its own pixel space.
    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent::from_size(self.width, self.height)
    }
}

/// Load the image at `src`, suspending until the browser has decoded it.
///
/// # Errors
///
/// Returns [`FloorplanError::ImageLoad`] when the browser reports a load
/// failure, or [`FloorplanError::Js`] if the image element can't be created.
pub async fn load_floor_image(src: &str) -> Result<FloorImage, FloorplanError> {
    let element = HtmlImageElement::new().map_err(|e| FloorplanError::js("new Image()", &e))?;

    // Handlers go in before `src` so a cached image can't fire `load` early.
    let settled = Promise::new(&mut |resolve, reject| {
        element.set_onload(Some(&resolve));
        element.set_onerror(Some(&reject));
    });
    element.set_src(src);

    let outcome = JsFuture::from(settled).await;
    element.set_onload(None);
    element.set_onerror(None);

    if outcome.is_err() {
        warn!("floor image {src} failed to load");
        return Err(FloorplanError::ImageLoad { src: src.to_owned() });
    }

    let image = FloorImage::from_element(element);
    info!("floor image {src} loaded ({}x{})", image.width(), image.height());
    Ok(image)
}
