//! Reads the optional config override embedded in the page.

/// Text of the `<script id="floorplan-config">` element, if the page has one.
pub fn read_page_config() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(crate::config::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
