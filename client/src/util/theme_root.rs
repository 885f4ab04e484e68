//! Preference attributes on the `<html>` element.
//!
//! Writes `data-theme`, `data-density`, and `data-radius` so the stylesheet
//! can key every token off the document root, and sets the density and
//! radius custom properties inline on the same element. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths safely no-op; the first client effect applies the real values.

#[cfg(test)]
#[path = "theme_root_test.rs"]
mod theme_root_test;

/// Apply `(attribute, value)` pairs to the document root.
pub fn apply(attributes: &[(&'static str, &'static str)]) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        for (name, value) in attributes {
            if let Err(e) = root.set_attribute(name, value) {
                log::warn!("failed to set {name} on document root: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = attributes;
    }
}

/// Set `(property, value)` CSS custom properties on the document root's
/// inline style.
pub fn apply_properties(properties: &[(&'static str, &'static str)]) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let style = root.style();
        for (name, value) in properties {
            if let Err(e) = style.set_property(name, value) {
                log::warn!("failed to set {name} on document root: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = properties;
    }
}
