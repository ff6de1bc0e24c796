//! Theme preference handling.
//!
//! The stored preference wins; otherwise the system color scheme decides.
//! Applying a theme sets the `.dark` class on the document element so the
//! stylesheet can key everything off one selector. Requires a browser
//! environment; native builds compile the same API as no-ops.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "atrium_theme";

/// Resolve the initial theme: stored preference first, then the system's.
#[must_use]
pub fn initial_dark_mode() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            match storage.get_item(STORAGE_KEY).ok().flatten().as_deref() {
                Some("dark") => return true,
                Some("light") => return false,
                _ => {}
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply or remove the `.dark` class on the document element.
pub fn apply(dark: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            if dark {
                let _ = class_list.add_1("dark");
            } else {
                let _ = class_list.remove_1("dark");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and persist the choice.
#[must_use]
pub fn toggle(current_dark: bool) -> bool {
    let next = !current_dark;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
            }
        }
    }
    next
}
