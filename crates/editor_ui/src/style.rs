//! One-time installation of the widget stylesheet.

use std::sync::OnceLock;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Baseline rules keyed on the `data-ui-*` contract. Themes layer their own tokens on top.
pub const STYLESHEET: &str = r#"
.ui-popover { position: relative; display: inline-flex; flex-direction: column; min-width: 12rem; }
.ui-menu-surface[data-ui-slot="popover-content"] { position: absolute; top: calc(100% + 4px); left: 0; right: 0; z-index: 20; display: flex; flex-direction: column; max-height: 300px; overflow: hidden; }
.ui-menu-surface[hidden] { display: none; }
[data-ui-kind="combobox-trigger"] { position: relative; display: flex; align-items: center; gap: 4px; min-height: 24px; padding: 2px 24px 2px 2px; cursor: pointer; }
[data-ui-kind="combobox-trigger"] > .ui-icon { position: absolute; right: 6px; top: 50%; transform: translateY(-50%); }
[data-ui-kind="combobox-trigger"] .ui-combobox-value { display: flex; flex-wrap: wrap; gap: 4px; }
[data-ui-slot="placeholder"] { opacity: 0.7; }
.ui-combobox-search { display: flex; align-items: center; gap: 4px; flex-shrink: 0; padding: 0 8px 0 4px; }
.ui-list-surface[role="listbox"] { display: flex; flex-direction: column; min-height: 60px; overflow-y: auto; padding: 4px; }
[data-ui-slot="menu-item"] { display: flex; align-items: center; justify-content: space-between; width: 100%; user-select: none; }
[data-ui-slot="menu-item"][data-ui-focused="true"] { background: rgba(127, 127, 127, 0.18); }
[data-ui-slot="menu-item"][data-ui-disabled="true"] { opacity: 0.5; cursor: default; }
.ui-badge { display: inline-flex; align-items: center; gap: 2px; }
"#;

/// Installs the widget stylesheet once per process.
///
/// Returns `true` for the call that performed the installation and `false` afterwards. Outside
/// the browser the guard is still taken but nothing is written.
pub fn init() -> bool {
    let mut installed_now = false;
    INSTALLED.get_or_init(|| {
        inject_stylesheet();
        installed_now = true;
    });
    installed_now
}

#[cfg(target_arch = "wasm32")]
fn inject_stylesheet() {
    use leptos::logging;

    let document = leptos::document();
    let Some(head) = document.head() else {
        logging::warn!("editor_ui init: document has no <head>; stylesheet not installed");
        return;
    };
    let style = match document.create_element("style") {
        Ok(style) => style,
        Err(err) => {
            logging::warn!("editor_ui init: create <style> failed: {err:?}");
            return;
        }
    };
    if let Err(err) = style.set_attribute("data-editor-ui", "true") {
        logging::warn!("editor_ui init: tag stylesheet failed: {err:?}");
    }
    style.set_text_content(Some(STYLESHEET));
    if let Err(err) = head.append_child(&style) {
        logging::warn!("editor_ui init: append stylesheet failed: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn inject_stylesheet() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        init();
        assert!(!init());
        assert!(INSTALLED.get().is_some());
    }

    #[test]
    fn stylesheet_targets_the_dom_contract() {
        assert!(STYLESHEET.contains(r#"[data-ui-kind="combobox-trigger"]"#));
        assert!(STYLESHEET.contains(r#"[data-ui-focused="true"]"#));
    }
}
