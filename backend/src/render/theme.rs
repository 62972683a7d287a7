//! Light and dark page themes

use serde::{Deserialize, Serialize};

/// Presentation mode chosen per session
///
/// Only the renderer sees this value; calculations never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Light,
    #[default]
    Dark,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    /// The other mode, used for the toggle link
    pub fn toggled(&self) -> DisplayMode {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Light => "Light Mode",
            DisplayMode::Dark => "Dark Mode",
        }
    }

    fn palette(&self) -> Palette {
        match self {
            DisplayMode::Light => Palette {
                page_background: "#ffffff",
                panel_background: "#f5f7fa",
                text: "#1f2933",
                input_background: "#ffffff",
                input_text: "#1f2933",
                shadow: "rgba(0,0,0,0.08)",
            },
            DisplayMode::Dark => Palette {
                page_background: "#0e1117",
                panel_background: "#1e1e2f",
                text: "#fafafa",
                input_background: "#000000",
                input_text: "#ffffff",
                shadow: "rgba(0,0,0,0.3)",
            },
        }
    }

    /// Stylesheet for this mode
    pub fn stylesheet(&self) -> String {
        let p = self.palette();
        format!(
            r#"body {{ background-color: {page}; color: {text}; font-family: sans-serif; margin: 0; }}
main {{ max-width: 760px; margin: 2rem auto; background-color: {panel}; border-radius: 15px; padding: 2rem; box-shadow: 0 4px 8px {shadow}; }}
h1, h2, h3, h4, label {{ text-align: center; }}
input, select {{ background: {input_bg}; color: {input_text}; width: 100%; padding: 0.4em; box-sizing: border-box; }}
.columns {{ display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }}
button {{ background: linear-gradient(45deg, #2196F3, #1976D2); color: #FFFFFF; border-radius: 10px; height: 3em; width: 100%; font-weight: bold; font-size: 1.1em; border: none; margin-top: 1rem; }}
button:hover {{ background: linear-gradient(45deg, #1976D2, #1565C0); }}
progress {{ width: 100%; accent-color: #9b59b6; }}
.success {{ border-left: 4px solid #2e7d32; padding: 0.5em 1em; }}
.info {{ border-left: 4px solid #1976D2; padding: 0.5em 1em; }}
.warning {{ border-left: 4px solid #f9a825; padding: 0.5em 1em; }}
.error {{ border-left: 4px solid #c62828; padding: 0.5em 1em; }}
footer {{ text-align: center; font-size: 0.8em; }}"#,
            page = p.page_background,
            panel = p.panel_background,
            text = p.text,
            input_bg = p.input_background,
            input_text = p.input_text,
            shadow = p.shadow,
        )
    }
}

struct Palette {
    page_background: &'static str,
    panel_background: &'static str,
    text: &'static str,
    input_background: &'static str,
    input_text: &'static str,
    shadow: &'static str,
}
