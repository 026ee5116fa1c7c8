use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use cross_xdg::BaseDirs;

use crate::canvas::BackColor;

/// File name looked up under the XDG config home.
pub const CONFIG_FILE: &str = "parse-mystery.toml";

/// Settings for writing and showing the rendered image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Command used to open the PNG; the platform default when unset.
    pub viewer: Option<String>,
    /// Directory the PNG is written to; a unique file in the OS temp dir when unset.
    pub output_dir: Option<PathBuf>,
    /// Fill color of a fresh canvas.
    pub back_color: BackColor,
}

impl RenderConfig {
    /// Read the `[render]` section of a small TOML-like document.
    ///
    /// Unknown keys and sections are ignored, as are values that do not parse.
    pub fn from_toml_str(content: &str) -> Self {
        let mut in_render = false;
        let mut map: HashMap<String, String> = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            if line.starts_with('[') && line.ends_with(']') {
                in_render = line[1..line.len() - 1].trim() == "render";
                continue;
            }
            if !in_render { continue; }
            if let Some((key, val_raw)) = line.split_once('=') {
                let val_raw = val_raw.trim();
                // Surrounding double quotes are optional.
                let val = if val_raw.len() >= 2 && val_raw.starts_with('"') && val_raw.ends_with('"') {
                    &val_raw[1..val_raw.len() - 1]
                } else {
                    val_raw
                };
                map.insert(key.trim().to_string(), val.to_string());
            }
        }

        let mut cfg = Self::default();
        if let Some(v) = map.remove("viewer").filter(|v| !v.is_empty()) {
            cfg.viewer = Some(v);
        }
        if let Some(v) = map.remove("output_dir").filter(|v| !v.is_empty()) {
            cfg.output_dir = Some(PathBuf::from(v));
        }
        if let Some(color) = map.get("back_color").and_then(|v| BackColor::from_name(v)) {
            cfg.back_color = color;
        }
        cfg
    }
}

static CONFIG: OnceLock<RenderConfig> = OnceLock::new();

/// The user's render settings, loaded once from the XDG config home.
pub fn config() -> &'static RenderConfig {
    CONFIG.get_or_init(|| load_from_toml().unwrap_or_default())
}

fn config_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new().ok()?;

    // On Linux: resolves to /home/<user>/.config
    // On macOS: resolves to /Users/<user>/.config
    let mut path = PathBuf::from(base_dirs.config_home());
    path.push(CONFIG_FILE);
    Some(path)
}

fn load_from_toml() -> Option<RenderConfig> {
    let path = config_path()?;
    let content = fs::read_to_string(&path).ok()?;
    log::debug!("loaded render config from {}", path.display());
    Some(RenderConfig::from_toml_str(&content))
}
