use crate::settings::OverlaySettings;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

pub const OVERLAY_SETTINGS_FILE_NAME: &str = "overlay_settings.json";

pub fn settings_path_from_exe_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(OVERLAY_SETTINGS_FILE_NAME))
}

pub fn resolve_settings_path() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    settings_path_from_exe_path(&exe_path)
}

pub fn load() -> Result<OverlaySettings> {
    let settings_path = resolve_settings_path()?;
    load_from_path(&settings_path)
}

pub fn save(settings: &OverlaySettings) -> Result<PathBuf> {
    let settings_path = resolve_settings_path()?;
    save_to_path(&settings_path, settings)?;
    Ok(settings_path)
}

/// Missing or empty files yield the defaults; only malformed JSON is an
/// error.
pub fn load_from_path(settings_path: &Path) -> Result<OverlaySettings> {
    if !settings_path.exists() {
        return Ok(OverlaySettings::default());
    }

    let content = std::fs::read_to_string(settings_path)
        .with_context(|| format!("read overlay settings file {}", settings_path.display()))?;

    if content.trim().is_empty() {
        return Ok(OverlaySettings::default());
    }

    serde_json::from_str(&content).with_context(|| {
        format!(
            "deserialize overlay settings file {}",
            settings_path.display()
        )
    })
}

pub fn save_to_path(settings_path: &Path, settings: &OverlaySettings) -> Result<()> {
    if let Some(parent) = settings_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!(
                "create overlay settings parent folder {}",
                parent.display()
            )
        })?;
    }

    let payload =
        serde_json::to_string_pretty(settings).context("serialize overlay settings")?;
    std::fs::write(settings_path, payload)
        .with_context(|| format!("write overlay settings file {}", settings_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_from_path, save_to_path, settings_path_from_exe_path};
    use crate::color::OverlayColor;
    use crate::settings::{OverlaySettings, SafeFrameSetting};
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn settings_live_next_to_the_executable() {
        let path = settings_path_from_exe_path(Path::new("/opt/app/film_overlay")).unwrap();
        assert_eq!(path, Path::new("/opt/app/overlay_settings.json"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overlay_settings.json");

        let settings = OverlaySettings {
            master_overlay: Some("Crosshair".to_string()),
            master_tint: OverlayColor::rgba(1, 2, 3, 4),
            safe_frames: vec![SafeFrameSetting {
                key: "ActionSafeFrame".to_string(),
                enabled: true,
                size_percent: 93.0,
            }],
        };
        save_to_path(&path, &settings).unwrap();

        assert_eq!(load_from_path(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overlay_settings.json");
        assert_eq!(load_from_path(&path).unwrap(), OverlaySettings::default());
    }

    #[test]
    fn empty_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overlay_settings.json");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(load_from_path(&path).unwrap(), OverlaySettings::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overlay_settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_from_path(&path).is_err());
    }
}
