use std::{fs, path::Path};

use crate::{DaywallError, Result};

const DEFAULT_CONFIG: &str = r#"# Daywall configuration file
#
# Every value is optional; uncomment to override.

# [general]
# log_level = "info"

# [wallpaper]
# initial_theme = "auto"
# scheme_color = "255 255 255"

# [wallpaper.schedule]
# clock_interval_ms = 1000
# indicator_interval_ms = 5000

# [wallpaper.daylight]
# start_hour = 6
# end_hour = 18

# [wallpaper.labels]
# auto = "Auto"
# day = "Day"
# night = "Night"
"#;

/// Creates a default configuration file, including parent directories
pub fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DaywallError::validation(
                "config file",
                format!("Failed to create config directory {}: {e}", parent.display()),
            )
        })?;
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| {
        DaywallError::validation(
            "config file",
            format!("Failed to create config file {}: {e}", path.display()),
        )
    })?;

    Ok(())
}
