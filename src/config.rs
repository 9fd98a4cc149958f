use std::path::PathBuf;

pub const DEFAULT_COMPOSE_PATH: &str = "docker-compose.yml";
pub const DEFAULT_LOG_PATH: &str = "cd2n_debug.log";

/// Where the deployment file and the debug log live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub compose_path: PathBuf,
    pub log_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            compose_path: PathBuf::from(DEFAULT_COMPOSE_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_working_directory() {
        let settings = Settings::default();
        assert_eq!(settings.compose_path, PathBuf::from("docker-compose.yml"));
        assert_eq!(settings.log_path, PathBuf::from("cd2n_debug.log"));
    }

    #[test]
    fn struct_update_overrides_one_path() {
        let settings = Settings {
            compose_path: PathBuf::from("/tmp/compose.yml"),
            ..Settings::default()
        };
        assert_eq!(settings.compose_path, PathBuf::from("/tmp/compose.yml"));
        assert_eq!(settings.log_path, PathBuf::from(DEFAULT_LOG_PATH));

        let settings = Settings {
            log_path: PathBuf::from("/tmp/cd2n.log"),
            ..settings
        };
        assert_eq!(settings.compose_path, PathBuf::from("/tmp/compose.yml"));
        assert_eq!(settings.log_path, PathBuf::from("/tmp/cd2n.log"));
    }
}
