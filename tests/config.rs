#[cfg(test)]
mod tests {
    use deskbreak::libs::config::{parse_work_duration, Config, CONFIG_FILE_NAME, DEFAULT_WORK_DURATION};
    use deskbreak::libs::data_storage::DataStorage;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    /// Points the app data directory at a fresh temp dir for one test.
    /// Environment variables are process-wide, so tests in this binary are
    /// serialized through a lock.
    struct TestEnv {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestEnv {
        fn new() -> Self {
            static LOCK: Mutex<()> = Mutex::new(());
            let guard = LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TestEnv {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.music_path, None);
        assert_eq!(config.work_duration, DEFAULT_WORK_DURATION);
    }

    #[test]
    fn test_read_nonexistent_config() {
        let _env = TestEnv::new();
        // When no config file exists, read() should return the defaults.
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_read_round_trip() {
        let _env = TestEnv::new();
        let config = Config {
            music_path: Some(PathBuf::from("/x/y.mp3")),
            work_duration: 40,
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
    }

    #[test]
    fn test_corrupt_config_falls_back_to_defaults() {
        let _env = TestEnv::new();
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{ this is not json").unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_work_duration_defaults() {
        let _env = TestEnv::new();
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "music_path": null }"#).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.work_duration, DEFAULT_WORK_DURATION);
    }

    #[test]
    fn test_parse_work_duration() {
        assert_eq!(parse_work_duration("1").unwrap(), 1);
        assert_eq!(parse_work_duration(" 25 ").unwrap(), 25);
        assert_eq!(parse_work_duration("120").unwrap(), 120);

        assert!(parse_work_duration("0").is_err());
        assert!(parse_work_duration("121").is_err());
        assert!(parse_work_duration("abc").is_err());
        assert!(parse_work_duration("").is_err());
        assert!(parse_work_duration("12.5").is_err());
    }
}
