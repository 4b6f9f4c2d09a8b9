#[cfg(test)]
mod tests {
    use deskbreak::libs::data_storage::DataStorage;
    use deskbreak::libs::health::{HealthEntry, HealthLog, HEALTH_FILE_NAME};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

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

    fn sample_entry() -> HealthEntry {
        HealthEntry {
            weight: "72.5".to_string(),
            bp_high: "120".to_string(),
            bp_low: "80".to_string(),
            time: "08:15:00".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let _env = TestEnv::new();
        let log = HealthLog::load().unwrap();
        assert!(log.is_empty());
        assert!(!log.today_recorded());
        assert_eq!(log.today_marker(), " (未填!)");
    }

    #[test]
    fn test_record_and_round_trip() {
        let _env = TestEnv::new();
        let today = HealthLog::today_key();

        let mut log = HealthLog::load().unwrap();
        log.record(today.clone(), sample_entry());
        log.save().unwrap();

        let reloaded = HealthLog::load().unwrap();
        assert_eq!(reloaded.get(&today), Some(&sample_entry()));
        assert!(reloaded.today_recorded());
        assert_eq!(reloaded.today_marker(), " (已填)");
    }

    #[test]
    fn test_entries_are_keyed_by_date_at_top_level() {
        let _env = TestEnv::new();
        let mut log = HealthLog::load().unwrap();
        log.record("2026-08-08".to_string(), sample_entry());
        log.save().unwrap();

        let path = DataStorage::new().get_path(HEALTH_FILE_NAME).unwrap();
        let raw = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["2026-08-08"]["weight"], "72.5");
        assert_eq!(value["2026-08-08"]["bp_high"], "120");
        assert_eq!(value["2026-08-08"]["bp_low"], "80");
        assert_eq!(value["2026-08-08"]["time"], "08:15:00");
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let _env = TestEnv::new();
        let path = DataStorage::new().get_path(HEALTH_FILE_NAME).unwrap();
        std::fs::write(&path, "[[[ definitely not an object").unwrap();

        let log = HealthLog::load().unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_record_overwrites_same_date() {
        let _env = TestEnv::new();
        let mut log = HealthLog::load().unwrap();
        log.record("2026-08-08".to_string(), sample_entry());

        let mut updated = sample_entry();
        updated.weight = "71.0".to_string();
        log.record("2026-08-08".to_string(), updated.clone());

        assert_eq!(log.get("2026-08-08"), Some(&updated));
        assert_eq!(log.iter().count(), 1);
    }
}
