#[cfg(test)]
mod tests {
    use deskbreak::libs::assets::ensure_default_chime;
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

    #[test]
    fn test_chime_is_generated_once_and_well_formed() {
        let _env = TestEnv::new();

        let path = ensure_default_chime().unwrap();
        assert!(path.exists());

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        // RIFF size field covers everything after the first 8 bytes.
        let riff_len = u32::from_le_bytes(bytes[4..8].try_into().unwrap()) as usize;
        assert_eq!(riff_len + 8, bytes.len());
        // 1.5 seconds of 16-bit 44.1 kHz mono.
        assert!(bytes.len() > 44_100);

        // A second call reuses the existing file.
        let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
        let again = ensure_default_chime().unwrap();
        assert_eq!(again, path);
        assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), modified);
    }
}
