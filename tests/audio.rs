#[cfg(test)]
mod tests {
    use deskbreak::libs::audio::AudioPlayer;
    use std::io::Write;

    #[test]
    fn test_set_track_rejects_missing_file() {
        let audio = AudioPlayer::spawn();
        assert!(!audio.set_track("/no/such/track.mp3".as_ref()));
        assert_eq!(audio.current_track(), None);
    }

    #[test]
    fn test_set_track_accepts_existing_file() {
        let audio = AudioPlayer::spawn();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not really audio").unwrap();

        assert!(audio.set_track(file.path()));
        assert_eq!(audio.current_track(), Some(file.path().to_path_buf()));
    }

    #[test]
    fn test_playback_operations_never_panic() {
        // Playback is best-effort: with no track, no device, or garbage
        // input every operation must be a silent no-op.
        let audio = AudioPlayer::spawn();
        audio.play(true);
        audio.play(false);
        audio.stop();
        audio.stop();
        audio.set_volume(0.5);
        audio.set_volume(7.0); // clamped
        audio.set_volume(-1.0); // clamped
    }
}
