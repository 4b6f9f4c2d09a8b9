#[cfg(test)]
mod tests {
    #[cfg(not(windows))]
    mod unix {
        use deskbreak::libs::autostart;

        #[test]
        fn test_autostart_not_implemented_off_windows() {
            assert!(autostart::enable().is_err());
            assert!(autostart::disable().is_err());
            assert!(!autostart::is_enabled().unwrap());
            assert_eq!(autostart::status().unwrap(), "disabled");
        }
    }
}
