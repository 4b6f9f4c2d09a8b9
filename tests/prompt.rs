#[cfg(test)]
mod tests {
    use deskbreak::libs::prompt::{CountdownTick, PromptChoice, PromptFlow};

    #[test]
    fn test_countdown_inactive_before_choice() {
        let mut flow = PromptFlow::new(300);
        assert_eq!(flow.tick(), CountdownTick::Inactive);
        assert_eq!(flow.choice(), None);
    }

    #[test]
    fn test_start_rest_fires_once() {
        let mut flow = PromptFlow::new(300);
        assert!(flow.choose_start_rest());
        assert!(!flow.choose_start_rest());
        assert!(!flow.choose_snooze());
        assert_eq!(flow.choice(), Some(PromptChoice::StartRest));
    }

    #[test]
    fn test_snooze_fires_once_and_blocks_rest() {
        let mut flow = PromptFlow::new(300);
        assert!(flow.choose_snooze());
        assert!(!flow.choose_snooze());
        assert!(!flow.choose_start_rest());
        assert_eq!(flow.choice(), Some(PromptChoice::Snooze));

        // Snooze never starts the countdown.
        assert_eq!(flow.tick(), CountdownTick::Inactive);
    }

    #[test]
    fn test_countdown_runs_to_zero_then_finishes() {
        let mut flow = PromptFlow::new(2);
        assert!(flow.choose_start_rest());

        assert_eq!(flow.tick(), CountdownTick::Display(2));
        assert_eq!(flow.tick(), CountdownTick::Display(1));
        // Zero is displayed for a full second before the window closes.
        assert_eq!(flow.tick(), CountdownTick::Display(0));
        assert_eq!(flow.tick(), CountdownTick::Finished);
        assert_eq!(flow.tick(), CountdownTick::Inactive);
    }
}
