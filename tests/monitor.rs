#[cfg(test)]
mod tests {
    use deskbreak::libs::audio::AudioPlayer;
    use deskbreak::libs::monitor::{Monitor, MonitorState, IDLE_PAUSE_THRESHOLD_SECS, SNOOZE_DURATION_SECS};
    use test_context::{test_context, TestContext};

    /// Test context for monitor tests. The audio handle talks to a stub
    /// backend, so no sound device is needed.
    struct MonitorTestContext {
        monitor: Monitor,
    }

    impl TestContext for MonitorTestContext {
        fn setup() -> Self {
            MonitorTestContext {
                monitor: Monitor::new(25, AudioPlayer::spawn()),
            }
        }
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_pause_follows_lock_and_idle_signals(ctx: &mut MonitorTestContext) {
        assert!(!ctx.monitor.evaluate_pause(false, 0.0));
        assert!(!ctx.monitor.snapshot().paused);

        // Locking pauses regardless of idle time.
        assert!(ctx.monitor.evaluate_pause(true, 0.0));
        assert!(ctx.monitor.snapshot().paused);

        // Idle at the threshold keeps the pause up even when unlocked.
        assert!(ctx.monitor.evaluate_pause(false, IDLE_PAUSE_THRESHOLD_SECS));
        assert!(ctx.monitor.snapshot().paused);

        // Just under the threshold resumes.
        assert!(!ctx.monitor.evaluate_pause(false, IDLE_PAUSE_THRESHOLD_SECS - 0.1));
        assert!(!ctx.monitor.snapshot().paused);

        // Repeating the same signal is a no-op, not a new transition.
        assert!(!ctx.monitor.evaluate_pause(false, 0.0));
        assert!(!ctx.monitor.snapshot().paused);
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_remaining_clamps_at_zero(ctx: &mut MonitorTestContext) {
        assert!(!ctx.monitor.advance(1000.0));
        assert_eq!(ctx.monitor.snapshot().work_time_remaining, 500.0);

        // Overshooting clamps to zero and reports expiry.
        assert!(ctx.monitor.advance(10_000.0));
        assert_eq!(ctx.monitor.snapshot().work_time_remaining, 0.0);
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_no_decrement_while_paused(ctx: &mut MonitorTestContext) {
        ctx.monitor.evaluate_pause(true, 0.0);
        assert!(!ctx.monitor.advance(60.0));
        assert_eq!(ctx.monitor.snapshot().work_time_remaining, 1500.0);
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_no_decrement_outside_work_state(ctx: &mut MonitorTestContext) {
        ctx.monitor.enter_prompt();
        assert_eq!(ctx.monitor.snapshot().state, MonitorState::Prompt);
        assert!(!ctx.monitor.advance(60.0));
        assert_eq!(ctx.monitor.snapshot().work_time_remaining, 1500.0);

        ctx.monitor.start_rest();
        assert_eq!(ctx.monitor.snapshot().state, MonitorState::Break);
        assert!(!ctx.monitor.advance(60.0));
        assert_eq!(ctx.monitor.snapshot().work_time_remaining, 1500.0);
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_update_work_duration_resets_exactly(ctx: &mut MonitorTestContext) {
        for minutes in [1u64, 40, 120] {
            ctx.monitor.update_work_duration(minutes).unwrap();
            let snapshot = ctx.monitor.snapshot();
            assert_eq!(snapshot.work_duration_minutes, minutes);
            assert_eq!(snapshot.work_time_remaining, (minutes * 60) as f64);
            assert_eq!(snapshot.state, MonitorState::Work);
        }
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_invalid_duration_rejected(ctx: &mut MonitorTestContext) {
        ctx.monitor.advance(100.0);
        let before = ctx.monitor.snapshot();

        assert!(ctx.monitor.update_work_duration(0).is_err());
        assert!(ctx.monitor.update_work_duration(121).is_err());

        let after = ctx.monitor.snapshot();
        assert_eq!(after.work_duration_minutes, before.work_duration_minutes);
        assert_eq!(after.work_time_remaining, before.work_time_remaining);
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_break_round_trip_counts_one_round(ctx: &mut MonitorTestContext) {
        ctx.monitor.advance(10_000.0); // countdown expires
        ctx.monitor.enter_prompt();
        ctx.monitor.start_rest();
        ctx.monitor.finish_prompt();

        let snapshot = ctx.monitor.snapshot();
        assert_eq!(snapshot.state, MonitorState::Work);
        assert_eq!(snapshot.completed_rounds, 1);
        assert_eq!(snapshot.work_time_remaining, 1500.0);
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_snooze_round_trip(ctx: &mut MonitorTestContext) {
        ctx.monitor.advance(10_000.0);
        ctx.monitor.enter_prompt();
        ctx.monitor.snooze();

        let snapshot = ctx.monitor.snapshot();
        assert_eq!(snapshot.state, MonitorState::Work);
        assert_eq!(snapshot.work_time_remaining, SNOOZE_DURATION_SECS);
        assert_eq!(snapshot.completed_rounds, 0);

        // The window closing after a snooze must not reset the short cycle.
        ctx.monitor.finish_prompt();
        assert_eq!(ctx.monitor.snapshot().work_time_remaining, SNOOZE_DURATION_SECS);
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_prompt_closed_without_choice_resets_without_round(ctx: &mut MonitorTestContext) {
        ctx.monitor.advance(10_000.0);
        ctx.monitor.enter_prompt();
        ctx.monitor.finish_prompt();

        let snapshot = ctx.monitor.snapshot();
        assert_eq!(snapshot.state, MonitorState::Work);
        assert_eq!(snapshot.completed_rounds, 0);
        assert_eq!(snapshot.work_time_remaining, 1500.0);
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_stop_is_idempotent(ctx: &mut MonitorTestContext) {
        assert!(ctx.monitor.is_running());
        ctx.monitor.stop();
        ctx.monitor.stop();
        assert!(!ctx.monitor.is_running());
    }

    #[test_context(MonitorTestContext)]
    #[test]
    fn test_status_line_format(ctx: &mut MonitorTestContext) {
        let line = ctx.monitor.snapshot().status_line();
        assert_eq!(line, "状态: 工作中 | 剩余: 25:00 | 已完成: 0 轮");

        ctx.monitor.start_rest();
        assert!(ctx.monitor.snapshot().status_line().contains("休息中"));
    }
}
