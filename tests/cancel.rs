mod tests {
    use blink_conductor::{CancellationToken, Duration};
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_time::Timer;

    #[test]
    fn test_fresh_token_is_clear() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancelled_resolves_immediately_when_already_set() {
        let token = CancellationToken::new();
        token.cancel();
        block_on(token.cancelled());
    }

    #[test]
    fn test_cancelled_wakes_waiter() {
        let token = CancellationToken::new();
        block_on(join(token.cancelled(), async {
            Timer::after(Duration::from_millis(20)).await;
            token.cancel();
        }));
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancelled_resolves_again_after_consuming_signal() {
        // A second wait must still resolve; the flag outlives the signal.
        let token = CancellationToken::new();
        block_on(join(token.cancelled(), async {
            Timer::after(Duration::from_millis(10)).await;
            token.cancel();
        }));
        block_on(token.cancelled());
    }
}
