//! Property tests for the polling backoff.

use std::time::Duration;

use proptest::prelude::*;

use texwatch::application::Backoff;

proptest! {
    /// PROPERTY: each quiet poll lengthens the interval by exactly one step.
    #[test]
    fn property_backoff_grows_linearly(
        initial_ms in 1u64..500,
        step_ms in 0u64..10,
        polls in 0u32..200,
    ) {
        let mut backoff = Backoff::new(
            Duration::from_millis(initial_ms),
            Duration::from_millis(step_ms),
        );
        for _ in 0..polls {
            backoff.advance();
        }

        let expected = Duration::from_millis(initial_ms + step_ms * u64::from(polls));
        prop_assert_eq!(backoff.current(), expected);
    }

    /// PROPERTY: reset always returns to the initial interval.
    #[test]
    fn property_backoff_reset_restores_initial(
        initial_ms in 1u64..500,
        polls in 0u32..200,
    ) {
        let initial = Duration::from_millis(initial_ms);
        let mut backoff = Backoff::new(initial, Duration::from_millis(1));
        for _ in 0..polls {
            backoff.advance();
        }
        backoff.reset();

        prop_assert_eq!(backoff.current(), initial);
    }
}
