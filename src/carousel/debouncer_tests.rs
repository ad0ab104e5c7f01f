use super::*;
use proptest::prelude::*;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_nothing_pending_initially() {
    let mut debouncer = SettleDebouncer::new(500);
    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.poll(Instant::now()), None);
}

#[test]
fn test_fires_once_after_delay() {
    let t0 = Instant::now();
    let mut debouncer = SettleDebouncer::new(500);
    debouncer.restart(4, t0);

    assert_eq!(debouncer.poll(t0 + ms(499)), None);
    assert_eq!(debouncer.poll(t0 + ms(500)), Some(4));
    assert_eq!(debouncer.poll(t0 + ms(2000)), None, "fires only once");
}

#[test]
fn test_restart_pushes_deadline_and_replaces_index() {
    let t0 = Instant::now();
    let mut debouncer = SettleDebouncer::new(500);

    assert!(!debouncer.restart(1, t0));
    assert!(debouncer.restart(2, t0 + ms(300)));

    assert_eq!(debouncer.poll(t0 + ms(600)), None);
    assert_eq!(debouncer.deadline(), Some(t0 + ms(800)));
    assert_eq!(debouncer.poll(t0 + ms(800)), Some(2));
}

#[test]
fn test_cancel_drops_pending() {
    let t0 = Instant::now();
    let mut debouncer = SettleDebouncer::new(500);
    debouncer.restart(1, t0);

    assert!(debouncer.cancel());
    assert!(!debouncer.cancel());
    assert_eq!(debouncer.poll(t0 + ms(1000)), None);
}

#[test]
fn test_zero_delay_fires_on_next_poll() {
    let t0 = Instant::now();
    let mut debouncer = SettleDebouncer::new(0);
    debouncer.restart(3, t0);
    assert_eq!(debouncer.poll(t0), Some(3));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A burst of restarts, each inside the previous window, fires exactly
    // once with the last index.
    #[test]
    fn prop_burst_fires_once_with_last_index(
        events in prop::collection::vec((0usize..50, 0u64..500), 1..20)
    ) {
        let t0 = Instant::now();
        let mut debouncer = SettleDebouncer::new(500);
        let mut now = t0;
        let mut fired = Vec::new();

        for &(index, gap) in &events {
            now += ms(gap);
            if let Some(i) = debouncer.poll(now) {
                fired.push(i);
            }
            debouncer.restart(index, now);
        }

        // Walk well past the final deadline in small steps
        for _ in 0..20 {
            now += ms(100);
            if let Some(i) = debouncer.poll(now) {
                fired.push(i);
            }
        }

        let last = events.last().unwrap().0;
        prop_assert_eq!(fired, vec![last]);
    }
}
