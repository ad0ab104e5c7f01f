use std::collections::VecDeque;
use std::time::Duration;

use super::*;
use crate::property::PropertyType;
use proptest::prelude::*;

#[derive(Default)]
struct RecordingMap {
    ready: bool,
    zoom: f64,
    selected: Option<PropertyId>,
    marker_calls: usize,
    centers: Vec<(Coordinate, f64)>,
}

impl RecordingMap {
    fn ready() -> Self {
        Self {
            ready: true,
            zoom: 12.0,
            ..Self::default()
        }
    }
}

impl MapSurface for RecordingMap {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn select_marker(&mut self, id: Option<PropertyId>) {
        self.selected = id;
        self.marker_calls += 1;
    }

    fn center_on(&mut self, coordinate: Coordinate, zoom: f64) {
        self.zoom = zoom;
        self.centers.push((coordinate, zoom));
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }
}

#[derive(Default)]
struct RecordingList {
    active: usize,
    len: usize,
    scroll_commands: Vec<usize>,
    changes: VecDeque<usize>,
}

impl RecordingList {
    fn with_len(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    /// A person scrolling the list
    fn user_scroll(&mut self, index: usize) {
        if index != self.active {
            self.active = index;
            self.changes.push_back(index);
        }
    }
}

impl ScrollableList for RecordingList {
    fn active_index(&self) -> usize {
        self.active
    }

    fn item_count(&self) -> usize {
        self.len
    }

    fn scroll_to(&mut self, index: usize) {
        self.scroll_commands.push(index);
        if index != self.active {
            self.active = index;
            self.changes.push_back(index);
        }
    }

    fn set_item_count(&mut self, count: usize) {
        self.len = count;
        self.active = 0;
        self.changes.clear();
    }

    fn take_index_change(&mut self) -> Option<usize> {
        self.changes.pop_front()
    }
}

fn properties(ids: &[u64]) -> Vec<Property> {
    ids.iter()
        .map(|&id| {
            Property::new(id, format!("Hotel {}", id), PropertyType::Accommodation)
                .with_location(53.0 + id as f64 * 0.01, -6.0)
        })
        .collect()
}

fn controller() -> SelectionSync {
    SelectionSync::new(500, 14.0, StalePolicy::Keep)
}

/// Deliver every queued list notification, as the event loop does each turn
fn pump(sync: &mut SelectionSync, list: &mut RecordingList, now: Instant) -> usize {
    let mut accepted = 0;
    while let Some(index) = list.take_index_change() {
        if sync.on_scroll_position_changed(index, now) {
            accepted += 1;
        }
    }
    accepted
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_selecting_third_property_scrolls_once_and_consumes_flag() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(3);
    let t0 = Instant::now();

    assert_eq!(sync.selected(), None);
    sync.set_selection(Some(PropertyId(3)), &props, &mut map, &mut list);

    assert_eq!(list.scroll_commands, vec![2]);
    assert!(sync.is_suppressing());

    assert_eq!(pump(&mut sync, &mut list, t0), 0, "commanded move is swallowed");
    assert!(!sync.is_suppressing());
    assert!(!sync.has_pending_settle());
}

#[test]
fn test_absent_id_issues_no_scroll() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(3);

    sync.set_selection(Some(PropertyId(42)), &props, &mut map, &mut list);

    assert!(list.scroll_commands.is_empty());
    assert!(!sync.is_suppressing());
    assert_eq!(sync.selected(), Some(PropertyId(42)));
}

#[test]
fn test_selection_matching_current_index_clears_flag() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let mut list = RecordingList::with_len(3);

    let commanded = sync.on_selection_changed(Some(PropertyId(1)), &props, &mut list);

    assert_eq!(commanded, None);
    assert!(list.scroll_commands.is_empty());
    assert!(!sync.is_suppressing());
}

#[test]
fn test_setting_same_id_twice_scrolls_at_most_once() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(3);
    let t0 = Instant::now();

    sync.set_selection(Some(PropertyId(2)), &props, &mut map, &mut list);
    pump(&mut sync, &mut list, t0);
    sync.set_selection(Some(PropertyId(2)), &props, &mut map, &mut list);
    pump(&mut sync, &mut list, t0);

    assert_eq!(list.scroll_commands, vec![1]);
    assert_eq!(map.marker_calls, 2, "observers are notified on every set");
    assert_eq!(map.centers.len(), 1, "only the effective change recenters");
}

#[test]
fn test_only_one_notification_is_swallowed_per_command() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(3);
    let t0 = Instant::now();

    sync.set_selection(Some(PropertyId(3)), &props, &mut map, &mut list);
    // The commanded move plus an independent user scroll in the same window
    list.user_scroll(1);

    assert_eq!(pump(&mut sync, &mut list, t0), 1);
    assert!(sync.has_pending_settle());
}

#[test]
fn test_user_scroll_burst_settles_once_on_last_index() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(3);
    let t0 = Instant::now();

    // Three notifications for index 1, each within 200ms of the last
    for (i, at) in [0u64, 150, 300].into_iter().enumerate() {
        let now = t0 + ms(at);
        assert!(sync.on_scroll_position_changed(1, now), "notification {}", i);
        assert_eq!(sync.tick(&props, &mut map, &mut list, now), None);
    }

    assert_eq!(sync.tick(&props, &mut map, &mut list, t0 + ms(799)), None);
    let change = sync.tick(&props, &mut map, &mut list, t0 + ms(800)).unwrap();
    assert_eq!(change.current, Some(PropertyId(2)));
    assert_eq!(sync.selected(), Some(PropertyId(2)));
    assert_eq!(sync.tick(&props, &mut map, &mut list, t0 + ms(5000)), None);
}

#[test]
fn test_settle_on_scrolled_card_does_not_scroll_back() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(3);
    let t0 = Instant::now();

    list.user_scroll(2);
    pump(&mut sync, &mut list, t0);
    sync.tick(&props, &mut map, &mut list, t0 + ms(500));

    assert_eq!(sync.selected(), Some(PropertyId(3)));
    assert!(list.scroll_commands.is_empty(), "no feedback scroll");
    assert!(!sync.is_suppressing());
    assert_eq!(map.selected, Some(PropertyId(3)));
    assert_eq!(map.centers.len(), 1, "map recenters on the settled card");
}

#[test]
fn test_settle_index_out_of_range_is_dropped() {
    let props = properties(&[1]);
    let mut sync = controller();
    let t0 = Instant::now();

    sync.on_scroll_position_changed(5, t0);
    assert_eq!(sync.poll_settled(&props, t0 + ms(500)), None);
}

#[test]
fn test_click_selects_and_flies_to_in_same_turn() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(3);
    let t0 = Instant::now();

    // A user scroll leaves a countdown running
    list.user_scroll(1);
    pump(&mut sync, &mut list, t0);
    assert!(sync.has_pending_settle());

    let centred = sync.click(PropertyId(3), &props, &mut map, &mut list);

    assert_eq!(sync.selected(), Some(PropertyId(3)));
    assert_eq!(centred, props[2].location);
    let (_, zoom) = map.centers.last().copied().unwrap();
    assert_eq!(zoom, 14.0);
    assert!(!sync.has_pending_settle(), "click supersedes the countdown");

    assert_eq!(list.scroll_commands, vec![2]);
    pump(&mut sync, &mut list, t0);
    assert_eq!(sync.tick(&props, &mut map, &mut list, t0 + ms(2000)), None);
    assert_eq!(sync.selected(), Some(PropertyId(3)));
}

#[test]
fn test_click_without_coordinate_selects_but_does_not_fly() {
    let mut props = properties(&[1, 2]);
    props[1].location = None;
    let mut sync = controller();
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(2);

    let centred = sync.click(PropertyId(2), &props, &mut map, &mut list);

    assert_eq!(centred, None);
    assert!(map.centers.is_empty());
    assert_eq!(sync.selected(), Some(PropertyId(2)));
}

#[test]
fn test_map_not_ready_is_a_noop() {
    let props = properties(&[1, 2]);
    let mut sync = controller();
    let mut map = RecordingMap::default();
    let mut list = RecordingList::with_len(2);

    let centred = sync.click(PropertyId(2), &props, &mut map, &mut list);

    assert_eq!(centred, None);
    assert_eq!(map.marker_calls, 0);
    assert!(map.centers.is_empty());
    // The list side still follows the selection
    assert_eq!(list.scroll_commands, vec![1]);
}

#[test]
fn test_replacing_properties_keeps_stale_selection_by_default() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(3);
    let t0 = Instant::now();

    sync.set_selection(Some(PropertyId(3)), &props, &mut map, &mut list);
    pump(&mut sync, &mut list, t0);
    list.scroll_commands.clear();

    let replacement = properties(&[4, 5]);
    let commanded = sync.replace_properties(&replacement, &mut map, &mut list);

    assert_eq!(commanded, None);
    assert!(list.scroll_commands.is_empty());
    assert_eq!(sync.selected(), Some(PropertyId(3)));
    assert_eq!(list.item_count(), 2);
}

#[test]
fn test_replacing_properties_clears_stale_selection_when_configured() {
    let props = properties(&[1, 2, 3]);
    let mut sync = SelectionSync::new(500, 14.0, StalePolicy::Clear);
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(3);

    sync.set_selection(Some(PropertyId(3)), &props, &mut map, &mut list);
    sync.replace_properties(&properties(&[4, 5]), &mut map, &mut list);

    assert_eq!(sync.selected(), None);
    assert_eq!(map.selected, None);
}

#[test]
fn test_replacing_properties_repositions_surviving_selection() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(3);
    let t0 = Instant::now();

    sync.set_selection(Some(PropertyId(2)), &props, &mut map, &mut list);
    pump(&mut sync, &mut list, t0);

    let replacement = properties(&[9, 8, 7, 2]);
    let commanded = sync.replace_properties(&replacement, &mut map, &mut list);

    assert_eq!(commanded, Some(3));
    assert!(sync.is_suppressing());
    assert_eq!(pump(&mut sync, &mut list, t0), 0);
}

#[test]
fn test_replacing_properties_cancels_pending_settle() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let mut map = RecordingMap::ready();
    let mut list = RecordingList::with_len(3);
    let t0 = Instant::now();

    list.user_scroll(2);
    pump(&mut sync, &mut list, t0);
    sync.replace_properties(&properties(&[4, 5, 6]), &mut map, &mut list);

    assert_eq!(sync.tick(&props, &mut map, &mut list, t0 + ms(1000)), None);
    assert_eq!(sync.selected(), None);
}

#[test]
fn test_teardown_cancels_pending_settle() {
    let props = properties(&[1, 2, 3]);
    let mut sync = controller();
    let t0 = Instant::now();

    sync.on_scroll_position_changed(2, t0);
    sync.teardown();

    assert_eq!(sync.poll_settled(&props, t0 + ms(1000)), None);
}

#[test]
fn test_suppression_flag_consumes_once() {
    let mut flag = SuppressionFlag::default();
    assert!(!flag.consume());
    flag.arm();
    assert!(flag.is_armed());
    assert!(flag.consume());
    assert!(!flag.consume());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Selecting an id that is not in the sequence never commands a scroll.
    #[test]
    fn prop_absent_selection_never_scrolls(
        ids in prop::collection::hash_set(0u64..500, 0..20),
        probe in 500u64..1000,
        start in 0usize..20,
    ) {
        let ids: Vec<u64> = ids.into_iter().collect();
        let props = properties(&ids);
        let mut sync = controller();
        let mut map = RecordingMap::ready();
        let mut list = RecordingList::with_len(props.len());
        list.active = start.min(props.len().saturating_sub(1));

        sync.set_selection(Some(PropertyId(probe)), &props, &mut map, &mut list);

        prop_assert!(list.scroll_commands.is_empty());
        prop_assert!(!sync.is_suppressing());
    }

    // However selections and user scrolls interleave, every commanded
    // scroll swallows exactly one notification and every user scroll is
    // accepted.
    #[test]
    fn prop_commanded_and_user_moves_are_told_apart(
        actions in prop::collection::vec((any::<bool>(), 0usize..6), 1..30)
    ) {
        let props = properties(&[10, 11, 12, 13, 14, 15]);
        let mut sync = controller();
        let mut map = RecordingMap::ready();
        let mut list = RecordingList::with_len(props.len());
        let t0 = Instant::now();

        for (is_selection, index) in actions {
            if is_selection {
                let before = list.scroll_commands.len();
                sync.set_selection(Some(props[index].id), &props, &mut map, &mut list);
                let commanded = list.scroll_commands.len() - before;
                prop_assert_eq!(pump(&mut sync, &mut list, t0), 0);
                prop_assert!(commanded <= 1);
            } else {
                let moved = index != list.active;
                list.user_scroll(index);
                prop_assert_eq!(pump(&mut sync, &mut list, t0), usize::from(moved));
            }
            prop_assert!(!sync.is_suppressing());
        }
    }
}
