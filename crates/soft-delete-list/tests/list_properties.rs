//! Behavioural checks for the soft-delete list, exercised through the
//! public API only.

use std::cell::RefCell;

use soft_delete_list::{drop_slot_to_index, CommitSink, ListController, ListEvent, ListItem};

#[derive(Clone, Debug, PartialEq)]
struct Technique {
    id: u32,
    name: String,
}

impl ListItem for Technique {
    type Id = u32;
    fn id(&self) -> u32 { self.id }
    fn label(&self) -> String { self.name.clone() }
}

fn techniques(n: u32) -> Vec<Technique> {
    (1..=n)
        .map(|id| Technique { id, name: format!("T{}", id) })
        .collect()
}

fn ids(list: &[Technique]) -> Vec<u32> {
    list.iter().map(|t| t.id).collect()
}

/// Sink that records which callback fired
#[derive(Default)]
struct RecordingSink {
    calls: RefCell<Vec<String>>,
}

impl CommitSink<Technique> for RecordingSink {
    fn on_order_change(&self, active: Vec<Technique>) {
        self.calls.borrow_mut().push(format!("order {:?}", ids(&active)));
    }
    fn on_delete(&self, id: u32) {
        self.calls.borrow_mut().push(format!("delete {}", id));
    }
    fn on_reinsert(&self, id: u32) {
        self.calls.borrow_mut().push(format!("reinsert {}", id));
    }
}

#[test]
fn reorder_is_a_stable_move_for_every_index_pair() {
    let base = techniques(5);
    for from in 0..base.len() {
        for to in 0..base.len() {
            let mut ctl: ListController<Technique> = ListController::with_snapshot(base.clone());
            let event = ctl.reorder(from, to);

            if from == to {
                assert!(event.is_none());
                assert_eq!(ctl.active(), &base[..]);
                continue;
            }

            let after = ids(ctl.active());
            assert_eq!(after.len(), base.len());
            assert_eq!(after[to], base[from].id);

            let mut sorted = after.clone();
            sorted.sort();
            assert_eq!(sorted, ids(&base));

            let others_before: Vec<u32> = ids(&base).into_iter().filter(|&id| id != base[from].id).collect();
            let others_after: Vec<u32> = after.into_iter().filter(|&id| id != base[from].id).collect();
            assert_eq!(others_before, others_after);
        }
    }
}

#[test]
fn soft_delete_keeps_total_count() {
    let base = techniques(4);
    for victim in 1..=4 {
        let mut ctl: ListController<Technique> = ListController::with_snapshot(base.clone());
        ctl.soft_delete(victim).unwrap();

        assert_eq!(ctl.active().len() + ctl.removed().len(), base.len());
        assert_eq!(ctl.removed().last().map(|t| t.id), Some(victim));
        assert!(!ctl.is_active(victim));

        // Second delete is a no-op
        assert!(ctl.soft_delete(victim).is_none());
        assert_eq!(ctl.removed().len(), 1);
    }
}

#[test]
fn restore_undoes_membership_but_appends() {
    let mut ctl: ListController<Technique> = ListController::with_snapshot(techniques(3));
    ctl.soft_delete(1).unwrap();
    ctl.restore(1).unwrap();

    assert_eq!(ids(ctl.active()), vec![2, 3, 1]);
    assert!(ctl.removed().is_empty());
}

#[test]
fn tray_keeps_removal_order() {
    let mut ctl: ListController<Technique> = ListController::with_snapshot(techniques(4));
    ctl.soft_delete(3);
    ctl.soft_delete(1);
    ctl.soft_delete(4);

    assert_eq!(ids(ctl.removed()), vec![3, 1, 4]);
    assert_eq!(ids(ctl.active()), vec![2]);

    ctl.restore(1);
    assert_eq!(ids(ctl.removed()), vec![3, 4]);
    assert_eq!(ids(ctl.active()), vec![2, 1]);
}

#[test]
fn events_route_to_matching_callbacks() {
    let sink = RecordingSink::default();
    let mut ctl: ListController<Technique> = ListController::with_snapshot(techniques(3));

    let events: Vec<ListEvent<Technique>> = [
        ctl.reorder(2, 0),
        ctl.soft_delete(2),
        ctl.soft_delete(42),
        ctl.restore(2),
    ]
    .into_iter()
    .flatten()
    .collect();

    for event in events {
        sink.commit(event);
    }

    assert_eq!(
        *sink.calls.borrow(),
        vec![
            "order [3, 1, 2]".to_string(),
            "delete 2".to_string(),
            "reinsert 2".to_string(),
        ]
    );
}

#[test]
fn dropping_past_the_end_appends() {
    let mut ctl: ListController<Technique> = ListController::with_snapshot(techniques(3));
    let to = drop_slot_to_index(0, 10, ctl.active().len()).unwrap();
    ctl.reorder(0, to).unwrap();
    assert_eq!(ids(ctl.active()), vec![2, 3, 1]);
}
