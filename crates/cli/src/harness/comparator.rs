use std::collections::HashSet;

use hangarboard_core::model::{Expectation, MatchMode, MismatchKind, SlotMismatch};
use hangarboard_core::{GridView, SlotKey, SlotStatus};

fn status_name(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Free => "free",
        SlotStatus::Booked => "booked",
    }
}

/// Compare the rendered grid against the expectation. Listed slots must
/// match status, label, and selected flag; in exact mode every unlisted slot
/// must be free and unselected.
pub fn compare_grid(
    view: &GridView,
    expectation: &Expectation,
    mode: MatchMode,
) -> Vec<SlotMismatch> {
    let mut mismatches = Vec::new();
    let mut covered: HashSet<SlotKey> = HashSet::new();

    for expected in &expectation.slots {
        let Some(slot) = view.slot(&expected.hangar, expected.date) else {
            mismatches.push(SlotMismatch {
                hangar: expected.hangar.clone(),
                date: expected.date,
                kind: MismatchKind::MissingSlot,
                expected: Some(status_name(expected.status).to_string()),
                actual: None,
            });
            continue;
        };
        covered.insert(slot.key.clone());

        if slot.status != expected.status {
            mismatches.push(SlotMismatch {
                hangar: expected.hangar.clone(),
                date: expected.date,
                kind: MismatchKind::StatusMismatch,
                expected: Some(status_name(expected.status).to_string()),
                actual: Some(status_name(slot.status).to_string()),
            });
        } else if slot.status == SlotStatus::Booked && slot.label != expected.label {
            mismatches.push(SlotMismatch {
                hangar: expected.hangar.clone(),
                date: expected.date,
                kind: MismatchKind::LabelMismatch,
                expected: Some(expected.label.clone()),
                actual: Some(slot.label.clone()),
            });
        }

        if slot.selected != expected.selected {
            mismatches.push(SlotMismatch {
                hangar: expected.hangar.clone(),
                date: expected.date,
                kind: MismatchKind::SelectionMismatch,
                expected: Some(expected.selected.to_string()),
                actual: Some(slot.selected.to_string()),
            });
        }
    }

    if mode == MatchMode::Exact {
        for slot in &view.slots {
            if covered.contains(&slot.key) {
                continue;
            }
            if slot.status == SlotStatus::Booked {
                mismatches.push(SlotMismatch {
                    hangar: slot.key.hangar.clone(),
                    date: slot.key.date,
                    kind: MismatchKind::UnexpectedBooking,
                    expected: None,
                    actual: Some(slot.label.clone()),
                });
            } else if slot.selected {
                mismatches.push(SlotMismatch {
                    hangar: slot.key.hangar.clone(),
                    date: slot.key.date,
                    kind: MismatchKind::SelectionMismatch,
                    expected: Some("false".to_string()),
                    actual: Some("true".to_string()),
                });
            }
        }
    }

    mismatches
}
