//! # Presentation Sync
//!
//! Keeps the checklist's row bindings in lock-step with the model.
//!
//! Each `Item` owns exactly one `RowBinding`, keyed by `ItemId`. After
//! `reconcile` returns, `rows[i].id == items[i].id` for every `i`. The view
//! never stores item text; it reads content from the model at render time.
//!
//! ```text
//! TodoList          rows (before)        rows (after)
//! A ─────────────── A                    A
//!                   B  (deleted)  ──✗
//! C ─────────────── C                    C
//! D (new) ─────────────────────────────▶ D  (appended)
//! ```

use std::collections::HashSet;

use log::warn;

use crate::core::todo::{Item, ItemId, TodoList};

/// How a row's label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Open,
    /// Crossed out and dimmed
    Done,
}

impl Decoration {
    pub fn for_item(item: &Item) -> Self {
        if item.completed {
            Decoration::Done
        } else {
            Decoration::Open
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBinding {
    pub id: ItemId,
    pub decoration: Decoration,
}

impl RowBinding {
    fn bind(item: &Item) -> Self {
        Self {
            id: item.id,
            decoration: Decoration::for_item(item),
        }
    }
}

/// What a reconcile pass changed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub appended: usize,
    pub removed: usize,
    pub restyled: usize,
}

impl SyncOutcome {
    /// Rows were added or removed.
    pub fn is_structural(&self) -> bool {
        self.appended > 0 || self.removed > 0
    }
}

/// Bring `rows` in line with `items`.
///
/// Rows for deleted items are dropped, rows for new items are appended, and
/// every surviving row's decoration is recomputed from its item.
pub fn reconcile(rows: &mut Vec<RowBinding>, items: &TodoList) -> SyncOutcome {
    let mut outcome = SyncOutcome::default();

    let live: HashSet<ItemId> = items.iter().map(|item| item.id).collect();
    let before = rows.len();
    rows.retain(|row| live.contains(&row.id));
    outcome.removed = before - rows.len();

    // Items only ever append, so survivors must be a prefix of the model.
    let in_order = rows
        .iter()
        .zip(items.iter())
        .all(|(row, item)| row.id == item.id);
    if !in_order {
        warn!("Row bindings out of order, rebuilding {} rows", items.len());
        outcome.removed += rows.len();
        rows.clear();
    }

    for item in items.iter().skip(rows.len()) {
        rows.push(RowBinding::bind(item));
        outcome.appended += 1;
    }

    for (row, item) in rows.iter_mut().zip(items.iter()) {
        let decoration = Decoration::for_item(item);
        if row.decoration != decoration {
            row.decoration = decoration;
            outcome.restyled += 1;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(records: &[(bool, &str)]) -> TodoList {
        TodoList::from_items(
            records
                .iter()
                .map(|(done, text)| Item::new(*done, *text))
                .collect(),
        )
    }

    fn assert_lock_step(rows: &[RowBinding], items: &TodoList) {
        assert_eq!(rows.len(), items.len());
        for (row, item) in rows.iter().zip(items.iter()) {
            assert_eq!(row.id, item.id);
            assert_eq!(row.decoration, Decoration::for_item(item));
        }
    }

    #[test]
    fn test_initial_build_binds_every_item() {
        let items = list(&[(false, "a"), (true, "b")]);
        let mut rows = Vec::new();

        let outcome = reconcile(&mut rows, &items);

        assert_eq!(outcome.appended, 2);
        assert_lock_step(&rows, &items);
        assert_eq!(rows[1].decoration, Decoration::Done);
    }

    #[test]
    fn test_toggle_only_restyles() {
        let mut items = list(&[(false, "a"), (false, "b")]);
        let mut rows = Vec::new();
        reconcile(&mut rows, &items);

        items.toggle(items.items()[1].id);
        let outcome = reconcile(&mut rows, &items);

        assert!(!outcome.is_structural());
        assert_eq!(outcome.restyled, 1);
        assert_lock_step(&rows, &items);
    }

    #[test]
    fn test_add_appends_one_row() {
        let mut items = list(&[(true, "a")]);
        let mut rows = Vec::new();
        reconcile(&mut rows, &items);
        let first = rows[0].clone();

        items.add("b");
        let outcome = reconcile(&mut rows, &items);

        assert_eq!(outcome.appended, 1);
        assert_eq!(outcome.removed, 0);
        assert_eq!(rows[0], first);
        assert_lock_step(&rows, &items);
    }

    #[test]
    fn test_batch_delete_removes_bound_rows() {
        let mut items = list(&[(false, "A"), (true, "B"), (true, "C"), (false, "D")]);
        let mut rows = Vec::new();
        reconcile(&mut rows, &items);

        items.delete_where(|item| item.completed);
        let outcome = reconcile(&mut rows, &items);

        assert_eq!(outcome.removed, 2);
        assert_eq!(outcome.appended, 0);
        assert_lock_step(&rows, &items);
    }

    #[test]
    fn test_out_of_order_rows_are_rebuilt() {
        let items = list(&[(false, "a"), (false, "b")]);
        let mut rows: Vec<RowBinding> = items.iter().rev().map(RowBinding::bind).collect();

        reconcile(&mut rows, &items);

        assert_lock_step(&rows, &items);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let items = list(&[(false, "a"), (true, "b")]);
        let mut rows = Vec::new();
        reconcile(&mut rows, &items);

        let outcome = reconcile(&mut rows, &items);

        assert_eq!(outcome, SyncOutcome::default());
    }
}
