//! "At most one expanded item" bookkeeping for each panel group.

use std::collections::HashMap;

use crate::models::ToggleGroup;

/// Handed out when an expansion should later move keyboard focus into the
/// revealed panel.  The ticket is only honoured while the group still shows
/// the same item it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTicket {
    pub group: ToggleGroup,
    pub index: usize,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Expanded {
        index: usize,
        previous: Option<usize>,
        ticket: Option<FocusTicket>,
    },
    Collapsed {
        index: usize,
    },
}

#[derive(Debug, Clone)]
pub struct ExclusiveToggleSet {
    group: ToggleGroup,
    expanded: Option<usize>,
    // Bumped on every change so stale focus tickets can be recognised.
    generation: u64,
}

impl ExclusiveToggleSet {
    pub fn new(group: ToggleGroup) -> Self {
        Self {
            group,
            expanded: None,
            generation: 0,
        }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn toggle(&mut self, index: usize) -> ToggleOutcome {
        self.generation += 1;

        if self.expanded == Some(index) {
            self.expanded = None;
            return ToggleOutcome::Collapsed { index };
        }

        let previous = self.expanded.replace(index);
        let ticket = self.group.focus_after_expand().then_some(FocusTicket {
            group: self.group,
            index,
            generation: self.generation,
        });
        ToggleOutcome::Expanded {
            index,
            previous,
            ticket,
        }
    }

    /// Collapse whatever is open.  Returns the index that was expanded.
    pub fn collapse(&mut self) -> Option<usize> {
        let previous = self.expanded.take();
        if previous.is_some() {
            self.generation += 1;
        }
        previous
    }

    pub fn ticket_is_current(&self, ticket: &FocusTicket) -> bool {
        ticket.group == self.group
            && ticket.generation == self.generation
            && self.expanded == Some(ticket.index)
    }
}

/// One independent toggle set per group.
#[derive(Debug, Clone)]
pub struct ToggleGroups {
    sets: HashMap<ToggleGroup, ExclusiveToggleSet>,
}

impl Default for ToggleGroups {
    fn default() -> Self {
        let sets = ToggleGroup::ALL
            .iter()
            .map(|g| (*g, ExclusiveToggleSet::new(*g)))
            .collect();
        Self { sets }
    }
}

impl ToggleGroups {
    pub fn get(&self, group: ToggleGroup) -> &ExclusiveToggleSet {
        // Every group is inserted up front in `default()`.
        &self.sets[&group]
    }

    pub fn get_mut(&mut self, group: ToggleGroup) -> &mut ExclusiveToggleSet {
        self.sets
            .entry(group)
            .or_insert_with(|| ExclusiveToggleSet::new(group))
    }

    pub fn is_expanded(&self, group: ToggleGroup, index: usize) -> bool {
        self.get(group).is_expanded(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn toggling_twice_collapses() {
        let mut set = ExclusiveToggleSet::new(ToggleGroup::Services);
        set.toggle(2);
        assert!(set.is_expanded(2));
        assert_eq!(set.toggle(2), ToggleOutcome::Collapsed { index: 2 });
        assert_eq!(set.expanded(), None);
    }

    #[test]
    fn opening_another_item_replaces_the_first() {
        let mut set = ExclusiveToggleSet::new(ToggleGroup::Technology);
        set.toggle(1);
        match set.toggle(4) {
            ToggleOutcome::Expanded { index, previous, .. } => {
                assert_eq!(index, 4);
                assert_eq!(previous, Some(1));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(!set.is_expanded(1));
        assert!(set.is_expanded(4));
    }

    #[test]
    fn values_group_never_issues_focus_tickets() {
        let mut set = ExclusiveToggleSet::new(ToggleGroup::ClinicValues);
        assert!(matches!(
            set.toggle(0),
            ToggleOutcome::Expanded { ticket: None, .. }
        ));
    }

    #[test]
    fn ticket_goes_stale_after_any_change() {
        let mut set = ExclusiveToggleSet::new(ToggleGroup::StaffBios);
        let ticket = match set.toggle(3) {
            ToggleOutcome::Expanded { ticket: Some(t), .. } => t,
            other => panic!("expected a ticket, got {:?}", other),
        };
        assert!(set.ticket_is_current(&ticket));

        // Collapse and re-open the very same item: still a new generation.
        set.toggle(3);
        set.toggle(3);
        assert!(set.is_expanded(3));
        assert!(!set.ticket_is_current(&ticket));
    }

    #[test]
    fn groups_are_independent() {
        let mut groups = ToggleGroups::default();
        groups.get_mut(ToggleGroup::Services).toggle(0);
        groups.get_mut(ToggleGroup::StaffBios).toggle(2);

        assert!(groups.is_expanded(ToggleGroup::Services, 0));
        assert!(groups.is_expanded(ToggleGroup::StaffBios, 2));
        assert!(!groups.is_expanded(ToggleGroup::Technology, 0));

        assert_eq!(groups.get_mut(ToggleGroup::Services).collapse(), Some(0));
        assert!(groups.is_expanded(ToggleGroup::StaffBios, 2));
    }

    #[test]
    fn exclusivity_holds_for_any_toggle_sequence() {
        let mut runner = proptest::test_runner::TestRunner::default();
        let strategy = prop::collection::vec(0usize..6, 0..40);

        runner
            .run(&strategy, |indices| {
                let mut set = ExclusiveToggleSet::new(ToggleGroup::Services);
                let mut model: Option<usize> = None;
                for i in indices {
                    set.toggle(i);
                    model = if model == Some(i) { None } else { Some(i) };
                    let open: Vec<usize> = (0..6).filter(|j| set.is_expanded(*j)).collect();
                    prop_assert!(open.len() <= 1);
                    prop_assert_eq!(set.expanded(), model);
                }
                Ok(())
            })
            .expect("property test failed");
    }
}
