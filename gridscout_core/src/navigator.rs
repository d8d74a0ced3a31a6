//! Greedy single-step navigation with dead-end backtracking.
//!
//! Each call looks at three candidate neighbours along the heading toward the
//! target (horizontal, vertical, diagonal). A candidate is *usable* when it is
//! known open and not blacklisted; unknown cells are never usable.
//!
//! Candidates are ranked by the ordered rule tables below, highest priority
//! first. The first matching rule decides the displacement:
//!
//! | priority | advance                       | retreat (reversed heading) |
//! |----------|-------------------------------|----------------------------|
//! | 1        | diagonal                      | diagonal                   |
//! | 2        | vertical                      | vertical                   |
//! | 3        | horizontal                    | horizontal                 |
//! | 4        | vertical, same column only    |                            |
//! | 5        | horizontal, same row only     |                            |
//!
//! When the target shares a row or column with the agent one heading
//! component is zero, so the matching axis rule can win with a zero
//! displacement. That counts as no progress, exactly like finding nothing.
//!
//! With no progress the agent is stuck: the current cell gets blacklisted and
//! the retreat table is consulted with the current cell already excluded. If
//! that also yields nothing the agent stays put. Staying put can repeat
//! forever when every neighbour is closed or blacklisted; callers must cap the
//! number of steps.

use crate::blacklist::Blacklist;
use crate::known_map::KnownMap;
use gridscout_env::{Cell, Move};

/// Which neighbour a rule probes, relative to a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Diagonal,
    Vertical,
    Horizontal,
}

impl Probe {
    fn step(self, heading: Move) -> Move {
        match self {
            Probe::Diagonal => heading,
            Probe::Vertical => heading.vertical(),
            Probe::Horizontal => heading.horizontal(),
        }
    }
}

/// Extra condition a rule needs besides a usable candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// Agent and target share a column.
    SameColumn,
    /// Agent and target share a row.
    SameRow,
}

impl Guard {
    fn holds(self, position: Cell, target: Cell) -> bool {
        match self {
            Guard::Always => true,
            Guard::SameColumn => position.x == target.x,
            Guard::SameRow => position.y == target.y,
        }
    }
}

/// One row of a priority table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub probe: Probe,
    pub guard: Guard,
}

impl Rule {
    const fn new(probe: Probe, guard: Guard) -> Self {
        Self { probe, guard }
    }
}

/// Forward rules, highest priority first.
pub const ADVANCE_RULES: [Rule; 5] = [
    Rule::new(Probe::Diagonal, Guard::Always),
    Rule::new(Probe::Vertical, Guard::Always),
    Rule::new(Probe::Horizontal, Guard::Always),
    Rule::new(Probe::Vertical, Guard::SameColumn),
    Rule::new(Probe::Horizontal, Guard::SameRow),
];

/// Backward rules, highest priority first, applied to the reversed heading.
pub const RETREAT_RULES: [Rule; 3] = [
    Rule::new(Probe::Diagonal, Guard::Always),
    Rule::new(Probe::Vertical, Guard::Always),
    Rule::new(Probe::Horizontal, Guard::Always),
];

/// Outcome of a single navigation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Already on the target; nothing to do.
    Arrived,
    /// Progress toward the target.
    Advance(Move),
    /// Stuck going forward, stepping back. The current cell is blacklisted.
    Backtrack(Move),
    /// No usable neighbour either way. The current cell is blacklisted.
    Stuck,
}

impl Decision {
    /// Displacement to apply to the agent's position.
    pub fn step(&self) -> Move {
        match self {
            Decision::Advance(mv) | Decision::Backtrack(mv) => *mv,
            Decision::Arrived | Decision::Stuck => Move::STAY,
        }
    }

    /// True when the agent's current cell must be added to its blacklist.
    pub fn blacklists_position(&self) -> bool {
        matches!(self, Decision::Backtrack(_) | Decision::Stuck)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Decision::Arrived => "arrived",
            Decision::Advance(_) => "advance",
            Decision::Backtrack(_) => "backtrack",
            Decision::Stuck => "stuck",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Advance(mv) | Decision::Backtrack(mv) => write!(f, "{} {}", self.kind(), mv),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// Stateless decision maker.
///
/// Reads the agent's knowledge and blacklist through shared references only;
/// applying the decision (moving, blacklisting) is the caller's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator;

impl Navigator {
    pub fn new() -> Self {
        Self
    }

    /// Picks the next single-step move from `position` toward `target`.
    pub fn decide(
        &self,
        position: Cell,
        target: Cell,
        known: &KnownMap,
        blacklist: &Blacklist,
    ) -> Decision {
        if position == target {
            return Decision::Arrived;
        }

        let usable = |cell: Cell| known.lookup(cell).is_open() && !blacklist.contains(cell);
        let heading = position.heading_to(target);

        match first_match(&ADVANCE_RULES, position, target, heading, &usable) {
            Some(step) if !step.is_stay() => return Decision::Advance(step),
            _ => {}
        }

        // The current cell is blacklisted before the backward search
        let usable_back = |cell: Cell| cell != position && usable(cell);
        match first_match(&RETREAT_RULES, position, target, heading.reversed(), &usable_back) {
            Some(step) if !step.is_stay() => Decision::Backtrack(step),
            _ => Decision::Stuck,
        }
    }
}

/// Displacement of the highest-priority rule whose guard holds and whose
/// candidate is usable. The winning displacement may be zero.
fn first_match<F>(rules: &[Rule], position: Cell, target: Cell, heading: Move, usable: &F) -> Option<Move>
where
    F: Fn(Cell) -> bool,
{
    rules
        .iter()
        .filter(|rule| rule.guard.holds(position, target))
        .map(|rule| rule.probe.step(heading))
        .find(|step| usable(position.offset(*step)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridscout_env::{GridDim, Terrain};

    /// Terrain parsed from rows of '0' (open) and '1' (closed).
    struct Layout(GridDim, Vec<Vec<bool>>);

    impl Layout {
        fn parse(rows: &[&str]) -> Self {
            let dim = GridDim::new(rows.len()).unwrap();
            Self(dim, rows.iter().map(|r| r.chars().map(|c| c == '0').collect()).collect())
        }

        /// Everything visible, as if the agent had already looked everywhere.
        fn fully_known(&self) -> KnownMap {
            let mut known = KnownMap::new(self.0);
            let cells: Vec<Cell> = self.0.cells().collect();
            known.update(&cells, self);
            known
        }
    }

    impl Terrain for Layout {
        fn dim(&self) -> GridDim {
            self.0
        }

        fn is_open(&self, cell: Cell) -> bool {
            self.0.contains(cell) && self.1[cell.y as usize][cell.x as usize]
        }
    }

    fn decide(layout: &Layout, at: Cell, target: Cell, blacklist: &Blacklist) -> Decision {
        Navigator::new().decide(at, target, &layout.fully_known(), blacklist)
    }

    #[test]
    fn test_diagonal_beats_axes() {
        let layout = Layout::parse(&["000", "000", "000"]);
        let d = decide(&layout, Cell::new(0, 0), Cell::new(2, 2), &Blacklist::new());

        assert_eq!(d, Decision::Advance(Move::new(1, 1)));
    }

    #[test]
    fn test_vertical_beats_horizontal() {
        let layout = Layout::parse(&["000", "010", "000"]);
        let d = decide(&layout, Cell::new(0, 0), Cell::new(2, 2), &Blacklist::new());

        assert_eq!(d, Decision::Advance(Move::new(0, 1)));
    }

    #[test]
    fn test_horizontal_when_vertical_closed() {
        let layout = Layout::parse(&["000", "110", "000"]);
        let d = decide(&layout, Cell::new(0, 0), Cell::new(2, 2), &Blacklist::new());

        assert_eq!(d, Decision::Advance(Move::new(1, 0)));
    }

    #[test]
    fn test_unknown_cells_are_not_usable() {
        let dim = GridDim::new(3).unwrap();
        let known = KnownMap::seeded(dim, Cell::new(0, 0));
        let d = Navigator::new().decide(Cell::new(0, 0), Cell::new(2, 2), &known, &Blacklist::new());

        // Nothing around the start is known and there is nowhere to retreat
        assert_eq!(d, Decision::Stuck);
    }

    #[test]
    fn test_blacklisted_diagonal_skipped() {
        let layout = Layout::parse(&["000", "000", "000"]);
        let mut blacklist = Blacklist::new();
        blacklist.insert(Cell::new(1, 1));

        let d = decide(&layout, Cell::new(0, 0), Cell::new(2, 2), &blacklist);

        assert_eq!(d, Decision::Advance(Move::new(0, 1)));
    }

    #[test]
    fn test_same_row_moves_horizontally() {
        let layout = Layout::parse(&["000", "000", "000"]);
        let d = decide(&layout, Cell::new(0, 2), Cell::new(2, 2), &Blacklist::new());

        assert_eq!(d, Decision::Advance(Move::new(1, 0)));
    }

    #[test]
    fn test_same_row_blocked_is_stuck_not_diagonal() {
        // Target straight right, right neighbour closed: the zero-height
        // vertical probe lands on the agent's own cell and wins with no move.
        let layout = Layout::parse(&["000", "000", "010"]);
        let d = decide(&layout, Cell::new(0, 2), Cell::new(2, 2), &Blacklist::new());

        assert_eq!(d, Decision::Stuck);
        assert!(d.blacklists_position());
    }

    #[test]
    fn test_backtrack_when_cornered() {
        // Agent at (1,1) heading to (2,2); right, down and diagonal closed
        let layout = Layout::parse(&["000", "001", "011"]);
        let d = decide(&layout, Cell::new(1, 1), Cell::new(2, 2), &Blacklist::new());

        assert_eq!(d, Decision::Backtrack(Move::new(-1, -1)));
        assert_eq!(d.step(), Move::new(-1, -1));
    }

    #[test]
    fn test_backtrack_prefers_vertical_over_horizontal() {
        let layout = Layout::parse(&["010", "001", "011"]);
        let d = decide(&layout, Cell::new(1, 1), Cell::new(2, 2), &Blacklist::new());

        // Back-diagonal (0,0) open, so it still wins
        assert_eq!(d, Decision::Backtrack(Move::new(-1, -1)));

        let layout = Layout::parse(&["100", "001", "011"]);
        let d = decide(&layout, Cell::new(1, 1), Cell::new(2, 2), &Blacklist::new());

        assert_eq!(d, Decision::Backtrack(Move::new(0, -1)));
    }

    #[test]
    fn test_retreat_never_steps_into_blacklist() {
        let layout = Layout::parse(&["000", "001", "011"]);
        let mut blacklist = Blacklist::new();
        blacklist.insert(Cell::new(0, 0));
        blacklist.insert(Cell::new(1, 0));
        blacklist.insert(Cell::new(0, 1));

        let d = decide(&layout, Cell::new(1, 1), Cell::new(2, 2), &blacklist);

        assert_eq!(d, Decision::Stuck);
    }

    #[test]
    fn test_arrived_at_target() {
        let layout = Layout::parse(&["00", "00"]);
        let d = decide(&layout, Cell::new(1, 1), Cell::new(1, 1), &Blacklist::new());

        assert_eq!(d, Decision::Arrived);
        assert!(!d.blacklists_position());
        assert!(d.step().is_stay());
    }

    #[test]
    fn test_rule_tables_keep_priority_order() {
        assert_eq!(ADVANCE_RULES[0].probe, Probe::Diagonal);
        assert_eq!(ADVANCE_RULES[3].guard, Guard::SameColumn);
        assert_eq!(ADVANCE_RULES[4].guard, Guard::SameRow);
        assert_eq!(RETREAT_RULES.len(), 3);
    }
}
