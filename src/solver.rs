//! Optimal play for the dice game Pig.
//!
//! A state is `(i, j, k)`: the player to move has banked `i`, the opponent
//! has banked `j`, and the current turn total is `k`. Rolling a 1 ends the
//! turn and loses `k`; any other face `d` adds `d` to `k`. Holding banks `k`
//! and passes the turn. First to `goal` wins.
//!
//! The solver runs value iteration one layer `s = i + j` at a time, from the
//! highest layer down. Banked scores never decrease, so every value a layer
//! depends on outside itself is already final when that layer is solved.

use std::fmt;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_EPSILON: f64 = 1e-7;

#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    #[error("die must have at least 2 faces, got {0}")]
    InvalidDie(usize),
    #[error("goal must be at least 2, got {0}")]
    InvalidGoal(usize),
    #[error("epsilon must be a positive number, got {0}")]
    InvalidEpsilon(f64),
}

// ---------------------------------------------------------------------------
// StateTable – jagged i × j × (goal - i) storage
// ---------------------------------------------------------------------------

/// Dense storage for every non-terminal state. Row `i` holds `goal - i`
/// turn totals per opponent score, so states with `i + k >= goal` take no
/// space.
#[derive(Debug, Clone)]
struct StateTable<T> {
    goal: usize,
    offsets: Vec<usize>,
    values: Vec<T>,
}

impl<T: Copy> StateTable<T> {
    fn new(goal: usize, fill: T) -> Self {
        let mut offsets = Vec::with_capacity(goal);
        let mut total = 0;
        for i in 0..goal {
            offsets.push(total);
            total += goal * (goal - i);
        }
        StateTable {
            goal,
            offsets,
            values: vec![fill; total],
        }
    }

    fn index(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.goal && j < self.goal && i + k < self.goal);
        self.offsets[i] + j * (self.goal - i) + k
    }

    fn get(&self, i: usize, j: usize, k: usize) -> T {
        self.values[self.index(i, j, k)]
    }

    fn set(&mut self, i: usize, j: usize, k: usize, value: T) {
        let idx = self.index(i, j, k);
        self.values[idx] = value;
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Game parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PigRules {
    pub die: usize,
    pub goal: usize,
}

impl PigRules {
    pub fn new(die: usize, goal: usize) -> Result<Self, SolverError> {
        if die < 2 {
            return Err(SolverError::InvalidDie(die));
        }
        if goal < 2 {
            return Err(SolverError::InvalidGoal(goal));
        }
        Ok(PigRules { die, goal })
    }
}

/// Win probabilities and the optimal roll/hold policy for every state.
#[derive(Debug, Clone)]
pub struct Solution {
    rules: PigRules,
    p: StateTable<f64>,
    roll: StateTable<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Roll,
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Roll => write!(f, "Roll"),
            Action::Hold => write!(f, "Hold"),
        }
    }
}

/// Answer to "what should I do here?".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub p_win: f64,
    pub action: Action,
}

/// One line of the saved solution: `i,j,k,roll,p`.
#[derive(Debug, Serialize)]
struct SolutionRow {
    i: usize,
    j: usize,
    k: usize,
    roll: u8,
    p: f64,
}

/// Solve a game of Pig, iterating each layer until no value moves by
/// `epsilon` or more in a sweep.
pub fn solve(rules: PigRules, epsilon: f64) -> Result<Solution, SolverError> {
    if !(epsilon > 0.0) {
        return Err(SolverError::InvalidEpsilon(epsilon));
    }
    let goal = rules.goal;
    let mut p = StateTable::new(goal, 0.0);

    for layer in (0..=2 * goal - 2).rev() {
        let sweeps = iterate_layer(&mut p, rules, layer, epsilon);
        log::trace!("layer {layer} converged after {sweeps} sweeps");
    }

    let mut roll = StateTable::new(goal, false);
    for i in 0..goal {
        for j in 0..goal {
            for k in 0..goal - i {
                let (hold, rolled) = action_values(&p, rules, i, j, k);
                roll.set(i, j, k, rolled > hold);
            }
        }
    }

    log::info!(
        "solved Pig (die {}, goal {}): {} states",
        rules.die,
        goal,
        p.len()
    );
    Ok(Solution { rules, p, roll })
}

fn iterate_layer(p: &mut StateTable<f64>, rules: PigRules, layer: usize, epsilon: f64) -> usize {
    let goal = rules.goal;
    let mut sweeps = 0;
    loop {
        sweeps += 1;
        let mut max_change: f64 = 0.0;
        for i in (0..goal).rev() {
            let Some(j) = layer.checked_sub(i) else {
                continue;
            };
            if j >= goal {
                continue;
            }
            for k in 0..goal - i {
                let old = p.get(i, j, k);
                let (hold, rolled) = action_values(p, rules, i, j, k);
                let new = hold.max(rolled);
                p.set(i, j, k, new);
                max_change = max_change.max((new - old).abs());
            }
        }
        if max_change < epsilon {
            return sweeps;
        }
    }
}

/// Win probability for the player to move; terminal states are 1 or 0.
fn p_win(p: &StateTable<f64>, goal: usize, i: usize, j: usize, k: usize) -> f64 {
    if i.saturating_add(k) >= goal {
        return 1.0;
    }
    if j >= goal {
        return 0.0;
    }
    p.get(i, j, k)
}

/// `(p_hold, p_roll)` for a state given the current estimates.
fn action_values(p: &StateTable<f64>, rules: PigRules, i: usize, j: usize, k: usize) -> (f64, f64) {
    let goal = rules.goal;
    let hold = 1.0 - p_win(p, goal, j, i + k, 0);
    let mut rolled = 1.0 - p_win(p, goal, j, i, 0);
    for d in 2..=rules.die {
        rolled += p_win(p, goal, i, j, k + d);
    }
    (hold, rolled / rules.die as f64)
}

impl Solution {
    pub fn rules(&self) -> PigRules {
        self.rules
    }

    /// Number of non-terminal states, i.e. rows in the saved CSV.
    pub fn state_count(&self) -> usize {
        self.p.len()
    }

    pub fn p_win(&self, i: usize, j: usize, k: usize) -> f64 {
        p_win(&self.p, self.rules.goal, i, j, k)
    }

    /// Win probability and optimal action at any state, terminal or not.
    /// A decided game (probability exactly 0 or 1) always reports Hold.
    pub fn query(&self, i: usize, j: usize, k: usize) -> Query {
        let p_win = self.p_win(i, j, k);
        let action = if p_win == 0.0 || p_win == 1.0 || !self.roll.get(i, j, k) {
            Action::Hold
        } else {
            Action::Roll
        };
        Query { p_win, action }
    }

    /// Write every non-terminal state as `i,j,k,roll,p`, ordered by i, j, k.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        let goal = self.rules.goal;
        for i in 0..goal {
            for j in 0..goal {
                for k in 0..goal - i {
                    writer
                        .serialize(SolutionRow {
                            i,
                            j,
                            k,
                            roll: u8::from(self.roll.get(i, j, k)),
                            p: self.p.get(i, j, k),
                        })
                        .with_context(|| format!("writing state ({i}, {j}, {k})"))?;
                }
            }
        }
        writer.flush().context("flushing CSV")?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        self.write_csv(std::io::BufWriter::new(file))
            .with_context(|| format!("saving solution to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_records;

    fn solved(die: usize, goal: usize) -> Solution {
        solve(PigRules::new(die, goal).unwrap(), DEFAULT_EPSILON).unwrap()
    }

    #[test]
    fn rejects_bad_rules() {
        assert_eq!(PigRules::new(1, 100), Err(SolverError::InvalidDie(1)));
        assert_eq!(PigRules::new(6, 1), Err(SolverError::InvalidGoal(1)));
        let rules = PigRules::new(6, 10).unwrap();
        assert!(matches!(solve(rules, 0.0), Err(SolverError::InvalidEpsilon(_))));
        assert!(solve(rules, f64::NAN).is_err());
    }

    #[test]
    fn table_skips_terminal_states() {
        let table = StateTable::new(4, 0u8);
        assert_eq!(table.len(), 4 * (4 + 3 + 2 + 1));
        assert_eq!(table.index(0, 0, 0), 0);
        assert_eq!(table.index(1, 0, 0), 16);
        assert_eq!(table.index(3, 3, 0), table.len() - 1);
    }

    #[test]
    fn probabilities_are_valid() {
        let sol = solved(6, 15);
        for i in 0..15 {
            for j in 0..15 {
                for k in 0..15 - i {
                    let p = sol.p_win(i, j, k);
                    assert!((0.0..=1.0).contains(&p), "p({i},{j},{k}) = {p}");
                }
            }
        }
    }

    #[test]
    fn terminal_states() {
        let sol = solved(6, 10);
        assert_eq!(sol.query(5, 0, 5), Query { p_win: 1.0, action: Action::Hold });
        assert_eq!(sol.query(0, 10, 0), Query { p_win: 0.0, action: Action::Hold });
    }

    #[test]
    fn huge_turn_total_counts_as_a_win() {
        let sol = solved(6, 10);
        assert_eq!(sol.query(1, 0, usize::MAX), Query { p_win: 1.0, action: Action::Hold });
        assert_eq!(sol.query(usize::MAX, usize::MAX, 1).p_win, 1.0);
    }

    #[test]
    fn first_player_has_the_edge() {
        let sol = solved(6, 20);
        assert!(sol.p_win(0, 0, 0) > 0.5);
    }

    #[test]
    fn roll_one_point_from_goal() {
        // Holding with nothing banked just hands over the turn.
        let sol = solved(6, 20);
        let q = sol.query(19, 0, 0);
        assert_eq!(q.action, Action::Roll);
        assert!(q.p_win > 5.0 / 6.0);
    }

    #[test]
    fn more_banked_is_better() {
        let sol = solved(6, 20);
        assert!(sol.p_win(10, 5, 0) > sol.p_win(5, 5, 0));
        assert!(sol.p_win(5, 10, 0) < sol.p_win(5, 5, 0));
    }

    #[test]
    fn saved_csv_reads_back_as_records() {
        let sol = solved(2, 6);
        let mut buf = Vec::new();
        sol.write_csv(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("i,j,k,roll,p\n"));

        let records = read_records(text.as_bytes()).unwrap();
        assert_eq!(records.len(), sol.state_count());
        assert_eq!(records[0].coord(), [0, 0, 0]);
        for r in &records {
            assert!(r.x + r.z < 6);
            let rolled = sol.roll.get(r.x as usize, r.y as usize, r.z as usize);
            assert_eq!(r.is_roll(), rolled);
        }
    }
}
