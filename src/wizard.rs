use log::debug;

use crate::data::{self, Candidate};
use crate::matchflow::{self, Matchup};
use crate::ranking::{RankedCandidate, Tally};

pub const SELECTION_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Welcome,
    Selecting,
    Comparing,
    Ranked,
}

/// Read-only snapshot handed to the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub stage: Stage,
    pub filtered_catalog: Vec<Candidate>,
    pub selected: Vec<Candidate>,
    pub current_matchup: Option<Matchup>,
    pub ranking: Option<Vec<RankedCandidate>>,
}

/// The whole wizard: stage, filter input, selection, matchup queue, and tally
/// all live here. Operations invoked from a stage where they are undefined
/// are silent no-ops; the view layer disables the controls, the wizard stays
/// safe without it.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    stage: Stage,
    search_query: String,
    selected: Vec<Candidate>,
    matchups: Vec<Matchup>,
    cursor: usize,
    tally: Tally,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            stage: Stage::Welcome,
            search_query: String::new(),
            selected: Vec::new(),
            matchups: Vec::new(),
            cursor: 0,
            tally: Tally::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected(&self) -> &[Candidate] {
        &self.selected
    }

    pub fn is_selected(&self, candidate: Candidate) -> bool {
        self.selected.contains(&candidate)
    }

    pub fn selection_complete(&self) -> bool {
        self.selected.len() == SELECTION_LIMIT
    }

    pub fn filtered_catalog(&self) -> Vec<Candidate> {
        data::filter_catalog(&self.search_query)
    }

    pub fn current_matchup(&self) -> Option<Matchup> {
        if self.stage != Stage::Comparing {
            return None;
        }
        self.matchups.get(self.cursor).copied()
    }

    pub fn matchup_progress(&self) -> (usize, usize) {
        (self.cursor, self.matchups.len())
    }

    pub fn ranking(&self) -> Vec<RankedCandidate> {
        self.tally.ranking()
    }

    pub fn start(&mut self) {
        if self.stage != Stage::Welcome {
            return;
        }
        debug!("starting selection");
        self.stage = Stage::Selecting;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn toggle_select(&mut self, candidate: Candidate) {
        if self.stage != Stage::Selecting {
            return;
        }
        if let Some(index) = self.selected.iter().position(|&c| c == candidate) {
            self.selected.remove(index);
            debug!("deselected {candidate}");
        } else if self.selected.len() < SELECTION_LIMIT {
            self.selected.push(candidate);
            debug!("selected {candidate} ({}/{SELECTION_LIMIT})", self.selected.len());
        } else {
            debug!("selection full, ignoring {candidate}");
        }
    }

    pub fn begin_comparisons(&mut self) {
        if self.stage != Stage::Selecting || self.selected.len() != SELECTION_LIMIT {
            debug!(
                "begin_comparisons rejected with {} of {SELECTION_LIMIT} selected",
                self.selected.len()
            );
            return;
        }
        // Always a fresh run: a stale queue or tally left behind by
        // go_back_to_selection must never leak into a new comparison pass.
        self.matchups = matchflow::all_matchups(&self.selected);
        self.cursor = 0;
        self.tally.clear();
        self.stage = Stage::Comparing;
        debug!("comparing {} matchups", self.matchups.len());
    }

    pub fn record_comparison(&mut self, winner: Candidate, loser: Candidate) {
        if self.stage != Stage::Comparing || self.cursor >= self.matchups.len() {
            return;
        }
        debug!("{winner} beats {loser}");
        self.tally.record_win(winner);

        if self.cursor + 1 < self.matchups.len() {
            self.cursor += 1;
        } else {
            self.stage = Stage::Ranked;
            debug!("all matchups recorded, ranking ready");
        }
    }

    pub fn go_back_to_selection(&mut self) {
        if self.stage != Stage::Comparing {
            return;
        }
        // Selection, queue, and tally survive on purpose; begin_comparisons
        // rebuilds both before they can be observed again.
        self.stage = Stage::Selecting;
    }

    pub fn restart(&mut self) {
        if self.stage != Stage::Ranked {
            return;
        }
        debug!("restarting wizard");
        *self = Self::new();
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            stage: self.stage,
            filtered_catalog: self.filtered_catalog(),
            selected: self.selected.clone(),
            current_matchup: self.current_matchup(),
            ranking: match self.stage {
                Stage::Ranked => Some(self.ranking()),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CATALOG;

    const TOP_TEN: [Candidate; 10] = [
        "Honesty",
        "Integrity",
        "Responsibility",
        "Respect",
        "Courage",
        "Compassion",
        "Fairness",
        "Equality",
        "Freedom",
        "Peace",
    ];

    fn wizard_with_full_selection() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.start();
        for candidate in TOP_TEN {
            wizard.toggle_select(candidate);
        }
        wizard
    }

    fn run_all_comparisons(wizard: &mut Wizard, prefer: Candidate) {
        while let Some(matchup) = wizard.current_matchup() {
            if matchup.left == prefer {
                wizard.record_comparison(matchup.left, matchup.right);
            } else if matchup.right == prefer {
                wizard.record_comparison(matchup.right, matchup.left);
            } else {
                wizard.record_comparison(matchup.left, matchup.right);
            }
        }
    }

    #[test]
    fn starts_on_welcome() {
        let wizard = Wizard::new();
        assert_eq!(wizard.stage(), Stage::Welcome);
        assert!(wizard.selected().is_empty());
        assert_eq!(wizard.filtered_catalog(), CATALOG.to_vec());
    }

    #[test]
    fn start_moves_to_selecting() {
        let mut wizard = Wizard::new();
        wizard.start();
        assert_eq!(wizard.stage(), Stage::Selecting);
    }

    #[test]
    fn toggle_outside_selecting_is_ignored() {
        let mut wizard = Wizard::new();
        wizard.toggle_select("Honesty");
        assert!(wizard.selected().is_empty());
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut wizard = Wizard::new();
        wizard.start();
        wizard.toggle_select("Honesty");
        assert!(wizard.is_selected("Honesty"));
        wizard.toggle_select("Honesty");
        assert!(!wizard.is_selected("Honesty"));
    }

    #[test]
    fn eleventh_selection_is_a_no_op() {
        let mut wizard = wizard_with_full_selection();
        wizard.toggle_select("Love");

        assert_eq!(wizard.selected().len(), 10);
        assert!(!wizard.is_selected("Love"));
        // Removal still works at the cap.
        wizard.toggle_select("Peace");
        assert_eq!(wizard.selected().len(), 9);
    }

    #[test]
    fn begin_comparisons_requires_exactly_ten() {
        let mut wizard = Wizard::new();
        wizard.start();
        wizard.toggle_select("Honesty");
        wizard.begin_comparisons();
        assert_eq!(wizard.stage(), Stage::Selecting);
    }

    #[test]
    fn begin_comparisons_builds_the_queue() {
        let mut wizard = wizard_with_full_selection();
        wizard.begin_comparisons();

        assert_eq!(wizard.stage(), Stage::Comparing);
        assert_eq!(wizard.matchup_progress(), (0, 45));
        assert!(wizard.current_matchup().is_some());
    }

    #[test]
    fn full_run_records_45_wins() {
        let mut wizard = wizard_with_full_selection();
        wizard.begin_comparisons();
        run_all_comparisons(&mut wizard, "Honesty");

        assert_eq!(wizard.stage(), Stage::Ranked);
        let ranking = wizard.ranking();
        let total: u32 = ranking.iter().map(|r| r.wins).sum();
        assert_eq!(total, 45);
    }

    #[test]
    fn constant_winner_ranks_first_with_nine_wins() {
        let mut wizard = wizard_with_full_selection();
        wizard.begin_comparisons();
        run_all_comparisons(&mut wizard, "Honesty");

        let ranking = wizard.ranking();
        assert_eq!(ranking[0].candidate, "Honesty");
        assert_eq!(ranking[0].wins, 9);
        assert_eq!(ranking[0].position, 1);
    }

    #[test]
    fn back_keeps_selection_then_fresh_run_discards_stale_tally() {
        let mut wizard = wizard_with_full_selection();
        wizard.begin_comparisons();

        let matchup = wizard.current_matchup().unwrap();
        wizard.record_comparison(matchup.left, matchup.right);
        wizard.go_back_to_selection();

        assert_eq!(wizard.stage(), Stage::Selecting);
        assert_eq!(wizard.selected().len(), 10);

        wizard.begin_comparisons();
        assert_eq!(wizard.matchup_progress(), (0, 45));
        run_all_comparisons(&mut wizard, "Peace");
        let total: u32 = wizard.ranking().iter().map(|r| r.wins).sum();
        assert_eq!(total, 45, "stale win from before going back must not leak");
    }

    #[test]
    fn record_comparison_outside_comparing_is_ignored() {
        let mut wizard = wizard_with_full_selection();
        wizard.record_comparison("Honesty", "Peace");
        assert_eq!(wizard.stage(), Stage::Selecting);
        assert!(wizard.ranking().is_empty());
    }

    #[test]
    fn restart_only_applies_from_ranked() {
        let mut wizard = wizard_with_full_selection();
        wizard.restart();
        assert_eq!(wizard.stage(), Stage::Selecting);
        assert_eq!(wizard.selected().len(), 10);
    }

    #[test]
    fn restart_returns_to_initial_condition() {
        let mut wizard = wizard_with_full_selection();
        wizard.set_search_query("pea");
        wizard.begin_comparisons();
        run_all_comparisons(&mut wizard, "Peace");
        assert_eq!(wizard.stage(), Stage::Ranked);

        wizard.restart();
        assert_eq!(wizard, Wizard::new());
    }

    #[test]
    fn view_state_tracks_each_stage() {
        let mut wizard = Wizard::new();
        let view = wizard.view_state();
        assert_eq!(view.stage, Stage::Welcome);
        assert!(view.current_matchup.is_none());
        assert!(view.ranking.is_none());

        wizard.start();
        wizard.set_search_query("free");
        assert_eq!(wizard.view_state().filtered_catalog, vec!["Freedom"]);

        wizard.set_search_query("");
        for candidate in TOP_TEN {
            wizard.toggle_select(candidate);
        }
        wizard.begin_comparisons();
        let view = wizard.view_state();
        assert_eq!(view.stage, Stage::Comparing);
        assert!(view.current_matchup.is_some());
        assert!(view.ranking.is_none());

        run_all_comparisons(&mut wizard, "Courage");
        let view = wizard.view_state();
        assert_eq!(view.stage, Stage::Ranked);
        assert!(view.current_matchup.is_none());
        assert_eq!(view.ranking.unwrap()[0].candidate, "Courage");
    }
}
