use crate::data::Candidate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    pub position: usize,
    pub candidate: Candidate,
    pub wins: u32,
}

/// Win counts keyed by candidate. Entries are kept in first-win order, which
/// is what makes the descending sort's tie-break stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    wins: Vec<(Candidate, u32)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self, winner: Candidate) {
        match self.wins.iter_mut().find(|(candidate, _)| *candidate == winner) {
            Some((_, count)) => *count += 1,
            None => self.wins.push((winner, 1)),
        }
    }

    pub fn wins_for(&self, candidate: Candidate) -> u32 {
        self.wins
            .iter()
            .find(|(entry, _)| *entry == candidate)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total_wins(&self) -> u32 {
        self.wins.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    pub fn clear(&mut self) {
        self.wins.clear();
    }

    /// Candidates with at least one win, best first. Ties keep first-win
    /// order because the sort is stable over the insertion-ordered entries.
    pub fn ranking(&self) -> Vec<RankedCandidate> {
        let mut entries = self.wins.clone();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (candidate, wins))| RankedCandidate {
                position: index + 1,
                candidate,
                wins,
            })
            .collect()
    }
}
