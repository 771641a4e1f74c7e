use crate::data::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    pub left: Candidate,
    pub right: Candidate,
}

impl Matchup {
    pub fn involves(&self, candidate: Candidate) -> bool {
        self.left == candidate || self.right == candidate
    }
}

/// Builds the full round-robin queue: every unordered pair of the selection
/// exactly once. Pair order within the queue is an artifact of the pop-and-pair
/// walk and callers must not rely on it.
pub fn all_matchups(selection: &[Candidate]) -> Vec<Matchup> {
    let mut working = selection.to_vec();
    let mut queue = Vec::with_capacity(working.len() * working.len().saturating_sub(1) / 2);

    while let Some(left) = working.pop() {
        for &right in &working {
            queue.push(Matchup { left, right });
        }
    }

    queue
}
