//! Chronological milestones.

use crate::record::WordRecord;

use super::reports::{Milestone, WordRef};

/// Positions celebrated in an archive of `len` words.
///
/// The first word, the 25th, 50th and 75th once reached, then every 100th.
pub fn milestone_positions(len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut positions = vec![1];
    positions.extend([25, 50, 75].into_iter().filter(|&p| p <= len));
    positions.extend((100..=len).step_by(100));
    positions
}

/// The record at each milestone position, counting from the oldest.
///
/// Input order does not matter; records are sorted oldest-first here.
pub fn milestones(records: &[WordRecord]) -> Vec<(usize, &WordRecord)> {
    let mut chronological: Vec<&WordRecord> = records.iter().collect();
    chronological.sort_by(|a, b| a.date.cmp(&b.date));

    milestone_positions(chronological.len())
        .into_iter()
        .filter_map(|position| chronological.get(position - 1).map(|r| (position, *r)))
        .collect()
}

pub(crate) fn milestone_report(records: &[WordRecord]) -> Vec<Milestone> {
    milestones(records)
        .into_iter()
        .map(|(position, record)| Milestone {
            position,
            word: WordRef::from(record),
        })
        .collect()
}
