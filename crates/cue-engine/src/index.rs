//! Active-cue lookup.
//!
//! Players ask "what is on screen now?" on every time update, so lookups
//! must be cheap and must give the same answer however the playback
//! position moves (forward, backward, or jumping after a seek).
//!
//! Cues are sorted by start time. Next to them the index keeps, for every
//! position `i`, the latest end time among cues `0..=i`. That table never
//! decreases, so both halves of a query are binary searches:
//!
//! 1. `upper`: how many cues start at or before `t`. Only those can cover `t`.
//! 2. `first`: the first position whose running end reaches `t`. The running
//!    end only rises at a cue whose own end is the new maximum, so the cue at
//!    `first` itself covers `t` and has the earliest start of all that do.
//!
//! If `first < upper`, the cue at `first` is active; otherwise nothing is.

use cuetrack_model::Cue;

/// Sorted, read-only cue track answering point-in-time queries.
#[derive(Debug, Clone, Default)]
pub struct CueIndex {
    cues: Vec<Cue>,
    /// `running_end[i]` is the maximum `end_seconds` of `cues[..=i]`.
    running_end: Vec<f64>,
}

impl CueIndex {
    /// Build an index, sorting cues by start time.
    ///
    /// The sort is stable: cues with equal start times keep their source order.
    pub fn new(mut cues: Vec<Cue>) -> Self {
        cues.sort_by(|a, b| a.start_seconds().total_cmp(&b.start_seconds()));

        let mut running_end = Vec::with_capacity(cues.len());
        let mut latest = f64::NEG_INFINITY;
        for cue in &cues {
            latest = latest.max(cue.end_seconds());
            running_end.push(latest);
        }

        let index = Self { cues, running_end };
        tracing::debug!(
            cues = index.len(),
            overlaps = index.overlap_count(),
            duration_secs = index.duration_seconds(),
            "built cue index"
        );
        index
    }

    /// The cue shown at `time_seconds`, if any.
    ///
    /// Active means `start <= t <= end`. When several cues overlap `t`, the
    /// one with the earliest start wins, then the earliest in sorted order.
    /// Any input is accepted; negative, NaN, or out-of-range times give `None`.
    pub fn active_cue_at(&self, time_seconds: f64) -> Option<&Cue> {
        self.active_position_at(time_seconds)
            .map(|position| &self.cues[position])
    }

    /// Position in [`CueIndex::cues`] of the cue shown at `time_seconds`.
    pub fn active_position_at(&self, time_seconds: f64) -> Option<usize> {
        let upper = self
            .cues
            .partition_point(|cue| cue.start_seconds() <= time_seconds);
        if upper == 0 {
            return None;
        }
        let first = self.running_end[..upper].partition_point(|&end| end < time_seconds);
        (first < upper).then_some(first)
    }

    /// Cues in start-time order.
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }

    pub fn get(&self, position: usize) -> Option<&Cue> {
        self.cues.get(position)
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// End of the last caption, or zero for an empty track.
    pub fn duration_seconds(&self) -> f64 {
        self.running_end.last().copied().unwrap_or(0.0)
    }

    /// Number of cues that start while an earlier cue is still showing.
    pub fn overlap_count(&self) -> usize {
        self.cues
            .iter()
            .skip(1)
            .zip(&self.running_end)
            .filter(|(cue, previous_end)| cue.start_seconds() <= **previous_end)
            .count()
    }
}

impl<'a> IntoIterator for &'a CueIndex {
    type Item = &'a Cue;
    type IntoIter = std::slice::Iter<'a, Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.iter()
    }
}

impl FromIterator<Cue> for CueIndex {
    fn from_iter<I: IntoIterator<Item = Cue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
