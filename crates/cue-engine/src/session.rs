//! Caption display state.
//!
//! [`CueIndex`] only answers lookups. Whatever draws captions also needs to
//! know what it is currently showing, whether captions are switched on, and
//! which track is loaded. `CaptionSession` holds that state and turns the
//! stream of playback time updates into show/hide transitions.

use std::sync::Arc;

use cuetrack_model::Cue;

use crate::index::CueIndex;

/// What the display should do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptionUpdate {
    /// Show this cue (replacing any caption already shown).
    Show { position: usize, text: String },
    /// Clear the caption.
    Hide,
    /// Keep the display as it is.
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct CaptionSession {
    index: Arc<CueIndex>,
    enabled: bool,
    shown: Option<usize>,
}

impl CaptionSession {
    pub fn new(index: Arc<CueIndex>, enabled: bool) -> Self {
        Self {
            index,
            enabled,
            shown: None,
        }
    }

    /// Handle a playback time update.
    pub fn on_time_update(&mut self, time_seconds: f64) -> CaptionUpdate {
        let wanted = if self.enabled {
            self.index.active_position_at(time_seconds)
        } else {
            None
        };
        self.transition(wanted)
    }

    /// Switch captions on or off. Turning them off hides a visible caption;
    /// turning them on takes effect at the next time update.
    pub fn set_enabled(&mut self, enabled: bool) -> CaptionUpdate {
        self.enabled = enabled;
        if enabled {
            CaptionUpdate::Unchanged
        } else {
            self.transition(None)
        }
    }

    pub fn toggle(&mut self) -> CaptionUpdate {
        self.set_enabled(!self.enabled)
    }

    /// Load a different track. Any caption from the old track is hidden.
    pub fn replace_track(&mut self, index: Arc<CueIndex>) -> CaptionUpdate {
        tracing::debug!(cues = index.len(), "replacing caption track");
        self.index = index;
        self.transition(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn index(&self) -> &Arc<CueIndex> {
        &self.index
    }

    /// The cue currently on screen.
    pub fn current_cue(&self) -> Option<&Cue> {
        self.shown.and_then(|position| self.index.get(position))
    }

    fn transition(&mut self, wanted: Option<usize>) -> CaptionUpdate {
        if wanted == self.shown {
            return CaptionUpdate::Unchanged;
        }
        self.shown = wanted;
        match wanted.and_then(|position| self.index.get(position).map(|cue| (position, cue))) {
            Some((position, cue)) => CaptionUpdate::Show {
                position,
                text: cue.text().to_string(),
            },
            None => CaptionUpdate::Hide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(ranges: &[(f64, f64, &str)]) -> Arc<CueIndex> {
        Arc::new(
            ranges
                .iter()
                .map(|&(start, end, text)| Cue::new(start, end, text).unwrap())
                .collect(),
        )
    }

    fn show(position: usize, text: &str) -> CaptionUpdate {
        CaptionUpdate::Show {
            position,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_emits_only_transitions() {
        let mut session = CaptionSession::new(track(&[(1.0, 2.0, "a"), (2.5, 3.0, "b")]), true);
        assert_eq!(session.on_time_update(0.5), CaptionUpdate::Unchanged);
        assert_eq!(session.on_time_update(1.0), show(0, "a"));
        assert_eq!(session.on_time_update(1.5), CaptionUpdate::Unchanged);
        assert_eq!(session.current_cue().map(Cue::text), Some("a"));
        assert_eq!(session.on_time_update(2.2), CaptionUpdate::Hide);
        assert_eq!(session.on_time_update(2.6), show(1, "b"));
        assert_eq!(session.on_time_update(9.0), CaptionUpdate::Hide);
        assert_eq!(session.current_cue(), None);
    }

    #[test]
    fn test_back_to_back_cues_switch_directly() {
        let mut session = CaptionSession::new(track(&[(1.0, 2.0, "a"), (2.001, 3.0, "b")]), true);
        assert_eq!(session.on_time_update(1.9), show(0, "a"));
        assert_eq!(session.on_time_update(2.5), show(1, "b"));
    }

    #[test]
    fn test_seek_backwards() {
        let mut session = CaptionSession::new(track(&[(1.0, 2.0, "a"), (5.0, 6.0, "b")]), true);
        assert_eq!(session.on_time_update(5.5), show(1, "b"));
        assert_eq!(session.on_time_update(1.5), show(0, "a"));
    }

    #[test]
    fn test_disabled_session_shows_nothing() {
        let mut session = CaptionSession::new(track(&[(1.0, 2.0, "a")]), false);
        assert_eq!(session.on_time_update(1.5), CaptionUpdate::Unchanged);
        assert_eq!(session.current_cue(), None);
    }

    #[test]
    fn test_toggle() {
        let mut session = CaptionSession::new(track(&[(1.0, 2.0, "a")]), true);
        assert_eq!(session.on_time_update(1.5), show(0, "a"));
        assert_eq!(session.toggle(), CaptionUpdate::Hide);
        assert!(!session.is_enabled());
        assert_eq!(session.on_time_update(1.6), CaptionUpdate::Unchanged);
        assert_eq!(session.toggle(), CaptionUpdate::Unchanged);
        assert_eq!(session.on_time_update(1.7), show(0, "a"));
    }

    #[test]
    fn test_replace_track_hides_old_caption() {
        let mut session = CaptionSession::new(track(&[(1.0, 2.0, "old")]), true);
        assert_eq!(session.on_time_update(1.5), show(0, "old"));
        assert_eq!(
            session.replace_track(track(&[(1.0, 2.0, "new")])),
            CaptionUpdate::Hide
        );
        assert_eq!(session.on_time_update(1.5), show(0, "new"));
        assert_eq!(session.index().len(), 1);
    }
}
