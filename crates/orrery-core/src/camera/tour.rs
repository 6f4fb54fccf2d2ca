//! Guided tour through a playlist of presets.

use super::presets::PresetTable;
use super::transition::{capture_view, TransitionState, ViewTarget};
use super::view::Camera;
use crate::settings::CameraSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct TourState {
    playlist: Vec<String>,
    /// Playlist entry the next step will visit
    next_index: usize,
    dwell_ms: f64,
    /// Timestamp at which the next step falls due
    next_step_ms: f64,
    /// Transition toward the current stop, while it is in flight
    leg: Option<TransitionState>,
}

/// A leg the tour has just started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourStep {
    pub preset_id: String,
    pub index: usize,
}

impl TourState {
    /// A tour whose first step is due at `now_ms`.
    pub fn new(playlist: Vec<String>, dwell_ms: f64, now_ms: f64) -> Self {
        Self {
            playlist,
            next_index: 0,
            dwell_ms,
            next_step_ms: now_ms,
            leg: None,
        }
    }

    pub fn playlist(&self) -> &[String] {
        &self.playlist
    }

    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn next_step_ms(&self) -> f64 {
        self.next_step_ms
    }

    pub fn due(&self, now_ms: f64) -> bool {
        !self.playlist.is_empty() && now_ms >= self.next_step_ms
    }

    pub fn leg(&self) -> Option<&TransitionState> {
        self.leg.as_ref()
    }

    pub fn take_leg(&mut self) -> Option<TransitionState> {
        self.leg.take()
    }

    pub fn into_leg(self) -> Option<TransitionState> {
        self.leg
    }

    /// Move to the next playlist entry and schedule the step after it.
    ///
    /// A step that falls due while the previous leg is still moving is
    /// skipped, the same way a direct request would be refused.
    pub fn step(
        &mut self,
        camera: &Camera,
        presets: &PresetTable,
        settings: &CameraSettings,
        now_ms: f64,
    ) -> Option<TourStep> {
        let index = self.next_index;
        let id = self.playlist.get(index)?.clone();
        self.next_index = (index + 1) % self.playlist.len();
        self.next_step_ms = now_ms + self.dwell_ms;

        if self.leg.is_some() {
            log::debug!("Tour skipped `{id}`: previous leg still moving");
            return None;
        }
        let Some(preset) = presets.get(&id) else {
            log::warn!("Tour stop `{id}` has no preset");
            return None;
        };

        self.leg = Some(TransitionState::new(
            ViewTarget::Preset(id.clone()),
            capture_view(camera, settings.look_at_capture),
            preset.view(),
            now_ms,
            settings.transition_ms,
            settings.easing,
        ));
        Some(TourStep {
            preset_id: id,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PresetTable {
        PresetTable::builtin().unwrap()
    }

    #[test]
    fn test_first_step_due_immediately() {
        let tour = TourState::new(vec!["sun".to_string()], 4000.0, 100.0);
        assert!(!tour.due(99.0));
        assert!(tour.due(100.0));
    }

    #[test]
    fn test_steps_wrap() {
        let table = table();
        let settings = CameraSettings::default();
        let camera = Camera::default();
        let mut tour = TourState::new(
            vec!["sun".to_string(), "earth".to_string()],
            4000.0,
            0.0,
        );

        let first = tour.step(&camera, &table, &settings, 0.0).unwrap();
        assert_eq!(first.preset_id, "sun");
        assert_eq!(tour.next_step_ms(), 4000.0);
        tour.take_leg();

        let second = tour.step(&camera, &table, &settings, 4000.0).unwrap();
        assert_eq!(second.index, 1);
        tour.take_leg();

        let third = tour.step(&camera, &table, &settings, 8000.0).unwrap();
        assert_eq!(third.preset_id, "sun");
        assert_eq!(third.index, 0);
    }

    #[test]
    fn test_busy_leg_skips_entry() {
        let table = table();
        let settings = CameraSettings::default();
        let camera = Camera::default();
        let mut tour = TourState::new(
            vec!["sun".to_string(), "earth".to_string(), "mars".to_string()],
            1000.0,
            0.0,
        );

        tour.step(&camera, &table, &settings, 0.0).unwrap();
        // Leg to the sun still in flight at 1000 ms
        assert!(tour.step(&camera, &table, &settings, 1000.0).is_none());
        assert_eq!(tour.leg().unwrap().target(), &ViewTarget::Preset("sun".to_string()));
        assert_eq!(tour.next_index(), 2);
    }

    #[test]
    fn test_empty_playlist_never_due() {
        let tour = TourState::new(Vec::new(), 4000.0, 0.0);
        assert!(!tour.due(10_000.0));
    }
}
