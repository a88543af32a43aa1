use log::debug;

use super::client::SuggestionRequest;
use crate::error::AssistError;

/// One canvas-relative sample of a freehand stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GesturePoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Drawing,
}

/// Gesture capture session state machine.
///
/// Collects pointer samples between `begin` and `finish`; the points stay
/// available after the stroke ends so the user can submit or clear them.
/// Starting a new stroke discards the previous one.
pub struct GestureSession {
    state: GestureState,
    points: Vec<GesturePoint>,
}

impl GestureSession {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
            points: Vec::new(),
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn points(&self) -> &[GesturePoint] {
        &self.points
    }

    pub fn begin(&mut self, point: GesturePoint) {
        self.state = GestureState::Drawing;
        self.points.clear();
        self.points.push(point);
    }

    /// Extend the current stroke; samples outside a stroke are dropped.
    pub fn extend(&mut self, point: GesturePoint) {
        if self.state == GestureState::Drawing {
            self.points.push(point);
        }
    }

    /// End the stroke; returns how many points were captured.
    pub fn finish(&mut self) -> usize {
        self.state = GestureState::Idle;
        debug!("gesture finished with {} points", self.points.len());
        self.points.len()
    }

    pub fn clear(&mut self) {
        self.state = GestureState::Idle;
        self.points.clear();
    }

    /// Build the suggestion request for the captured stroke, validating
    /// locally before anything goes over the wire: fewer than 2 points is
    /// rejected with a prompt to draw first.
    pub fn submission(&self, width: f32, height: f32) -> Result<SuggestionRequest, AssistError> {
        if self.points.len() < 2 {
            return Err(AssistError::EmptyGesture);
        }
        Ok(SuggestionRequest::new(width, height, &self.points))
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new()
    }
}
