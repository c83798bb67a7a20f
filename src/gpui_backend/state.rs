use crate::geom::{ScreenPoint, ScreenRect};
use crate::interaction::DragState;

#[derive(Debug, Clone, Default)]
pub(crate) struct DdaUiState {
    pub(crate) surface_rect: Option<ScreenRect>,
    pub(crate) drag: Option<DragState>,
    pub(crate) cursor: Option<ScreenPoint>,
    pub(crate) last_error: Option<String>,
}

impl DdaUiState {
    pub(crate) fn clear_interaction(&mut self) {
        self.drag = None;
    }

    /// Convert a window position into surface-local pixels.
    pub(crate) fn to_local(&self, point: ScreenPoint) -> Option<ScreenPoint> {
        let rect = self.surface_rect?;
        Some(ScreenPoint::new(point.x - rect.min.x, point.y - rect.min.y))
    }

    pub(crate) fn record_error(&mut self, message: Option<String>) {
        if self.last_error == message {
            return;
        }
        if let Some(message) = &message {
            tracing::warn!(%message, "frame failed to build");
        }
        self.last_error = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_coordinates_subtract_origin() {
        let state = DdaUiState {
            surface_rect: Some(ScreenRect::new(
                ScreenPoint::new(10.0, 30.0),
                ScreenPoint::new(110.0, 130.0),
            )),
            ..DdaUiState::default()
        };
        assert_eq!(
            state.to_local(ScreenPoint::new(15.0, 40.0)),
            Some(ScreenPoint::new(5.0, 10.0))
        );
        assert_eq!(DdaUiState::default().to_local(ScreenPoint::new(1.0, 1.0)), None);
    }

    #[test]
    fn errors_are_deduplicated() {
        let mut state = DdaUiState::default();
        state.record_error(Some("boom".to_string()));
        state.record_error(Some("boom".to_string()));
        assert_eq!(state.last_error.as_deref(), Some("boom"));
        state.record_error(None);
        assert!(state.last_error.is_none());
    }
}
