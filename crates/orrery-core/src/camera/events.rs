use super::transition::ViewTarget;

/// Notifications produced by the camera controller, polled by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraEvent {
    /// A transition reached its destination. Emitted once per transition,
    /// after the controller has left the transitioning state.
    TransitionCompleted { target: ViewTarget },
    /// The guided tour started its next leg.
    TourAdvanced { preset_id: String, index: usize },
}
