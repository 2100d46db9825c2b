use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::camera::ZoomDirection;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport::Viewport;

/// Every user action the explorer reacts to, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorerEvent {
    PointerDown(ScreenPoint),
    PointerDrag(ScreenPoint),
    PointerUp,
    Scroll(ZoomDirection),
    PassiveMove(ScreenPoint),
    ResetView,
    Resize(Viewport),
    RunAlgorithm(AlgorithmKind),
}
