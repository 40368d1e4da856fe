use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the props pattern: they receive data via struct
/// fields and render into a `Frame` within a given `Rect`. The only
/// state they may touch is presentation state handed in by the parent
/// (scroll offsets, cached button rects) — selection state is owned by
/// the core and mutated only through its two operations.
///
/// `render` takes `&mut self` so components can update internal caches
/// (hit-test rects, layout measurements) during the render pass. This
/// aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
