//! Component trait for pure UI elements.

use ratatui::{Frame, layout::Rect};

use crate::event::EventKind;

/// A pure UI element that renders from props and emits actions.
///
/// Rules the widget's components follow:
/// 1. Props carry ALL read-only data needed for rendering, borrowed from
///    `AppState`.
/// 2. `handle_event` returns actions; it never mutates external state.
/// 3. `render` is a pure function of props, plus internal view state such
///    as a scroll offset kept in `&mut self`.
///
/// Enabled/disabled status is passed through props, so a component stays
/// decoupled from how the host decides gating (here: the `Loading` phase
/// disables the action controls).
pub trait Component<A> {
    /// Read-only data required to render the component.
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any `IntoIterator<Item = A>`: `None` for no actions (the
    /// default for render-only components), `Some(action)`, or a `Vec`.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
