//! Scrollable city selection list.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::action::Action;
use crate::component::Component;
use crate::event::EventKind;

/// Props for [`CityList`].
pub struct CityListProps<'a> {
    /// Catalog names, in display order.
    pub cities: &'a [String],
    /// Currently selected index, if any.
    pub selected: Option<usize>,
    /// Whether Enter may trigger a fetch (false while a request is in
    /// flight). Navigation stays available either way, matching the
    /// original widget where only the two buttons were disabled.
    pub fetch_enabled: bool,
    pub is_focused: bool,
}

/// The catalog list with keyboard navigation. Selection changes emit
/// `CitySelect`; Enter requests the weather for the highlighted city.
#[derive(Default)]
pub struct CityList {
    /// Scroll offset for the viewport.
    scroll_offset: usize,
}

impl CityList {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_visible(&mut self, selected: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = selected.saturating_sub(viewport_height - 1);
        }
    }
}

impl Component<Action> for CityList {
    type Props<'a> = CityListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.cities.is_empty() {
            return None;
        }

        let last = props.cities.len() - 1;
        let EventKind::Key(key) = event else {
            return None;
        };

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let next = props.selected.map_or(0, |i| (i + 1).min(last));
                (props.selected != Some(next)).then_some(Action::CitySelect(next))
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let next = props.selected.map_or(0, |i| i.saturating_sub(1));
                (props.selected != Some(next)).then_some(Action::CitySelect(next))
            }
            KeyCode::Char('g') | KeyCode::Home => {
                (props.selected != Some(0)).then_some(Action::CitySelect(0))
            }
            KeyCode::Char('G') | KeyCode::End => {
                (props.selected != Some(last)).then_some(Action::CitySelect(last))
            }
            // The "Get Weather" control. With no selection this still goes
            // through, so the reducer can surface the validation message.
            KeyCode::Enter => props.fetch_enabled.then_some(Action::WeatherFetch),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let viewport_height = area.height.saturating_sub(2) as usize;
        if let Some(selected) = props.selected {
            self.ensure_visible(selected, viewport_height);
        }

        let items: Vec<ListItem> = props
            .cities
            .iter()
            .enumerate()
            .map(|(i, city)| {
                let style = if props.selected == Some(i) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::raw(city.as_str())).style(style)
            })
            .collect();

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Capitals "),
        );

        let mut state = ListState::default().with_selected(props.selected);
        *state.offset_mut() = self.scroll_offset;
        frame.render_stateful_widget(list, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::key;

    fn cities() -> Vec<String> {
        vec!["Amsterdam".into(), "Athens".into(), "Berlin".into()]
    }

    fn props(cities: &[String], selected: Option<usize>, fetch_enabled: bool) -> CityListProps<'_> {
        CityListProps {
            cities,
            selected,
            fetch_enabled,
            is_focused: true,
        }
    }

    #[test]
    fn navigation_moves_the_selection() {
        let mut list = CityList::new();
        let cities = cities();

        let down: Vec<_> = list
            .handle_event(&EventKind::Key(key("j")), props(&cities, Some(0), true))
            .into_iter()
            .collect();
        assert_eq!(down, vec![Action::CitySelect(1)]);

        let up: Vec<_> = list
            .handle_event(&EventKind::Key(key("k")), props(&cities, Some(2), true))
            .into_iter()
            .collect();
        assert_eq!(up, vec![Action::CitySelect(1)]);
    }

    #[test]
    fn navigation_stops_at_the_bounds() {
        let mut list = CityList::new();
        let cities = cities();

        let at_top: Vec<_> = list
            .handle_event(&EventKind::Key(key("k")), props(&cities, Some(0), true))
            .into_iter()
            .collect();
        assert!(at_top.is_empty());

        let at_bottom: Vec<_> = list
            .handle_event(&EventKind::Key(key("j")), props(&cities, Some(2), true))
            .into_iter()
            .collect();
        assert!(at_bottom.is_empty());
    }

    #[test]
    fn enter_requests_weather_when_enabled() {
        let mut list = CityList::new();
        let cities = cities();

        let actions: Vec<_> = list
            .handle_event(&EventKind::Key(key("enter")), props(&cities, Some(1), true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::WeatherFetch]);
    }

    #[test]
    fn enter_is_ignored_while_a_request_is_in_flight() {
        let mut list = CityList::new();
        let cities = cities();

        let actions: Vec<_> = list
            .handle_event(&EventKind::Key(key("enter")), props(&cities, Some(1), false))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn enter_without_selection_still_fires_for_validation() {
        let mut list = CityList::new();
        let cities = cities();

        let actions: Vec<_> = list
            .handle_event(&EventKind::Key(key("enter")), props(&cities, None, true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::WeatherFetch]);
    }

    #[test]
    fn unfocused_list_ignores_input() {
        let mut list = CityList::new();
        let cities = cities();
        let props = CityListProps {
            cities: &cities,
            selected: Some(0),
            fetch_enabled: true,
            is_focused: false,
        };

        let actions: Vec<_> = list
            .handle_event(&EventKind::Key(key("j")), props)
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }
}
