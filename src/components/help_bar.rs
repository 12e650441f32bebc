//! Keybinding hints at the bottom of the widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::component::Component;

pub struct HelpBarProps {
    /// Dim the fetch/clear hints while a request is in flight.
    pub controls_enabled: bool,
}

#[derive(Default)]
pub struct HelpBar;

impl<A> Component<A> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let key_style = if props.controls_enabled {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label_style = Style::default().fg(Color::DarkGray);

        let help = Line::from(vec![
            Span::styled(" ↑/↓", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" city  ", label_style),
            Span::styled("enter", key_style),
            Span::styled(" get weather  ", label_style),
            Span::styled("c", key_style),
            Span::styled(" clear  ", label_style),
            Span::styled("r", key_style),
            Span::styled(" refresh  ", label_style),
            Span::styled("q", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" quit ", label_style),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}
