//! The shared message box under the display.
//!
//! Severity is mapped to a style through [`BannerTheme`], so restyling the
//! banner means swapping one value rather than touching render code.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::component::Component;
use crate::state::{Banner, Severity};

/// Severity → style mapping.
#[derive(Clone, Copy, Debug)]
pub struct BannerTheme {
    pub info: Style,
    pub success: Style,
    pub error: Style,
}

impl BannerTheme {
    pub fn style_for(&self, severity: Severity) -> Style {
        match severity {
            Severity::Info => self.info,
            Severity::Success => self.success,
            Severity::Error => self.error,
        }
    }
}

impl Default for BannerTheme {
    fn default() -> Self {
        Self {
            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            error: Style::default().fg(Color::Red),
        }
    }
}

pub struct MessageBannerProps<'a> {
    /// Current message; `None` renders nothing (the hidden banner).
    pub banner: Option<&'a Banner>,
    pub theme: &'a BannerTheme,
}

/// Render-only: the banner never handles input.
#[derive(Default)]
pub struct MessageBanner;

impl MessageBanner {
    pub const HEIGHT: u16 = 3;
}

impl<A> Component<A> for MessageBanner {
    type Props<'a> = MessageBannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(banner) = props.banner else {
            return;
        };

        let style = props.theme.style_for(banner.severity);
        let block = Block::default().borders(Borders::ALL).border_style(style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::styled(banner.message.clone(), style.bold())),
            inner,
        );
    }
}
