use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, HN_ORANGE, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Headline with the comment total and the fetch status.
pub struct Header {
    sum_comments: u64,
    is_loading: bool,
    error: Option<&'static str>,
}

impl Header {
    pub fn new(sum_comments: u64, is_loading: bool, error: Option<&'static str>) -> Self {
        Self {
            sum_comments,
            is_loading,
            error,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_style) = match (self.is_loading, self.error) {
            (true, _) => ("Loading ...".to_string(), Style::default().fg(HN_ORANGE)),
            (false, Some(error)) => (
                format!("Something went wrong ... {}", error),
                Style::default().fg(STATUS_ERROR),
            ),
            (false, None) => ("Ready".to_string(), Style::default().fg(STATUS_OK)),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "My Hacker Stories",
                Style::default().fg(HN_ORANGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" with {} comments.", self.sum_comments), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
