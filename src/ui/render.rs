use crate::derived::SortKey;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, HN_ORANGE, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(45),
    Constraint::Percentage(30),
    Constraint::Percentage(12),
    Constraint::Percentage(13),
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let stories = app.stories();

    let header = Header::new(app.sum_comments(), stories.is_loading, error_text(app));
    frame.render_widget(header.widget(), regions.header);

    draw_search(frame, app, regions.search);
    frame.render_widget(recent_searches(app), regions.recent);
    draw_stories(frame, app, regions.body);

    let footer = Footer::new(app.focus());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}

fn error_text(app: &App) -> Option<&'static str> {
    if app.stories().is_error {
        Some(app.last_error().unwrap_or("request failed"))
    } else {
        None
    }
}

fn draw_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Search;
    let border = if focused { HN_ORANGE } else { GLOBAL_BORDER };
    let mut title = vec![Span::styled(
        " Search: ",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    if app.search_term().is_empty() {
        title.push(Span::styled(
            "(type a term to enable search) ",
            Style::default().fg(MUTED_TEXT),
        ));
    }

    let input = Paragraph::new(app.search_term().to_string())
        .style(Style::default().fg(HEADER_TEXT))
        .block(
            Block::default()
                .title(Line::from(title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(input, area);

    if focused && area.width > 2 && area.height > 2 {
        let offset = app.search_term().chars().count() as u16;
        let x = area.x + 1 + offset.min(area.width.saturating_sub(3));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn recent_searches(app: &App) -> Paragraph<'static> {
    let searches = app.last_searches();
    if searches.is_empty() {
        return Paragraph::new(Line::from(Span::styled(
            " No recent searches",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let mut spans = vec![Span::styled(" Recent: ", Style::default().fg(MUTED_TEXT))];
    for (index, term) in searches.into_iter().enumerate() {
        spans.push(Span::styled(
            format!("[{}] ", index + 1),
            Style::default().fg(HN_ORANGE),
        ));
        spans.push(Span::styled(
            format!("{}  ", term),
            Style::default().fg(HEADER_TEXT),
        ));
    }
    Paragraph::new(Line::from(spans))
}

fn draw_stories(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let stories = app.stories();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(list_title(app));

    if stories.is_empty() {
        let message = if stories.is_loading {
            Span::styled("Loading ...", Style::default().fg(HN_ORANGE))
        } else if stories.is_error {
            Span::styled("Something went wrong ...", Style::default().fg(STATUS_ERROR))
        } else {
            Span::styled("No stories", Style::default().fg(MUTED_TEXT))
        };
        frame.render_widget(Paragraph::new(Line::from(message)).block(block), area);
        return;
    }

    let rows: Vec<Row> = app
        .visible_stories()
        .into_iter()
        .map(|story| {
            Row::new(vec![
                Cell::from(story.title),
                Cell::from(story.author),
                Cell::from(story.num_comments.to_string()),
                Cell::from(story.points.to_string()),
            ])
        })
        .collect();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(column_header(app))
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut state = TableState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn list_title(app: &App) -> Line<'static> {
    let stories = app.stories();
    let term = app.active_term().unwrap_or_default();
    let mut spans = vec![Span::styled(
        format!(" {} · {} stories · page {} ", term, stories.data.len(), stories.page + 1),
        Style::default().fg(HEADER_TEXT),
    )];
    if stories.is_loading && !stories.is_empty() {
        spans.push(Span::styled("Loading more ... ", Style::default().fg(HN_ORANGE)));
    } else if app.reached_end() {
        spans.push(Span::styled("(end) ", Style::default().fg(MUTED_TEXT)));
    }
    Line::from(spans)
}

fn column_header(app: &App) -> Row<'static> {
    let sort = app.sort_state();
    let cells = SortKey::COLUMNS.iter().map(|&key| {
        let shortcut = key.label().chars().next().unwrap_or(' ').to_ascii_lowercase();
        if sort.key == key {
            let arrow = if sort.shows_descending() { "▼" } else { "▲" };
            Cell::from(format!("{} {} ({})", key.label(), arrow, shortcut)).style(
                Style::default()
                    .fg(HN_ORANGE)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Cell::from(format!("{} ({})", key.label(), shortcut))
                .style(Style::default().fg(MUTED_TEXT))
        }
    });
    Row::new(cells)
}
