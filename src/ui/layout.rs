use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub search: Rect,
    pub recent: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);
    Regions {
        header: chunks[0],
        search: chunks[1],
        recent: chunks[2],
        body: chunks[3],
        footer: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_fill_area() {
        let area = Rect::new(0, 0, 80, 24);
        let regions = layout_regions(area);
        assert_eq!(regions.header.height, 3);
        assert_eq!(regions.search.height, 3);
        assert_eq!(regions.recent.height, 1);
        assert_eq!(regions.footer.height, 3);
        assert_eq!(regions.body.height, 24 - 10);
        assert_eq!(regions.footer.y, 21);
    }
}
