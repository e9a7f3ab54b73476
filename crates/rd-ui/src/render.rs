//! Render functions for the dashboard panes

use ratatui::{prelude::*, widgets::*};
use rd_core::keywords::top3_summary;

use crate::app::{AppState, DashboardView};
use crate::theme::Theme;

/// Width of the distribution bar column, in characters
const BAR_WIDTH: usize = 20;

/// Render the whole dashboard
pub fn render_dashboard(frame: &mut Frame, area: Rect, view: &DashboardView, state: &AppState) {
    let theme = Theme::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    render_tabs(frame, chunks[0], view, &theme);
    render_summary(frame, chunks[1], view, &theme);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    render_distribution(frame, middle[0], view, &theme);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(middle[1]);

    render_keywords(frame, right[0], view, &theme);
    render_reviews(frame, right[1], view, &theme);

    render_status_bar(frame, chunks[3], view, state, &theme);
}

/// Brand tab bar
fn render_tabs(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let titles: Vec<Line> = view
        .brand_labels
        .iter()
        .map(|label| Line::from(format!(" {label} ")))
        .collect();

    let tabs = Tabs::new(titles)
        .select(view.brand_idx)
        .style(theme.tabs)
        .highlight_style(theme.tab_selected)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// One-line brand summary: review count and mean rating
fn render_summary(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let text = format!(
        " {} — {} reviews, mean rating {:.2}",
        view.summary.label, view.summary.review_count, view.summary.mean_rating
    );
    frame.render_widget(Paragraph::new(text).style(theme.dim), area);
}

/// Rating distribution table with proportional bars
fn render_distribution(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let max_count = view.distribution.max_count().max(1);

    let rows: Vec<Row> = view
        .distribution
        .buckets()
        .iter()
        .map(|bucket| {
            let filled = bucket.count * BAR_WIDTH / max_count;
            let bar = "█".repeat(filled);
            let is_selected = view.selected_rating == Some(bucket.rating);
            let row = Row::new(vec![
                Cell::from(format!("{}★", bucket.rating)),
                Cell::from(Span::styled(bar, theme.bar)),
                Cell::from(format!("{}", bucket.count)),
                Cell::from(format!("{:.1}%", bucket.percentage)),
            ]);
            if is_selected {
                row.style(theme.selected)
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(BAR_WIDTH as u16),
            Constraint::Length(6),
            Constraint::Length(7),
        ],
    )
    .header(Row::new(vec!["", "", "count", "share"]).style(theme.header))
    .block(
        Block::default()
            .title("Rating Distribution")
            .borders(Borders::ALL)
            .border_style(theme.border),
    );

    frame.render_widget(table, area);
}

/// Keyword ranking for the selected rating, plus the top-3 summary rows
fn render_keywords(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let title = match view.selected_rating {
        Some(rating) => format!("Top Keywords — {rating}★ (j/k rating, n/p keyword)"),
        None => "Top Keywords".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.rating_keywords.is_empty() {
        frame.render_widget(
            Paragraph::new("no keywords for this rating").style(theme.dim),
            inner,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (idx, entry) in view.rating_keywords.iter().enumerate() {
        let style = if idx == view.keyword_idx {
            theme.selected
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!(" {} ({})", entry.keyword, entry.count),
            style,
        )));
    }

    // Condensed per-rating summary under the ranked list
    lines.push(Line::from(""));
    for (rating, row) in top3_summary(&view.keywords) {
        lines.push(Line::from(Span::styled(
            format!(" {rating}★  {row}"),
            theme.dim,
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Paginated example reviews for the selected keyword
fn render_reviews(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let title = match view.selected_keyword.as_deref() {
        Some(keyword) => format!("Example Reviews — \"{keyword}\" (←/→ page)"),
        None => "Example Reviews".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.page.is_empty() {
        frame.render_widget(
            Paragraph::new("no matching reviews").style(theme.dim),
            inner,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for entry in &view.page.entries {
        lines.push(Line::from(vec![
            Span::styled(format!("({}) ", entry.position), theme.dim),
            Span::raw(entry.text.clone()),
        ]));
    }
    lines.push(Line::from(""));

    let prev = if view.page.has_prev { "◀ prev" } else { "      " };
    let next = if view.page.has_next { "next ▶" } else { "      " };
    lines.push(Line::from(Span::styled(
        format!(
            " {}  {} | {}  {}",
            prev,
            view.page.caption(),
            view.page.range_caption(),
            next
        ),
        theme.dim,
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Bottom status bar
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardView,
    state: &AppState,
    theme: &Theme,
) {
    let text = state.message.clone().unwrap_or_else(|| {
        format!(
            " {} | {} | q quit, ? help ",
            view.summary.label,
            view.page.caption()
        )
    });

    frame.render_widget(Paragraph::new(text).style(theme.status), area);
}

/// Help overlay
pub fn render_help(frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let text = vec![
        Line::from(Span::styled(
            "revdash - Review Analytics",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Navigation", theme.header)),
        Line::from("  Tab/l       Next brand"),
        Line::from("  S-Tab/h     Previous brand"),
        Line::from("  j/k         Select rating"),
        Line::from("  1-5         Jump to rating"),
        Line::from("  n/p         Select keyword"),
        Line::from("  Left/Right  Page through example reviews"),
        Line::from(""),
        Line::from(Span::styled("Other", theme.header)),
        Line::from("  q           Quit"),
        Line::from("  ?           Show this help"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", theme.dim)),
    ];

    let help_area = centered_rect(50, 60, area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(theme.border),
        ),
        help_area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 60, outer);
        assert!(inner.width <= outer.width);
        assert!(inner.height <= outer.height);
        assert!(inner.x >= outer.x);
        assert!(inner.y >= outer.y);
    }
}
