//! Shared UI components: framed layout, status bar, prompts and banners.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Areas of the framed game screen.
pub struct GameLayout {
    pub content: Rect,
    /// Two rows under the content: status, then key hints.
    pub status_bar: Rect,
    pub info_panel: Rect,
}

const STATUS_BAR_HEIGHT: u16 = 2;
const CONTENT_MIN_WIDTH: u16 = 20;

/// Draw the outer frame titled `title` and split its inside into the play
/// field with the status bar below it and an info column on the right.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inside = outer.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(outer, area);

    let [left, info_panel] = split2(
        inside,
        Direction::Horizontal,
        Constraint::Min(CONTENT_MIN_WIDTH),
        Constraint::Length(info_panel_width),
    );
    let [content, status_bar] = split2(
        left,
        Direction::Vertical,
        Constraint::Min(content_min_height),
        Constraint::Length(STATUS_BAR_HEIGHT),
    );

    GameLayout {
        content,
        status_bar,
        info_panel,
    }
}

fn split2(area: Rect, direction: Direction, first: Constraint, second: Constraint) -> [Rect; 2] {
    let parts = Layout::default()
        .direction(direction)
        .constraints([first, second])
        .split(area);
    [parts[0], parts[1]]
}

/// Status line in `status_color`, then the `(key, action)` hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    let mut rows = (area.y..area.y + area.height).map(|y| Rect::new(area.x, y, area.width, 1));

    let Some(status_row) = rows.next() else {
        return;
    };
    frame.render_widget(
        Paragraph::new(Span::styled(status_text, Style::default().fg(status_color)))
            .alignment(Alignment::Center),
        status_row,
    );

    let Some(hint_row) = rows.next() else {
        return;
    };
    let hints: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {action}"), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        hint_row,
    );
}

/// Render a one-line bold prompt centered on `area`.
pub fn render_centered_prompt(frame: &mut Frame, area: Rect, prompt: &str, color: Color) {
    let width = prompt.chars().count() as u16;
    if area.height < 3 || area.width < width {
        return;
    }

    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height / 2;
    let prompt_area = Rect::new(x, y, width, 1);

    frame.render_widget(Clear, prompt_area);
    let line = Paragraph::new(Line::from(Span::styled(
        prompt,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(line, prompt_area);
}

/// Render a compact game-over banner at the bottom of an area.
///
/// Does not clear the rest of the area, so the final frame stays visible
/// behind it.
pub fn render_game_over_banner(
    frame: &mut Frame,
    area: Rect,
    title_color: Color,
    title: &str,
    message: &str,
    detail: &str,
) {
    let banner_height: u16 = if detail.is_empty() { 4 } else { 5 };
    if area.height < banner_height {
        return;
    }
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height - banner_height,
        width: area.width,
        height: banner_height,
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));

    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(message, Style::default().fg(Color::White)),
    ])];

    if !detail.is_empty() {
        lines.push(Line::from(Span::styled(
            detail,
            Style::default().fg(Color::Cyan),
        )));
    }

    lines.push(Line::from(Span::styled(
        "[Space] Run again  [Q] Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Render an info panel frame with standard " Info " title and DarkGray border.
///
/// Returns the inner Rect for content rendering.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer.get(x, y).symbol())
            .collect()
    }

    #[test]
    fn test_layout_splits_inside_border() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut layout = None;
        terminal
            .draw(|f| {
                let area = f.size();
                layout = Some(create_game_layout(f, area, " T ", Color::White, 4, 15));
            })
            .unwrap();
        let layout = layout.unwrap();

        assert_eq!(layout.info_panel, Rect::new(44, 1, 15, 18));
        assert_eq!(layout.content, Rect::new(1, 1, 43, 16));
        assert_eq!(layout.status_bar, Rect::new(1, 17, 43, 2));
    }

    #[test]
    fn test_status_bar_rows() {
        let mut terminal = Terminal::new(TestBackend::new(40, 2)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_status_bar(f, area, "Ready", Color::Yellow, &[("[Q]", "Quit"), ("[P]", "Pause")]);
            })
            .unwrap();

        assert!(row_text(&terminal, 0).contains("Ready"));
        assert!(row_text(&terminal, 1).contains("[Q] Quit  [P] Pause"));
    }

    #[test]
    fn test_status_bar_single_row_skips_hints() {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_status_bar(f, area, "Paused", Color::Yellow, &[("[Q]", "Quit")]);
            })
            .unwrap();
        let text = row_text(&terminal, 0);
        assert!(text.contains("Paused"));
        assert!(!text.contains("Quit"));
    }
}
