//! Dino runner scene rendering.
//!
//! The engine draws into a [`TerminalSurface`] sized to the play field,
//! whose cells are then stamped row-by-row as Paragraph widgets. Status,
//! info panel and prompts are layered on top with the shared components.

use super::game_common::{
    create_game_layout, render_centered_prompt, render_game_over_banner,
    render_info_panel_frame, render_status_bar,
};
use super::terminal_surface::{to_color, TerminalSurface};
use crate::engine::{Game, GameStatus};
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 20;
const PLAY_FIELD_MIN_HEIGHT: u16 = 8;

/// Session figures the engine does not track itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneInfo {
    /// Best score across sessions.
    pub best: u64,
    /// Whether the finished run set a new best.
    pub new_best: bool,
}

/// Render the whole game screen. `surface` is resized to the play field,
/// so the engine sees the new size on its next update.
pub fn render_dino_scene<R: Rng>(
    frame: &mut Frame,
    area: Rect,
    game: &Game<R>,
    surface: &mut TerminalSurface,
    info: SceneInfo,
) {
    let layout = create_game_layout(
        frame,
        area,
        " Dino ",
        Color::LightYellow,
        PLAY_FIELD_MIN_HEIGHT,
        INFO_PANEL_WIDTH,
    );

    render_play_field(frame, layout.content, game, surface);

    match game.status() {
        GameStatus::Title => render_centered_prompt(
            frame,
            layout.content,
            "[ Press Space to Start ]",
            Color::White,
        ),
        GameStatus::Paused => {
            render_centered_prompt(frame, layout.content, "[ Paused ]", Color::LightYellow)
        }
        GameStatus::Over => render_dino_game_over(frame, layout.content, game, info),
        GameStatus::Running => {}
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, info);
}

/// Draw the engine's frame into the play field.
fn render_play_field<R: Rng>(
    frame: &mut Frame,
    area: Rect,
    game: &Game<R>,
    surface: &mut TerminalSurface,
) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    surface.resize(area.width, area.height);
    game.draw(surface);

    for (row_idx, row_data) in surface.to_cells().iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn render_status_bar_content<R: Rng>(frame: &mut Frame, area: Rect, game: &Game<R>) {
    match game.status() {
        GameStatus::Title => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightYellow,
            &[("[Space/Up]", "Start"), ("[Q]", "Quit")],
        ),
        GameStatus::Running => render_status_bar(
            frame,
            area,
            "Run!",
            Color::LightYellow,
            &[("[Space/Up]", "Jump"), ("[P]", "Pause"), ("[Q]", "Quit")],
        ),
        GameStatus::Paused => render_status_bar(
            frame,
            area,
            "Paused",
            Color::LightYellow,
            &[("[Space/P]", "Resume"), ("[Q]", "Quit")],
        ),
        GameStatus::Over => render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[Space]", "Run again"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info_panel<R: Rng>(frame: &mut Frame, area: Rect, game: &Game<R>, info: SceneInfo) {
    let inner = render_info_panel_frame(frame, area);

    let label = |s: &'static str| Span::styled(s, Style::default().fg(Color::DarkGray));
    let value = |s: String| Span::styled(s, Style::default().fg(Color::White));
    let colors = &game.world().colors;

    let lines: Vec<Line> = vec![
        Line::from(vec![
            label("Score: "),
            Span::styled(
                game.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![label("Best:  "), value(info.best.max(game.score()).to_string())]),
        Line::from(vec![label("Coins: "), value(game.collected_coins().to_string())]),
        Line::from(""),
        Line::from(vec![label("Time:  "), value(format!("{:.1}s", game.elapsed_time()))]),
        Line::from(vec![label("Speed: "), value(format!("x{:.2}", game.ramp_factor()))]),
        Line::from(vec![
            label("Land:  "),
            value(game.terrain_type().name().to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" \u{2580} ", Style::default().fg(to_color(colors.ground))),
            label("Ground"),
        ]),
        Line::from(vec![
            Span::styled(" \u{2580} ", Style::default().fg(to_color(colors.platform))),
            label("Platform"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_dino_game_over<R: Rng>(frame: &mut Frame, area: Rect, game: &Game<R>, info: SceneInfo) {
    let (color, title) = if info.new_best {
        (Color::Green, "NEW BEST!")
    } else {
        (Color::Red, "GAME OVER")
    };
    let message = format!(
        "Score {} after {:.1}s",
        game.score(),
        game.elapsed_time()
    );
    let detail = format!("{} coins collected", game.collected_coins());
    render_game_over_banner(frame, area, color, title, &message, &detail);
}
