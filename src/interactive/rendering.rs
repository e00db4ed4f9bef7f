//! TUI rendering with ratatui
//!
//! Visualizations for the guessing game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{FieldStatus, NumericVerdict, TagMatch};
use crate::game::Status;
use crate::output::formatters::direction_arrow;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, List, ListItem, Paragraph, Row, Table, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62), // Guess table
            Constraint::Percentage(38), // Side panel
        ])
        .split(chunks[1]);

    render_guesses(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎬 ANIDLE - 猜猜今天的動漫")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn status_style(status: FieldStatus) -> Style {
    match status {
        FieldStatus::Exact => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        FieldStatus::Wrong => Style::default().fg(Color::Red),
    }
}

fn numeric_span(value: i32, verdict: NumericVerdict) -> Span<'static> {
    let text = match verdict.direction {
        Some(d) => format!("{value} {}", direction_arrow(d)),
        None => value.to_string(),
    };
    Span::styled(text, status_style(verdict.status))
}

fn tag_line(tags: &[TagMatch]) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for t in tags {
        let style = if t.matched {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red)
        };
        spans.push(Span::styled(format!("[{}]", t.tag), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_guesses(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(["動漫", "工作室", "類型", "年份", "集數", "受眾", "來源"])
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|row| {
            let v = &row.verdict;
            let e = row.entity;
            Row::new(vec![
                Cell::from(Span::styled(
                    e.title().to_string(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(e.studio().to_string(), status_style(v.studio))),
                Cell::from(tag_line(&v.tags)),
                Cell::from(numeric_span(e.year(), v.year)),
                Cell::from(numeric_span(e.episodes(), v.episodes)),
                Cell::from(Span::styled(e.demographic().to_string(), status_style(v.demographic))),
                Cell::from(Span::styled(e.source().to_string(), status_style(v.source))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Length(20),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(
        Block::default()
            .title(" 猜測紀錄 (最新在上) ")
            .borders(Borders::ALL),
    );

    f.render_widget(table, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Hints
            Constraint::Percentage(30), // Suggestions
            Constraint::Percentage(25), // Messages
        ])
        .split(area);

    render_hints(f, app, chunks[0]);
    render_suggestions(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines = Vec::new();

    let levels = [
        ('1', "類型標籤", crate::game::HintLevel::Tag),
        ('2', "封面圖片", crate::game::HintLevel::Image),
        ('3', "劇情簡介", crate::game::HintLevel::Synopsis),
    ];
    for (key, label, level) in levels {
        let text = format!("{key} {label} (+{})", level.cost());
        let style = if session.hint_available(level) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    let revealed = session.revealed_tags();
    if !revealed.is_empty() {
        let mut spans = vec![Span::raw("已知類型: ")];
        for r in &revealed {
            let chip = if r.paid {
                format!("[{}]💰", r.tag)
            } else {
                format!("[{}]", r.tag)
            };
            spans.push(Span::styled(chip, Style::default().fg(Color::Green)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("累積懲罰: {}", session.hints().penalty())));

    if let Some(url) = &app.image_hint {
        lines.push(Line::from(Span::styled(
            format!("封面: {url}"),
            Style::default().fg(Color::Cyan),
        )));
    }
    if let Some(text) = &app.synopsis_hint {
        lines.push(Line::from(""));
        lines.push(Line::from(text.clone()));
    }

    let border_color = if app.input_mode == InputMode::HintMenu {
        Color::Yellow
    } else {
        Color::White
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" 提示 (ESC 開啟選單) ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, entity)| {
            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} ({})", entity.title(), entity.title_romaji())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" 建議 (↑↓ 選擇, TAB 採用) ")
            .borders(Borders::ALL),
    );

    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" 訊息 ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => match app.session.status() {
            Status::Won => (
                " 🎉 答對了！ | 'n' 開新的一局, 'q' 離開 ",
                "",
                Color::Green,
            ),
            _ => (
                " 💀 次數用盡 | 'n' 再試一次, 'q' 離開 ",
                "",
                Color::Red,
            ),
        },
        InputMode::Typing => (
            " 輸入動漫名稱 (中文或羅馬字) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::HintMenu => (
            " 提示選單: 按 1/2/3 購買, ESC 返回 ",
            "",
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.session.status() {
        Status::InProgress => "狀態: 進行中",
        Status::Won => "狀態: 已獲勝",
        Status::Lost => "狀態: 已結束",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let attempts = app
        .session
        .attempts_left()
        .map_or_else(|| "∞".to_string(), |n| n.to_string());
    let score_text = format!("計分: {} | 剩餘: {}", app.session.score(), attempts);
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[1]);

    let pool_text = format!("題庫: {} 部", app.session.pool().len());
    let pool = Paragraph::new(pool_text).alignment(Alignment::Center);
    f.render_widget(pool, chunks[2]);

    let help = Paragraph::new("Ctrl-C: 離開")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
