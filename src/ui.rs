use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::{
    field::{Field, FieldMap},
    form::{ErrorBanner, FieldDef, FormConfig, can_submit, error_message},
    theme::Theme,
};

const FORM_WIDTH: u16 = 64;

pub struct UiContext<'a> {
    pub config: &'a FormConfig,
    pub defs: &'a [FieldDef; 3],
    pub values: &'a FieldMap<String>,
    pub validation: &'a FieldMap<bool>,
    pub focused: Option<Field>,
    pub amount: f64,
    pub disclaimer: Option<&'a str>,
    pub reveal: bool,
    pub banner: &'a ErrorBanner,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let column = form_column(frame.area());
    let theme = &ctx.config.theme;

    if let Some(style) = ctx.config.styles.form {
        frame.render_widget(Block::default().style(style), column);
    }

    let disclaimer = ctx
        .config
        .show_disclaimer
        .then_some(ctx.disclaimer)
        .flatten();
    let wrap_width = column.width.saturating_sub(4).max(16) as usize;
    let disclaimer_lines: Vec<String> = disclaimer
        .map(|text| wrap(text, wrap_width).iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();

    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ];
    if !disclaimer_lines.is_empty() {
        constraints.push(Constraint::Length(disclaimer_lines.len() as u16));
    }
    if ctx.help.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    render_header(frame, chunks[0], &ctx);
    let cursor = render_fields(frame, chunks[1], &ctx);
    render_actions(frame, chunks[2], &ctx);
    render_banner(frame, chunks[3], &ctx);

    let mut next = 4;
    if !disclaimer_lines.is_empty() {
        render_disclaimer(frame, chunks[next], &disclaimer_lines, theme);
        next += 1;
    }
    if let Some(help) = ctx.help {
        render_help(frame, chunks[next], help, theme);
    }

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn form_column(area: Rect) -> Rect {
    let width = area.width.min(FORM_WIDTH);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let theme = &ctx.config.theme;
    let title = ctx.config.title.as_deref().unwrap_or("Checkout");
    let paragraph = Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(theme.text.color())
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border.color())),
    );
    frame.render_widget(paragraph, area);
}

fn render_fields(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) -> Option<(u16, u16)> {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mut cursor = None;
    for (def, rect) in ctx.defs.iter().zip(chunks.iter()) {
        if let Some(position) = render_field(frame, *rect, def, ctx) {
            cursor = Some(position);
        }
    }
    cursor
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    def: &FieldDef,
    ctx: &UiContext<'_>,
) -> Option<(u16, u16)> {
    let theme = &ctx.config.theme;
    let value = ctx.values.get(def.field);
    let valid = *ctx.validation.get(def.field);
    let focused = ctx.focused == Some(def.field);

    let entered = entered_text(def.field, value, ctx.reveal);
    let (display, mut style) = if value.is_empty() {
        (
            def.placeholder.to_string(),
            Style::default().fg(theme.placeholder.color()),
        )
    } else if valid {
        (entered.clone(), Style::default().fg(theme.text.color()))
    } else {
        (
            entered.clone(),
            Style::default()
                .fg(theme.invalid.color())
                .add_modifier(Modifier::BOLD),
        )
    };
    if let Some(patch) = ctx.config.styles.input {
        style = style.patch(patch);
    }

    let border_style = if focused {
        Style::default().fg(theme.focus.color())
    } else {
        Style::default().fg(theme.border.color())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(def.title());
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(display).style(style).block(block), area);

    if focused && inner.width > 0 {
        let offset = (UnicodeWidthStr::width(entered.as_str()) as u16)
            .min(inner.width.saturating_sub(1));
        Some((inner.x + offset, inner.y))
    } else {
        None
    }
}

fn entered_text(field: Field, value: &str, reveal: bool) -> String {
    if field == Field::CardNumber && !reveal {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

fn render_actions(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let theme = &ctx.config.theme;
    let eligible = can_submit(ctx.validation);

    let mut pay_style = if eligible {
        Style::default()
            .fg(theme.accent_text.color())
            .bg(theme.accent.color())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.placeholder.color())
            .add_modifier(Modifier::DIM)
    };
    if let Some(patch) = ctx.config.styles.button {
        pay_style = pay_style.patch(patch);
    }
    let pay_border = if eligible {
        Style::default().fg(theme.accent.color())
    } else {
        Style::default().fg(theme.border.color())
    };
    let pay = Paragraph::new(format!("Pay ${}", ctx.amount))
        .alignment(Alignment::Center)
        .style(pay_style)
        .block(Block::default().borders(Borders::ALL).border_style(pay_border));

    if ctx.config.show_cancel {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        frame.render_widget(pay, chunks[0]);
        let mut cancel_style = Style::default().fg(theme.text.color());
        if let Some(patch) = ctx.config.styles.button {
            cancel_style = cancel_style.patch(patch);
        }
        let cancel = Paragraph::new("Cancel")
            .alignment(Alignment::Center)
            .style(cancel_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border.color())),
            );
        frame.render_widget(cancel, chunks[1]);
    } else {
        frame.render_widget(pay, area);
    }
}

fn render_banner(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let Some(field) = ctx.banner.visible() else {
        return;
    };
    let color = ctx.config.theme.danger_at(ctx.banner.opacity());
    let line = Line::from(vec![
        Span::styled("✗ ", Style::default().fg(color)),
        Span::styled(error_message(field), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_disclaimer(frame: &mut Frame<'_>, area: Rect, lines: &[String], theme: &Theme) {
    let text: Vec<Line<'_>> = lines
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                line.clone(),
                Style::default().fg(theme.placeholder.color()),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn render_help(frame: &mut Frame<'_>, area: Rect, help: &str, theme: &Theme) {
    let paragraph = Paragraph::new(help.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.placeholder.color()));
    frame.render_widget(paragraph, area);
}
