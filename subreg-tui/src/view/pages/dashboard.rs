//! 注册页：子域名注册表单

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use subreg_core::{FieldErrorKind, FormField, MutationStatus};

use crate::i18n::{t, DashboardTexts};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 标签列宽度（显示宽度，不是字符数）
const LABEL_WIDTH: usize = 20;

/// 焦点标记宽度
const MARKER_WIDTH: usize = 2;

/// 渲染注册页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().dashboard;
    let c = colors();
    let state = &app.dashboard;
    let controller = &state.controller;
    let form = &controller.form;
    let editing = app.focus.is_content() && !app.modal.is_open();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(pad_label(texts.subdomain), Styles::muted()),
            Span::styled(
                form.effective_subdomain(),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    let mut cursor = None;

    for field in FormField::ALL {
        let focused = editing && state.focused == field;
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(c.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };

        let value = form.value(field);
        let value_span = if field == FormField::Kind {
            Span::styled(format!("◀ {value} ▶"), Styles::title())
        } else if value.is_empty() {
            Span::styled(placeholder(texts, field), Styles::muted())
        } else {
            Span::styled(value.to_string(), Style::default().fg(c.fg))
        };

        if focused && field.is_text() {
            let x = MARKER_WIDTH + LABEL_WIDTH + value.width();
            cursor = Some((x, lines.len()));
        }

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(pad_label(field_label(texts, field)), label_style),
            value_span,
        ]));

        // 每个字段下方保留一行显示校验错误
        let error_line = match controller.errors.for_field(field) {
            Some(kind) => Line::from(vec![
                Span::raw(" ".repeat(MARKER_WIDTH + LABEL_WIDTH)),
                Span::styled(error_text(texts, kind), Style::default().fg(c.error)),
            ]),
            None => Line::from(""),
        };
        lines.push(error_line);
    }

    let pending = controller.submission.is_pending();
    let button = if pending {
        Span::styled(texts.submitting, Styles::muted())
    } else {
        Span::styled(texts.submit, Styles::selected())
    };
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(MARKER_WIDTH + LABEL_WIDTH)),
        button,
    ]));
    lines.push(Line::from(""));

    // 提交结果横幅
    let result = controller.submission.result();
    let banner = match result.status {
        MutationStatus::Idle => None,
        MutationStatus::Pending => Some((texts.loading_banner.to_string(), c.banner_loading)),
        MutationStatus::Success => Some((result.message, c.banner_success)),
        MutationStatus::Error => Some((result.message, c.banner_error)),
    };
    if let Some((message, color)) = banner {
        lines.push(Line::styled(
            format!("  {message}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);

    if let Some((x, y)) = cursor {
        let x = area.x.saturating_add(u16::try_from(x).unwrap_or(u16::MAX));
        let y = area.y.saturating_add(u16::try_from(y).unwrap_or(u16::MAX));
        if x < area.right() && y < area.bottom() {
            frame.set_cursor_position((x, y));
        }
    }
}

/// 按显示宽度补齐标签
fn pad_label(label: &str) -> String {
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    format!("{label}{}", " ".repeat(padding))
}

fn field_label(texts: &DashboardTexts, field: FormField) -> &'static str {
    match field {
        FormField::Prefix => texts.prefix,
        FormField::Ttl => texts.ttl,
        FormField::Kind => texts.kind,
        FormField::Host => texts.host,
        FormField::Description => texts.description,
    }
}

fn placeholder(texts: &DashboardTexts, field: FormField) -> &'static str {
    match field {
        FormField::Prefix => texts.prefix_placeholder,
        FormField::Host => texts.host_placeholder,
        FormField::Description => texts.description_placeholder,
        FormField::Ttl | FormField::Kind => "",
    }
}

fn error_text(texts: &DashboardTexts, kind: FieldErrorKind) -> &'static str {
    match kind {
        FieldErrorKind::Required => texts.errors.required,
        FieldErrorKind::NotNumeric => texts.errors.not_numeric,
        FieldErrorKind::OutOfRange => texts.errors.out_of_range,
        FieldErrorKind::PatternMismatch => texts.errors.pattern_mismatch,
    }
}
