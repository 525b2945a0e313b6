//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗边框内留白后的区域
fn padded(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect::new(
        area.x + horizontal,
        area.y + vertical,
        area.width.saturating_sub(horizontal * 2),
        area.height.saturating_sub(vertical * 2),
    )
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(60, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(t().modal.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, padded(area, 2, 2));
}

/// 帮助弹窗中的一行快捷键说明
fn shortcut_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<8}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

fn section_line(title: &'static str) -> Line<'static> {
    Line::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.modal.help;
    let keys = &texts.hints.keys;

    let area = centered_rect(55, 21, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let lines = vec![
        section_line(help.global),
        shortcut_line(keys.tab, help.switch_panel),
        shortcut_line("↑↓/jk", help.move_select),
        shortcut_line(keys.enter, help.confirm),
        shortcut_line(keys.esc, help.back),
        shortcut_line(keys.alt_q, help.quit),
        Line::from(""),
        section_line(help.dashboard),
        shortcut_line(keys.arrows_lr, help.cycle_kind),
        shortcut_line(keys.enter, help.submit_form),
        Line::from(""),
        section_line(help.domains),
        shortcut_line(keys.arrows_lr, help.toggle_list),
        shortcut_line(keys.alt_r, help.refresh),
        Line::from(""),
        Line::styled(help.close, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), padded(area, 2, 1));
}
