//! 域名列表页

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, TableState},
    Frame,
};

use subreg_core::{DomainListKind, MutationState};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染域名列表页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let controller = &app.domains.controller;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    // 列表类型选择器
    let kind_label = match controller.kind {
        DomainListKind::Listing => texts.domains.listing,
        DomainListKind::Changed => texts.domains.changed,
    };
    let selector = Line::from(vec![
        Span::styled(format!("{}: ", texts.domains.list_kind), Styles::muted()),
        Span::styled(format!("◀ {kind_label} ▶"), Styles::title()),
    ]);
    frame.render_widget(Paragraph::new(selector), chunks[0]);

    let body = chunks[1];
    match &controller.state {
        MutationState::Idle => {
            let hint = Paragraph::new(Line::styled(texts.domains.fetch_hint, Styles::muted()));
            frame.render_widget(hint, body);
        }
        MutationState::Pending => {
            let loading = Paragraph::new(Line::styled(
                texts.common.loading,
                Style::default().fg(c.banner_loading),
            ));
            frame.render_widget(loading, body);
        }
        MutationState::Error(message) => {
            let error = Paragraph::new(Line::styled(
                format!("{}: {message}", texts.common.error),
                Style::default().fg(c.error),
            ));
            frame.render_widget(error, body);
        }
        MutationState::Success(domains) if domains.is_empty() => {
            let empty = Paragraph::new(Line::styled(texts.domains.no_domains, Styles::muted()));
            frame.render_widget(empty, body);
        }
        MutationState::Success(domains) => {
            let header = Row::new(vec![
                texts.domains.col_tag,
                texts.domains.col_name,
                texts.domains.col_date,
                texts.domains.col_target,
            ])
            .style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD));

            let rows = domains.iter().map(|domain| {
                Row::new(vec![
                    domain.tag.clone(),
                    domain.name.clone(),
                    domain.date.clone(),
                    domain.target.clone(),
                ])
                .style(Style::default().fg(c.fg))
            });

            let table = Table::new(
                rows,
                [
                    Constraint::Length(8),
                    Constraint::Percentage(40),
                    Constraint::Length(12),
                    Constraint::Min(10),
                ],
            )
            .header(header)
            .row_highlight_style(Styles::selected());

            let mut state = TableState::default();
            state.select(Some(app.domains.selected));
            frame.render_stateful_widget(table, body, &mut state);
        }
    }
}
