//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点和页面生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let mut hints = vec![(keys.tab, actions.switch_panel)];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::Dashboard => {
                hints.push((keys.arrows_ud, actions.next_field));
                hints.push((keys.arrows_lr, actions.change_type));
                hints.push((keys.enter, actions.submit));
                hints.push((keys.esc, actions.back));
            }
            Page::Domains => {
                hints.push((keys.arrows_ud, actions.scroll));
                hints.push((keys.arrows_lr, actions.change_list));
                hints.push((keys.enter, actions.fetch));
                hints.push((keys.alt_r, actions.fetch));
                hints.push((keys.esc, actions.back));
            }
        },
    }

    hints.push((keys.alt_q, texts.common.quit));
    hints
}
