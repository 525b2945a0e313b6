//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        match app.current_page {
            Page::Dashboard => handle_form_keys(key),
            Page::Domains => handle_list_keys(key),
        }
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        KeyCode::Right => AppMessage::ToggleFocus,
        // 导航面板没有文本输入，单键快捷方式可用
        KeyCode::Char('q') => AppMessage::Quit,
        KeyCode::Char('?') => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

/// 处理注册表单的按键
///
/// 字符键全部作为输入，快捷键只能用 Alt / Ctrl 组合。
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Submit);
    }

    match key.code {
        KeyCode::Up | KeyCode::BackTab => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right => AppMessage::Content(ContentMessage::ToggleNext),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Content(ContentMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理域名列表页的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right | KeyCode::Char(' ') => AppMessage::Content(ContentMessage::ToggleNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Submit),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
        | (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn content_app(page: Page) -> App {
        let mut app = App::new("example.com");
        app.current_page = page;
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn letters_are_typed_into_the_form() {
        let app = content_app(Page::Dashboard);
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Content(ContentMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(
                Event::Key(KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT)),
                &app
            ),
            AppMessage::Content(ContentMessage::Input('W'))
        ));
    }

    #[test]
    fn enter_submits_the_form() {
        let app = content_app(Page::Dashboard);
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Submit)
        ));
    }

    #[test]
    fn arrows_move_fields_and_cycle_kind() {
        let app = content_app(Page::Dashboard);
        assert!(matches!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Content(ContentMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Left), &app),
            AppMessage::Content(ContentMessage::TogglePrev)
        ));
    }

    #[test]
    fn q_quits_only_from_navigation() {
        let app = App::new("example.com");
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Quit
        ));
        let app = content_app(Page::Domains);
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn global_shortcuts_work_in_content() {
        let app = content_app(Page::Dashboard);
        assert!(matches!(
            handle_event(
                Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                &app
            ),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(
                Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::ALT)),
                &app
            ),
            AppMessage::Refresh
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::GoBack
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &app),
            AppMessage::ToggleFocus
        ));
    }

    #[test]
    fn domains_page_keys() {
        let app = content_app(Page::Domains);
        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Content(ContentMessage::ToggleNext)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Submit)
        ));
    }

    #[test]
    fn open_modal_captures_keys() {
        let mut app = content_app(Page::Dashboard);
        app.modal.show_help();
        assert!(matches!(
            handle_event(press(KeyCode::Char('x')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn key_release_is_ignored() {
        let app = content_app(Page::Dashboard);
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
