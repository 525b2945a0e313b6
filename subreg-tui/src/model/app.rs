//! 应用主状态结构

use super::{DashboardState, DomainsState, FocusPanel, ModalState, NavigationState, Page};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 注册页状态
    pub dashboard: DashboardState,
    /// 域名列表页状态
    pub domains: DomainsState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(base_domain: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Dashboard,
            status_message: None,
            dashboard: DashboardState::new(base_domain),
            domains: DomainsState::new(),
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
