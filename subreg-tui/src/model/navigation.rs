//! 导航状态定义

use super::Page;

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub page: Page,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    page: Page::Dashboard,
                    icon: "⌂",
                },
                NavItem {
                    page: Page::Domains,
                    icon: "●",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中导航项对应的页面
    pub fn current_page(&self) -> Option<Page> {
        self.items.get(self.selected).map(|item| item.page)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
