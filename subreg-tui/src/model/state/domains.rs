//! 域名列表页状态

use subreg_core::DomainListController;

/// 域名列表页状态
#[derive(Debug, Clone, Default)]
pub struct DomainsState {
    pub controller: DomainListController,
    /// 当前高亮的行
    pub selected: usize,
}

impl DomainsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.controller.domains().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.controller.domains().len().saturating_sub(1);
    }
}
