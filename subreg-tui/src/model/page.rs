//! 页面状态定义

use crate::i18n::t;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 子域名注册表单
    #[default]
    Dashboard,
    /// 域名列表
    Domains,
}

impl Page {
    /// 获取页面标题
    pub fn title(self) -> &'static str {
        let texts = t();
        match self {
            Page::Dashboard => texts.dashboard.title,
            Page::Domains => texts.domains.title,
        }
    }
}
