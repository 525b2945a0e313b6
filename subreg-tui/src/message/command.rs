//! Update 产出的副作用指令
//!
//! Update 层不直接发请求，只返回 Command，由主循环交给 Backend 执行。

use subreg_core::{DomainListKind, SubdomainRequest};

/// 需要 Backend 执行的操作
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// 无操作
    #[default]
    None,
    /// 发送注册请求
    SubmitRegistration(SubdomainRequest),
    /// 获取域名列表
    FetchDomains(DomainListKind),
}
