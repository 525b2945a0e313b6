//! 内容面板消息
//!
//! 注册表单的输入编辑，以及域名列表的选择与查询

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 焦点 / 列表导航 ==========
    /// 上一个字段 / 上一行
    SelectPrevious,
    /// 下一个字段 / 下一行
    SelectNext,
    /// 跳转到第一行
    SelectFirst,
    /// 跳转到最后一行
    SelectLast,

    // ========== 选择器 ==========
    /// 切换到上一个值（记录类型 / 列表类型）
    TogglePrev,
    /// 切换到下一个值（记录类型 / 列表类型）
    ToggleNext,

    // ========== 文本输入 ==========
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,

    /// 提交表单 / 查询列表
    Submit,
}
