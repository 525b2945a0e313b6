//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：帮助、错误弹窗的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `dashboard.*`, `domains.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 注册页文本
    pub dashboard: DashboardTexts,
    /// 域名列表页文本
    pub domains: DomainsTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str,
    pub arrows_ud: &'static str,
    pub alt_r: &'static str,
    pub alt_q: &'static str,
}

pub struct ActionTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub next_field: &'static str,
    pub change_type: &'static str,
    pub change_list: &'static str,
    pub submit: &'static str,
    pub fetch: &'static str,
    pub scroll: &'static str,
    pub back: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    pub dashboard: &'static str,
    pub domains: &'static str,
}

// ============================================================================
// 注册页
// ============================================================================

pub struct DashboardTexts {
    pub title: &'static str,
    pub subdomain: &'static str,
    pub prefix: &'static str,
    pub prefix_placeholder: &'static str,
    pub ttl: &'static str,
    pub kind: &'static str,
    pub host: &'static str,
    pub host_placeholder: &'static str,
    pub description: &'static str,
    pub description_placeholder: &'static str,
    pub submit: &'static str,
    /// 请求在途时的提示（按钮禁用）
    pub submitting: &'static str,
    pub loading_banner: &'static str,
    pub errors: FieldErrorTexts,
}

/// 字段校验错误提示
pub struct FieldErrorTexts {
    pub required: &'static str,
    pub not_numeric: &'static str,
    pub out_of_range: &'static str,
    pub pattern_mismatch: &'static str,
}

// ============================================================================
// 域名列表页
// ============================================================================

pub struct DomainsTexts {
    pub title: &'static str,
    pub list_kind: &'static str,
    pub listing: &'static str,
    pub changed: &'static str,
    pub fetch_hint: &'static str,
    pub no_domains: &'static str,
    /// 状态栏：查询完成后的条数后缀
    pub loaded: &'static str,
    pub col_tag: &'static str,
    pub col_name: &'static str,
    pub col_date: &'static str,
    pub col_target: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub help: HelpTexts,
    pub error_title: &'static str,
    pub close_hint: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub dashboard: &'static str,
    pub domains: &'static str,
    pub switch_panel: &'static str,
    pub move_select: &'static str,
    pub confirm: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub cycle_kind: &'static str,
    pub submit_form: &'static str,
    pub toggle_list: &'static str,
    pub refresh: &'static str,
    pub close: &'static str,
}
