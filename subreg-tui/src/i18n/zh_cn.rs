//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, DashboardTexts, DomainsTexts, FieldErrorTexts, HelpTexts, HintTexts,
    KeyNames, ModalTexts, NavTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "子域名注册",
        loading: "加载中...",
        error: "错误",
        quit: "退出",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            alt_r: "Alt+r",
            alt_q: "Alt+q",
        },
        actions: ActionTexts {
            switch_panel: "切换面板",
            navigate: "导航",
            open: "打开",
            next_field: "字段",
            change_type: "类型",
            change_list: "列表",
            submit: "提交",
            fetch: "查询",
            scroll: "滚动",
            back: "返回",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "菜单",
        dashboard: "注册",
        domains: "域名",
    },

    // ========================================================================
    // 注册页
    // ========================================================================
    dashboard: DashboardTexts {
        title: "注册子域名",
        subdomain: "子域名",
        prefix: "前缀",
        prefix_placeholder: "子域名前缀",
        ttl: "TTL（分钟）",
        kind: "类型",
        host: "目标主机（IP）",
        host_placeholder: "例如 192.0.2.1",
        description: "描述",
        description_placeholder: "在此填写描述...",
        submit: "[ 提交 ]",
        submitting: "[ 提交 ]（等待中）",
        loading_banner: "loading...",
        errors: FieldErrorTexts {
            required: "请填写此字段。",
            not_numeric: "请输入数字。",
            out_of_range: "数值不能小于 1。",
            pattern_mismatch: "请与要求的格式匹配（如 192.0.2.1）。",
        },
    },

    // ========================================================================
    // 域名列表页
    // ========================================================================
    domains: DomainsTexts {
        title: "域名",
        list_kind: "列表",
        listing: "可用域名",
        changed: "已变更域名",
        fetch_hint: "按 Enter 查询所选列表。",
        no_domains: "暂无域名",
        loaded: "个域名已加载",
        col_tag: "标签",
        col_name: "名称",
        col_date: "日期",
        col_target: "目标",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help: HelpTexts {
            title: "帮助",
            global: "全局快捷键",
            dashboard: "注册页",
            domains: "域名页",
            switch_panel: "切换面板",
            move_select: "上下移动",
            confirm: "确认",
            back: "返回菜单",
            quit: "退出",
            cycle_kind: "切换记录类型",
            submit_form: "提交表单",
            toggle_list: "切换列表",
            refresh: "重新查询",
            close: "按 Esc 关闭帮助",
        },
        error_title: "错误",
        close_hint: "按 Esc 或 Enter 关闭",
    },
};
