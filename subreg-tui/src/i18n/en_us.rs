//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, DashboardTexts, DomainsTexts, FieldErrorTexts, HelpTexts, HintTexts,
    KeyNames, ModalTexts, NavTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Subdomain Registration",
        loading: "Loading...",
        error: "Error",
        quit: "Quit",
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
            switch_panel: "Switch panel",
            navigate: "Navigate",
            open: "Open",
            next_field: "Field",
            change_type: "Type",
            change_list: "List",
            submit: "Update",
            fetch: "Fetch",
            scroll: "Scroll",
            back: "Back",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        dashboard: "Dashboard",
        domains: "Domains",
    },

    // ========================================================================
    // 注册页
    // ========================================================================
    dashboard: DashboardTexts {
        title: "Register a Sub-Domain",
        subdomain: "Subdomain",
        prefix: "Prefix",
        prefix_placeholder: "Product prefix",
        ttl: "TTL (in mins)",
        kind: "Type",
        host: "Host Target (IP)",
        host_placeholder: "Ex. 192.0.2.1",
        description: "Description",
        description_placeholder: "Write a product description here...",
        submit: "[ Update ]",
        submitting: "[ Update ] (waiting)",
        loading_banner: "loading...",
        errors: FieldErrorTexts {
            required: "Please fill out this field.",
            not_numeric: "Please enter a number.",
            out_of_range: "Value must be at least 1.",
            pattern_mismatch: "Please match the requested format (e.g. 192.0.2.1).",
        },
    },

    // ========================================================================
    // 域名列表页
    // ========================================================================
    domains: DomainsTexts {
        title: "Domains",
        list_kind: "List",
        listing: "List Available Domains",
        changed: "Changed Domains",
        fetch_hint: "Press Enter to fetch the selected list.",
        no_domains: "No domains",
        loaded: "domains loaded",
        col_tag: "Tag",
        col_name: "Name",
        col_date: "Date",
        col_target: "Target",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help: HelpTexts {
            title: "Help",
            global: "Global shortcuts",
            dashboard: "Dashboard",
            domains: "Domains",
            switch_panel: "Switch panel",
            move_select: "Move up/down",
            confirm: "Confirm",
            back: "Back to menu",
            quit: "Quit",
            cycle_kind: "Cycle record type",
            submit_form: "Submit the form",
            toggle_list: "Switch list",
            refresh: "Fetch again",
            close: "Press Esc to close the help",
        },
        error_title: "Error",
        close_hint: "Press Esc or Enter to close",
    },
};
