//! 注册页状态

use subreg_core::{FormField, RegistrationController};

/// 注册页状态
///
/// 表单数据、字段错误与提交状态都在控制器里，这里只多记一个焦点字段。
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub controller: RegistrationController,
    /// 当前获得焦点的字段
    pub focused: FormField,
}

impl DashboardState {
    pub fn new(base_domain: impl Into<String>) -> Self {
        Self {
            controller: RegistrationController::new(base_domain),
            focused: FormField::default(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// 向焦点字段输入字符（选择器字段忽略）
    pub fn input(&mut self, c: char) {
        if self.focused.is_text() {
            self.controller.push_char(self.focused, c);
        }
    }

    pub fn backspace(&mut self) {
        if self.focused.is_text() {
            self.controller.pop_char(self.focused);
        }
    }

    /// 焦点在类型选择器上时切换记录类型
    pub fn cycle_kind(&mut self, forward: bool) {
        if self.focused != FormField::Kind {
            return;
        }
        if forward {
            self.controller.next_kind();
        } else {
            self.controller.prev_kind();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subreg_core::RecordKind;

    #[test]
    fn typing_into_prefix_updates_subdomain() {
        let mut state = DashboardState::new("example.com");
        for c in "api".chars() {
            state.input(c);
        }
        assert_eq!(state.controller.form.effective_subdomain(), "api.example.com");
        state.backspace();
        assert_eq!(state.controller.form.prefix, "ap");
    }

    #[test]
    fn kind_field_ignores_typing_and_cycles() {
        let mut state = DashboardState::new("example.com");
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focused, FormField::Kind);

        state.input('x');
        assert_eq!(state.controller.form.kind, RecordKind::A);
        state.cycle_kind(false);
        assert_eq!(state.controller.form.kind, RecordKind::Txt);
    }

    #[test]
    fn cycle_is_ignored_on_text_fields() {
        let mut state = DashboardState::new("example.com");
        state.cycle_kind(true);
        assert_eq!(state.controller.form.kind, RecordKind::A);
    }
}
