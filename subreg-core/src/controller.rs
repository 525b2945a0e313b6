//! 页面控制器
//!
//! 把表单、字段错误与请求状态组合在一起，前端只需持有控制器并渲染。
//! 控制器本身不发请求：`try_*` 产出要发送的内容，`complete` 接收结果。

use std::fmt::Display;

use subreg_client::{DomainInfo, DomainListKind, SubdomainRequest, SubmitResponse};

use crate::error::{CoreError, CoreResult};
use crate::form::{FormField, RegistrationForm};
use crate::mutation::{MutationState, SubmissionState};
use crate::validation::ValidationErrors;

/// 注册页控制器
#[derive(Debug, Clone)]
pub struct RegistrationController {
    pub form: RegistrationForm,
    pub submission: SubmissionState,
    pub errors: ValidationErrors,
}

impl RegistrationController {
    pub fn new(base_domain: impl Into<String>) -> Self {
        Self {
            form: RegistrationForm::new(base_domain),
            submission: SubmissionState::default(),
            errors: ValidationErrors::new(),
        }
    }

    /// 编辑字段后调用，清除该字段的旧错误
    pub fn touch(&mut self, field: FormField) {
        self.errors.clear_field(field);
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        self.form.push_char(field, c);
        self.touch(field);
    }

    pub fn pop_char(&mut self, field: FormField) {
        self.form.pop_char(field);
        self.touch(field);
    }

    pub fn next_kind(&mut self) {
        self.form.next_kind();
        self.touch(FormField::Kind);
        self.touch(FormField::Host);
    }

    pub fn prev_kind(&mut self) {
        self.form.prev_kind();
        self.touch(FormField::Kind);
        self.touch(FormField::Host);
    }

    /// 校验并进入 `Pending`
    ///
    /// 校验失败时不改变请求状态；已有请求在途时返回
    /// [`CoreError::SubmissionInFlight`]。成功时返回应发送的请求。
    pub fn try_submit(&mut self) -> CoreResult<SubdomainRequest> {
        if self.submission.is_pending() {
            return Err(CoreError::SubmissionInFlight);
        }
        match self.form.validate() {
            Ok(request) => {
                self.errors.clear();
                self.submission.begin()?;
                Ok(request)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(CoreError::Validation(errors))
            }
        }
    }

    /// 接收请求结果；返回是否被采纳
    pub fn complete<E: Display>(&mut self, outcome: Result<SubmitResponse, E>) -> bool {
        self.submission.resolve(outcome)
    }
}

/// 域名列表页控制器
#[derive(Debug, Clone, Default)]
pub struct DomainListController {
    pub kind: DomainListKind,
    pub state: MutationState<Vec<DomainInfo>>,
}

impl DomainListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换列表类型；在途时不允许切换
    ///
    /// 旧结果属于另一种列表，切换后回到 `Idle`。
    pub fn toggle_kind(&mut self) {
        if !self.state.is_pending() {
            self.kind = self.kind.toggle();
            self.state.reset();
        }
    }

    pub fn try_fetch(&mut self) -> CoreResult<DomainListKind> {
        self.state.begin()?;
        Ok(self.kind)
    }

    pub fn complete<E: Display>(&mut self, outcome: Result<Vec<DomainInfo>, E>) -> bool {
        self.state.resolve(outcome)
    }

    pub fn domains(&self) -> &[DomainInfo] {
        self.state.data().map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientError, FieldErrorKind, MutationStatus, RecordKind};

    fn ready_controller() -> RegistrationController {
        let mut controller = RegistrationController::new("example.com");
        controller.form.prefix = "blog".into();
        controller.form.host = "192.0.2.10".into();
        controller
    }

    #[test]
    fn non_numeric_ttl_blocks_submission() {
        let mut controller = ready_controller();
        controller.form.ttl = "ten".into();

        let err = controller.try_submit();
        assert!(matches!(err, Err(CoreError::Validation(_))));
        assert_eq!(controller.submission.status(), MutationStatus::Idle);
        assert_eq!(
            controller.errors.for_field(FormField::Ttl),
            Some(FieldErrorKind::NotNumeric)
        );
    }

    #[test]
    fn second_submit_while_pending_is_rejected() {
        let mut controller = ready_controller();
        assert!(controller.try_submit().is_ok());
        assert_eq!(controller.try_submit(), Err(CoreError::SubmissionInFlight));
    }

    #[test]
    fn invalid_host_blocks_submission_at_field_level() {
        let mut controller = ready_controller();
        controller.form.host = "256.1.1.1".into();
        assert!(controller.try_submit().is_err());
        assert_eq!(
            controller.errors.for_field(FormField::Host),
            Some(FieldErrorKind::PatternMismatch)
        );
        assert!(controller.submission.can_submit());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut controller = RegistrationController::new("example.com");
        let _ = controller.try_submit();
        assert!(controller.errors.for_field(FormField::Prefix).is_some());

        controller.push_char(FormField::Prefix, 'w');
        assert!(controller.errors.for_field(FormField::Prefix).is_none());
        assert!(controller.errors.for_field(FormField::Host).is_some());
    }

    #[test]
    fn changing_kind_clears_host_error() {
        let mut controller = ready_controller();
        controller.form.host = "target.example.net".into();
        let _ = controller.try_submit();
        assert!(controller.errors.for_field(FormField::Host).is_some());

        controller.next_kind();
        assert_eq!(controller.form.kind, RecordKind::Cname);
        assert!(controller.errors.is_empty());
    }

    #[test]
    fn rejection_leaves_form_editable() {
        let mut controller = ready_controller();
        let _ = controller.try_submit();
        controller.complete(Err(ClientError::Http {
            status: 400,
            message: "bad request".into(),
        }));

        assert_eq!(controller.submission.error(), Some("bad request"));
        assert_eq!(controller.form.prefix, "blog");
        assert!(controller.try_submit().is_ok());
    }

    #[test]
    fn domain_kind_is_locked_while_fetching() {
        let mut controller = DomainListController::new();
        controller.toggle_kind();
        assert_eq!(controller.kind, DomainListKind::Changed);

        assert_eq!(controller.try_fetch(), Ok(DomainListKind::Changed));
        controller.toggle_kind();
        assert_eq!(controller.kind, DomainListKind::Changed);
        assert!(controller.try_fetch().is_err());

        controller.complete(Ok::<_, ClientError>(Vec::new()));
        assert!(controller.domains().is_empty());
        assert_eq!(controller.state.status(), MutationStatus::Success);

        controller.toggle_kind();
        assert_eq!(controller.kind, DomainListKind::Listing);
        assert_eq!(controller.state.status(), MutationStatus::Idle);
    }
}
