//! 子域名注册表单
//!
//! 持有各字段的原始输入；`subdomain` 每次读取时由前缀与基础域名重新计算，
//! 不允许单独编辑。

use serde::Serialize;
use subreg_client::{RecordKind, SubdomainRequest};

use crate::validation::{check_required, is_dotted_quad, parse_ttl, ValidationErrors};
use crate::FieldErrorKind;

/// 默认 TTL（分钟）
pub const DEFAULT_TTL_MINUTES: u32 = 10;

/// 可编辑的表单字段（按显示顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    #[default]
    Prefix,
    Ttl,
    Kind,
    Host,
    Description,
}

impl FormField {
    pub const ALL: [Self; 5] = [
        Self::Prefix,
        Self::Ttl,
        Self::Kind,
        Self::Host,
        Self::Description,
    ];

    /// 字段名（与请求体的 key 一致）
    pub fn name(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Ttl => "ttl",
            Self::Kind => "kind",
            Self::Host => "host",
            Self::Description => "description",
        }
    }

    /// 是否为文本输入（`Kind` 是选择器）
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Kind)
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// 由前缀与基础域名得到完整子域名
///
/// 前缀为空时即为基础域名本身。
pub fn derive_subdomain(prefix: &str, base_domain: &str) -> String {
    if prefix.is_empty() {
        base_domain.to_string()
    } else {
        format!("{prefix}.{base_domain}")
    }
}

/// 注册表单状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    base_domain: String,
    pub prefix: String,
    /// 保持原始输入，提交时再解析
    pub ttl: String,
    pub kind: RecordKind,
    pub host: String,
    pub description: String,
}

impl RegistrationForm {
    /// 以默认值（ttl=10，kind=A）创建表单
    pub fn new(base_domain: impl Into<String>) -> Self {
        Self {
            base_domain: base_domain.into(),
            prefix: String::new(),
            ttl: DEFAULT_TTL_MINUTES.to_string(),
            kind: RecordKind::default(),
            host: String::new(),
            description: String::new(),
        }
    }

    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    /// 当前的完整子域名
    pub fn effective_subdomain(&self) -> String {
        derive_subdomain(&self.prefix, &self.base_domain)
    }

    /// 文本字段的当前值；`Kind` 返回其线上名称
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Prefix => &self.prefix,
            FormField::Ttl => &self.ttl,
            FormField::Kind => self.kind.as_str(),
            FormField::Host => &self.host,
            FormField::Description => &self.description,
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Prefix => Some(&mut self.prefix),
            FormField::Ttl => Some(&mut self.ttl),
            FormField::Host => Some(&mut self.host),
            FormField::Description => Some(&mut self.description),
            FormField::Kind => None,
        }
    }

    /// 整体替换文本字段；对 `Kind` 尝试按名称解析
    pub fn set(&mut self, field: FormField, value: &str) {
        if let Some(text) = self.text_mut(field) {
            *text = value.to_string();
        } else if let Ok(kind) = value.parse() {
            self.kind = kind;
        }
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        if let Some(text) = self.text_mut(field) {
            text.push(c);
        }
    }

    pub fn pop_char(&mut self, field: FormField) {
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    pub fn next_kind(&mut self) {
        self.kind = self.kind.next();
    }

    pub fn prev_kind(&mut self) {
        self.kind = self.kind.prev();
    }

    /// 校验并打包请求
    ///
    /// 一次返回全部字段错误（按字段顺序）。只做 `required` 与格式检查，
    /// 其余交给后端。
    pub fn validate(&self) -> Result<SubdomainRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(kind) = check_required(&self.prefix) {
            errors.push(FormField::Prefix, kind);
        }

        let ttl = match parse_ttl(&self.ttl) {
            Ok(minutes) => Some(minutes),
            Err(kind) => {
                errors.push(FormField::Ttl, kind);
                None
            }
        };

        if let Err(kind) = check_required(&self.host) {
            errors.push(FormField::Host, kind);
        } else if self.kind == RecordKind::A && !is_dotted_quad(&self.host) {
            errors.push(FormField::Host, FieldErrorKind::PatternMismatch);
        }

        match ttl {
            Some(ttl) if errors.is_empty() => Ok(SubdomainRequest {
                subdomain: self.effective_subdomain(),
                ttl,
                kind: self.kind,
                prefix: self.prefix.clone(),
                host: self.host.clone(),
                description: self.description.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new("example.com");
        form.prefix = "blog".into();
        form.host = "192.0.2.10".into();
        form.description = "personal blog".into();
        form
    }

    #[test]
    fn derives_subdomain_from_prefix() {
        assert_eq!(derive_subdomain("blog", "example.com"), "blog.example.com");
        assert_eq!(derive_subdomain("a.b", "example.com"), "a.b.example.com");
        assert_eq!(derive_subdomain("", "example.com"), "example.com");
    }

    #[test]
    fn effective_subdomain_follows_prefix_edits() {
        let mut form = RegistrationForm::new("example.com");
        assert_eq!(form.effective_subdomain(), "example.com");
        for c in "www".chars() {
            form.push_char(FormField::Prefix, c);
        }
        assert_eq!(form.effective_subdomain(), "www.example.com");
        form.pop_char(FormField::Prefix);
        assert_eq!(form.effective_subdomain(), "ww.example.com");
    }

    #[test]
    fn defaults_are_ttl_ten_and_kind_a() {
        let form = RegistrationForm::new("example.com");
        assert_eq!(form.ttl, "10");
        assert_eq!(form.kind, RecordKind::A);
    }

    #[test]
    fn valid_form_packages_request() {
        let request = filled_form().validate();
        assert_eq!(
            request,
            Ok(SubdomainRequest {
                subdomain: "blog.example.com".into(),
                ttl: 10,
                kind: RecordKind::A,
                prefix: "blog".into(),
                host: "192.0.2.10".into(),
                description: "personal blog".into(),
            })
        );
    }

    #[test]
    fn reports_all_errors_in_field_order() {
        let mut form = RegistrationForm::new("example.com");
        form.ttl = "abc".into();
        let errors = form.validate().err().unwrap_or_default();
        let fields: Vec<_> = errors.iter().map(|e| (e.field, e.kind)).collect();
        assert_eq!(
            fields,
            vec![
                (FormField::Prefix, FieldErrorKind::Required),
                (FormField::Ttl, FieldErrorKind::NotNumeric),
                (FormField::Host, FieldErrorKind::Required),
            ]
        );
    }

    #[test]
    fn kind_a_rejects_out_of_range_octet() {
        let mut form = filled_form();
        form.host = "256.1.1.1".into();
        let errors = form.validate().err().unwrap_or_default();
        assert_eq!(
            errors.for_field(FormField::Host),
            Some(FieldErrorKind::PatternMismatch)
        );
    }

    #[test]
    fn other_kinds_skip_the_address_pattern() {
        let mut form = filled_form();
        form.kind = RecordKind::Cname;
        form.host = "target.example.net".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn description_is_optional() {
        let mut form = filled_form();
        form.description.clear();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn kind_cycles_with_wraparound() {
        let mut form = RegistrationForm::new("example.com");
        form.prev_kind();
        assert_eq!(form.kind, RecordKind::Txt);
        form.next_kind();
        form.next_kind();
        assert_eq!(form.kind, RecordKind::Cname);
    }

    #[test]
    fn set_parses_kind_by_name() {
        let mut form = RegistrationForm::new("example.com");
        form.set(FormField::Kind, "mx");
        assert_eq!(form.kind, RecordKind::Mx);
        form.set(FormField::Kind, "SRV");
        assert_eq!(form.kind, RecordKind::Mx);
        form.push_char(FormField::Kind, 'x');
        assert_eq!(form.value(FormField::Kind), "MX");
    }

    #[test]
    fn field_navigation_wraps() {
        assert_eq!(FormField::Description.next(), FormField::Prefix);
        assert_eq!(FormField::Prefix.prev(), FormField::Description);
        assert!(!FormField::Kind.is_text());
    }
}
