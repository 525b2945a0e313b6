//! 请求生命周期状态机
//!
//! `Idle → Pending → {Success, Error}`，`Success`/`Error` 在下一次提交时回到
//! `Pending`。同一时刻只允许一个请求在途。

use std::fmt::Display;

use serde::Serialize;
use subreg_client::SubmitResponse;

use crate::error::{CoreError, CoreResult};

/// 状态标签（不含数据）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationStatus {
    Idle,
    Pending,
    Success,
    Error,
}

/// 单个请求的生命周期
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MutationState<T> {
    #[default]
    Idle,
    Pending,
    Success(T),
    /// 错误消息（原样展示）
    Error(String),
}

impl<T> MutationState<T> {
    pub fn status(&self) -> MutationStatus {
        match self {
            Self::Idle => MutationStatus::Idle,
            Self::Pending => MutationStatus::Pending,
            Self::Success(_) => MutationStatus::Success,
            Self::Error(_) => MutationStatus::Error,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// 提交控件是否可用
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }

    /// 进入 `Pending`；已在途时拒绝
    pub fn begin(&mut self) -> CoreResult<()> {
        if self.is_pending() {
            return Err(CoreError::SubmissionInFlight);
        }
        *self = Self::Pending;
        Ok(())
    }

    /// 以请求结果结束 `Pending`
    ///
    /// 不在 `Pending` 时忽略，返回 `false`。
    pub fn resolve<E: Display>(&mut self, outcome: Result<T, E>) -> bool {
        if !self.is_pending() {
            log::debug!("Ignoring completion for a request that is no longer pending");
            return false;
        }
        *self = match outcome {
            Ok(value) => Self::Success(value),
            Err(e) => Self::Error(e.to_string()),
        };
        true
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// 回到 `Idle`（切换查询条件时使用）
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// 注册提交的状态
pub type SubmissionState = MutationState<SubmitResponse>;

/// 渲染用的提交反馈
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub status: MutationStatus,
    pub message: String,
}

impl From<&SubmissionState> for SubmissionResult {
    fn from(state: &SubmissionState) -> Self {
        let message = match state {
            MutationState::Idle | MutationState::Pending => String::new(),
            MutationState::Success(response) => response.message.clone(),
            MutationState::Error(message) => message.clone(),
        };
        Self {
            status: state.status(),
            message,
        }
    }
}

impl SubmissionState {
    pub fn result(&self) -> SubmissionResult {
        SubmissionResult::from(self)
    }
}
