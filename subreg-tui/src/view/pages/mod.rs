//! 页面渲染

pub mod dashboard;
pub mod domains;
