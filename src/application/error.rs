//! 应用层错误定义
//!
//! 统一的命令/查询错误类型，消息即对外返回的本地化文本

use thiserror::Error;

use crate::domain::line::SectionError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 引用的线路或车站不存在 (MissingId)
    #[error("해당 id:{id} 로 data 를 찾을 수 없습니다.")]
    NotFound { resource_type: &'static str, id: i64 },

    /// 请求格式或取值错误 (BadRequest)
    #[error("잘못된 요청입니다. ({0})")]
    ValidationError(String),

    /// 区间链校验失败
    #[error(transparent)]
    Section(#[from] SectionError),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: i64) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        match err {
            crate::application::ports::RepositoryError::NotFound { resource_type, id } => {
                Self::NotFound { resource_type, id }
            }
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::station::StationId;

    #[test]
    fn test_missing_id_message() {
        let err = ApplicationError::not_found("Line", 42);
        assert_eq!(err.to_string(), "해당 id:42 로 data 를 찾을 수 없습니다.");
    }

    #[test]
    fn test_section_error_message_is_transparent() {
        let err = ApplicationError::from(SectionError::IsNotTerminalStation(StationId::new(5)));
        assert_eq!(err.to_string(), "지금 제거하는 역(id:5)은 하행종점역이 아닙니다.");
    }
}
