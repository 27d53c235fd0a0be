use serde::{Deserialize, Serialize};

/// Тип уведомления для пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Уведомление, показываемое после операции (toast)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Ответ на изменяющую операцию: результат и уведомления, которые она выдала
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithNotices<T> {
    pub data: T,
    pub notices: Vec<Notice>,
}

/// Ответ при ошибке валидации формы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub errors: crate::shared::validation::FieldErrors,
    pub notices: Vec<Notice>,
}
