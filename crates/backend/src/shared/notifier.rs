//! Уведомления пользователя о результате операций (toast)

use contracts::shared::notice::{Notice, NoticeKind};
use std::sync::Mutex;

/// Получатель уведомлений. Fire-and-forget: результат не возвращается,
/// реализация не должна паниковать.
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(NoticeKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeKind::Error, message);
    }
}

/// Копит уведомления одного запроса, чтобы вернуть их клиенту вместе с ответом.
/// Каждое уведомление также пишется в лог (target `notice`).
#[derive(Debug, Default)]
pub struct NoticeCollector {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Забрать накопленные уведомления
    pub fn drain(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Notifier for NoticeCollector {
    fn notify(&self, kind: NoticeKind, message: &str) {
        log_notice(kind, message);
        let notice = Notice::new(kind, message);
        match self.notices.lock() {
            Ok(mut guard) => guard.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}

fn log_notice(kind: NoticeKind, message: &str) {
    match kind {
        NoticeKind::Success => tracing::info!(target: "notice", "{}", message),
        NoticeKind::Error => tracing::warn!(target: "notice", "{}", message),
    }
}
