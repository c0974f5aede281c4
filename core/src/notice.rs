//! User-visible notices (toasts).
//!
//! Workflow operations report to a [`Notifier`]; what the notifier does with
//! a [`Notice`] (toast, console, test recorder) is up to the caller.

use std::cell::RefCell;

use crate::config::SUPPORTED_FORMATS;
use crate::error::{JobError, ValidationError};

/// Notice severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Informational or success message
    Normal,
    /// Rejection or failure
    Destructive,
}

impl Severity {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Normal => "toast-normal",
            Severity::Destructive => "toast-destructive",
        }
    }
}

/// A short message with a title and a description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Normal,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }

    /// One file accepted into a singleton slot.
    pub fn file_attached(name: &str) -> Self {
        Self::normal("文件上传成功", format!("已上传: {}", name))
    }

    /// A batch of supporting files accepted.
    pub fn files_attached(count: usize) -> Self {
        Self::normal("文件上传成功", format!("已上传 {} 个文件", count))
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

impl From<&ValidationError> for Notice {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::UnsupportedFormat { name } => Notice::destructive(
                "文件格式不支持",
                format!(
                    "文件 {} 格式不支持，请上传以下格式: {}",
                    name,
                    SUPPORTED_FORMATS.join(", ")
                ),
            ),
            ValidationError::SlotOccupied { .. } => {
                Notice::destructive("已有文件", "请先删除现有文件后再上传新文件")
            }
            ValidationError::MissingRequirement => {
                Notice::destructive("请添加作业要求", "请上传作业要求文件或手动输入作业要求")
            }
            ValidationError::MissingDraft => {
                Notice::destructive("请上传完成文稿", "请上传您完成的作业文稿")
            }
            ValidationError::MissingNickname => {
                Notice::destructive("请填写昵称", "昵称是必填项，查收QC报告时需要昵称对应哦~")
            }
        }
    }
}

impl From<&JobError> for Notice {
    fn from(err: &JobError) -> Self {
        match err {
            JobError::Upload(_) => Notice::destructive("上传失败", "文件上传失败，请重试或取消"),
            JobError::Timeout { .. } => {
                Notice::destructive("检测超时", "分析时间过长，请重试或稍后再来")
            }
            JobError::AnalysisFailed(_) => {
                Notice::destructive("检测失败", "文稿分析失败，请重试或取消")
            }
            JobError::ReportDelivery(_) => {
                Notice::destructive("报告发送失败", "报告已生成但发送失败，请重试")
            }
        }
    }
}

/// Receiver of workflow notices. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Records notices in order.
impl Notifier for RefCell<Vec<Notice>> {
    fn notify(&self, notice: Notice) {
        self.borrow_mut().push(notice);
    }
}

/// Drops notices after logging them.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Normal => log::info!("{}: {}", notice.title, notice.description),
            Severity::Destructive => log::warn!("{}: {}", notice.title, notice.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SlotKind;

    #[test]
    fn test_every_validation_error_is_destructive() {
        let errors = [
            ValidationError::UnsupportedFormat { name: "a.exe".into() },
            ValidationError::SlotOccupied { slot: SlotKind::Draft },
            ValidationError::MissingRequirement,
            ValidationError::MissingDraft,
            ValidationError::MissingNickname,
        ];
        for err in &errors {
            assert!(Notice::from(err).is_destructive(), "{:?}", err);
        }
    }

    #[test]
    fn test_unsupported_notice_lists_formats() {
        let notice = Notice::from(&ValidationError::UnsupportedFormat {
            name: "archive.zip".into(),
        });
        assert!(notice.description.contains("archive.zip"));
        assert!(notice.description.contains("docx"));
        assert!(notice.description.contains("png"));
    }

    #[test]
    fn test_refcell_records_in_order() {
        let sink = RefCell::new(Vec::new());
        sink.notify(Notice::file_attached("a.pdf"));
        sink.notify(Notice::files_attached(3));
        let notices = sink.into_inner();
        assert_eq!(notices.len(), 2);
        assert!(notices[0].description.contains("a.pdf"));
        assert!(notices[1].description.contains('3'));
        assert_eq!(notices[1].severity.css_class(), "toast-normal");
    }
}
