pub(crate) mod format_push_notice;
pub(crate) mod format_system_notice;
pub(crate) mod handle_push_notice_event;
pub(crate) mod handle_system_notice_event;

pub use format_push_notice::FormatPushNotice;
pub use format_system_notice::FormatSystemNotice;
pub use handle_push_notice_event::HandlePushNoticeEventInterface;
pub use handle_system_notice_event::HandleSystemNoticeEventInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    handle_push_notice_event::MockHandlePushNoticeEventInterface,
    handle_system_notice_event::MockHandleSystemNoticeEventInterface,
};
