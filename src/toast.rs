//! Transient Notifications

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Sequence number so a dismiss timer only clears its own toast
    pub id: u32,
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(title: &str, message: &str, kind: ToastKind) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            message: message.to_string(),
            kind,
        }
    }

    pub fn sent() -> Self {
        Self::new(
            "Message sent successfully!",
            "Thank you for reaching out. I'll get back to you soon.",
            ToastKind::Success,
        )
    }

    pub fn send_failed() -> Self {
        Self::new(
            "Error sending message",
            "Please try again or contact me directly via email.",
            ToastKind::Error,
        )
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast show toast-success",
            ToastKind::Error => "toast show toast-error",
        }
    }
}
