//! Modal feedback shown by the screens.

/// A modal dialog: delete confirmation, error, or success notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Confirm { message: String },
    Error { message: String },
    Success { message: String },
}

impl Dialog {
    pub fn confirm(message: impl Into<String>) -> Self {
        Dialog::Confirm {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Dialog::Error {
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Dialog::Success {
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Confirm { .. } => "Confirm",
            Dialog::Error { .. } => "Error!",
            Dialog::Success { .. } => "Success!",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Dialog::Confirm { message } | Dialog::Error { message } | Dialog::Success { message } => {
                message
            }
        }
    }
}
