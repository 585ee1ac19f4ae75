//! Error types for the desktop shell

use folio_content::PanelKind;

/// Errors that can occur in desktop shell operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// No open window for the given panel
    WindowNotFound(PanelKind),

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(kind) => write!(f, "window not found: {}", kind.id()),
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
        }
    }
}

impl std::error::Error for ShellError {}

/// Result type alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShellError::WindowNotFound(PanelKind::About);
        assert_eq!(err.to_string(), "window not found: about");

        let err = ShellError::InvalidOperation {
            op: "drag",
            reason: "window is maximized",
        };
        assert_eq!(err.to_string(), "invalid operation 'drag': window is maximized");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ShellError::WindowNotFound(PanelKind::Contact),
            ShellError::WindowNotFound(PanelKind::Contact)
        );
        assert_ne!(
            ShellError::WindowNotFound(PanelKind::Contact),
            ShellError::WindowNotFound(PanelKind::About)
        );
    }
}
