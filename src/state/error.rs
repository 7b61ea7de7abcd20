//! State-specific error types.

/// Errors that can occur during state management operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Network event sender was not set
    #[error("Network event sender not set")]
    SenderNotSet,

    /// Network event channel is disconnected
    #[error("Network event channel disconnected")]
    ChannelDisconnected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::SenderNotSet;
        assert!(error.to_string().contains("sender not set"));

        let error = StateError::ChannelDisconnected;
        assert!(error.to_string().contains("disconnected"));
    }
}
