//! Chat pipeline configuration

use serde::Deserialize;

use crate::domain::conversation::ContextBudget;

use super::error::ValidationError;

/// Chat pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Turns of shared history replayed into each prompt
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Maximum service records placed in a prompt
    #[serde(default = "default_max_services")]
    pub max_services: usize,

    /// Maximum FAQ records placed in a prompt
    #[serde(default = "default_max_faqs")]
    pub max_faqs: usize,

    /// Character cap for the services + FAQs section
    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,

    /// Character cap for replayed history
    #[serde(default = "default_max_history_chars")]
    pub max_history_chars: usize,

    /// Exchanges buffered for the background logger
    #[serde(default = "default_logger_queue_capacity")]
    pub logger_queue_capacity: usize,
}

impl ChatConfig {
    /// Prompt size limits derived from this configuration
    pub fn context_budget(&self) -> ContextBudget {
        ContextBudget::new(
            self.max_services,
            self.max_faqs,
            self.max_context_chars,
            self.max_history_chars,
        )
    }

    /// Validate chat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_limit > 50 {
            return Err(ValidationError::InvalidHistoryLimit);
        }
        if self.max_context_chars == 0 {
            return Err(ValidationError::InvalidContextBudget("max_context_chars"));
        }
        if self.max_history_chars == 0 {
            return Err(ValidationError::InvalidContextBudget("max_history_chars"));
        }
        if self.logger_queue_capacity == 0 {
            return Err(ValidationError::InvalidQueueCapacity);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            max_services: default_max_services(),
            max_faqs: default_max_faqs(),
            max_context_chars: default_max_context_chars(),
            max_history_chars: default_max_history_chars(),
            logger_queue_capacity: default_logger_queue_capacity(),
        }
    }
}

fn default_history_limit() -> usize {
    5
}

fn default_max_services() -> usize {
    50
}

fn default_max_faqs() -> usize {
    100
}

fn default_max_context_chars() -> usize {
    12_000
}

fn default_max_history_chars() -> usize {
    4_000
}

fn default_logger_queue_capacity() -> usize {
    256
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_config_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.context_budget(), ContextBudget::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_history_limit() {
        let config = ChatConfig {
            history_limit: 500,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidHistoryLimit));
    }

    #[test]
    fn test_zero_history_is_allowed() {
        let config = ChatConfig {
            history_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_queue_capacity() {
        let config = ChatConfig {
            logger_queue_capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidQueueCapacity));
    }
}
