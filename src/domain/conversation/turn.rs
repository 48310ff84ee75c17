//! Conversation turns - the append-only chat log.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, TurnId, ValidationError};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The citizen asking a question.
    User,
    /// The assistant's answer (generated or fallback).
    Bot,
}

impl Sender {
    /// Storage representation (`user` / `bot`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    /// Label used when replaying history into a prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Sender::User => "User",
            Sender::Bot => "Assistant",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(ValidationError::invalid_format(
                "sender",
                format!("unknown sender '{}'", other),
            )),
        }
    }
}

/// One message in the shared conversation log.
///
/// Turns are never edited or deleted once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTurn {
    pub id: TurnId,
    pub sender: Sender,
    pub content: String,
    pub created_at: Timestamp,
    /// Set on bot turns that carry the fallback text instead of a generated answer.
    #[serde(default)]
    pub is_error: bool,
}

impl ConversationTurn {
    /// Creates a user turn stamped now.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            sender: Sender::User,
            content: content.into(),
            created_at: Timestamp::now(),
            is_error: false,
        }
    }

    /// Creates a bot turn at the given time.
    pub fn bot(content: impl Into<String>, created_at: Timestamp, is_error: bool) -> Self {
        Self {
            id: TurnId::new(),
            sender: Sender::Bot,
            content: content.into(),
            created_at,
            is_error,
        }
    }
}

/// A processed user message and the reply it received.
///
/// The pair is always written together, user turn first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    user: ConversationTurn,
    bot: ConversationTurn,
}

impl Exchange {
    /// Builds the two turns for one chat round.
    ///
    /// The bot turn is stamped strictly after the user turn so that ordering
    /// by creation time replays them in the right order.
    pub fn new(user_message: impl Into<String>, bot_response: impl Into<String>, is_error: bool) -> Self {
        let user = ConversationTurn::user(user_message);
        let bot = ConversationTurn::bot(bot_response, user.created_at.next_tick(), is_error);
        Self { user, bot }
    }

    pub fn user(&self) -> &ConversationTurn {
        &self.user
    }

    pub fn bot(&self) -> &ConversationTurn {
        &self.bot
    }

    /// Both turns in write order.
    pub fn turns(&self) -> [&ConversationTurn; 2] {
        [&self.user, &self.bot]
    }

    pub fn into_turns(self) -> [ConversationTurn; 2] {
        [self.user, self.bot]
    }
}
