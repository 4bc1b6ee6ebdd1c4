//! # Command Layer
//!
//! Pure business logic over [`HandbookData`]. Mutating commands take the current
//! document plus the time of the call and return a [`Mutation`]: a brand new
//! document, whether the targeted path was found, and the id of anything created.
//! They never touch storage; persisting is the API layer's job.

use crate::config::HandbookConfig;
use crate::model::HandbookData;
use std::path::PathBuf;

pub mod categories;
pub mod config;
pub mod entries;
pub mod pages;
pub mod query;
pub mod rewrite;

/// Output of a mutating command.
#[derive(Debug, Clone)]
pub struct Mutation {
    pub data: HandbookData,
    pub matched: bool,
    pub created_id: Option<String>,
}

impl Mutation {
    pub fn new(data: HandbookData, matched: bool) -> Self {
        Self {
            data,
            matched,
            created_id: None,
        }
    }

    pub fn with_created_id(mut self, id: Option<String>) -> Self {
        self.created_id = id;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandbookPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The whole path named by the call existed.
    pub matched: bool,
    /// Storage accepted the write. `false` means the change lives in memory only.
    pub persisted: bool,
    pub created_id: Option<String>,
    pub config: Option<HandbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_config(mut self, config: HandbookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
