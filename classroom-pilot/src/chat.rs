//! Structured view of the public chat transcript.

use crate::config::TutorProfile;
use crate::title::WindowTitle;
use serde::{Deserialize, Serialize};

// author labels longer than this are treated as message text containing a colon
const MAX_AUTHOR_WORDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Tutor,
    Student,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTranscript {
    pub messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    /// Builds a transcript from the chat window's scraped text.
    ///
    /// Lines of the form `Author: text` start a new message; any other line
    /// continues the previous message. Text before the first authored line is
    /// kept as a system message.
    pub fn parse(content: &str, tutor: &TutorProfile) -> Self {
        let tutor_name = normalize_name(&tutor.display_name());
        let mut messages: Vec<ChatMessage> = Vec::new();

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.eq_ignore_ascii_case(WindowTitle::PublicChat.as_str()) {
                continue;
            }

            if let Some((author, text)) = split_author(line) {
                let role = if normalize_name(author) == tutor_name {
                    ChatRole::Tutor
                } else {
                    ChatRole::Student
                };
                messages.push(ChatMessage {
                    author: Some(author.to_string()),
                    role,
                    text: text.to_string(),
                });
                continue;
            }

            match messages.last_mut() {
                Some(last) => {
                    last.text.push('\n');
                    last.text.push_str(line);
                }
                None => messages.push(ChatMessage {
                    author: None,
                    role: ChatRole::System,
                    text: line.to_string(),
                }),
            }
        }

        Self { messages }
    }

    pub fn last_student_message(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::Student)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn split_author(line: &str) -> Option<(&str, &str)> {
    let (author, text) = line.split_once(':')?;
    // bare links such as "https://..."
    if text.starts_with("//") {
        return None;
    }
    let author = author.trim();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let words = author.split_whitespace().count();
    if words == 0 || words > MAX_AUTHOR_WORDS {
        return None;
    }
    Some((author, text))
}

fn normalize_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_lowercase()
}
