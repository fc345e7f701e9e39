//! Input capability injected into the interactive flows.

use anyhow::anyhow;
use std::collections::VecDeque;

pub trait Prompter {
    /// Asks a free-form question and returns the raw answer.
    fn ask_text(&mut self, question: &str) -> anyhow::Result<String>;

    /// Yes/no gate placed in front of every destructive action.
    fn ask_yes_no(&mut self, question: &str) -> anyhow::Result<bool>;
}

/// Asks `"{label} ({default}): "` and falls back to `default` on an empty answer.
pub fn ask_with_default(
    prompter: &mut dyn Prompter,
    label: &str,
    default: &str,
) -> anyhow::Result<String> {
    let answer = prompter.ask_text(&format!("{} ({}): ", label, default))?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// `yes` or `y`, in any case.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Replays canned answers in order and remembers every question asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, question: &str) -> anyhow::Result<String> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer for {:?}", question))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&mut self, question: &str) -> anyhow::Result<String> {
        self.next(question)
    }

    fn ask_yes_no(&mut self, question: &str) -> anyhow::Result<bool> {
        Ok(is_affirmative(&self.next(question)?))
    }
}
