//! Yes/no questions asked while closing or exiting

/// Answers "save before closing?" questions
pub trait ConfirmPrompt {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}
