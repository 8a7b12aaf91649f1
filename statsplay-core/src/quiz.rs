//! Immediate-feedback multiple-choice questions.

use crate::output::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options` of the correct answer.
    pub correct: usize,
    pub success_message: &'static str,
    pub failure_message: &'static str,
}

pub const OUTLIER_QUIZ: QuizQuestion = QuizQuestion {
    prompt: "If a new student scores 100, which measure changes more?",
    options: &["Mean", "Median"],
    correct: 0,
    success_message: "Correct! Mean is sensitive to outliers.",
    failure_message: "Median is less affected by outliers.",
};

pub const COIN_QUIZ: QuizQuestion = QuizQuestion {
    prompt: "If we toss 1 coin, what's the probability of getting Tail?",
    options: &["0.25", "0.5", "1"],
    correct: 1,
    success_message: "Correct! A fair coin has equal chance.",
    failure_message: "Try again.",
};

impl QuizQuestion {
    /// Feedback for the option at `selected`. Out-of-range selections count as wrong.
    pub fn check(&self, selected: usize) -> Notice {
        if selected == self.correct {
            Notice::success(self.success_message)
        } else {
            Notice::error(self.failure_message)
        }
    }

    /// Index of the option matching `answer`, ignoring case and surrounding whitespace.
    pub fn option_index(&self, answer: &str) -> Option<usize> {
        let answer = answer.trim();
        self.options.iter().position(|o| o.eq_ignore_ascii_case(answer))
    }

    /// Feedback for a typed answer, or `None` if it names no option.
    pub fn check_answer(&self, answer: &str) -> Option<Notice> {
        self.option_index(answer).map(|i| self.check(i))
    }
}
