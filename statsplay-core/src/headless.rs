//! `headless.rs`
//! One-shot entry points for running a demo without the interactive shell.

use crate::demos::{dispatch, ConceptParams};
use crate::output::{DemoOutput, Notice};
use crate::router::{route, Concept};
use crate::session::Session;
use crate::topics::{topic_demo, Topic};

/// Routes `text` and runs the selected handler.
///
/// For the probability demo, `picks` balls are drawn first, as if the user
/// had pressed the pick button that many times. Returns `None` for blank text.
pub fn explain(text: &str, params: &ConceptParams, picks: u32, session: &mut Session) -> Option<DemoOutput> {
    let concept = route(text)?;
    if concept == Concept::Probability {
        for _ in 0..picks {
            session.pick_ball(params.balls);
        }
    }
    Some(dispatch(concept, params, session))
}

/// Renders a topic, checking a typed quiz answer if one is given.
pub fn lesson(topic: Topic, answer: Option<&str>, lesson_text: &str, session: &Session) -> DemoOutput {
    let quiz = topic.quiz();
    let selected = match (quiz, answer) {
        (Some(quiz), Some(answer)) => quiz.option_index(answer),
        _ => None,
    };

    let output = topic_demo(topic, session, selected, lesson_text);
    match (quiz, answer, selected) {
        (Some(quiz), Some(answer), None) => output.notice(Notice::warning(format!(
            "'{}' is not an option; choose one of: {}",
            answer.trim(),
            quiz.options.join(", ")
        ))),
        (None, Some(_), _) => output.notice(Notice::warning(format!("'{}' has no quiz.", topic.label()))),
        _ => output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::NoticeLevel;

    #[test]
    fn test_explain_blank_text_skips_dispatch() {
        let mut session = Session::new(Some(1));
        assert!(explain("  ", &ConceptParams::default(), 3, &mut session).is_none());
        assert_eq!(session.counters().total(), 0);
    }

    #[test]
    fn test_explain_probability_performs_picks() {
        let mut session = Session::new(Some(1));
        let output = explain("probability", &ConceptParams::default(), 10, &mut session).unwrap();
        assert_eq!(output.stat_value("Total picks"), Some("10"));
        assert!(output.chart.is_some());
    }

    #[test]
    fn test_picks_ignored_for_other_concepts() {
        let mut session = Session::new(Some(1));
        explain("mean", &ConceptParams::default(), 10, &mut session).unwrap();
        assert_eq!(session.counters().total(), 0);
    }

    #[test]
    fn test_unrecognized_concept_shows_help() {
        let mut session = Session::new(Some(1));
        let output = explain("variance", &ConceptParams::default(), 0, &mut session).unwrap();
        assert!(output.has_level(NoticeLevel::Info));
        assert!(output.chart.is_none());
    }

    #[test]
    fn test_lesson_with_unknown_answer_warns() {
        let session = Session::new(Some(1));
        let output = lesson(Topic::ProbabilityBasics, Some("0.75"), "", &session);
        assert!(output.has_level(NoticeLevel::Warning));
        assert!(!output.has_level(NoticeLevel::Success));
    }
}
