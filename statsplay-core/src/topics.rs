//! Fixed-topic lessons.
//!
//! The alternate top level: instead of routing free text, the user picks one
//! of four topics, and two of them end in a quiz.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use statsplay_numeric::{histogram, summarize};

use crate::chart::{ChartColor, ChartRequest, ReferenceLine, Series};
use crate::output::{DemoOutput, Notice};
use crate::quiz::{QuizQuestion, COIN_QUIZ, OUTLIER_QUIZ};
use crate::session::{streams, Session};

/// Exam scores of 10 students.
pub const EXAM_SCORES: [f64; 10] = [45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0];
pub const EXAM_BINS: usize = 5;

pub const COIN_FLIPS: usize = 50;

pub const HEIGHT_MEAN_CM: f64 = 170.0;
pub const HEIGHT_STD_CM: f64 = 10.0;
pub const HEIGHT_SAMPLES: usize = 200;
pub const HEIGHT_BINS: usize = 20;

pub const LESSON_BANNER: &str =
    "Future: AI can turn this into interactive graphs & quizzes automatically!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    MeanMedian,
    ProbabilityBasics,
    Distributions,
    CustomLesson,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::MeanMedian,
        Topic::ProbabilityBasics,
        Topic::Distributions,
        Topic::CustomLesson,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Topic::MeanMedian => "Mean & Median",
            Topic::ProbabilityBasics => "Probability Basics",
            Topic::Distributions => "Distributions",
            Topic::CustomLesson => "Custom Lesson",
        }
    }

    pub fn quiz(&self) -> Option<&'static QuizQuestion> {
        match self {
            Topic::MeanMedian => Some(&OUTLIER_QUIZ),
            Topic::ProbabilityBasics => Some(&COIN_QUIZ),
            Topic::Distributions | Topic::CustomLesson => None,
        }
    }
}

/// Renders `topic`. `answer` is the selected quiz option, if any; `lesson` is
/// the pasted text for the custom lesson.
pub fn topic_demo(topic: Topic, session: &Session, answer: Option<usize>, lesson: &str) -> DemoOutput {
    let mut output = match topic {
        Topic::MeanMedian => exam_scores(),
        Topic::ProbabilityBasics => coin_toss(session),
        Topic::Distributions => heights(session),
        Topic::CustomLesson => custom_lesson(lesson),
    };

    if let (Some(quiz), Some(selected)) = (topic.quiz(), answer) {
        output = output.notice(quiz.check(selected));
    }
    output
}

fn exam_scores() -> DemoOutput {
    let heading = "Understanding Mean & Median";
    let (Some(summary), Some(hist)) = (summarize(&EXAM_SCORES), histogram(&EXAM_SCORES, EXAM_BINS)) else {
        return DemoOutput::new(heading);
    };

    let chart = ChartRequest::new("Exam scores")
        .axes("Score", "Students")
        .series(Series::histogram("Scores", &hist, false, ChartColor::SkyBlue))
        .reference_line(
            ReferenceLine::vertical(summary.mean, format!("Mean = {}", summary.mean), ChartColor::Red).dashed(),
        )
        .reference_line(ReferenceLine::vertical(
            summary.median,
            format!("Median = {}", summary.median),
            ChartColor::Green,
        ));

    DemoOutput::new(heading)
        .notice(Notice::text("Example: Exam scores of 10 students"))
        .stat("Mean", summary.mean.to_string())
        .stat("Median", summary.median.to_string())
        .chart(chart)
}

/// Number of heads in `flips` fair coin tosses.
pub fn flip_coins<R: Rng + ?Sized>(rng: &mut R, flips: usize) -> usize {
    (0..flips).filter(|_| rng.random_bool(0.5)).count()
}

fn coin_toss(session: &Session) -> DemoOutput {
    let mut rng = session.sample_rng(streams::COIN_FLIPS);
    let heads = flip_coins(&mut rng, COIN_FLIPS);
    let tails = COIN_FLIPS - heads;

    let chart = ChartRequest::new(format!("{} tosses", COIN_FLIPS))
        .axes("Outcome", "Count")
        .series(
            Series::bars(
                "Tosses",
                vec!["Head".to_string(), "Tail".to_string()],
                &[heads as f64, tails as f64],
                ChartColor::Orange,
            )
            .with_bar_colors(vec![ChartColor::Orange, ChartColor::Blue]),
        );

    DemoOutput::new("Probability Basics")
        .notice(Notice::text("Example: Tossing a fair coin"))
        .stat("Outcomes", "Head, Tail")
        .stat("P(Head)", "1/2")
        .stat("P(Tail)", "1/2")
        .stat("Heads", heads.to_string())
        .stat("Tails", tails.to_string())
        .chart(chart)
}

/// `HEIGHT_SAMPLES` draws from N(170, 10).
pub fn sample_heights<R: Rng + ?Sized>(rng: &mut R) -> Vec<f64> {
    match Normal::new(HEIGHT_MEAN_CM, HEIGHT_STD_CM) {
        Ok(normal) => (0..HEIGHT_SAMPLES).map(|_| normal.sample(rng)).collect(),
        Err(e) => {
            log::warn!("Height distribution rejected: {}", e);
            Vec::new()
        }
    }
}

fn heights(session: &Session) -> DemoOutput {
    let heading = "Normal Distribution";
    let mut rng = session.sample_rng(streams::HEIGHTS);
    let data = sample_heights(&mut rng);
    let mut output = DemoOutput::new(heading).notice(Notice::text("Example: Heights of students in cm"));

    if let Some(hist) = histogram(&data, HEIGHT_BINS) {
        output = output.chart(
            ChartRequest::new("Heights")
                .axes("Height (cm)", "Density")
                .series(Series::histogram("Heights", &hist, true, ChartColor::Purple)),
        );
    }
    output.notice(Notice::text("Most values cluster around the mean (170 cm)."))
}

fn custom_lesson(lesson: &str) -> DemoOutput {
    let output = DemoOutput::new("Paste Your Own Content");
    if lesson.trim().is_empty() {
        return output.notice(Notice::text("Paste your explanation, notes, or example here."));
    }
    output
        .notice(Notice::text("Your Lesson"))
        .notice(Notice::text(lesson))
        .notice(Notice::info(LESSON_BANNER))
}
