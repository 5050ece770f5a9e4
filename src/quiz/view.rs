use crate::bank::{Question, QuestionBank};
use crate::scoring::AnswerSet;
use crate::session::Progress;
use crate::ui::style as ui;

use super::report::ResultReport;

const BAR_WIDTH: usize = 30;

pub fn print_banner(bank: &QuestionBank) {
    println!();
    println!("  {}", ui::header("Food Safety Culture MBTI"));
    println!(
        "  {}",
        ui::dim(
            "An MBTI-style quiz for the food safety culture campaign. \
             Results stay anonymous and are stored only on this machine."
        )
    );
    println!(
        "  {}",
        ui::dim(format!(
            "Answer the following {} questions on a 1-5 scale.",
            bank.len()
        ))
    );
    println!();
}

/// Cells of a `width`-wide bar covered by `fraction`, rounded to whole percent first.
pub fn fill_cells(fraction: f64, width: usize) -> usize {
    let percent = (fraction.clamp(0.0, 1.0) * 100.0).round();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let cells = (percent / 100.0 * width as f64).round() as usize;
    cells.min(width)
}

pub fn render_progress(progress: &Progress) -> String {
    let fraction = if progress.total == 0 {
        0.0
    } else {
        f64::from(progress.percent) / 100.0
    };
    format!(
        "Progress  {}/{} ({}%)  {}",
        progress.answered,
        progress.total,
        progress.percent,
        ui::meter(fill_cells(fraction, BAR_WIDTH), BAR_WIDTH)
    )
}

pub fn print_progress(progress: &Progress) {
    println!();
    println!("  {}", render_progress(progress));
}

pub fn render_question_line(
    question: &Question,
    answers: &AnswerSet,
    bank: &QuestionBank,
) -> String {
    let answer = answers.get(question.id).map_or_else(
        || ui::dim("unanswered"),
        |rating| ui::value(format!("{rating}. {}", bank.scale_label(rating.value()))),
    );
    format!(
        "{} {}  {}",
        ui::dim(format!("{:>2}.", question.id)),
        question.text,
        answer
    )
}

pub fn print_questions(bank: &QuestionBank, answers: &AnswerSet) {
    for question in &bank.items {
        println!("  {}", render_question_line(question, answers, bank));
    }
}

pub fn render_axis_bars(report: &ResultReport) -> Vec<String> {
    report
        .axes
        .iter()
        .map(|axis| {
            format!(
                "{}  {}  {}  {}",
                ui::accent(axis.left),
                ui::meter(fill_cells(axis.position, BAR_WIDTH), BAR_WIDTH),
                ui::accent(axis.right),
                ui::dim(&axis.title)
            )
        })
        .collect()
}

pub fn print_result(report: &ResultReport) {
    println!();
    println!("  {}", ui::dim("─".repeat(50)));
    println!("  {}", ui::header(report.heading()));
    println!("  {}", ui::dim("─".repeat(50)));
    println!();
    for line in render_axis_bars(report) {
        println!("  {line}");
    }
    println!();
    println!("  {}", ui::header("Personality summary"));
    println!("  {}", report.summary);
    println!();
    println!("  {}", ui::header("Food safety culture profile"));
    println!("  {}", report.tip);
    println!();
    println!(
        "  {}",
        ui::dim("This quiz encourages participation in education and campaigns.")
    );
    println!();
}
