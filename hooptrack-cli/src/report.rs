//! Styled terminal output for analysis and evaluation results.

use console::style;
use hooptrack_core::utils::format_percent;
use hooptrack_core::{EvaluationResult, MatchReport, Session};

/// Prints the headline result of an analysis run.
pub fn print_box_score(session: &Session) {
    println!();
    println!("{}", style("ANALYSIS COMPLETE").bold());
    println!("  Session:    {}", style(&session.session_id).cyan());
    println!("  Classifier: {}", session.classifier_used);
    println!("  Detections: {}", session.total_detections);
    println!();
    println!("{}", style("BOX SCORE").bold());
    for (stat, count) in session.stats.iter() {
        println!("  {stat:<10} {count}");
    }
    println!();
}

/// Prints the detailed evaluation report: overall score, detection metrics,
/// per-event matching detail, and the stats comparison.
pub fn print_evaluation_report(
    video_name: &str,
    session: &Session,
    result: &EvaluationResult,
    report: &MatchReport,
) {
    let rule = "=".repeat(64);

    println!();
    println!("{rule}");
    println!("{}", style("EVALUATION REPORT").bold());
    println!("{rule}");
    println!("Video:   {video_name}");
    println!("Session: {}", session.session_id);
    println!();
    println!(
        "OVERALL SCORE: {}",
        style(format_percent(result.overall_score)).bold().cyan()
    );
    println!();
    println!("{}", style("DETECTION METRICS").bold());
    println!("  Precision:  {}", format_percent(result.precision));
    println!("  Recall:     {}", format_percent(result.recall));
    println!("  F1 Score:   {}", format_percent(result.f1_score));

    println!();
    println!(
        "{} {}",
        style("TRUE POSITIVES:").green().bold(),
        result.matrix.true_positives
    );
    for tp in &report.matches {
        println!(
            "  - {}: expected {:.2}s, detected {:.2}s (error {:.2}s)",
            tp.event_type, tp.expected_time, tp.actual_time, tp.time_error
        );
    }

    println!();
    println!(
        "{} {}",
        style("FALSE POSITIVES:").red().bold(),
        result.matrix.false_positives
    );
    for fp in &report.false_positives {
        println!("  - {} at {:.2}s (no matching ground truth)", fp.event_type, fp.timestamp);
    }

    println!();
    println!(
        "{} {}",
        style("FALSE NEGATIVES:").yellow().bold(),
        result.matrix.false_negatives
    );
    for missed in &report.false_negatives {
        println!(
            "  - {} at {:.2}s (missed detection)",
            missed.event_type, missed.expected_time
        );
    }

    println!();
    println!(
        "{} {}",
        style("STATS ACCURACY:").bold(),
        format_percent(result.stats_accuracy)
    );
    println!("{rule}");
    println!();
}

/// Prints one line per stored session for the listing command.
pub fn print_session_line(session: &Session) {
    let evaluated = match &session.evaluation {
        Some(eval) => format!("evaluated {}", format_percent(eval.overall_score)),
        None => "not evaluated".to_string(),
    };
    println!(
        "{}  {}  {:<12}  {}  ({evaluated})",
        style(&session.session_id).cyan(),
        session.timestamp,
        session.classifier_used,
        session.stats
    );
}
