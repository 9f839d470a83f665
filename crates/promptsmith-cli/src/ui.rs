//! UI utilities for the CLI

use colored::*;
use crossterm::terminal::size;
use std::io::{self, Write};

use promptsmith_core::{Analysis, InsightKind, Provenance, QualityLevel, Result, RewriteResult};

const BAR_WIDTH: usize = 20;

/// Display startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = terminal_width.saturating_sub(4).clamp(40, 62);
    let inner = banner_width - 2;

    let top_border = format!("┌{}┐", "─".repeat(inner));
    let bottom_border = format!("└{}┘", "─".repeat(inner));
    let empty_line = format!("│{}│", " ".repeat(inner));

    let lines = [
        "Promptsmith",
        "",
        "Scores your LLM prompts on twelve metrics",
        "and rewrites them into a sharper form.",
        "",
        concat!("v", env!("CARGO_PKG_VERSION")),
    ];

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());
    for line in lines {
        if line.is_empty() {
            println!("{}", empty_line.blue());
            continue;
        }
        let padding = " ".repeat(inner.saturating_sub(line.chars().count() + 2));
        let text = if line == "Promptsmith" {
            line.bold().to_string()
        } else if line.starts_with('v') {
            line.dimmed().to_string()
        } else {
            line.to_string()
        };
        println!("{}{}{}{}", "│  ".blue(), text, padding, "│".blue());
    }
    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
    println!(
        "{}",
        "Tip: type a prompt to analyze and optimize it, or 'help' for commands".dimmed()
    );
    println!();
}

pub fn print_help() {
    println!("{}", "Commands".bold());
    println!("  {}        show this help", "help".cyan());
    println!("  {}  leave the session", "exit, quit".cyan());
    println!();
    println!("Anything else is treated as a prompt: it is scored, then rewritten.");
    println!(
        "Remote rewriting needs {} and {}.",
        "PROMPTSMITH_REMOTE=1".yellow(),
        "GEMINI_API_KEY".yellow()
    );
}

/// Print the prompt marker and read one line; `None` at end of input
pub fn read_prompt_line() -> Result<Option<String>> {
    print!("{} ", "promptsmith>".green().bold());
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Fixed-width bar for a 0-100 score
pub fn score_bar(score: u8) -> String {
    let filled = usize::from(score.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn colored_score(score: u8) -> ColoredString {
    let text = format!("{:>3}", score);
    if score >= 70 {
        text.green()
    } else if score >= 50 {
        text.yellow()
    } else {
        text.red()
    }
}

fn colored_quality(quality: QualityLevel) -> ColoredString {
    let text = quality.as_str().to_uppercase();
    match quality {
        QualityLevel::Basic => text.red().bold(),
        QualityLevel::Developing => text.yellow().bold(),
        QualityLevel::Good => text.cyan().bold(),
        QualityLevel::Excellent | QualityLevel::Masterful => text.green().bold(),
    }
}

/// Human-readable analysis report
pub fn format_analysis(analysis: &Analysis) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} (core average {:.1})\n\n",
        "Quality:".bold(),
        colored_quality(analysis.quality),
        analysis.metrics.core_average()
    ));

    out.push_str(&format!("{}\n", "Metrics".bold()));
    for (name, score) in analysis.metrics.iter() {
        let label = if name.is_core() {
            name.as_str().to_string()
        } else {
            format!("{} *", name.as_str())
        };
        out.push_str(&format!(
            "  {:<18} {} {}\n",
            label,
            score_bar(score),
            colored_score(score)
        ));
    }
    out.push_str(&format!("  {}\n\n", "* advisory, not graded".dimmed()));

    let intent = &analysis.intent;
    let context = &analysis.context;
    out.push_str(&format!(
        "{} {:?} (specificity {:?}, format {:?})\n",
        "Intent:".bold(),
        intent.kind,
        intent.specificity,
        intent.format
    ));
    out.push_str(&format!(
        "{} {:?}, tone {:?}, audience {:?}, complexity {:?}\n",
        "Context:".bold(),
        context.domain,
        context.tone,
        context.audience,
        context.complexity
    ));

    if !analysis.insights.is_empty() {
        out.push_str(&format!("\n{}\n", "Insights".bold()));
        for insight in &analysis.insights {
            let marker = match insight.kind {
                InsightKind::General => "•".blue(),
                InsightKind::Targeted => "!".yellow(),
            };
            out.push_str(&format!("  {} [{}] {}\n", marker, insight.icon, insight.message));
        }
    }

    if !analysis.suggestions.is_empty() {
        out.push_str(&format!("\n{}\n", "Suggestions".bold()));
        for suggestion in &analysis.suggestions {
            out.push_str(&format!("  → {}\n", suggestion));
        }
    }

    out
}

/// Human-readable rewrite report
pub fn format_rewrite(result: &RewriteResult) -> String {
    let source = match (&result.provenance, &result.model_id) {
        (Provenance::Remote, Some(model)) => format!("remote, {}", model),
        (provenance, _) => provenance.as_str().to_string(),
    };

    format!(
        "{} {}\n\n{}",
        "Optimized prompt".bold().green(),
        format!("({})", source).dimmed(),
        result.text
    )
}
