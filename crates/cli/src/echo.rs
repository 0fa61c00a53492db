use std::time::Duration;

use owo_colors::OwoColorize;
use summarify_core::Report;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Summarify".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Summarize web articles and score their sentiment\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print timing information with color coding
pub fn print_timing(label: &str, duration: Duration) {
    let ms = duration.as_secs_f64() * 1000.0;
    let label = format!("{}:", label);

    if ms < 500.0 {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "fast".dimmed());
    } else if ms < 2000.0 {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "moderate".bright_yellow());
    } else {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "slow".bright_red());
    }
}

/// Print article details for verbose mode
pub fn print_report_details(report: &Report) {
    let article = &report.article;

    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Article Details".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!("  {} {}", "URL:".dimmed(), report.url.bright_white());
    if let Some(site) = &article.site_name {
        eprintln!("  {} {}", "Site:".dimmed(), site.bright_white());
    }
    eprintln!("  {} {}", "Words:".dimmed(), article.word_count.to_string().bright_white());
    if !article.keywords.is_empty() {
        eprintln!("  {} {}", "Keywords:".dimmed(), article.keywords.join(", ").bright_white());
    }
    eprintln!(
        "  {} {}\n",
        "Assessments:".dimmed(),
        report.sentiment.assessments.to_string().bright_white()
    );
}
