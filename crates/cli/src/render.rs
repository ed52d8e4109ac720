//! Terminal rendering of engine views

use async_trait::async_trait;
use colored::{ColoredString, Colorize};
use lineless_core::domain::{Notice, NoticeSeverity, QueueEntry, QueueStatus, StatusReport, Token};
use lineless_core::port::StatusNotifier;
use tabled::{Table, Tabled};

const PROGRESS_BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct BoardRow {
    #[tabled(rename = "Token")]
    token: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&QueueEntry> for BoardRow {
    fn from(entry: &QueueEntry) -> Self {
        Self {
            token: entry.identifier.clone(),
            status: entry.label.clone(),
        }
    }
}

pub fn print_departments(departments: &[String]) {
    println!("{}", "Departments".cyan().bold());
    for department in departments {
        println!("  {} {}", "•".bold(), department);
    }
}

pub fn print_board(entries: &[QueueEntry]) {
    println!("{}", "Live Queue".cyan().bold());
    println!();

    let rows: Vec<BoardRow> = entries.iter().map(BoardRow::from).collect();
    println!("{}", Table::new(rows));
}

pub fn print_token(token: &Token) {
    println!("  {} {}", "Token:".bold(), token.number.to_string().cyan().bold());
    println!("  {} {}", "Department:".bold(), token.department);
    println!("  {} {}", "Name:".bold(), token.holder_name);
}

pub fn print_report(report: &StatusReport) {
    println!();
    println!("  {} {}", "Now Serving:".bold(), report.now_serving);
    if let Some(token) = &report.token {
        println!("  {} {}", "Your Token:".bold(), token);
    }
    println!("  {} {}", "People Ahead:".bold(), report.people_ahead);
    println!(
        "  {} ~{} min",
        "Wait Time:".bold(),
        report.estimated_wait_minutes
    );
    println!(
        "  {} {} {:.0}%",
        "Progress:".bold(),
        progress_bar(report.progress_percent),
        report.progress_percent
    );
    println!("  {}", status_colored(report.status, &report.message));
}

pub fn print_notice(notice: &Notice) {
    let marker = match notice.severity {
        NoticeSeverity::Success => "✓".green().bold(),
        NoticeSeverity::Warning => "!".yellow().bold(),
        NoticeSeverity::Danger => "✗".red().bold(),
    };
    println!("{} {}", marker, notice.text.bold());
}

fn status_colored(status: QueueStatus, text: &str) -> ColoredString {
    match status {
        QueueStatus::Relax => text.green(),
        QueueStatus::Soon => text.yellow(),
        QueueStatus::Now | QueueStatus::Missed => text.red().bold(),
    }
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

/// Notifier that prints notices to the terminal
pub struct ConsoleNotifier;

#[async_trait]
impl StatusNotifier for ConsoleNotifier {
    async fn notify(&self, notice: Notice) {
        print_notice(&notice);
    }
}
