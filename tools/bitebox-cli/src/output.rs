//! Output formatting for the CLI.

use bitebox_commerce::checkout::OrderStatus;
use bitebox_commerce::prelude::{CartSnapshot, Money};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print the floating cart badge: item count and running total.
    pub fn cart_badge(&self, snapshot: &CartSnapshot) {
        if self.json {
            return;
        }
        println!(
            "  {} {}",
            style("🛒").dim(),
            style(badge_text(snapshot)).cyan()
        );
    }

    /// Print the cart contents as a table with a total line.
    pub fn cart_table(&self, snapshot: &CartSnapshot) {
        if self.json {
            return;
        }
        if snapshot.is_empty() {
            self.info("Your cart is empty.");
            return;
        }
        self.table_row(&["ITEM", "QTY", "PRICE"], &[32, 5, 10]);
        self.info(&"-".repeat(52));
        for item in &snapshot.items {
            self.table_row(
                &[
                    &item.name,
                    &format!("x {}", item.quantity),
                    &item.line_total().to_string(),
                ],
                &[32, 5, 10],
            );
        }
        self.info("");
        self.kv("Total", &money(snapshot.total_price));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Badge text, e.g. "3 items · ₹620".
pub fn badge_text(snapshot: &CartSnapshot) -> String {
    let noun = if snapshot.total_items == 1 { "item" } else { "items" };
    format!("{} {} · {}", snapshot.total_items, noun, snapshot.total_price)
}

/// Bold amount.
pub fn money(amount: Money) -> String {
    style(amount.to_string()).bold().to_string()
}

/// Colored order status.
pub fn status_badge(status: OrderStatus) -> String {
    let name = status.display_name();
    match status {
        OrderStatus::Delivered => style(name).green().to_string(),
        OrderStatus::Placed | OrderStatus::Preparing | OrderStatus::OutForDelivery => {
            style(name).yellow().to_string()
        }
        OrderStatus::Cancelled => style(name).red().to_string(),
    }
}
