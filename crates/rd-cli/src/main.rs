//! revdash - Review Analytics Dashboard CLI
//!
//! Compares three product brands by customer review ratings and keyword
//! frequency, with a terminal dashboard and plain-text reports.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a starter configuration
//! revdash config init
//!
//! # Launch the interactive dashboard
//! revdash dash
//!
//! # Print the brand comparison
//! revdash summary
//!
//! # Export the full analysis
//! revdash report --format markdown -o report.md
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
