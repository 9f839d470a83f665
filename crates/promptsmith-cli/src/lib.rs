//! Terminal presentation for Promptsmith

mod report;
mod ui;


pub use report::Report;
pub use ui::{
    display_banner, format_analysis, format_rewrite, print_help, read_prompt_line, score_bar,
};

// Re-export core types
pub use promptsmith_core::{Error, Result};
