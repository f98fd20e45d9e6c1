pub mod formatter;

pub use formatter::{
    format_json, format_marks, format_score, format_scorecard, should_use_colors,
};
