use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{prefix} [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})";

/// Console progress bar advancing once per written sample.
pub fn progress_bar(count: usize) -> ProgressBar {
    let style = ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    let pb = ProgressBar::new(count as u64);
    pb.set_style(style);
    pb.set_prefix("samples");
    pb
}
