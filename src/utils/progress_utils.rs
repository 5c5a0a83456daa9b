use indicatif::{ProgressBar, ProgressStyle};

/// Builds the bar used by every long-running step. `None` if the style template is rejected.
pub fn progress_bar(len: u64, msg: String) -> Option<ProgressBar> {
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise} / {eta_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
        .ok()?
        .progress_chars("##-");

    let bar = ProgressBar::new(len);
    bar.set_style(style);
    bar.set_message(msg);

    Some(bar)
}
