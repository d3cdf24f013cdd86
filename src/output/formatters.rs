//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a collision score; a full bar means a perfect split
#[must_use]
pub fn score_bar(score: f64, width: usize) -> String {
    create_progress_bar(1.0 - score, 1.0, width)
}

/// Histogram bar length, never zero for a non-empty bucket
#[must_use]
pub fn histogram_width(count: usize, max_count: usize, width: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    (count * width / max_count).max(usize::from(count > 0))
}

/// Share of `part` in `total` as a percentage
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
