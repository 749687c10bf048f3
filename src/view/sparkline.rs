//! Sparkline geometry in a 100x100 viewbox

/// Plot coordinates for a short series.
///
/// x spans 0..=100; y is inverted so larger values sit higher, with a 10
/// unit margin top and bottom. A flat series is drawn at the bottom margin.
pub fn sparkline_points(values: &[f64]) -> Vec<(f64, f64)> {
    let Some(max) = values.iter().copied().reduce(f64::max) else {
        return Vec::new();
    };
    let min = values.iter().copied().fold(max, f64::min);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let steps = values.len().saturating_sub(1).max(1) as f64;

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 / steps * 100.0;
            let y = 100.0 - (v - min) / range * 80.0 - 10.0;
            (x, y)
        })
        .collect()
}

/// Unicode block rendering for terminal output
pub fn blocks(values: &[f64]) -> String {
    const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    sparkline_points(values)
        .iter()
        .map(|(_, y)| {
            // y runs from 90 (lowest) to 10 (highest)
            let level = ((90.0 - y) / 80.0 * 7.0).round().clamp(0.0, 7.0) as usize;
            LEVELS[level]
        })
        .collect()
}
