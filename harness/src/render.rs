//! Text rendering of a plan for the display collaborator.

use glucopath_kernel::state::HealthStateV1;

/// Headline when a path reached the target.
pub const PATH_FOUND_MESSAGE: &str = "Health improvement path found!";

/// Headline when the search ended without a path.
pub const NO_PATH_MESSAGE: &str = "No valid path to improve health.";

/// Significant digits kept when displaying a metric.
const DISPLAY_SIGNIFICANT_DIGITS: usize = 10;

/// One display line for a state.
#[must_use]
pub fn render_state_line(state: &HealthStateV1) -> String {
    format!(
        "BMI: {}, Age: {}, Activity: {}, Blood Sugar: {}",
        display_metric(state.bmi),
        state.age,
        display_metric(state.activity_score),
        display_metric(state.blood_sugar)
    )
}

/// Shortest form of `value` after dropping accumulated float noise.
///
/// Rounds to [`DISPLAY_SIGNIFICANT_DIGITS`] significant digits, so
/// `118.20000000000002` shows as `118.2` while `120.04` stays `120.04`.
#[must_use]
pub fn display_metric(value: f64) -> String {
    let rounded = format!("{value:.prec$e}", prec = DISPLAY_SIGNIFICANT_DIGITS - 1)
        .parse::<f64>()
        .unwrap_or(value);
    format!("{rounded:?}")
}

/// One line per path state, start first.
#[must_use]
pub fn render_path_lines(path: &[HealthStateV1]) -> Vec<String> {
    path.iter().map(render_state_line).collect()
}

/// Headline followed by the path lines, newline terminated.
///
/// `None` renders only the no-path headline.
#[must_use]
pub fn render_plan_text(path: Option<&[HealthStateV1]>) -> String {
    let mut out = String::new();
    match path {
        Some(states) => {
            out.push_str(PATH_FOUND_MESSAGE);
            out.push('\n');
            for line in render_path_lines(states) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        None => {
            out.push_str(NO_PATH_MESSAGE);
            out.push('\n');
        }
    }
    out
}
