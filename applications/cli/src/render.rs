/// Report rendering for the terminal
use loudcheck_analysis::LoudnessReport;

/// Human-readable report, one line per detector that ran
pub fn render_text(report: &LoudnessReport) -> String {
    let mut out = String::new();
    if let Some(count) = report.peak_windows_over {
        out.push_str(&format!("Number of peaks above threshold: {}\n", count));
    }
    if let Some(over) = report.average_over {
        out.push_str(&format!(
            "Average volume exceeds threshold? {}\n",
            if over { "yes" } else { "no" }
        ));
    }
    if let Some(count) = report.sudden_rises {
        out.push_str(&format!("Number of sudden volume rises: {}\n", count));
    }
    out
}

/// Machine-readable verdict: `1` when any detector flagged the input
pub fn render_boolean(report: &LoudnessReport) -> &'static str {
    if report.exceeds_any() {
        "1"
    } else {
        "0"
    }
}

pub fn render_json(report: &LoudnessReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
