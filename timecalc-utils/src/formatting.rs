/// Format a seconds value, dropping the fractional part when it is zero
/// (e.g. 59.0 -> "59", 5.5 -> "5.5").
pub fn format_seconds(seconds: f64) -> String {
    // Adding zero folds -0.0 into 0.0.
    let seconds = seconds + 0.0;
    if seconds.floor() == seconds {
        format!("{:.0}", seconds)
    } else {
        seconds.to_string()
    }
}
