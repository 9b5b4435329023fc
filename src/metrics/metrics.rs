use std::collections::HashSet;
use std::fmt::Write;
use crate::collector::structs::sample::Sample;

pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Renders samples in the Prometheus text format.
///
/// Headers are written the first time a family shows up; samples of one
/// family are expected to be adjacent, which is how the collector emits them.
pub fn metrics_render_samples(samples: &[Sample]) -> String
{
    let mut string_output = String::new();
    let mut described: HashSet<&str> = HashSet::new();

    for sample in samples {
        if described.insert(sample.name.as_str()) {
            string_output.push_str(&metrics_generate_header(&sample.name, sample.kind.as_str(), &sample.help));
        }
        string_output.push_str(&metrics_generate_line(&sample.name, &sample.labels, sample.value));
    }

    string_output
}

pub fn metrics_generate_header(name: &str, kind: &str, help: &str) -> String
{
    format!("# HELP {} {}\n# TYPE {} {}\n", name, metrics_escape_help(help), name, kind)
}

pub fn metrics_generate_line(name: &str, labels: &[(String, String)], value: f64) -> String
{
    if labels.is_empty() {
        return format!("{} {}\n", name, metrics_format_value(value));
    }

    let mut line = String::with_capacity(name.len() + 32);
    line.push_str(name);
    line.push('{');
    for (index, (label, label_value)) in labels.iter().enumerate() {
        if index > 0 {
            line.push(',');
        }
        let _ = write!(line, "{}=\"{}\"", label, metrics_escape_label_value(label_value));
    }
    let _ = writeln!(line, "}} {}", metrics_format_value(value));
    line
}

/// Whole numbers are written without a fractional part.
pub fn metrics_format_value(value: f64) -> String
{
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "+Inf" } else { "-Inf" });
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{value}")
}

pub fn metrics_escape_label_value(value: &str) -> String
{
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn metrics_escape_help(help: &str) -> String
{
    help.replace('\\', "\\\\").replace('\n', "\\n")
}
