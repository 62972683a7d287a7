//! Calculator form page

use super::theme::DisplayMode;
use calorie_advisor_shared::advice::PROGRESS_CAPTION;
use calorie_advisor_shared::validation::get_field_display_label;
use calorie_advisor_shared::{ActivityLevel, CalculateRequest, CalculationResponse, Gender, Goal, Severity};
use std::fmt::Write;

/// Message shown when a submission fails validation
pub const INVALID_INPUT_MESSAGE: &str = "Please ensure all inputs are within the specified ranges.";

/// What to show below the form
#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    /// Nothing submitted yet
    Prompt,
    Results(&'a CalculationResponse),
    /// Validation failed, optionally naming the offending field
    Invalid { field: Option<&'a str> },
}

/// Everything the page needs to render
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub title: &'a str,
    pub mode: DisplayMode,
    /// Previously submitted values, used to refill the form
    pub form: Option<&'a CalculateRequest>,
    pub outcome: Outcome<'a>,
}

/// Render the full HTML page
pub fn render_page(view: &PageView<'_>) -> String {
    let title = escape_html(view.title);
    let mut html = String::with_capacity(8 * 1024);

    // Writing into a String cannot fail
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en" data-mode="{mode}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{css}
</style>
</head>
<body>
<main>
<h1>{title}</h1>
<h3>Unlock personalized insights into your daily energy needs and health goals</h3>
<hr>
"#,
        mode = view.mode.as_str(),
        title = title,
        css = view.mode.stylesheet(),
    );

    render_form(&mut html, view);

    match view.outcome {
        Outcome::Prompt => html.push_str(
            "<p class=\"info\">Fill in your details above and click <strong>Calculate My Calories</strong> to get started!</p>\n",
        ),
        Outcome::Invalid { field } => {
            let _ = write!(html, "<p class=\"error\">{}", INVALID_INPUT_MESSAGE);
            if let Some(field) = field {
                let _ = write!(html, "<br><small>Check: {}</small>", get_field_display_label(field));
            }
            html.push_str("</p>\n");
        }
        Outcome::Results(response) => render_results(&mut html, response),
    }

    let _ = write!(
        html,
        r#"<hr>
<footer>
<p><a href="/?mode={toggle}">Switch to {toggle_label}</a></p>
<small>Built with LIFT HEALTHY | {mode_label} Enabled | Formula: Harris-Benedict BMR + Activity Multipliers + Goal Adjustments</small><br>
<small>For informational purposes only. Consult a healthcare professional for personalized advice.</small>
</footer>
</main>
</body>
</html>
"#,
        toggle = view.mode.toggled().as_str(),
        toggle_label = view.mode.toggled().label(),
        mode_label = view.mode.label(),
    );

    html
}

fn render_form(html: &mut String, view: &PageView<'_>) {
    let (gender, age, height, weight, activity, goal) = match view.form {
        Some(f) => (f.gender, f.age, f.height_cm, f.weight_kg, f.activity_level, f.goal),
        None => (Gender::Male, 30, 170.0, 70.0, ActivityLevel::default(), Goal::default()),
    };

    html.push_str("<form method=\"post\" action=\"/\">\n<h4>Enter Your Details</h4>\n<div class=\"columns\">\n<div>\n");

    html.push_str("<label for=\"gender\">Gender</label>\n<select id=\"gender\" name=\"gender\">\n");
    for g in Gender::ALL {
        push_option(html, g.as_str(), g.label(), g == gender);
    }
    html.push_str("</select>\n");

    let _ = writeln!(
        html,
        "<label for=\"age\">Age (years)</label>\n<input id=\"age\" name=\"age\" type=\"number\" min=\"15\" max=\"100\" step=\"1\" value=\"{}\" required>",
        age
    );

    html.push_str("<label for=\"activity_level\">Activity Level</label>\n<select id=\"activity_level\" name=\"activity_level\">\n");
    for level in ActivityLevel::ALL {
        let text = format!("{}: {}", level.label(), level.description());
        push_option(html, level.as_str(), &text, level == activity);
    }
    html.push_str("</select>\n</div>\n<div>\n");

    let _ = writeln!(
        html,
        "<label for=\"height_cm\">Height (cm)</label>\n<input id=\"height_cm\" name=\"height_cm\" type=\"number\" min=\"100\" max=\"250\" step=\"0.1\" value=\"{}\" required>",
        height
    );
    let _ = writeln!(
        html,
        "<label for=\"weight_kg\">Weight (kg)</label>\n<input id=\"weight_kg\" name=\"weight_kg\" type=\"number\" min=\"30\" max=\"200\" step=\"0.1\" value=\"{}\" required>",
        weight
    );

    html.push_str("<label for=\"goal\">Goal</label>\n<select id=\"goal\" name=\"goal\">\n");
    for g in Goal::ALL {
        push_option(html, g.as_str(), g.label(), g == goal);
    }
    html.push_str("</select>\n</div>\n</div>\n");

    let _ = writeln!(
        html,
        "<input type=\"hidden\" name=\"mode\" value=\"{}\">\n<button type=\"submit\">Calculate My Calories</button>\n</form>",
        view.mode.as_str()
    );
}

fn push_option(html: &mut String, value: &str, text: &str, selected: bool) {
    let selected = if selected { " selected" } else { "" };
    let _ = writeln!(html, "<option value=\"{}\"{}>{}</option>", value, selected, text);
}

fn render_results(html: &mut String, r: &CalculationResponse) {
    let _ = write!(
        html,
        r#"<section id="results">
<h3>Your Personalized Results</h3>
<p class="success"><strong>{headline} Calorie Target:</strong> {target:.0} kcal/day</p>
<p class="info"><strong>Maintenance Calories:</strong> {maintenance:.0} kcal/day (BMR: {bmr:.0} kcal/day)</p>
<p class="info"><strong>Your BMI:</strong> {bmi:.1} ({band})</p>
<progress value="{progress:.2}" max="1"></progress>
<p><small>{caption}</small></p>
<h4>Personalized Advice</h4>
<p class="{severity}">{bmi_advice}</p>
<ul><li>{goal_advice}</li></ul>
<p><small>Tip: {tip}</small></p>
</section>
"#,
        headline = r.goal_headline,
        target = r.target_calories,
        maintenance = r.maintenance_calories,
        bmr = r.bmr,
        bmi = r.bmi,
        band = r.bmi_band.description(),
        progress = r.progress_fraction,
        caption = PROGRESS_CAPTION,
        severity = severity_class(r.bmi_advice.severity),
        bmi_advice = r.bmi_advice.message,
        goal_advice = r.goal_advice,
        tip = r.tip,
    );
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "success",
        Severity::Info => "info",
        Severity::Warning => "warning",
        Severity::Error => "error",
    }
}

/// Escape text for inclusion in HTML content or attribute values
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
