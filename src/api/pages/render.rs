//! HTML rendering of the recommendation form and its result

use std::fmt::Write;

use crate::domain::{FormOptions, Recommendation, RecommendationInput, NUMERIC_FIELDS};

/// What to show below the form
#[derive(Debug, Clone)]
pub enum Outcome {
    Success(Recommendation),
    Failure(String),
}

const STYLE: &str = "\
body{font-family:sans-serif;max-width:720px;margin:2rem auto;padding:0 1rem;color:#222}\
fieldset{border:1px solid #ddd;border-radius:6px;margin-bottom:1rem}\
label{display:block;margin:.4rem 0}\
input[type=number]{width:12rem}\
button{padding:.5rem 1rem}\
.success{background:#e6f4ea;padding:.8rem;border-radius:6px}\
.error{background:#fdecea;padding:.8rem;border-radius:6px}\
.info{background:#e8f0fe;padding:.8rem;border-radius:6px}\
.tip{display:flex;gap:1rem;align-items:flex-start}";

/// Escape text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Render the full page: title, form pre-filled with `input`, optional outcome
pub fn render_page(
    options: &FormOptions,
    input: &RecommendationInput,
    outcome: Option<&Outcome>,
) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Fertilizer Recommendation System</title>\n");
    let _ = writeln!(html, "<style>{}</style>", STYLE);
    html.push_str("</head>\n<body>\n");
    html.push_str("<h1>🌾 Fertilizer Recommendation System</h1>\n");
    html.push_str(
        "<p>Provide soil and crop details to get the best fertilizer recommendation for higher yield.</p>\n",
    );

    render_form(&mut html, options, input);

    if let Some(outcome) = outcome {
        render_outcome(&mut html, outcome);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, options: &FormOptions, input: &RecommendationInput) {
    html.push_str("<form id=\"fertilizer_form\" method=\"post\" action=\"/\">\n");

    render_choice(
        html,
        "soil_color",
        "Select Soil Color",
        &options.soil_colors,
        &input.soil_color,
    );

    for (field, (_, value)) in NUMERIC_FIELDS.iter().zip(input.numeric_values()) {
        let _ = write!(
            html,
            "<label>{label} <input type=\"number\" name=\"{name}\" min=\"{min}\" step=\"{step}\" value=\"{value}\"",
            label = escape_html(field.label),
            name = field.name,
            min = field.min,
            step = field.step,
            value = value,
        );
        if let Some(max) = field.max {
            let _ = write!(html, " max=\"{}\"", max);
        }
        html.push_str(" required></label>\n");
    }

    render_choice(html, "crop", "Select Crop", &options.crops, &input.crop);

    html.push_str("<button type=\"submit\">Get Fertilizer Recommendation</button>\n</form>\n");
}

fn render_choice(html: &mut String, name: &str, legend: &str, choices: &[String], selected: &str) {
    let _ = writeln!(html, "<fieldset><legend>{}</legend>", escape_html(legend));

    for choice in choices {
        let checked = if choice == selected { " checked" } else { "" };
        let choice = escape_html(choice);
        let _ = writeln!(
            html,
            "<label><input type=\"radio\" name=\"{name}\" value=\"{choice}\"{checked} required> {choice}</label>",
        );
    }

    html.push_str("</fieldset>\n");
}

fn render_outcome(html: &mut String, outcome: &Outcome) {
    html.push_str("<section id=\"result\">\n");

    match outcome {
        Outcome::Success(recommendation) => {
            let _ = writeln!(
                html,
                "<p class=\"success\">✅ Recommended Fertilizer: <strong>{}</strong></p>",
                escape_html(&recommendation.fertilizer)
            );
            html.push_str("<hr>\n<h2>🌟 Fertilizer Usage Tips</h2>\n");

            let advice = &recommendation.advice;
            match (advice.tip(), advice.image()) {
                (Some(tip), Some(image)) => {
                    let _ = writeln!(
                        html,
                        "<div class=\"tip\"><img src=\"/{image}\" alt=\"{alt}\" width=\"120\"><p class=\"info\">{tip}</p></div>",
                        image = escape_html(image),
                        alt = escape_html(&recommendation.fertilizer),
                        tip = escape_html(tip),
                    );
                }
                _ => {
                    let message = advice.fallback_message().unwrap_or_default();
                    let _ = writeln!(html, "<p class=\"info\">{}</p>", escape_html(message));
                }
            }
        }
        Outcome::Failure(message) => {
            let _ = writeln!(html, "<p class=\"error\">❌ {}</p>", escape_html(message));
        }
    }

    html.push_str("</section>\n");
}
