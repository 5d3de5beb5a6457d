use std::fmt::Write;

use crate::demo::{DemoOutput, SynthesisParams, SLIDERS};
use crate::ui::HeroImage;

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 72rem; padding: 1.5rem; background: #f7f7fb; color: #1f2330; }
.hero img { max-width: 100%; border-radius: 0.5rem; }
.row { display: flex; gap: 1.5rem; align-items: flex-start; }
.col-2 { flex: 2; } .col-3 { flex: 3; }
label { display: block; font-weight: 600; margin: 0.75rem 0 0.25rem; }
textarea, input[type=text] { width: 100%; box-sizing: border-box; padding: 0.5rem; border: 1px solid #c9ccd8; border-radius: 0.4rem; font: inherit; }
input[type=range] { width: 80%; }
details { margin-top: 1rem; }
button { margin-top: 1rem; padding: 0.6rem 1.2rem; border: 0; border-radius: 0.4rem; background: #ff7c00; color: white; font-weight: 600; cursor: pointer; }
";

/// Render the whole page. `output` is `None` until the form has been submitted.
pub fn render_page(
    title: &str,
    hero: Option<&HeroImage>,
    params: &SynthesisParams,
    output: Option<&DemoOutput>,
) -> String {
    let mut html = String::new();
    let (explanation, config) = output
        .map(|o| (o.explanation.as_str(), o.config.as_str()))
        .unwrap_or_default();

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{title} (Demo)</h1>\n",
        title = escape(title),
    );

    if let Some(hero) = hero {
        let _ = write!(
            html,
            "<div class=\"hero\"><label>Model card screenshot</label><img src=\"{}\" alt=\"Model card screenshot\"></div>\n",
            escape(&hero.url)
        );
    }

    html.push_str("<form method=\"post\" action=\"/\" class=\"row\">\n<div class=\"col-2\">\n");
    let _ = write!(
        html,
        "<label for=\"text\">English text to synthesize</label>\n<textarea id=\"text\" name=\"text\" rows=\"6\">{}</textarea>\n",
        escape(&params.text)
    );
    let _ = write!(
        html,
        "<label for=\"speaker_hint\">Speaker hint (optional)</label>\n<input type=\"text\" id=\"speaker_hint\" name=\"speaker_hint\" value=\"{}\">\n",
        escape(&params.speaker_hint)
    );

    html.push_str("<details>\n<summary>Advanced parameters</summary>\n");
    for slider in &SLIDERS {
        let value = params.slider_value(slider);
        let _ = write!(
            html,
            "<label for=\"{name}\">{label}</label>\n<input type=\"range\" id=\"{name}\" name=\"{name}\" min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{value}\" oninput=\"this.nextElementSibling.value = this.value\"> <output>{value}</output>\n",
            name = slider.name,
            label = slider.label,
            min = slider.min,
            max = slider.max,
            step = slider.step,
            value = value,
        );
    }
    html.push_str("</details>\n<button type=\"submit\">Run streaming TTS (demo)</button>\n</div>\n");

    let _ = write!(
        html,
        "<div class=\"col-3\">\n<label for=\"explanation\">Generation process (textual description)</label>\n<textarea id=\"explanation\" rows=\"12\" readonly>{}</textarea>\n<label for=\"config\">Configuration summary</label>\n<textarea id=\"config\" rows=\"8\" readonly>{}</textarea>\n</div>\n</form>\n</body>\n</html>\n",
        escape(explanation),
        escape(config)
    );

    html
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
