//! HTML rendering for the drafting page.
//!
//! The whole page is redrawn on every interaction from the current field values
//! and the outcome of the last submit.

use crate::drafting::generator::GenerationResult;

pub const PAGE_TITLE: &str = "Official Document Generator for Teachers";
pub const MISSING_KEY_BANNER: &str =
    "OpenAI API key not found. Check the '.env' file or the OPENAI_API_KEY environment variable.";
pub const EMPTY_TOPIC_WARNING: &str = "Please enter a topic first.";
pub const LOADING_MESSAGE: &str = "Drafting the document body... please wait.";
pub const RESULT_HEADING: &str = "Generated document body";

const TOPIC_LABEL: &str =
    "Enter the topic of the official document to generate (e.g. Field trip notice for grade 1)";
const TOPIC_PLACEHOLDER: &str =
    "e.g. School violence prevention education for the 2nd semester of 2025";
const INFO_LABEL: &str = "Additional information to include in the body (optional)";
const INFO_PLACEHOLDER: &str = "e.g. Date, place, target audience and other details";
const SUBMIT_LABEL: &str = "Generate document body";
const DOWNLOAD_LABEL: &str = "Download as text file";

/// What the last interaction produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Nothing submitted yet.
    Idle,
    /// Submit was rejected before any generation call.
    Warning(&'static str),
    /// A generation call returned; both result variants render the same way.
    Displayed(GenerationResult),
}

/// Everything needed to draw one page.
#[derive(Debug)]
pub struct PageView<'a> {
    pub generation_enabled: bool,
    pub topic: &'a str,
    pub additional_info: &'a str,
    pub state: FormState,
}

pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<main>
<h1>&#128196; {title}</h1>
<hr>
"#,
        title = escape_html(PAGE_TITLE),
    ));

    if !view.generation_enabled {
        html.push_str(&alert("error", MISSING_KEY_BANNER));
    }

    html.push_str(&format!(
        r#"<form id="draft-form" method="post" action="/generate">
<label for="topic"><strong>{topic_label}</strong></label>
<input type="text" id="topic" name="topic" placeholder="{topic_placeholder}" value="{topic}">
<label for="additional_info"><strong>{info_label}</strong></label>
<textarea id="additional_info" name="additional_info" placeholder="{info_placeholder}" style="height: 100px">{info}</textarea>
<button type="submit" class="primary">&#128640; {submit}</button>
</form>
<div id="loading" class="spinner" hidden>{loading}</div>
"#,
        topic_label = escape_html(TOPIC_LABEL),
        topic_placeholder = escape_html(TOPIC_PLACEHOLDER),
        topic = escape_html(view.topic),
        info_label = escape_html(INFO_LABEL),
        info_placeholder = escape_html(INFO_PLACEHOLDER),
        info = escape_html(view.additional_info),
        submit = escape_html(SUBMIT_LABEL),
        loading = escape_html(LOADING_MESSAGE),
    ));

    match &view.state {
        FormState::Idle => {}
        FormState::Warning(message) => html.push_str(&alert("warning", message)),
        FormState::Displayed(result) => {
            html.push_str(&render_result(view.topic, result.as_text()))
        }
    }

    html.push_str(&format!(
        r#"</main>
<script>{SCRIPT}</script>
</body>
</html>
"#
    ));

    html
}

fn alert(kind: &str, message: &str) -> String {
    format!(
        "<div class=\"alert {kind}\" role=\"alert\">{}</div>\n",
        escape_html(message)
    )
}

fn render_result(topic: &str, text: &str) -> String {
    format!(
        r#"<hr>
<h2>&#9989; {heading}</h2>
<pre class="result"><code class="language-text">{text}</code></pre>
<form method="post" action="/download">
<input type="hidden" name="topic" value="{topic}">
<input type="hidden" name="text" value="{text}">
<button type="submit">&#128196; {download}</button>
</form>
"#,
        heading = escape_html(RESULT_HEADING),
        text = escape_html(text),
        topic = escape_html(topic),
        download = escape_html(DOWNLOAD_LABEL),
    )
}

/// Escapes text for element content and double-quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Keeps line breaks intact inside hidden inputs.
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:sans-serif;margin:0;background:#fff;color:#31333f}\
main{max-width:730px;margin:0 auto;padding:3rem 1rem}\
label{display:block;margin:1rem 0 .25rem}\
input[type=text],textarea{width:100%;box-sizing:border-box;padding:.5rem;font:inherit}\
button{margin-top:1rem;padding:.5rem 1rem;font:inherit;cursor:pointer}\
button.primary{width:100%;background:#ff4b4b;color:#fff;border:none;border-radius:.5rem}\
.alert{margin:1rem 0;padding:1rem;border-radius:.5rem}\
.alert.error{background:#ffe0e0}.alert.warning{background:#fff7d6}\
.spinner{margin:1rem 0}\
pre.result{background:#f0f2f6;padding:1rem;border-radius:.5rem;white-space:pre-wrap}";

// Shows the busy indicator and blocks a second submit until the response page arrives.
const SCRIPT: &str = "document.getElementById('draft-form').addEventListener('submit',function(){\
document.getElementById('loading').hidden=false;\
this.querySelector('button[type=submit]').disabled=true;});";
