//! HTML rendering for the three pages.
//!
//! Pages are plain server-rendered HTML; every dynamic string passes
//! through [`escape`].

use std::fmt::Write as _;

use crate::consent::terms::{CHECKBOX_LABEL, CONSENT_POINTS, CONSENT_PREAMBLE, CONSENT_TITLE};
use crate::pages::Page;
use crate::skills::SelectionView;

const APP_TITLE: &str = "Bhartee AI";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem}\
h1{text-align:center}\
.card{border:1px solid #ddd;border-radius:12px;padding:1.5rem;margin-top:1.5rem}\
.chips{display:flex;flex-wrap:wrap;gap:.5rem;margin:.5rem 0}\
.chips form{display:inline}\
.chip{border-radius:999px;padding:.35rem .9rem;cursor:pointer;border:1px solid}\
.chip:hover{opacity:.75}\
.chip.selected{background:#e6f6ec;border-color:#2f9e58}\
.chip.unselected{background:#f2f2f2;border-color:#999}\
.actions{display:flex;gap:.5rem;justify-content:flex-end}\
.alert{background:#fff4e5;border:1px solid #f0a020;border-radius:8px;padding:.75rem;margin:1rem 0}\
.row{display:flex;gap:1rem}\
.row label{flex:1;display:flex;flex-direction:column}\
.consent{white-space:pre-line;line-height:1.8;text-align:justify}";

/// Escape text for HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Visible alert box plus a blocking browser alert with the same text.
fn alert(message: &str) -> String {
    // Markup characters only occur inside the string literal, so unicode
    // escapes keep the script block free of `</script>` and `<!--`
    let js = serde_json::to_string(message)
        .unwrap_or_default()
        .replace('&', "\\u0026")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e");
    format!(
        "<div class=\"alert\" role=\"alert\">{}</div><script>window.alert({js});</script>",
        escape(message)
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} · {APP_TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

fn chip_form(action: &str, item: &str, class: &str, icon: &str) -> String {
    format!(
        "<form method=\"post\" action=\"/skills/{action}\">\
         <input type=\"hidden\" name=\"item\" value=\"{item}\">\
         <button type=\"submit\" class=\"chip {class}\">{item} {icon}</button></form>",
        item = escape(item)
    )
}

fn action_button(action: &str, label: &str) -> String {
    format!(
        "<form method=\"post\" action=\"/skills/{action}\">\
         <button type=\"submit\">{label}</button></form>"
    )
}

/// The "Area of Focus" widget: heading with count, bulk actions, selected
/// chips, a divider, then unselected chips.
pub fn skills_widget(view: &SelectionView) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<section id=\"skills\"><h3>Area of Focus ({})</h3><div class=\"actions\">{}{}{}</div>",
        view.count,
        action_button("all", "Add All"),
        action_button("clear", "Clear All"),
        action_button("shuffle", "Shuffle"),
    );

    html.push_str("<div class=\"chips\" id=\"selected\">");
    for item in &view.selected {
        html.push_str(&chip_form("remove", item, "selected", "&#x2715;"));
    }
    html.push_str("</div><hr><div class=\"chips\" id=\"unselected\">");
    for item in &view.unselected {
        html.push_str(&chip_form("add", item, "unselected", "&#x2b;"));
    }
    html.push_str("</div></section>");
    html
}

fn field(label: &str, name: &str, kind: &str, placeholder: &str) -> String {
    format!(
        "<label>{label}<input type=\"{kind}\" name=\"{name}\" placeholder=\"{placeholder}\"></label>"
    )
}

/// Intake page: welcome text, contact form and the skill widget.
///
/// The skill widget sits outside the contact `<form>` since its chips are
/// forms of their own; the submit button is bound to the contact form by id.
pub fn intake_page(view: &SelectionView, flash: Option<&str>) -> String {
    let mut body = format!("<h1>{APP_TITLE}</h1>");
    if let Some(message) = flash {
        body.push_str(&alert(message));
    }
    let _ = write!(
        body,
        "<p style=\"text-align:center\">Welcome! Please complete the form below to apply for a technical interview with us.</p>\
         <div class=\"card\">\
         <h2>Provide Us Your Information</h2>\
         <p>Fill the form so we can contact you and provide you a seamless interview process.</p>\
         <form id=\"contact\" method=\"post\" action=\"{action}\">\
         <div class=\"row\">{first}{last}</div>\
         <div class=\"row\">{email}{phone}</div>\
         </form>\
         <h3>Technical Skills</h3>{skills}\
         <h3>Other Info</h3>\
         <textarea form=\"contact\" name=\"message\" placeholder=\"Message\" rows=\"4\" style=\"width:100%\"></textarea>\
         <p><button type=\"submit\" form=\"contact\">Submit and Start Interview</button></p>\
         </div>\
         <form method=\"post\" action=\"/session/reset\"><button type=\"submit\">Start over</button></form>",
        action = Page::Intake.path(),
        first = field("First Name", "first_name", "text", "First Name"),
        last = field("Last Name", "last_name", "text", "Last Name"),
        email = field("Email", "email", "email", "user@example.com"),
        phone = field("Phone", "phone", "tel", "Phone"),
        skills = skills_widget(view),
    );
    layout("Apply", &body)
}

/// Consent page: the statement and the acceptance checkbox. `message` is
/// either the intake echo or the consent validation alert.
pub fn consent_page(message: Option<&str>) -> String {
    let mut body = String::from("<h1>Consent Form</h1>");
    if let Some(message) = message {
        body.push_str(&alert(message));
    }

    let mut statement = format!("{CONSENT_PREAMBLE}\n\n");
    for point in CONSENT_POINTS {
        let _ = writeln!(statement, "- {point}");
    }

    let _ = write!(
        body,
        "<div class=\"card\"><h2 style=\"text-align:center\">{CONSENT_TITLE}</h2>\
         <div class=\"consent\">{}</div>\
         <form method=\"post\" action=\"{}\" class=\"actions\" style=\"justify-content:space-between\">\
         <label><input type=\"checkbox\" name=\"checkbox\"> {CHECKBOX_LABEL}</label>\
         <button type=\"submit\">Submit</button></form></div>",
        escape(&statement),
        Page::Consent.path(),
    );
    layout("Consent", &body)
}

/// Static interview placeholder.
pub fn interview_process_page() -> String {
    let body = format!(
        "<a href=\"{}\"><button>Back to Home</button></a>\
         <h1>Interview Process</h1>\
         <p style=\"text-align:center\">This is where the actual interview will take place.</p>",
        Page::Intake.path()
    );
    layout("Interview", &body)
}
