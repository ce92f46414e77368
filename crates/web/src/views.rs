//! Server-rendered HTML for the three pages. Plain forms, no scripts;
//! every interaction is a full request/response round trip.

use axum::http::StatusCode;
use axum::response::Html;
use slotbook_core::models::{MonthView, CLOSING_HOUR, OPENING_HOUR};

/// A user-facing notice rendered at the top of a portal page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

const STYLESHEET: &str = r#"
body { font-family: sans-serif; margin: 0 auto; max-width: 52rem; padding: 1rem; color: #000; }
h1 { text-align: center; padding: 1rem; font-size: 2rem; }
form.inline { display: flex; justify-content: center; align-items: center; gap: 10px; padding: 1.5rem; }
input, button { padding: 5px; border-radius: 5px; background-color: #f2f2f2; box-shadow: 0 0 6px rgba(0,0,0,0.3); }
button { cursor: pointer; }
button:hover { background-color: #ccc; }
table { width: 100%; text-align: center; margin: 0 auto; box-shadow: 0 0 12px rgba(0,0,0,0.15); border-collapse: collapse; }
th, td { padding: 8px; border-bottom: 1px solid #ddd; }
a.back { display: block; text-align: center; padding: 1rem; color: #000; font-size: 1.2rem; }
a.back:hover { color: #888; }
p.notice-success { text-align: center; color: #1a7f37; }
p.notice-error { text-align: center; color: #b30000; }
p.hint { text-align: center; }
div.cards { display: flex; justify-content: center; gap: 2rem; padding: 2rem; }
div.card { border: 1px solid #ccc; border-radius: 8px; padding: 1.5rem; box-shadow: 0 0 10px rgba(0,0,0,0.15); }
"#;

/// Minimal HTML escaping for user-echoed values.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLESHEET}</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>\n"
    ))
}

fn notice_html(notice: Option<&Notice>) -> String {
    match notice {
        Some(Notice::Success(message)) => {
            format!("<p class=\"notice-success\">{}</p>", escape(message))
        }
        Some(Notice::Error(message)) => {
            format!("<p class=\"notice-error\">{}</p>", escape(message))
        }
        None => String::new(),
    }
}

fn date_input(value: &str) -> String {
    format!(
        "<input type=\"date\" name=\"date\" value=\"{}\" required>",
        escape(value)
    )
}

fn hour_input(value: &str) -> String {
    format!(
        "<input type=\"time\" name=\"hour\" value=\"{}\" \
         min=\"{OPENING_HOUR:02}:00\" max=\"{CLOSING_HOUR:02}:00\" step=\"3600\" required>",
        escape(value)
    )
}

/// Landing page with links to the two portals.
pub fn home_page() -> Html<String> {
    let body = "<h1>Appointment portal</h1>\n\
        <div class=\"cards\">\n\
        <div class=\"card\"><h2><a href=\"/staff\">Staff access &rarr;</a></h2>\
        <p>Create and delete appointment slots</p></div>\n\
        <div class=\"card\"><h2><a href=\"/patient\">Patient access &rarr;</a></h2>\
        <p>Book an available appointment</p></div>\n\
        </div>";
    layout("Appointment portal", body)
}

/// Staff portal: create form plus the visible month's slots with a delete
/// button per row.
pub fn staff_page(
    view: &MonthView,
    date_value: &str,
    hour_value: &str,
    notice: Option<&Notice>,
) -> Html<String> {
    let mut body = String::new();
    body.push_str("<h1>Create appointment</h1>\n");
    body.push_str(&notice_html(notice));
    body.push_str(&format!(
        "<form class=\"inline\" method=\"post\" action=\"/staff/slots\">\n{}\n{}\n\
         <button type=\"submit\">+</button>\n</form>\n",
        date_input(date_value),
        hour_input(hour_value),
    ));

    body.push_str(&format!(
        "<h1>Appointments for {}/{}</h1>\n",
        view.month, view.year
    ));

    if view.is_empty() {
        body.push_str("<p class=\"hint\">No slots this month</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Day</th><th>Month</th><th>Year</th><th>Hour</th>\
             <th>Status</th><th>Delete</th></tr></thead>\n<tbody>\n",
        );
        for slot in view.sorted() {
            let status = if slot.available {
                "Open".to_string()
            } else {
                match &slot.dni {
                    Some(dni) => format!("Booked ({})", escape(dni)),
                    None => "Booked".to_string(),
                }
            };
            // The delete key comes straight from the fetched record.
            body.push_str(&format!(
                "<tr><td>{day}</td><td>{month}</td><td>{year}</td><td>{hour}:00</td>\
                 <td>{status}</td><td>\
                 <form method=\"post\" action=\"/staff/slots/remove\">\
                 <input type=\"hidden\" name=\"day\" value=\"{day}\">\
                 <input type=\"hidden\" name=\"month\" value=\"{month}\">\
                 <input type=\"hidden\" name=\"year\" value=\"{year}\">\
                 <input type=\"hidden\" name=\"hour\" value=\"{hour}\">\
                 <button type=\"submit\">&#128465;</button>\
                 </form></td></tr>\n",
                day = slot.day,
                month = slot.month,
                year = slot.year,
                hour = slot.hour,
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str("<a class=\"back\" href=\"/\">Back to the menu</a>");
    layout("Staff", &body)
}

/// Patient portal: booking form, the advisory availability hint for the
/// selected hour, and the month's slots.
pub fn patient_page(
    view: &MonthView,
    dni_value: &str,
    date_value: &str,
    hour_value: &str,
    hour_available: bool,
    notice: Option<&Notice>,
) -> Html<String> {
    let hint = if hour_available {
        "<p class=\"hint\">Appointment available</p>"
    } else {
        "<p class=\"hint\">Appointment not available</p>"
    };

    let mut body = String::new();
    body.push_str("<h1>Book an appointment</h1>\n");
    body.push_str(&notice_html(notice));
    body.push_str(&format!(
        "<form class=\"inline\" method=\"post\" action=\"/patient/book\">\n\
         <label>DNI: <input type=\"text\" name=\"dni\" value=\"{}\" maxlength=\"8\"></label>\n\
         <label>Date: {}</label>\n\
         <label>Hour: {}</label>\n\
         <button type=\"submit\">Book</button>\n</form>\n",
        escape(dni_value),
        date_input(date_value),
        hour_input(hour_value),
    ));
    body.push_str(hint);
    body.push('\n');

    if view.is_empty() {
        body.push_str("<p class=\"hint\">No appointments this month</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Day</th><th>Month</th><th>Year</th><th>Hour</th></tr></thead>\n<tbody>\n",
        );
        for slot in view.sorted() {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}:00</td></tr>\n",
                slot.day, slot.month, slot.year, slot.hour
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str("<a class=\"back\" href=\"/\">Back to the menu</a>");
    layout("Patient", &body)
}

/// Blocking generic error page. No partial data is rendered around it.
pub fn error_page(status: StatusCode) -> Html<String> {
    let body = format!(
        "<h1>Something went wrong</h1>\n\
         <p class=\"notice-error\">The appointment service could not complete the request \
         ({status}). Please try again.</p>\n\
         <a class=\"back\" href=\"/\">Back to the menu</a>"
    );
    layout("Error", &body)
}
