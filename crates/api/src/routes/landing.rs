//! Landing page.

use axum::{Router, extract::State, response::Html, routing::get};

use crate::CurrencyServiceState;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const OPTIONS_PLACEHOLDER: &str = "{{ currency_options }}";

/// Creates the landing page route.
pub fn routes() -> Router<CurrencyServiceState> {
    Router::new().route("/", get(index))
}

/// GET `/` - Conversion form listing the supported currencies.
async fn index(State(state): State<CurrencyServiceState>) -> Html<String> {
    Html(render_index(&state.currencies))
}

fn render_index(currencies: &[String]) -> String {
    let options = currencies
        .iter()
        .map(|code| {
            let code = escape_html(code);
            format!("      <option value=\"{code}\">{code}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n");

    INDEX_TEMPLATE.replace(OPTIONS_PLACEHOLDER, &options)
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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
