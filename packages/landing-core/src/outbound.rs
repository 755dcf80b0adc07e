//! WhatsApp deep link builder

use url::form_urlencoded;

use crate::config::LandingConfig;

/// Substitute `{key}` placeholders in one pass. Unknown placeholders and
/// stray braces are kept as written, and substituted values are never
/// re-scanned.
fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Build `<base>?phone=<phone>&text=<message>` for a listing.
///
/// Query parameters use `application/x-www-form-urlencoded`, the encoding a
/// browser's `URLSearchParams` produces.
pub fn whatsapp_link(config: &LandingConfig, title: &str, neighborhood: &str, price: &str) -> String {
    let text = render_template(
        &config.message_template,
        &[("title", title), ("neighborhood", neighborhood), ("price", price)],
    );
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("phone", &config.whatsapp_phone)
        .append_pair("text", &text)
        .finish();

    format!("{}?{}", config.whatsapp_base_url, query)
}
