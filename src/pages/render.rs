//! HTML rendering of the page shell.
//!
//! # Responsibilities
//! - Wrap page content in a document with `lang`, title, nav and footer
//! - Build every internal link with `Locale::localized_path`
//! - Escape all interpolated text
//!
//! # Design Decisions
//! - Plain string building; the shell is small and has no template reuse
//! - Lists (home features, fleet, destinations) come straight from the
//!   catalog so adding an entry to the dictionaries adds it to the page

use std::fmt::Write;

use serde_json::Value;

use crate::config::SiteDetails;
use crate::i18n::Translator;
use crate::pages::Page;

/// Render `page` for the translator's locale.
pub fn render_page(page: &Page, t: &Translator<'_>, site: &SiteDetails) -> String {
    let mut body = String::new();
    let _ = write!(body, "<h1>{}</h1>", escape(&page.title(t)));

    if let Some(key) = page.description_key() {
        if let Some(description) = t.t(&key).and_then(Value::as_str) {
            let _ = write!(body, "<p class=\"lead\">{}</p>", escape(description));
        }
    }

    match page {
        Page::Home => {
            body.push_str(&string_list(t, "home.features"));
            let _ = write!(
                body,
                "<section class=\"cta\"><h2>{}</h2><p>{}</p>{}</section>",
                escape(&t.text("home.cta.title", "")),
                escape(&t.text("home.cta.description", "")),
                phone_link(t, site),
            );
        }
        Page::Fleet => body.push_str(&entity_list(t, "boats", "boats")),
        Page::Destinations => body.push_str(&entity_list(t, "destinations", "destinations")),
        Page::Contact => body.push_str(&contact_form(t, site)),
        Page::Boat(_) => body.push_str(&phone_link(t, site)),
        _ => {}
    }

    layout(t, site, &page.title(t), Some(page), &body)
}

/// Render the localized "page not found" document.
pub fn render_not_found(t: &Translator<'_>, site: &SiteDetails) -> String {
    let title = t.text(
        "notFound.title",
        if t.locale().is_default() {
            "Η σελίδα δεν βρέθηκε"
        } else {
            "Page not found"
        },
    );
    let body = format!(
        "<h1>{}</h1><p><a href=\"{}\">{}</a></p>",
        escape(&title),
        escape(&t.locale().localized_path("/")),
        escape(&t.text("notFound.back", "Home")),
    );
    layout(t, site, &title, None, &body)
}

fn layout(
    t: &Translator<'_>,
    site: &SiteDetails,
    title: &str,
    current: Option<&Page>,
    body: &str,
) -> String {
    let locale = t.locale();
    let site_name = t.text("site.name", &site.name);

    let mut nav = String::new();
    for page in Page::NAV.iter() {
        let Some(key) = page.nav_key() else { continue };
        let aria = if current == Some(page) {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = write!(
            nav,
            "<a href=\"{}\"{}>{}</a>",
            escape(&locale.localized_path(&page.path())),
            aria,
            escape(&t.text(key, &page.title(t))),
        );
    }

    let alternate = locale.alternate();
    let switch_path = current.map(Page::path).unwrap_or_else(|| "/".to_string());
    let _ = write!(
        nav,
        "<a href=\"{}\" hreflang=\"{}\" lang=\"{}\">{}</a>",
        escape(&alternate.localized_path(&switch_path)),
        alternate.html_lang(),
        alternate.html_lang(),
        escape(&t.text("nav.language", alternate.native_name())),
    );

    let mut footer = String::new();
    for page in [Page::PrivacyPolicy, Page::TermsOfService, Page::CookiePolicy] {
        let _ = write!(
            footer,
            "<a href=\"{}\">{}</a>",
            escape(&locale.localized_path(&page.path())),
            escape(&page.title(t)),
        );
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | {site_name}</title>\n\
         <link rel=\"canonical\" href=\"{canonical}\">\n\
         </head>\n<body>\n<header><nav>{nav}</nav></header>\n<main>{body}</main>\n\
         <footer><p>&copy; {site_name}. {rights}</p><p>{phone}</p><nav>{footer}</nav></footer>\n\
         </body>\n</html>\n",
        lang = locale.html_lang(),
        title = escape(title),
        site_name = escape(&site_name),
        canonical = escape(&format!(
            "{}{}",
            site.url.trim_end_matches('/'),
            locale.localized_path(&switch_path)
        )),
        rights = escape(&t.text("footer.rights", "")),
        phone = phone_link(t, site),
    )
}

/// `<ul>` of the strings in the array at `key`; empty when absent.
fn string_list(t: &Translator<'_>, key: &str) -> String {
    let Some(items) = t.t(key).and_then(Value::as_array) else {
        return String::new();
    };
    let mut html = String::from("<ul>");
    for item in items.iter().filter_map(Value::as_str) {
        let _ = write!(html, "<li>{}</li>", escape(item));
    }
    html.push_str("</ul>");
    html
}

/// Links to every entry of the object at `key`, named by its `name` field.
fn entity_list(t: &Translator<'_>, key: &str, path_prefix: &str) -> String {
    let Some(entries) = t.t(key).and_then(Value::as_object) else {
        return String::new();
    };
    let mut html = String::from("<ul>");
    for slug in entries.keys() {
        let name = t.text(&format!("{key}.{slug}.name"), slug);
        let _ = write!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            escape(&t.locale().localized_path(&format!("/{path_prefix}/{slug}"))),
            escape(&name),
        );
    }
    html.push_str("</ul>");
    html
}

fn contact_form(t: &Translator<'_>, site: &SiteDetails) -> String {
    let mut html = String::from("<form method=\"post\" action=\"/api/contact\">");
    for (field, kind, required) in [
        ("name", "text", true),
        ("phone", "tel", true),
        ("email", "email", false),
        ("date", "date", false),
        ("time", "time", false),
    ] {
        let _ = write!(
            html,
            "<label>{}<input type=\"{kind}\" name=\"{field}\"{}></label>",
            escape(&t.text(&format!("contact.form.{field}"), field)),
            if required { " required" } else { "" },
        );
    }
    let _ = write!(
        html,
        "<label>{}<textarea name=\"message\" required></textarea></label>\
         <button type=\"submit\">{}</button></form><p><a href=\"mailto:{}\">{}</a></p>",
        escape(&t.text("contact.form.message", "message")),
        escape(&t.text("contact.form.submit", "Send")),
        escape(&site.contact_email),
        escape(&site.contact_email),
    );
    html
}

fn phone_link(t: &Translator<'_>, site: &SiteDetails) -> String {
    format!(
        "<a href=\"tel:{}\">{} {}</a>",
        escape(&site.business_phone),
        escape(&t.text("common.call", "")),
        escape(&site.business_phone),
    )
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
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
