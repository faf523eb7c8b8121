//! Server-rendered HTML pages.
//!
//! Every page shares one layout. Record text and echoed request values go
//! through [`escape`] before they reach the markup.

use serde_json::{Map, Value};

use crate::catalog::{Fabrikant, Lamp};
use crate::query::{LampQuery, SortDirection, SortField};

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="nl">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Lampen</title>
<link rel="stylesheet" href="/css/style.css">
</head>
<body>
<header>
<nav>
<a href="/">Home</a>
<a href="/lamps">Lampen</a>
<a href="/fabrics">Fabrikanten</a>
</nav>
</header>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

pub fn index() -> String {
    layout(
        "Home",
        r#"<h1>Lampen catalogus</h1>
<p>Blader door onze <a href="/lamps">lampen</a> of bekijk de <a href="/fabrics">fabrikanten</a>.</p>"#,
    )
}

pub fn register_success() -> String {
    layout(
        "Registratie gelukt",
        r#"<h1>Registratie gelukt</h1>
<p>Je account is aangemaakt.</p>
<p><a href="/">Terug naar home</a></p>"#,
    )
}

pub fn not_found(path: &str) -> String {
    layout(
        "Niet gevonden",
        &format!(
            "<h1>404</h1>\n<p>De pagina <code>{}</code> bestaat niet.</p>\n<p><a href=\"/\">Terug naar home</a></p>",
            escape(path)
        ),
    )
}

/// Lamp overview with the search box and sort controls reflecting `query`.
pub fn lamp_list(lamps: &[Lamp], query: &LampQuery) -> String {
    let mut body = String::from("<h1>Lampen</h1>\n");
    body.push_str(&controls(query));

    if lamps.is_empty() {
        body.push_str("<p class=\"empty\">Geen lampen gevonden.</p>\n");
        return layout("Lampen", &body);
    }

    body.push_str(
        "<table class=\"lamps\">\n<thead><tr><th>Id</th><th>Naam</th><th>Prijs</th><th>Kleur</th><th>Actief</th></tr></thead>\n<tbody>\n",
    );
    for lamp in lamps {
        body.push_str(&format!(
            "<tr><td>{id}</td><td><a href=\"/lampDetail/{id}\">{name}</a></td><td>{price}</td><td>{color}</td><td>{active}</td></tr>\n",
            id = lamp.id,
            name = escape(&lamp.name),
            price = format_price(lamp.price),
            color = escape(&lamp.color),
            active = yes_no(lamp.active),
        ));
    }
    body.push_str("</tbody>\n</table>\n");
    layout("Lampen", &body)
}

fn controls(query: &LampQuery) -> String {
    let mut form = String::from("<form class=\"controls\" method=\"get\" action=\"/lamps\">\n");
    form.push_str(&format!(
        "<input type=\"search\" name=\"q\" placeholder=\"Zoek op naam\" value=\"{}\">\n",
        escape(&query.search)
    ));

    form.push_str("<select name=\"sortField\">\n");
    for field in SortField::ALL {
        form.push_str(&option(field.as_str(), field.label(), query.sort == Some(field)));
    }
    form.push_str("</select>\n<select name=\"sortDirection\">\n");
    for direction in SortDirection::ALL {
        form.push_str(&option(
            direction.as_str(),
            direction.label(),
            query.direction == direction,
        ));
    }
    form.push_str("</select>\n<button type=\"submit\">Toepassen</button>\n</form>\n");
    form
}

fn option(value: &str, label: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(
        "<option value=\"{}\"{}>{}</option>\n",
        escape(value),
        selected,
        escape(label)
    )
}

pub fn lamp_detail(lamp: &Lamp) -> String {
    let body = format!(
        "<h1>{name}</h1>\n<dl>\n<dt>Id</dt><dd>{id}</dd>\n<dt>Prijs</dt><dd>{price}</dd>\n<dt>Kleur</dt><dd>{color}</dd>\n<dt>Actief</dt><dd>{active}</dd>\n{extra}</dl>\n<p><a href=\"/lampEdit/{id}\">Bewerken</a> | <a href=\"/lamps\">Terug naar overzicht</a></p>",
        name = escape(&lamp.name),
        id = lamp.id,
        price = format_price(lamp.price),
        color = escape(&lamp.color),
        active = yes_no(lamp.active),
        extra = extra_fields(&lamp.extra),
    );
    layout(&lamp.name, &body)
}

/// Prefilled edit form. The catalog is read-only, so the form only leads back
/// to the detail page.
pub fn lamp_edit(lamp: &Lamp) -> String {
    let checked = if lamp.active { " checked" } else { "" };
    let body = format!(
        "<h1>{name} bewerken</h1>\n<form class=\"edit\" method=\"get\" action=\"/lampDetail/{id}\">\n<label>Naam <input type=\"text\" name=\"naam\" value=\"{name}\"></label>\n<label>Prijs <input type=\"number\" step=\"0.01\" name=\"prijs\" value=\"{price}\"></label>\n<label>Kleur <input type=\"text\" name=\"kleur\" value=\"{color}\"></label>\n<label>Actief <input type=\"checkbox\" name=\"actief\"{checked}></label>\n<button type=\"submit\">Opslaan</button>\n</form>\n<p><a href=\"/lampDetail/{id}\">Annuleren</a></p>",
        name = escape(&lamp.name),
        id = lamp.id,
        price = lamp.price,
        color = escape(&lamp.color),
        checked = checked,
    );
    layout(&format!("{} bewerken", lamp.name), &body)
}

pub fn fabrikant_list(fabrikanten: &[Fabrikant]) -> String {
    let mut body = String::from("<h1>Fabrikanten</h1>\n");
    if fabrikanten.is_empty() {
        body.push_str("<p class=\"empty\">Geen fabrikanten gevonden.</p>\n");
        return layout("Fabrikanten", &body);
    }

    body.push_str("<ul class=\"fabrikanten\">\n");
    for fabrikant in fabrikanten {
        body.push_str(&format!(
            "<li><a href=\"/fabricDetail/{}\">{}</a></li>\n",
            fabrikant.id,
            escape(&fabrikant.name)
        ));
    }
    body.push_str("</ul>\n");
    layout("Fabrikanten", &body)
}

pub fn fabrikant_detail(fabrikant: &Fabrikant) -> String {
    let body = format!(
        "<h1>{name}</h1>\n<dl>\n<dt>Id</dt><dd>{id}</dd>\n{extra}</dl>\n<p><a href=\"/fabrics\">Terug naar overzicht</a></p>",
        name = escape(&fabrikant.name),
        id = fabrikant.id,
        extra = extra_fields(&fabrikant.extra),
    );
    layout(&fabrikant.name, &body)
}

fn extra_fields(extra: &Map<String, Value>) -> String {
    let mut out = String::new();
    for (key, value) in extra {
        // Store bookkeeping, not display data.
        if key == "_id" {
            continue;
        }
        out.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            escape(&label(key)),
            display_value(value)
        ));
    }
    out
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.starts_with("http://") || s.starts_with("https://") => {
            let s = escape(s);
            format!("<a href=\"{s}\">{s}</a>")
        }
        Value::String(s) => escape(s),
        Value::Bool(b) => yes_no(*b).to_string(),
        Value::Null => String::new(),
        other => escape(&other.to_string()),
    }
}

fn label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_price(price: f64) -> String {
    format!("&euro; {:.2}", price)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Ja"
    } else {
        "Nee"
    }
}
