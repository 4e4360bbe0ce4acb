use crate::config::Settings;

const HOME_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<link rel="icon" href="{{favIcon}}">
</head>
<body>
<h1>{{title}}</h1>
<p id="message">{{message}}</p>
<p>Status: <span id="status">...</span></p>
<button onclick="fetch('wakeup', { method: 'POST' })">Wake up / Stop</button>
<script>
async function refresh() {
  const res = await fetch('status');
  const body = await res.json();
  document.getElementById('status').textContent = body.status;
}
refresh();
setInterval(refresh, 5000);
</script>
</body>
</html>
"#;

/// Fills the home page with the configured values. Values are HTML-escaped
/// and otherwise passed through as-is.
pub fn render_home(settings: &Settings) -> String {
    HOME_TEMPLATE
        .replace("{{title}}", &escape_html(&settings.server_name))
        .replace("{{favIcon}}", &escape_html(settings.fav_icon()))
        .replace("{{message}}", &escape_html(&settings.login_message))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_settings_into_page() {
        let settings = Settings {
            server_name: "Creative".into(),
            login_message: "Be right back".into(),
            ..Settings::default()
        };
        let page = render_home(&settings);
        assert!(page.contains("<title>Creative</title>"));
        assert!(page.contains("Be right back"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn escapes_markup_in_values() {
        let settings = Settings {
            login_message: "<b>soon</b>".into(),
            ..Settings::default()
        };
        assert!(render_home(&settings).contains("&lt;b&gt;soon&lt;/b&gt;"));
    }
}
