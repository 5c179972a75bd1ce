//! HTML pages served at `/`.

const LOGIN_TEMPLATE: &str = include_str!("../../assets/login.html");
const FILE_MANAGER: &str = include_str!("../../assets/file_manager.html");

pub fn login_html(message: &str) -> String {
    LOGIN_TEMPLATE.replace("{{message}}", &escape_html(message))
}

pub fn file_manager_html() -> &'static str {
    FILE_MANAGER
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
