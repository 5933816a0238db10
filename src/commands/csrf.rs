//! CSRF Token Lookup

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

pub const CSRF_COOKIE: &str = "csrftoken";

/// Value of cookie `name` in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

/// Token from the cookie, or from the page config when the cookie is absent
pub fn resolve_csrf(cookies: Option<&str>, fallback: Option<&str>) -> Option<String> {
    cookies
        .and_then(|c| cookie_value(c, CSRF_COOKIE))
        .filter(|token| !token.is_empty())
        .or_else(|| fallback.map(str::to_string))
}

fn document_cookies() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
}

pub fn csrf_token(fallback: Option<&str>) -> Option<String> {
    resolve_csrf(document_cookies().as_deref(), fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=xyz; csrftoken=abc123; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("abc123"));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        assert_eq!(cookie_value("xcsrftoken=nope", "csrftoken"), None);
        assert_eq!(cookie_value("csrftoken=a%3Db", "csrftoken").as_deref(), Some("a=b"));
    }

    #[test]
    fn test_resolve_prefers_cookie() {
        assert_eq!(resolve_csrf(Some("csrftoken=c"), Some("page")).as_deref(), Some("c"));
        assert_eq!(resolve_csrf(Some("other=1"), Some("page")).as_deref(), Some("page"));
        assert_eq!(resolve_csrf(None, Some("page")).as_deref(), Some("page"));
        assert_eq!(resolve_csrf(Some(""), None), None);
    }
}
