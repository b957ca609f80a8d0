//! HTML and CSS output helpers

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a number for CSS: at most three decimals, no trailing zeros
pub fn css_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(html_escape("/work/acme"), "/work/acme");
    }

    #[test]
    fn test_css_number() {
        assert_eq!(css_number(30.0), "30");
        assert_eq!(css_number(0.12345), "0.123");
        assert_eq!(css_number(-0.0001), "0");
        assert_eq!(css_number(66.666666), "66.667");
    }
}
