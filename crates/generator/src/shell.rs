use saviour_site_core::content::page_meta;
use saviour_site_core::types::{Route, Site};

/// HTML-escape a string for safe interpolation into the document head
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Wrap a rendered page body in the full HTML document.
///
/// The shell carries the per-page metadata, social preview tags, the
/// stylesheet link, and the client scripts. Preview mode appends the SSE
/// reload listener so the browser follows file edits.
pub fn page_shell(route: Route, site: &Site, body: &str, preview: bool) -> String {
    let meta = page_meta(route);
    let title = html_escape(meta.title);
    let description = html_escape(meta.description);
    let canonical = format!(
        "https://{}{}",
        html_escape(&site.site.domain),
        route.path()
    );

    let form_script = if route == Route::Contact {
        "\n    <script src=\"/js/contact-form.js\" defer></script>"
    } else {
        ""
    };

    let reload_script = if preview {
        r#"
    <script>
        // Hot reload via Server-Sent Events
        const eventSource = new EventSource('/_reload');
        eventSource.onmessage = () => {
            console.log('Reloading...');
            location.reload();
        };
        eventSource.onerror = () => {
            console.log('Preview server disconnected');
            eventSource.close();
        };
    </script>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <meta name="theme-color" content="{theme_color}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:type" content="website">
    <meta property="og:url" content="{canonical}">
    <link rel="canonical" href="{canonical}">
    <link rel="icon" href="/assets/images/logo.svg">
    <link rel="stylesheet" href="/css/site.css">
    <script src="/js/nav-menu.js" defer></script>{form_script}
</head>
<body>
{body}{reload_script}
</body>
</html>"#,
        theme_color = site.site.theme_color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_site;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            html_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;"
        );
        assert_eq!(html_escape("plain text"), "plain text");
    }

    #[test]
    fn shell_carries_per_page_metadata() {
        let site = test_site();
        let html = page_shell(Route::About, &site, "<main></main>", false);
        assert!(html.contains("<title>About Us | Saviour Foundation</title>"));
        assert!(html.contains(r##"content="#1e40af""##));
        assert!(html.contains("https://test.saviourfoundation.org/about"));
    }

    #[test]
    fn titles_differ_across_routes() {
        let site = test_site();
        let mut titles = Vec::new();
        for route in Route::ALL {
            let html = page_shell(route, &site, "", false);
            let start = html.find("<title>").unwrap() + "<title>".len();
            let end = html.find("</title>").unwrap();
            titles.push(html[start..end].to_string());
        }
        let mut unique = titles.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), titles.len());
    }
}
