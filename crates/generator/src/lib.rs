//! Static site generation with Leptos SSR.
//!
//! Page bodies are rendered by Leptos components from the compiled-in
//! content registry, wrapped in a plain HTML document shell, and paired
//! with the stylesheet and the two client scripts. The same render path
//! serves the preview server and the static build so what you see in
//! preview is exactly what gets deployed.

pub mod components;
pub mod pages;
pub mod scripts;
pub mod shell;
pub mod styles;

use saviour_site_core::types::{Route, Site};

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

/// Render one route to a complete HTML document.
pub fn render_page(route: Route, site: &Site, preview: bool) -> String {
    let body = pages::page_body(route, site);
    shell::page_shell(route, site, &body, preview)
}

/// Render the whole site: seven pages plus the stylesheet and scripts.
/// Image assets are copied from the site root by the build command, not
/// generated here.
pub fn generate_site(site: &Site) -> GeneratedSite {
    let pages = Route::ALL
        .iter()
        .map(|route| (route.output_path().to_string(), render_page(*route, site, false)))
        .collect();

    let assets = vec![
        ("css/site.css".to_string(), styles::SITE_CSS.as_bytes().to_vec()),
        (
            "js/contact-form.js".to_string(),
            scripts::contact_form_js().into_bytes(),
        ),
        (
            "js/nav-menu.js".to_string(),
            scripts::nav_menu_js().as_bytes().to_vec(),
        ),
    ];

    GeneratedSite { pages, assets }
}

#[cfg(test)]
pub(crate) fn test_site() -> Site {
    use saviour_site_core::types::*;

    Site {
        site: SiteMeta {
            domain: "test.saviourfoundation.org".to_string(),
            accent_color: "#d4af37".to_string(),
            theme_color: "#1e40af".to_string(),
        },
        foundation: Foundation {
            name: "Saviour Foundation".to_string(),
            tagline: "The Hand That Makes Dreams Reachable".to_string(),
            region: "Delta State, Nigeria".to_string(),
        },
        contact: ContactDetails {
            email: "info@saviourfoundation.org".to_string(),
            phones: vec!["+234 915 743 4271".to_string()],
            address: "Warri, Delta State, Nigeria".to_string(),
            office_hours: vec![
                "Monday - Friday: 9:00 AM - 5:00 PM".to_string(),
                "Saturday: 10:00 AM - 2:00 PM".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saviour_site_core::content;

    #[test]
    fn generates_one_page_per_route() {
        let site = test_site();
        let generated = generate_site(&site);
        assert_eq!(generated.pages.len(), Route::ALL.len());
        for route in Route::ALL {
            assert!(
                generated.pages.iter().any(|(path, _)| path == route.output_path()),
                "missing output for {}",
                route.path()
            );
        }
    }

    #[test]
    fn every_page_is_a_complete_document() {
        let site = test_site();
        for (path, html) in generate_site(&site).pages {
            assert!(html.starts_with("<!DOCTYPE html>"), "{path} missing doctype");
            assert!(html.contains("</html>"), "{path} is truncated");
            assert!(html.contains("/css/site.css"), "{path} missing stylesheet");
            assert!(html.contains("/js/nav-menu.js"), "{path} missing nav script");
        }
    }

    #[test]
    fn emits_stylesheet_and_both_scripts() {
        let site = test_site();
        let assets = generate_site(&site).assets;
        let paths: Vec<&str> = assets.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(
            paths,
            ["css/site.css", "js/contact-form.js", "js/nav-menu.js"]
        );
        assert!(assets.iter().all(|(_, data)| !data.is_empty()));
    }

    #[test]
    fn only_the_contact_page_loads_the_form_script() {
        let site = test_site();
        for route in Route::ALL {
            let html = render_page(route, &site, false);
            assert_eq!(
                html.contains("/js/contact-form.js"),
                route == Route::Contact,
                "wrong script set on {}",
                route.path()
            );
        }
    }

    #[test]
    fn preview_mode_injects_the_reload_listener() {
        let site = test_site();
        let static_html = render_page(Route::Home, &site, false);
        let preview_html = render_page(Route::Home, &site, true);
        assert!(!static_html.contains("/_reload"));
        assert!(preview_html.contains("EventSource('/_reload')"));
    }

    #[test]
    fn pages_never_render_an_empty_image_source() {
        let site = test_site();
        for route in Route::ALL {
            let html = render_page(route, &site, false);
            assert!(!html.contains("src=\"\""), "empty src on {}", route.path());
        }
    }

    #[test]
    fn missing_content_images_fall_back_to_the_placeholder() {
        let site = test_site();
        // The fourth program and third story ship without an image
        let programs = render_page(Route::Programs, &site, false);
        let impact = render_page(Route::Impact, &site, false);
        assert!(programs.contains(content::PLACEHOLDER_IMAGE));
        assert!(impact.contains(content::PLACEHOLDER_IMAGE));
    }
}
