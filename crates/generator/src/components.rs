//! Layout primitives shared by every page: navigation, footer, and the
//! small presentational building blocks the content registry maps into.

use chrono::Datelike;
use leptos::prelude::*;
use saviour_site_core::content::{
    FOOTER_FOUNDATION_LINKS, FOOTER_INVOLVED_LINKS, PLACEHOLDER_IMAGE,
};
use saviour_site_core::types::*;

fn nav_links(class: &'static str) -> impl IntoView {
    Route::ALL
        .iter()
        .map(|route| {
            view! {
                <a href=route.path() class=class>{route.label()}</a>
            }
        })
        .collect_view()
}

/// Sticky site header. The desktop link row is always visible; the mobile
/// list starts hidden and is driven by nav-menu.js through the toggle
/// button.
#[component]
pub fn Navigation(foundation_name: String) -> impl IntoView {
    let logo_alt = format!("{} emblem", foundation_name);
    view! {
        <header class="site-header">
            <div class="nav-inner">
                <a href="/" class="brand">
                    <img src="/assets/images/logo.svg" alt=logo_alt class="brand-logo"/>
                    <span class="brand-name">{foundation_name}</span>
                </a>
                <nav class="nav-desktop">
                    {nav_links("nav-link")}
                    <a href="/contact" class="btn btn-accent nav-cta">"Support Us"</a>
                </nav>
                <button
                    id="nav-toggle"
                    type="button"
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded="false"
                >
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                </button>
            </div>
            <nav id="nav-mobile" class="nav-mobile" hidden=true>
                {nav_links("nav-link-mobile")}
                <a href="/contact" class="btn btn-accent">"Support Us"</a>
            </nav>
        </header>
    }
}

/// Global footer: brand blurb, link columns, contact channels, copyright.
#[component]
pub fn Footer(site: Site) -> impl IntoView {
    let year = chrono::Utc::now().year();
    let phone = site.contact.phones.first().cloned().unwrap_or_default();
    let phone_href = format!("tel:{}", phone.replace(' ', ""));
    let email_href = format!("mailto:{}", site.contact.email);
    let blurb = format!(
        "Empowering the next generation through education, scholarships, and academic \
         excellence programs in {}.",
        site.foundation.region
    );

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <p class="footer-name">{site.foundation.name.clone()}</p>
                    <p class="footer-tagline">{site.foundation.tagline.clone()}</p>
                    <p class="footer-blurb">{blurb}</p>
                </div>
                <div class="footer-col">
                    <h3 class="footer-heading">"Foundation"</h3>
                    <ul>
                        {FOOTER_FOUNDATION_LINKS
                            .iter()
                            .map(|(route, label)| {
                                view! {
                                    <li><a href=route.path() class="footer-link">{*label}</a></li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer-col">
                    <h3 class="footer-heading">"Get Involved"</h3>
                    <ul>
                        {FOOTER_INVOLVED_LINKS
                            .iter()
                            .map(|(route, label)| {
                                view! {
                                    <li><a href=route.path() class="footer-link">{*label}</a></li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer-col">
                    <h3 class="footer-heading">"Contact Us"</h3>
                    <ul>
                        <li class="footer-contact">{site.contact.address.clone()}</li>
                        <li class="footer-contact">
                            <a href=email_href class="footer-link">{site.contact.email.clone()}</a>
                        </li>
                        <li class="footer-contact">
                            <a href=phone_href class="footer-link">{phone.clone()}</a>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, site.foundation.name)}</p>
            </div>
        </footer>
    }
}

/// Kicker + title pair introducing a section
#[component]
pub fn SectionHeading(kicker: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="section-heading">
            <span class="kicker">{kicker}</span>
            <h2>{title}</h2>
        </div>
    }
}

/// Decorative icon slot, styled per slug by the stylesheet
#[component]
pub fn IconBadge(icon: &'static str) -> impl IntoView {
    view! {
        <span class=format!("icon icon-{}", icon) aria-hidden="true"></span>
    }
}

#[component]
pub fn StatCard(stat: &'static Stat) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-value">{stat.value}</p>
            <p class="stat-label">{stat.label}</p>
            {stat.description.map(|text| view! { <p class="stat-desc">{text}</p> })}
        </div>
    }
}

#[component]
pub fn IconCardView(card: &'static IconCard) -> impl IntoView {
    view! {
        <div class="icon-card">
            <IconBadge icon=card.icon/>
            <h3>{card.title}</h3>
            <p>{card.description}</p>
        </div>
    }
}

/// Checkmark bullet list used for features, benefits, and impact areas
#[component]
pub fn CheckList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="check-list">
            {items
                .iter()
                .map(|item| view! { <li>{*item}</li> })
                .collect_view()}
        </ul>
    }
}

/// Content image with the placeholder fallback for entries that ship
/// without one.
pub fn content_image(src: Option<&'static str>, alt: &'static str) -> impl IntoView {
    view! {
        <img src=src.unwrap_or(PLACEHOLDER_IMAGE) alt=alt loading="lazy" class="content-image"/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_site;
    use saviour_site_core::content::HOME_STATS;

    #[test]
    fn navigation_lists_every_route_in_order() {
        let html = view! { <Navigation foundation_name="Saviour Foundation".to_string()/> }
            .to_html();
        let mut last = 0;
        for route in Route::ALL {
            let needle = format!(">{}</a>", route.label());
            let pos = html[last..]
                .find(&needle)
                .unwrap_or_else(|| panic!("{} missing or out of order", route.label()));
            last += pos;
        }
    }

    #[test]
    fn mobile_menu_starts_hidden() {
        let html = view! { <Navigation foundation_name="Saviour Foundation".to_string()/> }
            .to_html();
        let menu_start = html.find("id=\"nav-mobile\"").unwrap();
        let tag = &html[html[..menu_start].rfind('<').unwrap()..];
        let tag = &tag[..tag.find('>').unwrap()];
        assert!(tag.contains("hidden"), "mobile menu should start hidden: {tag}");
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn footer_renders_config_contact_channels() {
        let site = test_site();
        let html = view! { <Footer site=site.clone()/> }.to_html();
        assert!(html.contains("mailto:info@saviourfoundation.org"));
        assert!(html.contains("tel:+2349157434271"));
        assert!(html.contains("Warri, Delta State, Nigeria"));
        assert!(html.contains(&site.foundation.tagline));
    }

    #[test]
    fn footer_copyright_uses_the_current_year() {
        let html = view! { <Footer site=test_site()/> }.to_html();
        let year = chrono::Utc::now().year().to_string();
        assert!(html.contains(&format!("© {} Saviour Foundation", year)));
    }

    #[test]
    fn stat_card_omits_absent_description() {
        let html = view! { <StatCard stat=&HOME_STATS[0]/> }.to_html();
        assert!(html.contains("500+"));
        assert!(!html.contains("stat-desc"));
    }

    #[test]
    fn content_image_falls_back_to_placeholder() {
        let html = content_image(None, "example").to_html();
        assert!(html.contains(PLACEHOLDER_IMAGE));
        let html = content_image(Some("/assets/images/founder.svg"), "x").to_html();
        assert!(html.contains("/assets/images/founder.svg"));
        assert!(!html.contains(PLACEHOLDER_IMAGE));
    }
}
