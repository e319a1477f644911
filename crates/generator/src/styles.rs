//! The single stylesheet shipped with every build.
//!
//! Accent and theme colors are also exposed through site.toml for the
//! meta tags; the stylesheet keeps its own copy as CSS custom properties
//! so pages stay styled even when served without the config in hand.

pub const SITE_CSS: &str = r#":root {
    --primary: #1e40af;
    --primary-dark: #172d80;
    --accent: #d4af37;
    --ink: #1f2937;
    --muted-ink: #4b5563;
    --surface: #ffffff;
    --surface-muted: #f3f6fb;
    --border: #e2e8f0;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: var(--ink);
    background: var(--surface);
    line-height: 1.6;
}

img {
    max-width: 100%;
    display: block;
}

h1, h2, h3 {
    line-height: 1.2;
    color: var(--ink);
}

h1 { font-size: 2.4rem; }
h2 { font-size: 1.8rem; }
h3 { font-size: 1.15rem; }

a {
    color: var(--primary);
    text-decoration: none;
}

/* Header and navigation */

.site-header {
    position: sticky;
    top: 0;
    z-index: 10;
    background: var(--surface);
    border-bottom: 1px solid var(--border);
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    max-width: 72rem;
    margin: 0 auto;
    padding: 0.75rem 1.5rem;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.6rem;
    font-weight: 700;
    color: var(--ink);
}

.brand-logo {
    width: 2.25rem;
    height: 2.25rem;
}

.nav-desktop {
    display: flex;
    align-items: center;
    gap: 1.25rem;
}

.nav-link {
    color: var(--muted-ink);
    font-weight: 500;
}

.nav-link:hover {
    color: var(--primary);
}

.nav-toggle {
    display: none;
    flex-direction: column;
    gap: 4px;
    padding: 0.5rem;
    background: none;
    border: none;
    cursor: pointer;
}

.nav-toggle-bar {
    width: 22px;
    height: 2px;
    background: var(--ink);
}

.nav-mobile {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    padding: 0.75rem 1.5rem 1.25rem;
    background: var(--surface);
    border-bottom: 1px solid var(--border);
}

.nav-mobile[hidden] {
    display: none;
}

.nav-link-mobile {
    padding: 0.4rem 0;
    color: var(--ink);
    font-weight: 500;
}

@media (max-width: 820px) {
    .nav-desktop { display: none; }
    .nav-toggle { display: flex; }
}

/* Sections and layout */

main > section,
.section {
    padding: 3.5rem 1.5rem;
    max-width: 72rem;
    margin: 0 auto;
}

.section-muted {
    background: var(--surface-muted);
    max-width: none;
}

.section-muted > * {
    max-width: 72rem;
    margin-left: auto;
    margin-right: auto;
}

.section-dark {
    background: var(--primary);
    color: #e7ecfb;
    max-width: none;
}

.section-dark h2,
.section-dark h3 {
    color: #ffffff;
}

.section-heading {
    text-align: center;
    margin-bottom: 2.25rem;
}

.kicker {
    display: inline-block;
    font-size: 0.8rem;
    font-weight: 700;
    letter-spacing: 0.08em;
    text-transform: uppercase;
    color: var(--accent);
}

.badge {
    display: inline-block;
    padding: 0.25rem 0.85rem;
    border-radius: 999px;
    background: rgba(212, 175, 55, 0.18);
    color: #8a6d1d;
    font-weight: 600;
    font-size: 0.85rem;
}

.prose {
    color: var(--muted-ink);
}

.section-lede {
    text-align: center;
    max-width: 44rem;
    margin: 0 auto 2rem;
    color: var(--muted-ink);
}

.section-cta {
    text-align: center;
    margin-top: 2.25rem;
}

.content-image {
    width: 100%;
    border-radius: 0.9rem;
}

.founder-name {
    font-weight: 700;
    color: var(--primary);
}

.map-note {
    font-weight: 600;
    color: var(--ink);
}

.empty-state-note {
    font-weight: 600;
}

.split {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2.5rem;
    align-items: center;
}

@media (max-width: 820px) {
    .split { grid-template-columns: 1fr; }
}

/* Hero */

.hero {
    background: var(--surface-muted);
    max-width: none;
}

.hero-inner {
    display: grid;
    grid-template-columns: 1.1fr 1fr;
    gap: 2.5rem;
    align-items: center;
    max-width: 72rem;
    margin: 0 auto;
    padding: 4rem 1.5rem;
}

.hero h1 {
    font-size: 2.9rem;
    margin: 0.5rem 0 1rem;
}

.hero-kicker {
    display: inline-block;
    font-weight: 700;
    letter-spacing: 0.08em;
    text-transform: uppercase;
    font-size: 0.8rem;
    color: var(--primary);
}

.hero-lede {
    font-size: 1.1rem;
    color: var(--muted-ink);
    margin-bottom: 1.5rem;
}

.hero-media {
    position: relative;
}

.hero-media img {
    border-radius: 0.9rem;
}

.hero-badge {
    position: absolute;
    bottom: -1rem;
    left: -1rem;
    padding: 0.75rem 1.1rem;
    border-radius: 0.75rem;
    background: var(--accent);
    color: #1f2937;
    font-weight: 700;
    text-align: center;
}

.hero-badge small {
    display: block;
    font-weight: 500;
}

@media (max-width: 820px) {
    .hero-inner { grid-template-columns: 1fr; }
}

.page-hero {
    background: var(--primary);
    color: #e7ecfb;
    text-align: center;
    padding: 4rem 1.5rem;
    max-width: none;
}

.page-hero h1 {
    color: #ffffff;
    margin: 0 0 0.75rem;
}

.page-hero p {
    max-width: 44rem;
    margin: 0 auto;
}

/* Cards */

.card-grid {
    display: grid;
    gap: 1.5rem;
}

.cols-2 { grid-template-columns: repeat(2, 1fr); }
.cols-3 { grid-template-columns: repeat(3, 1fr); }
.cols-4 { grid-template-columns: repeat(4, 1fr); }

@media (max-width: 1000px) {
    .cols-3, .cols-4 { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 640px) {
    .cols-2, .cols-3, .cols-4 { grid-template-columns: 1fr; }
}

.icon-card {
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: var(--surface);
}

.icon-card.centered {
    text-align: center;
}

.icon-card h3 {
    margin: 0.75rem 0 0.5rem;
}

.icon-card p {
    margin: 0.25rem 0;
    color: var(--muted-ink);
}

.icon {
    display: inline-flex;
    width: 2.75rem;
    height: 2.75rem;
    border-radius: 0.6rem;
    background: rgba(30, 64, 175, 0.1);
}

/* Stats */

.stats-strip {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
    gap: 1.5rem;
    text-align: center;
}

.stat-card {
    padding: 1.5rem 1rem;
    border-radius: 0.75rem;
    background: var(--surface-muted);
}

.stat-value {
    display: block;
    font-size: 2.1rem;
    font-weight: 800;
    color: var(--primary);
}

.stat-label {
    font-weight: 600;
}

.stat-desc {
    margin: 0.35rem 0 0;
    font-size: 0.85rem;
    color: var(--muted-ink);
}

/* Timeline */

.timeline {
    max-width: 44rem;
    margin: 0 auto;
    border-left: 3px solid var(--accent);
    padding-left: 1.5rem;
}

.timeline-entry {
    margin-bottom: 1.75rem;
}

.timeline-year {
    font-weight: 800;
    color: var(--primary);
}

/* Stories, events, tiers */

.story-card {
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    overflow: hidden;
    background: var(--surface);
}

.story-card img {
    width: 100%;
    height: 12rem;
    object-fit: cover;
}

.story-body {
    padding: 1.25rem;
}

.event-facts {
    list-style: none;
    padding: 0;
    margin: 1rem 0;
}

.event-fact {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    margin-bottom: 0.6rem;
}

.schedule-card {
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
}

.schedule-list {
    list-style: none;
    padding: 0;
    margin: 0.75rem 0 0;
}

.schedule-list li {
    display: flex;
    gap: 1rem;
    padding: 0.4rem 0;
    border-bottom: 1px solid var(--border);
}

.schedule-time {
    min-width: 7.5rem;
    font-weight: 600;
    color: var(--primary);
}

.benefit-card {
    padding: 1.25rem;
    border-radius: 0.75rem;
    background: rgba(212, 175, 55, 0.12);
    border: 1px solid rgba(212, 175, 55, 0.4);
}

.tier-card {
    position: relative;
    padding: 1.75rem 1.5rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: var(--surface);
    text-align: center;
}

.tier-highlighted {
    border: 2px solid var(--accent);
    box-shadow: 0 10px 25px rgba(30, 64, 175, 0.12);
}

.tier-flag {
    position: absolute;
    top: -0.8rem;
    left: 50%;
    transform: translateX(-50%);
    padding: 0.2rem 0.9rem;
    border-radius: 999px;
    background: var(--accent);
    color: #1f2937;
    font-size: 0.8rem;
    font-weight: 700;
}

.tier-amount {
    font-size: 1.9rem;
    font-weight: 800;
    color: var(--primary);
}

/* Lists */

.check-list,
.dot-list {
    list-style: none;
    padding: 0;
    margin: 1rem 0;
}

.check-list li {
    padding-left: 1.6rem;
    position: relative;
    margin-bottom: 0.5rem;
}

.check-list li::before {
    content: "\2713";
    position: absolute;
    left: 0;
    color: var(--accent);
    font-weight: 700;
}

.dot-list li {
    padding-left: 1.2rem;
    position: relative;
    margin-bottom: 0.4rem;
}

.dot-list li::before {
    content: "\2022";
    position: absolute;
    left: 0;
    color: var(--accent);
}

.empty-state {
    text-align: center;
    padding: 2.5rem 1.5rem;
    border: 1px dashed var(--border);
    border-radius: 0.75rem;
    color: var(--muted-ink);
}

/* Buttons */

.btn {
    display: inline-block;
    padding: 0.65rem 1.4rem;
    border-radius: 0.5rem;
    border: 1px solid transparent;
    font-weight: 600;
    cursor: pointer;
    font-size: 1rem;
}

.btn-primary {
    background: var(--primary);
    color: #ffffff;
}

.btn-primary:hover {
    background: var(--primary-dark);
}

.btn-accent {
    background: var(--accent);
    color: #1f2937;
}

.btn-outline {
    border-color: currentColor;
    background: transparent;
    color: inherit;
}

.btn-block {
    width: 100%;
}

.btn:disabled {
    opacity: 0.6;
    cursor: wait;
}

.button-row {
    display: flex;
    gap: 1rem;
    flex-wrap: wrap;
}

.cta-band {
    background: var(--primary);
    color: #e7ecfb;
    max-width: none;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
    flex-wrap: wrap;
    padding: 3rem 1.5rem;
}

.cta-band h2 {
    color: #ffffff;
    margin: 0 0 0.4rem;
}

/* Forms */

.form-card {
    padding: 2rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: var(--surface);
}

.contact-form .field {
    margin-bottom: 1.1rem;
    display: flex;
    flex-direction: column;
    gap: 0.3rem;
}

.field-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}

@media (max-width: 640px) {
    .field-row { grid-template-columns: 1fr; }
}

.contact-form label {
    font-weight: 600;
    font-size: 0.9rem;
}

.contact-form input,
.contact-form select,
.contact-form textarea {
    padding: 0.6rem 0.8rem;
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    font: inherit;
}

.contact-form input:focus,
.contact-form select:focus,
.contact-form textarea:focus {
    outline: 2px solid var(--primary);
    outline-offset: 1px;
}

.form-success {
    text-align: center;
    padding: 2rem 1rem 1rem;
}

.form-success[hidden] {
    display: none;
}

.contact-aside h3 {
    margin: 1.4rem 0 0.4rem;
}

/* Footer */

.site-footer {
    background: #111827;
    color: #d1d5db;
    padding: 3rem 1.5rem 1.5rem;
}

.footer-inner {
    display: grid;
    grid-template-columns: 2fr 1fr 1fr 1.5fr;
    gap: 2rem;
    max-width: 72rem;
    margin: 0 auto;
}

@media (max-width: 820px) {
    .footer-inner { grid-template-columns: 1fr 1fr; }
}

.footer-name {
    color: #ffffff;
    font-weight: 700;
    font-size: 1.1rem;
    margin: 0 0 0.25rem;
}

.footer-tagline {
    color: var(--accent);
    margin: 0 0 0.75rem;
}

.footer-blurb {
    font-size: 0.9rem;
    margin: 0;
}

.footer-heading {
    color: #ffffff;
    font-size: 1rem;
}

.footer-col ul {
    list-style: none;
    padding: 0;
    margin: 0;
}

.footer-col li {
    margin-bottom: 0.4rem;
}

.footer-link {
    color: #d1d5db;
}

.footer-link:hover {
    color: var(--accent);
}

.footer-bottom {
    max-width: 72rem;
    margin: 2rem auto 0;
    padding-top: 1.25rem;
    border-top: 1px solid #374151;
    text-align: center;
    font-size: 0.85rem;
    color: #9ca3af;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_the_brand() {
        assert!(SITE_CSS.contains("--primary: #1e40af"));
        assert!(SITE_CSS.contains("--accent: #d4af37"));
    }

    #[test]
    fn balanced_braces() {
        let open = SITE_CSS.matches('{').count();
        let close = SITE_CSS.matches('}').count();
        assert_eq!(open, close);
    }

    #[test]
    fn hidden_elements_stay_hidden() {
        // The nav script and contact script both rely on [hidden] actually hiding
        assert!(SITE_CSS.contains(".nav-mobile[hidden]"));
        assert!(SITE_CSS.contains(".form-success[hidden]"));
    }
}
