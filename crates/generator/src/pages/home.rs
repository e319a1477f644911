use leptos::prelude::*;
use saviour_site_core::content::*;
use saviour_site_core::types::Site;

use crate::components::*;

pub(super) fn render(site: &Site) -> String {
    let hero_kicker = format!("Empowering Education in {}", site.foundation.region);
    let hero_copy = format!(
        "{} identifies and rewards academically outstanding students in Warri, Delta State \
         through scholarships, competitions, and comprehensive educational support.",
        site.foundation.name
    );
    let cta_copy = format!(
        "Your support can transform a student's life. Partner with {} to create lasting \
         educational impact in {}.",
        site.foundation.name, site.foundation.region
    );

    view! {
        <Navigation foundation_name=site.foundation.name.clone()/>
        <main>
            <section class="hero">
                <div class="hero-inner">
                    <div class="hero-text">
                        <span class="hero-kicker">{hero_kicker}</span>
                        <h1>"Building Tomorrow's Leaders Through Academic Excellence"</h1>
                        <p class="hero-lede">{hero_copy}</p>
                        <div class="button-row">
                            <a href="/contact" class="btn btn-accent">"Support Our Mission"</a>
                            <a href="/programs" class="btn btn-outline">"Our Programs"</a>
                        </div>
                    </div>
                    <div class="hero-media">
                        <img
                            src=HOME_HERO_IMAGE
                            alt="Students celebrating academic achievement"
                            class="content-image"
                        />
                        <div class="hero-badge">
                            <p class="stat-value">"500+"</p>
                            <p class="stat-label">"Students Empowered"</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section">
                <SectionHeading kicker="About Us" title="Transforming Lives Through Education"/>
                <p class="section-lede">
                    "Founded with a vision to nurture academic excellence, Saviour Foundation \
                     has been at the forefront of educational empowerment in Delta State. We \
                     believe every child deserves the opportunity to reach their full potential."
                </p>
            </section>

            <section class="section section-muted">
                <SectionHeading kicker="What We Do" title="Our Programs & Initiatives"/>
                <div class="card-grid cols-4">
                    {HOME_HIGHLIGHTS
                        .iter()
                        .map(|card| view! { <IconCardView card=card/> })
                        .collect_view()}
                </div>
                <div class="section-cta">
                    <a href="/programs" class="btn btn-outline">"View All Programs"</a>
                </div>
            </section>

            <section class="stats-strip">
                <div class="card-grid cols-4">
                    {HOME_STATS
                        .iter()
                        .map(|stat| view! { <StatCard stat=stat/> })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="split">
                    <img
                        src=HOME_EVENT_IMAGE
                        alt="Academic competition event"
                        class="content-image"
                    />
                    <div>
                        <span class="kicker">"Upcoming Event"</span>
                        <h2>{UPCOMING_EVENT.title}</h2>
                        <p>
                            "Join us this May for our flagship event that brings together the \
                             brightest minds from primary and secondary schools across Delta \
                             State. Students compete in various academic disciplines for \
                             scholarships and prizes."
                        </p>
                        <ul class="dot-list">
                            <li>"Multiple academic categories"</li>
                            <li>"Cash prizes and scholarships"</li>
                            <li>"Educational materials for participants"</li>
                        </ul>
                        <a href="/events" class="btn btn-primary">"Learn More About This Event"</a>
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="section-heading">
                    <h2>"Join Us in Shaping the Future"</h2>
                </div>
                <p class="section-lede">{cta_copy}</p>
                <div class="button-row centered">
                    <a href="/contact" class="btn btn-accent">"Become a Partner"</a>
                    <a href="/sponsors" class="btn btn-outline">"View Our Sponsors"</a>
                </div>
            </section>
        </main>
        <Footer site=site.clone()/>
    }
    .to_html()
}
