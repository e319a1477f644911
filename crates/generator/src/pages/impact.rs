use leptos::prelude::*;
use saviour_site_core::content::*;
use saviour_site_core::types::Site;

use crate::components::*;

pub(super) fn render(site: &Site) -> String {
    view! {
        <Navigation foundation_name=site.foundation.name.clone()/>
        <main>
            <section class="page-hero">
                <h1>"Our Impact"</h1>
                <p>
                    "Measuring success through the lives we touch and the futures we help \
                     build across Delta State."
                </p>
            </section>

            <section class="section">
                <span class="badge">"Goal for 2026"</span>
                <SectionHeading kicker="By The Numbers" title="Impact at a Glance"/>
                <div class="card-grid cols-3">
                    {IMPACT_STATS
                        .iter()
                        .map(|stat| view! { <StatCard stat=stat/> })
                        .collect_view()}
                </div>
            </section>

            <section class="section section-muted">
                <SectionHeading kicker="Success Stories" title="Stories of Transformation"/>
                <div class="card-grid cols-3">
                    {IMPACT_STORIES
                        .iter()
                        .map(|story| {
                            view! {
                                <div class="story-card">
                                    {content_image(story.image, story.title)}
                                    <div class="story-body">
                                        <h3>{story.title}</h3>
                                        <p>{story.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="empty-state">
                    <span class="kicker">"Stories to Come"</span>
                    <h2>"Voices of Impact"</h2>
                    <p>
                        "We launched in 2026. After our first programs, including the \
                         Inter-School Academic Competition in May, we'll share stories from \
                         students, schools, and partners here. Stay tuned."
                    </p>
                    <a href="/contact" class="btn btn-primary">"Get in touch"</a>
                </div>
            </section>

            <section class="section section-dark">
                <div class="split">
                    <div>
                        <h2>"Be Part of Our Impact Story"</h2>
                        <p>
                            "Every contribution, partnership, and act of support adds to our \
                             collective impact. Together, we can reach more students, support \
                             more schools, and transform more lives."
                        </p>
                        <div class="button-row">
                            <a href="/contact" class="btn btn-accent">"Support Our Work"</a>
                            <a href="/sponsors" class="btn btn-outline">"View Our Partners"</a>
                        </div>
                    </div>
                    <img
                        src=HOME_HERO_IMAGE
                        alt="Students benefiting from our programs"
                        class="content-image"
                    />
                </div>
            </section>
        </main>
        <Footer site=site.clone()/>
    }
    .to_html()
}
