use leptos::prelude::*;
use saviour_site_core::content::*;
use saviour_site_core::types::Site;

use crate::components::*;

pub(super) fn render(site: &Site) -> String {
    let hero_copy = format!(
        "Dedicated to transforming lives through education and nurturing the academic \
         potential of young minds in {}.",
        site.foundation.region
    );

    view! {
        <Navigation foundation_name=site.foundation.name.clone()/>
        <main>
            <section class="page-hero">
                <h1>{format!("About {}", site.foundation.name)}</h1>
                <p>{hero_copy}</p>
            </section>

            <section class="section">
                <div class="card-grid cols-3">
                    {ABOUT_VALUES
                        .iter()
                        .map(|card| view! { <IconCardView card=card/> })
                        .collect_view()}
                </div>
            </section>

            <section class="section section-muted">
                <div class="split">
                    <div>
                        <SectionHeading kicker="Our Story" title="Born from a Passion for Education"/>
                        {ABOUT_STORY
                            .iter()
                            .map(|paragraph| view! { <p class="prose">{*paragraph}</p> })
                            .collect_view()}
                    </div>
                    <img
                        src=ABOUT_STORY_IMAGE
                        alt="Student receiving scholarship award"
                        class="content-image"
                    />
                </div>
            </section>

            <section class="section">
                <div class="split">
                    <div>
                        <SectionHeading kicker="Leadership" title="Meet Our Founder"/>
                        <h3 class="founder-name">{FOUNDER_NAME}</h3>
                        {FOUNDER_BIO
                            .iter()
                            .map(|paragraph| view! { <p class="prose">{*paragraph}</p> })
                            .collect_view()}
                    </div>
                    <img src=FOUNDER_IMAGE alt=format!("{} - Founder", FOUNDER_NAME) class="content-image"/>
                </div>
            </section>

            <section class="section section-muted">
                <SectionHeading kicker="Our Journey" title="Milestones of Impact"/>
                <div class="timeline">
                    {ABOUT_TIMELINE
                        .iter()
                        .map(|milestone| {
                            view! {
                                <div class="timeline-entry">
                                    <span class="timeline-year">{milestone.year}</span>
                                    <div>
                                        <h3>{milestone.title}</h3>
                                        <p>{milestone.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta-band">
                <div>
                    <h2>"Ready to Make a Difference?"</h2>
                    <p>"Join us in empowering the next generation of leaders."</p>
                </div>
                <a href="/contact" class="btn btn-accent">"Partner With Us"</a>
            </section>
        </main>
        <Footer site=site.clone()/>
    }
    .to_html()
}
