use leptos::prelude::*;
use saviour_site_core::content::*;
use saviour_site_core::types::Site;

use crate::components::*;

pub(super) fn render(site: &Site) -> String {
    view! {
        <Navigation foundation_name=site.foundation.name.clone()/>
        <main>
            <section class="page-hero">
                <h1>"Our Programs"</h1>
                <p>
                    "Comprehensive initiatives designed to identify, nurture, and reward \
                     academic excellence among students in Delta State."
                </p>
            </section>

            <section class="section">
                <SectionHeading kicker="What We Offer" title="Four Pillars of Support"/>
                <p class="section-lede">
                    "Our programs work together to create a holistic approach to educational \
                     empowerment, addressing both recognition and practical support needs."
                </p>
                <div class="card-grid cols-4">
                    {PROGRAMS
                        .iter()
                        .map(|program| {
                            view! {
                                <div class="icon-card">
                                    <IconBadge icon=program.icon/>
                                    <h3>{program.title}</h3>
                                    <p>{program.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            // Alternating detail sections, one per program
            {PROGRAMS
                .iter()
                .enumerate()
                .map(|(index, program)| {
                    let section_class = if index % 2 == 0 {
                        "section section-muted program-detail"
                    } else {
                        "section program-detail"
                    };
                    view! {
                        <section class=section_class>
                            <div class="split">
                                <div>
                                    <IconBadge icon=program.icon/>
                                    <h2>{program.title}</h2>
                                    <p class="prose">{program.description}</p>
                                    <CheckList items=program.features/>
                                </div>
                                {content_image(program.image, program.title)}
                            </div>
                        </section>
                    }
                })
                .collect_view()}

            <section class="cta-band">
                <div>
                    <h2>"How Schools Can Participate"</h2>
                    <p>
                        "Schools in Delta State interested in participating in our programs can \
                         register their students for upcoming competitions and scholarship \
                         opportunities."
                    </p>
                </div>
                <div class="button-row">
                    <a href="/contact" class="btn btn-accent">"Register Your School"</a>
                    <a href="/events" class="btn btn-outline">"View Upcoming Events"</a>
                </div>
            </section>
        </main>
        <Footer site=site.clone()/>
    }
    .to_html()
}
