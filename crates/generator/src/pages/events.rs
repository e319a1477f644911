use leptos::prelude::*;
use saviour_site_core::content::*;
use saviour_site_core::types::Site;

use crate::components::*;

pub(super) fn render(site: &Site) -> String {
    view! {
        <Navigation foundation_name=site.foundation.name.clone()/>
        <main>
            <section class="page-hero">
                <h1>"Events"</h1>
                <p>"Join us at our upcoming events and witness academic excellence in action."</p>
            </section>

            <section class="section">
                <span class="badge">"Featured Event"</span>
                <div class="split">
                    <div>
                        <h2>{UPCOMING_EVENT.title}</h2>
                        <ul class="event-facts">
                            <li class="event-fact">
                                <IconBadge icon="calendar"/>
                                {UPCOMING_EVENT.date}
                            </li>
                            <li class="event-fact">
                                <IconBadge icon="clock"/>
                                {UPCOMING_EVENT.time}
                            </li>
                            <li class="event-fact">
                                <IconBadge icon="map-pin"/>
                                {UPCOMING_EVENT.venue}
                            </li>
                        </ul>
                        <p class="prose">{UPCOMING_EVENT.description}</p>
                        <h3>"Competition Categories:"</h3>
                        <CheckList items=UPCOMING_EVENT.categories/>
                        <a href="/contact" class="btn btn-primary">"Register Your School"</a>
                    </div>
                    <div>
                        <img
                            src=HOME_EVENT_IMAGE
                            alt="Academic competition"
                            class="content-image"
                        />
                        <div class="benefit-card">
                            <h3>"What Participants Receive:"</h3>
                            <CheckList items=UPCOMING_EVENT.benefits/>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <SectionHeading kicker="Schedule" title="Event Schedule"/>
                <div class="card-grid cols-2">
                    {EVENT_SCHEDULE
                        .iter()
                        .map(|day| {
                            view! {
                                <div class="schedule-card">
                                    <h3>{day.day}</h3>
                                    <ul class="schedule-list">
                                        {day.items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <li>
                                                        <span class="schedule-time">{item.time}</span>
                                                        <span>{item.activity}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <SectionHeading kicker="Participation" title="Who Should Attend?"/>
                <div class="card-grid cols-3">
                    <div class="icon-card">
                        <IconBadge icon="users"/>
                        <h3>"Students"</h3>
                        <p>
                            "Primary and secondary school students from schools across Delta \
                             State who excel academically and want to showcase their abilities."
                        </p>
                    </div>
                    <div class="icon-card">
                        <IconBadge icon="book-open"/>
                        <h3>"Schools & Teachers"</h3>
                        <p>
                            "Educational institutions looking to motivate their students and \
                             gain recognition for academic excellence."
                        </p>
                    </div>
                    <div class="icon-card">
                        <IconBadge icon="trophy"/>
                        <h3>"Sponsors & Partners"</h3>
                        <p>
                            "Organizations interested in supporting education and connecting \
                             with talented young minds in Delta State."
                        </p>
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <SectionHeading kicker="Past Events" title="Recent Activities"/>
                {if PAST_EVENTS.is_empty() {
                    view! {
                        <p class="empty-state-note">{PAST_EVENTS_EMPTY_MESSAGE}</p>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="card-grid cols-3">
                            {PAST_EVENTS
                                .iter()
                                .map(|event| {
                                    view! {
                                        <div class="story-card">
                                            {content_image(event.image, event.title)}
                                            <div class="story-body">
                                                <h3>{event.title}</h3>
                                                <p>{event.description}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </section>

            <section class="cta-band">
                <div>
                    <h2>"Ready to Participate?"</h2>
                    <p>"Register your school or inquire about sponsorship opportunities."</p>
                </div>
                <div class="button-row">
                    <a href="/contact" class="btn btn-accent">"Register Now"</a>
                    <a href="/sponsors" class="btn btn-outline">"Become a Sponsor"</a>
                </div>
            </section>
        </main>
        <Footer site=site.clone()/>
    }
    .to_html()
}
