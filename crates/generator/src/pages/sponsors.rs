use leptos::prelude::*;
use saviour_site_core::content::*;
use saviour_site_core::types::Site;

use crate::components::*;

pub(super) fn render(site: &Site) -> String {
    let why_copy = format!(
        "When you partner with {}, you're not just sponsoring an event, you're investing in \
         the future of Delta State. Your support directly impacts students, schools, and \
         communities.",
        site.foundation.name
    );
    let cta_copy = format!(
        "Contact us today to discuss how your organization can partner with {} to transform \
         education in Delta State.",
        site.foundation.name
    );

    view! {
        <Navigation foundation_name=site.foundation.name.clone()/>
        <main>
            <section class="page-hero">
                <h1>"Sponsors & Partners"</h1>
                <p>
                    "Join us in transforming education. Your partnership can change lives and \
                     build futures."
                </p>
            </section>

            <section class="section">
                <div class="split">
                    <div>
                        <SectionHeading kicker="Why Partner With Us" title="Make a Meaningful Impact"/>
                        <p class="prose">{why_copy}</p>
                        <h3>"Your Sponsorship Supports:"</h3>
                        <CheckList items=&IMPACT_AREAS/>
                    </div>
                    <div class="card-grid cols-2">
                        {PARTNER_TYPES
                            .iter()
                            .map(|card| view! { <IconCardView card=card/> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <SectionHeading kicker="Sponsorship Levels" title="Choose Your Level of Impact"/>
                <p class="section-lede">
                    "We offer flexible sponsorship packages to accommodate different budgets \
                     and goals. Every contribution makes a difference."
                </p>
                <div class="card-grid cols-4">
                    {SPONSORSHIP_TIERS
                        .iter()
                        .map(|tier| {
                            let card_class = if tier.highlighted {
                                "tier-card tier-highlighted"
                            } else {
                                "tier-card"
                            };
                            view! {
                                <div class=card_class>
                                    {tier
                                        .highlighted
                                        .then(|| view! { <span class="tier-flag">"Most Popular"</span> })}
                                    <h3>{tier.name}</h3>
                                    <p class="tier-amount">{tier.amount}</p>
                                    <p>{tier.description}</p>
                                    <CheckList items=tier.benefits/>
                                    <a href="/contact" class="btn btn-primary btn-block">
                                        "Become a Sponsor"
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <SectionHeading kicker="Our Supporters" title="Thank You to Our Partners"/>
                <div class="empty-state">
                    <h3>"Become Our First Featured Sponsor"</h3>
                    <p>
                        "We are actively seeking partners who share our vision for educational \
                         excellence. Your logo and recognition could be featured here."
                    </p>
                    <a href="/contact" class="btn btn-accent">"Partner With Us"</a>
                </div>
            </section>

            <section class="section section-muted">
                <SectionHeading kicker="Other Ways to Help" title="In-Kind Donations Welcome"/>
                <p class="section-lede">
                    "Can't make a financial contribution? We also welcome donations of \
                     educational materials, textbooks, school supplies, and other resources \
                     that can benefit students."
                </p>
                <div class="section-cta">
                    <a href="/contact" class="btn btn-primary">"Discuss In-Kind Donation"</a>
                </div>
            </section>

            <section class="section section-dark">
                <div class="section-heading">
                    <h2>"Ready to Make a Difference?"</h2>
                </div>
                <p class="section-lede">{cta_copy}</p>
                <div class="button-row centered">
                    <a href="/contact" class="btn btn-accent">"Contact Us Today"</a>
                    <a href="/programs" class="btn btn-outline">"Learn About Our Programs"</a>
                </div>
            </section>
        </main>
        <Footer site=site.clone()/>
    }
    .to_html()
}
