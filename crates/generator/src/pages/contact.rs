use leptos::prelude::*;
use saviour_site_core::state::{self, InquiryType};
use saviour_site_core::types::{ContactCard, Site};

use crate::components::*;

/// Contact-info cards are the one registry built at render time, because
/// their detail lines come from site.toml rather than compiled-in copy.
fn contact_cards(site: &Site) -> Vec<ContactCard> {
    vec![
        ContactCard {
            icon: "map-pin",
            title: "Our Location",
            details: vec![site.contact.address.clone()],
        },
        ContactCard {
            icon: "mail",
            title: "Email Us",
            details: vec![site.contact.email.clone()],
        },
        ContactCard {
            icon: "phone",
            title: "Call Us",
            details: site.contact.phones.clone(),
        },
        ContactCard {
            icon: "clock",
            title: "Office Hours",
            details: site.contact.office_hours.clone(),
        },
    ]
}

pub(super) fn render(site: &Site) -> String {
    let cards = contact_cards(site);
    let map_note = format!("{} is based in {}", site.foundation.name, site.contact.address);

    view! {
        <Navigation foundation_name=site.foundation.name.clone()/>
        <main>
            <section class="page-hero">
                <h1>"Contact Us"</h1>
                <p>
                    "Have questions or want to get involved? We'd love to hear from you. \
                     Reach out to us through any of the channels below."
                </p>
            </section>

            <section class="section">
                <div class="card-grid cols-4">
                    {cards
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="icon-card centered">
                                    <IconBadge icon=card.icon/>
                                    <h3>{card.title}</h3>
                                    {card
                                        .details
                                        .into_iter()
                                        .map(|line| view! { <p>{line}</p> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="split">
                    <div class="form-card">
                        <h2>"Send Us a Message"</h2>
                        <p>
                            "Fill out the form below and we'll get back to you as soon as \
                             possible."
                        </p>
                        <form id="contact-form" class="contact-form">
                            <div class="field-row">
                                <div class="field">
                                    <label for="first-name">"First Name"</label>
                                    <input
                                        id="first-name"
                                        name="first_name"
                                        type="text"
                                        placeholder="John"
                                        required=true
                                    />
                                </div>
                                <div class="field">
                                    <label for="last-name">"Last Name"</label>
                                    <input
                                        id="last-name"
                                        name="last_name"
                                        type="text"
                                        placeholder="Doe"
                                        required=true
                                    />
                                </div>
                            </div>
                            <div class="field">
                                <label for="email">"Email Address"</label>
                                <input
                                    id="email"
                                    name="email"
                                    type="email"
                                    placeholder="john@example.com"
                                    required=true
                                />
                            </div>
                            <div class="field">
                                <label for="phone">"Phone Number (Optional)"</label>
                                <input
                                    id="phone"
                                    name="phone"
                                    type="tel"
                                    placeholder="+234 800 000 0000"
                                />
                            </div>
                            <div class="field">
                                <label for="inquiry-type">"Type of Inquiry"</label>
                                <select id="inquiry-type" name="inquiry_type" required=true>
                                    <option value="">"Select an option"</option>
                                    {InquiryType::ALL
                                        .iter()
                                        .map(|inquiry| {
                                            view! {
                                                <option value=inquiry.label()>{inquiry.label()}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="field">
                                <label for="organization">"Organization/School (Optional)"</label>
                                <input
                                    id="organization"
                                    name="organization"
                                    type="text"
                                    placeholder="Your organization or school name"
                                />
                            </div>
                            <div class="field">
                                <label for="message">"Your Message"</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="5"
                                    placeholder="Tell us how we can help you..."
                                    required=true
                                ></textarea>
                            </div>
                            <button id="contact-submit" type="submit" class="btn btn-primary btn-block">
                                {state::SUBMIT_LABEL}
                            </button>
                        </form>
                        <div id="form-success" class="form-success" hidden=true>
                            <h3>{state::SUCCESS_HEADING}</h3>
                            <p>{state::SUCCESS_BODY}</p>
                            <button id="send-another" type="button" class="btn btn-outline">
                                {state::RESET_LABEL}
                            </button>
                        </div>
                    </div>

                    <div class="contact-aside">
                        <h2>"Get in Touch"</h2>
                        <p class="prose">
                            "Whether you're a school looking to register students for our \
                             competitions, a potential sponsor, or someone interested in \
                             supporting our mission, we welcome your inquiry."
                        </p>
                        <h3>"For Schools"</h3>
                        <p class="prose">
                            "Interested in registering your school for our upcoming academic \
                             competition? Contact us with your school details and we'll provide \
                             registration information."
                        </p>
                        <h3>"For Sponsors & Partners"</h3>
                        <p class="prose">
                            "Looking to make an impact through educational support? We offer \
                             various partnership opportunities. Let's discuss how we can work \
                             together."
                        </p>
                        <h3>"For Volunteers"</h3>
                        <p class="prose">
                            "Want to contribute your time and skills? We always welcome \
                             dedicated volunteers who share our passion for education."
                        </p>
                        <div class="benefit-card">
                            <h3>"Quick Response Guarantee"</h3>
                            <p>
                                "We aim to respond to all inquiries within 24-48 business \
                                 hours. For urgent matters, please call our office directly."
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <SectionHeading kicker="Find Us" title="Find Us in Warri"/>
                <div class="empty-state">
                    <IconBadge icon="map-pin"/>
                    <p class="map-note">{map_note}</p>
                    <p>"Contact us for detailed directions to our office"</p>
                </div>
            </section>

            <section class="cta-band">
                <div>
                    <h2>"Follow Our Journey"</h2>
                    <p>"Stay updated with our latest events and impact stories."</p>
                </div>
                <div class="button-row">
                    <a href="/events" class="btn btn-accent">"Upcoming Events"</a>
                    <a href="/impact" class="btn btn-outline">"Our Impact"</a>
                </div>
            </section>
        </main>
        <Footer site=site.clone()/>
    }
    .to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_site;

    fn rendered() -> String {
        render(&test_site())
    }

    /// Slice out the element tag that carries the given id attribute.
    fn element_tag<'a>(html: &'a str, id: &str) -> &'a str {
        let marker = format!("id=\"{}\"", id);
        let at = html.find(&marker).unwrap_or_else(|| panic!("no element {id}"));
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..=end]
    }

    #[test]
    fn required_fields_carry_the_native_attribute() {
        let html = rendered();
        for id in ["first-name", "last-name", "email", "inquiry-type", "message"] {
            assert!(
                element_tag(&html, id).contains("required"),
                "{id} should be required"
            );
        }
    }

    #[test]
    fn optional_fields_do_not() {
        let html = rendered();
        for id in ["phone", "organization"] {
            assert!(
                !element_tag(&html, id).contains("required"),
                "{id} should be optional"
            );
        }
    }

    #[test]
    fn inquiry_select_offers_every_category_in_order() {
        let html = rendered();
        let select_at = html.find("id=\"inquiry-type\"").unwrap();
        let after = &html[select_at..];
        let select_html = &after[..after.find("</select>").unwrap()];
        assert_eq!(select_html.matches("<option").count(), InquiryType::ALL.len() + 1);
        let mut last = 0;
        for inquiry in InquiryType::ALL {
            let needle = format!(">{}</option>", inquiry.label());
            let pos = select_html[last..]
                .find(&needle)
                .unwrap_or_else(|| panic!("{} missing", inquiry.label()));
            last += pos;
        }
    }

    #[test]
    fn confirmation_panel_is_present_but_hidden() {
        let html = rendered();
        let panel = element_tag(&html, "form-success");
        assert!(panel.contains("hidden"));
        assert!(html.contains(state::SUCCESS_HEADING));
        assert!(html.contains(state::RESET_LABEL));
    }

    #[test]
    fn submit_control_starts_in_the_idle_label() {
        let html = rendered();
        let form_at = html.find("id=\"contact-form\"").unwrap();
        let form_html = &html[form_at..html[form_at..].find("</form>").unwrap() + form_at];
        assert!(form_html.contains(state::SUBMIT_LABEL));
        assert!(!form_html.contains(state::SENDING_LABEL));
        let submit = element_tag(&html, "contact-submit");
        assert!(!submit.contains("disabled"));
    }

    #[test]
    fn form_has_no_action_target() {
        // Inputs are read and discarded; nothing is ever transmitted
        let html = rendered();
        let form = element_tag(&html, "contact-form");
        assert!(!form.contains("action="));
        assert!(!form.contains("method="));
    }

    #[test]
    fn office_hours_render_one_line_each() {
        let html = rendered();
        let site = test_site();
        for line in &site.contact.office_hours {
            assert!(html.contains(line.as_str()));
        }
    }
}
