//! Compiled-in content registry.
//!
//! Every repeated section of the site is driven by one of these literal
//! arrays. Ordering is meaningful where noted (timeline, schedule); for
//! card grids it is simply the order cards appear on screen. Copy edits
//! happen here, not in the renderers.

use crate::types::*;

/// Fallback image for entries that ship without one
pub const PLACEHOLDER_IMAGE: &str = "/assets/images/placeholder.svg";

// ---------------------------------------------------------------------------
// Page metadata
// ---------------------------------------------------------------------------

pub fn page_meta(route: Route) -> PageMeta {
    match route {
        Route::Home => PageMeta {
            title: "Saviour Foundation | Empowering Education in Delta State, Nigeria",
            description: "Saviour Foundation identifies and rewards academically outstanding \
                          primary and secondary school students in Warri, Delta State through \
                          scholarships, competitions, and educational support.",
        },
        Route::About => PageMeta {
            title: "About Us | Saviour Foundation",
            description: "Learn about Saviour Foundation's mission to empower education in \
                          Delta State, Nigeria through scholarships and academic competitions.",
        },
        Route::Programs => PageMeta {
            title: "Our Programs | Saviour Foundation",
            description: "Explore Saviour Foundation's programs including academic competitions, \
                          scholarships, educational materials support, and student motivation \
                          initiatives.",
        },
        Route::Impact => PageMeta {
            title: "Our Impact | Saviour Foundation",
            description: "Discover the impact of Saviour Foundation - students supported, \
                          schools reached, and scholarships awarded in Delta State, Nigeria.",
        },
        Route::Events => PageMeta {
            title: "Events | Saviour Foundation",
            description: "Upcoming events and academic competitions organized by Saviour \
                          Foundation in Delta State, Nigeria.",
        },
        Route::Sponsors => PageMeta {
            title: "Sponsors & Partners | Saviour Foundation",
            description: "Learn about sponsorship opportunities and partnership with Saviour \
                          Foundation to support education in Delta State, Nigeria.",
        },
        Route::Contact => PageMeta {
            title: "Contact Us | Saviour Foundation",
            description: "Get in touch with Saviour Foundation - school registration, \
                          sponsorship, partnership and volunteer inquiries welcome.",
        },
    }
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

pub const HOME_HIGHLIGHTS: [IconCard; 4] = [
    IconCard {
        icon: "trophy",
        title: "Academic Competitions",
        description: "Inter-school competitions that challenge and reward intellectual excellence.",
    },
    IconCard {
        icon: "graduation-cap",
        title: "Scholarships",
        description: "Financial support enabling outstanding students to pursue their education.",
    },
    IconCard {
        icon: "book-open",
        title: "Educational Materials",
        description: "Providing textbooks and learning resources to students in need.",
    },
    IconCard {
        icon: "users",
        title: "Student Motivation",
        description: "Programs designed to inspire and encourage academic achievement.",
    },
];

pub const HOME_STATS: [Stat; 4] = [
    Stat {
        value: "500+",
        label: "Students Supported",
        description: None,
    },
    Stat {
        value: "50+",
        label: "Schools Reached",
        description: None,
    },
    Stat {
        value: "100+",
        label: "Scholarships Awarded",
        description: None,
    },
    Stat {
        value: "5",
        label: "Years of Impact",
        description: None,
    },
];

pub const HOME_HERO_IMAGE: &str = "/assets/images/hero-students.svg";
pub const HOME_EVENT_IMAGE: &str = "/assets/images/competition.svg";

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

pub const ABOUT_VALUES: [IconCard; 3] = [
    IconCard {
        icon: "target",
        title: "Our Mission",
        description: "To identify, nurture, and reward academically outstanding students in \
                      primary and secondary schools through competitions, scholarships, and \
                      comprehensive educational support programs.",
    },
    IconCard {
        icon: "eye",
        title: "Our Vision",
        description: "To become the leading foundation in Delta State for educational \
                      empowerment, creating a generation of confident, knowledgeable leaders \
                      who will drive positive change in their communities.",
    },
    IconCard {
        icon: "heart",
        title: "Our Values",
        description: "Excellence, integrity, equity, and compassion guide everything we do. \
                      We believe every child deserves access to quality education regardless \
                      of their background.",
    },
];

pub const ABOUT_STORY_IMAGE: &str = "/assets/images/scholarship.svg";

pub const ABOUT_STORY: [&str; 3] = [
    "Saviour Foundation was established in Warri, Delta State, driven by the belief that \
     education is the most powerful tool for transforming lives and communities. We recognized \
     that many talented students in our region lacked the resources and recognition they \
     deserved.",
    "What began as a small initiative to reward academic excellence has grown into a \
     comprehensive foundation that touches the lives of hundreds of students annually. Through \
     inter-school competitions, scholarships, and educational support, we are building a legacy \
     of academic achievement.",
    "Today, Saviour Foundation stands as a beacon of hope for students across Delta State, \
     proving that with the right support and encouragement, every child can achieve greatness.",
];

pub const FOUNDER_NAME: &str = "Queen OgheneFegor Macbay";
pub const FOUNDER_IMAGE: &str = "/assets/images/founder.svg";

pub const FOUNDER_BIO: [&str; 3] = [
    "Queen OgheneFegor Macbay is the visionary founder of Saviour Foundation. Her passion for \
     education and commitment to youth development led her to establish this organization with \
     the goal of creating opportunities for academically gifted students.",
    "Under her leadership, Saviour Foundation has grown from a local initiative to a recognized \
     force for educational empowerment in Delta State. Her dedication to the cause has inspired \
     countless students to pursue academic excellence.",
    "\u{201c}Every child has potential. Our job is to help them discover it and provide the \
     support they need to flourish,\u{201d} says Queen OgheneFegor Macbay.",
];

/// Chronological, earliest first
pub const ABOUT_TIMELINE: [Milestone; 5] = [
    Milestone {
        year: "2021",
        title: "Foundation Established",
        description: "Saviour Foundation was founded in Warri, Delta State with a vision to \
                      transform education.",
    },
    Milestone {
        year: "2022",
        title: "First Competition",
        description: "Launched our inaugural inter-school academic competition with 20 \
                      participating schools.",
    },
    Milestone {
        year: "2023",
        title: "Scholarship Program",
        description: "Introduced comprehensive scholarship programs supporting students through \
                      secondary education.",
    },
    Milestone {
        year: "2024",
        title: "Expanded Reach",
        description: "Extended programs to over 50 schools across Delta State, impacting \
                      hundreds of students.",
    },
    Milestone {
        year: "2025",
        title: "Continued Growth",
        description: "Strengthened partnerships and launched new initiatives for educational \
                      materials support.",
    },
];

// ---------------------------------------------------------------------------
// Programs
// ---------------------------------------------------------------------------

pub const PROGRAMS: [Program; 4] = [
    Program {
        icon: "trophy",
        title: "Inter-School Academic Competitions",
        description: "Our flagship program brings together the brightest students from primary \
                      and secondary schools across Delta State to compete in various academic \
                      disciplines.",
        features: &[
            "Annual competitions in Mathematics, English, Sciences, and General Knowledge",
            "Multiple rounds including preliminary, semi-final, and grand finale",
            "Cash prizes and trophies for top performers",
            "Recognition certificates for all participants",
            "Schools receive awards for outstanding performance",
        ],
        image: Some("/assets/images/competition.svg"),
    },
    Program {
        icon: "graduation-cap",
        title: "Scholarships & Cash Awards",
        description: "We provide financial support to academically outstanding students to help \
                      them pursue their educational goals without financial barriers.",
        features: &[
            "Full and partial scholarships for secondary education",
            "Performance-based cash awards",
            "School fees support for exceptional students",
            "Tuition assistance for tertiary education preparation",
            "Emergency educational support fund",
        ],
        image: Some("/assets/images/scholarship.svg"),
    },
    Program {
        icon: "book-open",
        title: "Educational Materials Support",
        description: "We ensure students have access to the learning resources they need to \
                      succeed academically.",
        features: &[
            "Distribution of textbooks and workbooks",
            "School supplies including notebooks, pens, and mathematical sets",
            "Library support for partner schools",
            "Digital learning resources where applicable",
            "Examination preparation materials",
        ],
        image: Some("/assets/images/hero-students.svg"),
    },
    Program {
        icon: "lightbulb",
        title: "Student Motivation Initiatives",
        description: "Beyond material support, we inspire students to dream big and work hard \
                      toward their goals.",
        features: &[
            "Motivational seminars and workshops",
            "Career guidance and counseling sessions",
            "Mentorship programs connecting students with professionals",
            "Leadership development activities",
            "Success story sharing from past beneficiaries",
        ],
        image: None,
    },
];

// ---------------------------------------------------------------------------
// Impact
// ---------------------------------------------------------------------------

pub const IMPACT_STATS: [Stat; 6] = [
    Stat {
        value: "500+",
        label: "Students Supported",
        description: Some("Young minds empowered through our programs"),
    },
    Stat {
        value: "50+",
        label: "Schools Reached",
        description: Some("Educational institutions across Delta State"),
    },
    Stat {
        value: "100+",
        label: "Scholarships Awarded",
        description: Some("Financial support provided to students"),
    },
    Stat {
        value: "N5M+",
        label: "Total Investment",
        description: Some("Invested in educational empowerment"),
    },
    Stat {
        value: "0",
        label: "Competitions Held",
        description: Some("First event May 2026"),
    },
    Stat {
        value: "1000+",
        label: "Books Distributed",
        description: Some("Educational materials provided"),
    },
];

pub const IMPACT_STORIES: [Story; 3] = [
    Story {
        title: "From Competition Winner to University Scholar",
        description: "Our 2026 competition will award full scholarships; success stories will \
                      be shared here as students progress to university.",
        image: Some("/assets/images/scholarship.svg"),
    },
    Story {
        title: "School Transforms Through Partnership",
        description: "One of our partner schools saw a 40% improvement in academic performance \
                      after participating in our programs for two consecutive years.",
        image: Some("/assets/images/competition.svg"),
    },
    Story {
        title: "Community Impact Beyond Students",
        description: "Our educational materials distribution has benefited not just students \
                      but entire families, creating a culture of learning in local communities.",
        image: None,
    },
];

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

pub const UPCOMING_EVENT: Event = Event {
    title: "Inter-School Academic Competition 2026",
    date: "May 15-16, 2026",
    time: "9:00 AM - 4:00 PM",
    venue: "Warri Convention Center, Delta State",
    description: "Our flagship annual event brings together the brightest minds from primary \
                  and secondary schools across Delta State. Students compete in various \
                  academic disciplines for scholarships, cash prizes, and recognition.",
    categories: &[
        "Mathematics & Sciences Challenge",
        "English Language & Literature Quiz",
        "General Knowledge Competition",
        "Spelling Bee",
        "Debate Competition",
    ],
    benefits: &[
        "Cash prizes totaling over N1,000,000",
        "Scholarships for top performers",
        "Educational materials for all participants",
        "Recognition certificates",
        "Networking with educational leaders",
    ],
};

/// Running order within each day is the on-screen order
pub const EVENT_SCHEDULE: [ScheduleDay; 2] = [
    ScheduleDay {
        day: "Day 1 - May 15",
        items: &[
            ScheduleItem { time: "8:00 AM", activity: "Registration & Accreditation" },
            ScheduleItem { time: "9:00 AM", activity: "Opening Ceremony" },
            ScheduleItem { time: "10:00 AM", activity: "Preliminary Rounds Begin" },
            ScheduleItem { time: "12:30 PM", activity: "Lunch Break" },
            ScheduleItem { time: "1:30 PM", activity: "Preliminary Rounds Continue" },
            ScheduleItem { time: "4:00 PM", activity: "Day 1 Concludes" },
        ],
    },
    ScheduleDay {
        day: "Day 2 - May 16",
        items: &[
            ScheduleItem { time: "9:00 AM", activity: "Semi-Final Rounds" },
            ScheduleItem { time: "11:30 AM", activity: "Final Preparations" },
            ScheduleItem { time: "12:00 PM", activity: "Grand Finale" },
            ScheduleItem { time: "2:00 PM", activity: "Award Ceremony" },
            ScheduleItem { time: "3:30 PM", activity: "Closing Remarks" },
        ],
    },
];

/// The foundation launched in 2026; filled in after the first events run.
pub const PAST_EVENTS: [Story; 0] = [];

pub const PAST_EVENTS_EMPTY_MESSAGE: &str =
    "We launched in 2026. Our first event is the Inter-School Academic Competition in May. \
     Past events will appear here after our events take place.";

// ---------------------------------------------------------------------------
// Sponsors
// ---------------------------------------------------------------------------

pub const SPONSORSHIP_TIERS: [Tier; 4] = [
    Tier {
        name: "Platinum Sponsor",
        amount: "N1,000,000+",
        description: "Lead partner for our flagship events",
        benefits: &[
            "Premier branding at all events",
            "Naming rights for competition category",
            "VIP seating at all events",
            "Recognition in all marketing materials",
            "Opportunity to present awards",
            "Direct engagement with students",
            "Detailed impact reports",
        ],
        highlighted: true,
    },
    Tier {
        name: "Gold Sponsor",
        amount: "N500,000 - N999,999",
        description: "Major supporter of educational programs",
        benefits: &[
            "Prominent branding at events",
            "Recognition in marketing materials",
            "Reserved seating at events",
            "Opportunity to interact with students",
            "Quarterly impact updates",
            "Certificate of partnership",
        ],
        highlighted: false,
    },
    Tier {
        name: "Silver Sponsor",
        amount: "N200,000 - N499,999",
        description: "Valued contributor to student success",
        benefits: &[
            "Logo placement at events",
            "Social media recognition",
            "Event attendance invitations",
            "Annual impact report",
            "Certificate of appreciation",
        ],
        highlighted: false,
    },
    Tier {
        name: "Bronze Sponsor",
        amount: "N50,000 - N199,999",
        description: "Supporting friend of education",
        benefits: &[
            "Recognition at events",
            "Social media mention",
            "Certificate of appreciation",
            "Newsletter acknowledgment",
        ],
        highlighted: false,
    },
];

pub const PARTNER_TYPES: [IconCard; 4] = [
    IconCard {
        icon: "building",
        title: "Corporate Partners",
        description: "Businesses committed to corporate social responsibility in education can \
                      partner with us to make a lasting impact on young minds.",
    },
    IconCard {
        icon: "users",
        title: "Educational Institutions",
        description: "Schools and universities can collaborate with us to extend educational \
                      opportunities and share resources.",
    },
    IconCard {
        icon: "heart",
        title: "Individual Donors",
        description: "Individuals passionate about education can support our programs through \
                      donations of any size.",
    },
    IconCard {
        icon: "trophy",
        title: "Government Agencies",
        description: "We welcome partnerships with government bodies to amplify educational \
                      initiatives in Delta State.",
    },
];

pub const IMPACT_AREAS: [&str; 6] = [
    "Funding scholarships for outstanding students",
    "Providing prizes for academic competitions",
    "Distributing educational materials to schools",
    "Supporting motivational programs and workshops",
    "Enabling infrastructure for competition events",
    "Expanding reach to more schools in Delta State",
];

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

pub const FOOTER_FOUNDATION_LINKS: [(Route, &str); 4] = [
    (Route::About, "About Us"),
    (Route::Programs, "Our Programs"),
    (Route::Impact, "Our Impact"),
    (Route::Events, "Events"),
];

pub const FOOTER_INVOLVED_LINKS: [(Route, &str); 4] = [
    (Route::Sponsors, "Become a Sponsor"),
    (Route::Contact, "Partner With Us"),
    (Route::Contact, "Volunteer"),
    (Route::Contact, "Donate"),
];

/// Every image path the registry references. The validator checks these
/// against the assets directory.
pub fn image_refs() -> Vec<&'static str> {
    let mut refs = vec![
        HOME_HERO_IMAGE,
        HOME_EVENT_IMAGE,
        FOUNDER_IMAGE,
        ABOUT_STORY_IMAGE,
        "/assets/images/logo.svg",
        PLACEHOLDER_IMAGE,
    ];
    refs.extend(PROGRAMS.iter().filter_map(|p| p.image));
    refs.extend(IMPACT_STORIES.iter().filter_map(|s| s.image));
    refs.sort_unstable();
    refs.dedup();
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique_titles(titles: &[&str]) {
        let mut sorted = titles.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), titles.len(), "duplicate title in {:?}", titles);
    }

    #[test]
    fn every_route_has_meta() {
        for route in Route::ALL {
            let meta = page_meta(route);
            assert!(meta.title.contains("Saviour Foundation"));
            assert!(!meta.description.is_empty());
        }
    }

    #[test]
    fn card_titles_are_unique_render_keys() {
        assert_unique_titles(&HOME_HIGHLIGHTS.map(|c| c.title));
        assert_unique_titles(&ABOUT_VALUES.map(|c| c.title));
        assert_unique_titles(&PROGRAMS.map(|p| p.title));
        assert_unique_titles(&IMPACT_STORIES.map(|s| s.title));
        assert_unique_titles(&SPONSORSHIP_TIERS.map(|t| t.name));
        assert_unique_titles(&PARTNER_TYPES.map(|c| c.title));
    }

    #[test]
    fn timeline_is_chronological() {
        let years: Vec<i32> = ABOUT_TIMELINE
            .iter()
            .map(|m| m.year.parse().unwrap())
            .collect();
        assert!(years.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn schedule_days_are_nonempty_and_ordered() {
        assert_eq!(EVENT_SCHEDULE.len(), 2);
        for day in &EVENT_SCHEDULE {
            assert!(!day.items.is_empty());
        }
        assert_eq!(EVENT_SCHEDULE[0].items[0].activity, "Registration & Accreditation");
        assert_eq!(
            EVENT_SCHEDULE[1].items.last().unwrap().activity,
            "Closing Remarks"
        );
    }

    #[test]
    fn exactly_one_tier_is_highlighted() {
        let highlighted = SPONSORSHIP_TIERS.iter().filter(|t| t.highlighted).count();
        assert_eq!(highlighted, 1);
        assert!(SPONSORSHIP_TIERS[0].highlighted);
    }

    #[test]
    fn every_program_lists_features() {
        for program in &PROGRAMS {
            assert!(program.features.len() >= 4, "{} is underspecified", program.title);
        }
    }

    #[test]
    fn image_refs_are_rooted_and_deduplicated() {
        let refs = image_refs();
        assert!(refs.iter().all(|r| r.starts_with("/assets/images/")));
        let mut sorted = refs.clone();
        sorted.dedup();
        assert_eq!(sorted.len(), refs.len());
        assert!(refs.contains(&PLACEHOLDER_IMAGE));
    }
}
