use serde::{Deserialize, Serialize};

/// Complete site configuration, parsed from site.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub site: SiteMeta,
    pub foundation: Foundation,
    pub contact: ContactDetails,
}

/// Hosting and theming metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub domain: String,
    /// Accent color used for highlights and calls to action (#rrggbb)
    pub accent_color: String,
    /// Theme color exposed via the document head (#rrggbb)
    pub theme_color: String,
}

/// Organization identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Foundation {
    pub name: String,
    pub tagline: String,
    pub region: String,
}

/// Contact channels rendered on the contact page and in the footer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phones: Vec<String>,
    pub address: String,
    #[serde(default)]
    pub office_hours: Vec<String>,
}

/// The seven routes the site serves. Order here is nav order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Programs,
    Impact,
    Events,
    Sponsors,
    Contact,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::About,
        Route::Programs,
        Route::Impact,
        Route::Events,
        Route::Sponsors,
        Route::Contact,
    ];

    /// URL path served by the preview server
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Programs => "/programs",
            Route::Impact => "/impact",
            Route::Events => "/events",
            Route::Sponsors => "/sponsors",
            Route::Contact => "/contact",
        }
    }

    /// Relative file path in the static build output
    pub fn output_path(self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::About => "about/index.html",
            Route::Programs => "programs/index.html",
            Route::Impact => "impact/index.html",
            Route::Events => "events/index.html",
            Route::Sponsors => "sponsors/index.html",
            Route::Contact => "contact/index.html",
        }
    }

    /// Label shown in the navigation bar and footer
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Programs => "Programs",
            Route::Impact => "Impact",
            Route::Events => "Events",
            Route::Sponsors => "Sponsors",
            Route::Contact => "Contact",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        Route::ALL.into_iter().find(|r| r.path() == trimmed)
    }
}

/// Per-page document head metadata
#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

/// Headline statistic card
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    /// Present on the impact page, absent in the home-page strip
    pub description: Option<&'static str>,
}

/// Icon + title + description card (highlights, values, partner types)
#[derive(Debug, Clone, Copy)]
pub struct IconCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One of the foundation's four programs
#[derive(Debug, Clone, Copy)]
pub struct Program {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub image: Option<&'static str>,
}

/// Milestone in the about-page timeline
#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Impact-page success story
#[derive(Debug, Clone, Copy)]
pub struct Story {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
}

/// Featured event details
#[derive(Debug, Clone, Copy)]
pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub venue: &'static str,
    pub description: &'static str,
    pub categories: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

/// One day of the event schedule, in running order
#[derive(Debug, Clone, Copy)]
pub struct ScheduleDay {
    pub day: &'static str,
    pub items: &'static [ScheduleItem],
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleItem {
    pub time: &'static str,
    pub activity: &'static str,
}

/// Sponsorship tier card
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub name: &'static str,
    pub amount: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub highlighted: bool,
}

/// Contact-info card on the contact page. Detail lines come from the
/// site configuration, so this one owns its strings.
#[derive(Debug, Clone)]
pub struct ContactCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn route_from_path_tolerates_trailing_slash() {
        assert_eq!(Route::from_path("/about/"), Some(Route::About));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
    }

    #[test]
    fn route_from_path_rejects_unknown() {
        assert_eq!(Route::from_path("/donate"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn output_paths_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for route in Route::ALL {
            assert!(seen.insert(route.output_path()));
        }
    }
}
