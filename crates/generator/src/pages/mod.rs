//! Page compositions, one module per route. Every page assembles the
//! shared layout primitives around its slice of the content registry; no
//! logic beyond prop-passing lives here.

mod about;
mod contact;
mod events;
mod home;
mod impact;
mod programs;
mod sponsors;

use saviour_site_core::types::{Route, Site};

/// Render the body markup for one route.
pub fn page_body(route: Route, site: &Site) -> String {
    match route {
        Route::Home => home::render(site),
        Route::About => about::render(site),
        Route::Programs => programs::render(site),
        Route::Impact => impact::render(site),
        Route::Events => events::render(site),
        Route::Sponsors => sponsors::render(site),
        Route::Contact => contact::render(site),
    }
}
