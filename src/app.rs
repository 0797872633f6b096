use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::calendar_link::CalendarLink;
use crate::catalog::fetch_catalog;
use crate::league::League;
use crate::selection::Selection;

pub const PAGE_TITLE: &str = "LoL eSports Calendar Generator";
pub const SOURCE_URL: &str = "https://github.com/asherdavidson/lol_esports_calendar_generator";
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css";

/// Responsive column counts: 2 on phones up to 6 on wide screens.
const GRID_CLASS: &str = "row row-cols-2 row-cols-sm-3 row-cols-md-4 row-cols-lg-5 row-cols-xl-6";

/// HTML document rendered by the server; the browser bundle hydrates `<App/>`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet href=BOOTSTRAP_CSS/>
        <Stylesheet id="leptos" href="/pkg/lol-esports-calendar.css"/>
        <Title text=PAGE_TITLE/>
        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=CalendarPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn CalendarPage() -> impl IntoView {
    // Runs once in the browser; the server renders the empty grid.
    let catalog = LocalResource::new(fetch_catalog);
    let selection = RwSignal::new(Selection::new());
    let link = Memo::new(move |_| selection.with(CalendarLink::derive));

    view! {
        <div class="container">
            <div class="row">
                <div class="col text-center m-2">
                    <h1>{PAGE_TITLE}</h1>
                </div>
            </div>
            <LinkPanel link/>
            {move || {
                catalog
                    .get()
                    .map(|leagues| view! { <LeagueGrid leagues=leagues.to_vec() selection/> })
            }}
            <div class="row">
                <div class="col text-center">
                    <p>
                        <a href=SOURCE_URL>"Source Code"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LinkPanel(link: Memo<CalendarLink>) -> impl IntoView {
    view! {
        <div class="row">
            <div class="col alert alert-primary mx-3 text-center">
                <span>"Your link: "</span>
                <a
                    id="calendar_url"
                    href=move || link.with(|link| link.href.clone())
                    class:disabled=move || !link.with(CalendarLink::is_actionable)
                >
                    {move || link.with(|link| link.text.clone())}
                </a>
            </div>
        </div>
    }
}

#[component]
fn LeagueGrid(leagues: Vec<League>, selection: RwSignal<Selection>) -> impl IntoView {
    view! {
        <div class=GRID_CLASS>
            {leagues
                .into_iter()
                .map(|league| view! { <LeagueTile league selection/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn LeagueTile(league: League, selection: RwSignal<Selection>) -> impl IntoView {
    let slug = league.slug.clone();

    // Memoized so a toggle only repaints the tile whose membership changed.
    let is_selected = Memo::new({
        let slug = slug.clone();
        move |_| selection.with(|selection| selection.is_selected(&slug))
    });

    let on_click = move |_| {
        selection.update(|selection| {
            let now_selected = selection.toggle(&slug);
            log::debug!("league '{slug}' selected: {now_selected}");
        });
    };

    let image_url = league.image_url();
    let League { slug, name } = league;

    view! {
        <div class="col my-2" on:click=on_click>
            <div
                id=slug
                class="card text-center h-100 bg-light league-button"
                class:clicked=move || is_selected.get()
            >
                <img src=image_url class="card-img-top bg-dark" alt=name.clone()/>
                <div class="p-2 my-auto">
                    <h5 class="card-text">{name}</h5>
                </div>
            </div>
        </div>
    }
}
