//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::net::http::Http;
use crate::pages::{
    achievements::AchievementsPage, add_journal::AddJournalPage, add_mood::AddMoodPage,
    dashboard::DashboardPage, home::HomePage, journals::JournalsPage, login::LoginPage,
    mood_history::MoodHistoryPage, not_found::NotFoundPage, profile::ProfilePage,
    signup::SignupPage,
};
use crate::session::credentials::Credentials;
use crate::session::guard::{Guard, RedirectSlot};
use crate::session::store::SessionStore;

/// Root application component.
///
/// Constructs the credential slot, the HTTP adapter, and the session store,
/// provides them through context, kicks off the one-shot session restore,
/// and sets up client-side routing. The guard holds protected content until
/// the restore settles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let credentials = Credentials::new();
    let http = Http::new(credentials);
    let store = SessionStore::new(http);
    provide_context(store);
    provide_context(RedirectSlot::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(store.restore());

    view! {
        <Title text="MindMate"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| {
                            view! {
                                <Guard require_auth=false>
                                    <LoginPage/>
                                </Guard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| {
                            view! {
                                <Guard require_auth=false>
                                    <SignupPage/>
                                </Guard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <Guard>
                                    <DashboardPage/>
                                </Guard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("track-mood")
                        view=|| {
                            view! {
                                <Guard>
                                    <AddMoodPage/>
                                </Guard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("history")
                        view=|| {
                            view! {
                                <Guard>
                                    <MoodHistoryPage/>
                                </Guard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("journals")
                        view=|| {
                            view! {
                                <Guard>
                                    <JournalsPage/>
                                </Guard>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("journals"), StaticSegment("new"))
                        view=|| {
                            view! {
                                <Guard>
                                    <AddJournalPage/>
                                </Guard>
                            }
                        }
                    />
                    <Route
                        path=(
                            StaticSegment("journals"),
                            StaticSegment("new"),
                            ParamSegment("mood_id"),
                        )
                        view=|| {
                            view! {
                                <Guard>
                                    <AddJournalPage/>
                                </Guard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <Guard>
                                    <ProfilePage/>
                                </Guard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("achievements")
                        view=|| {
                            view! {
                                <Guard>
                                    <AchievementsPage/>
                                </Guard>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
