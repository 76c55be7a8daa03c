use yew::prelude::*;
use yew_router::prelude::*;

use quizcast::routes::Screen;

use crate::pages::{
    AdminHomePage, AdminQuestionSettingsPage, AdminStatsPage, AdminWaitingRoomPage,
    LeaderboardPage, NotFoundPage, PlayerBeReadyPage, PlayerHomePage, PlayerQuizPage,
    PlayerStatsPage, PlayerWaitingRoomPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/waiting")]
    Waiting,
    #[at("/be-ready")]
    BeReady,
    #[at("/quizz")]
    Quizz,
    #[at("/stats")]
    Stats,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/admin-home")]
    AdminHome,
    #[at("/admin-waiting")]
    AdminWaiting,
    #[at("/admin-question-settings")]
    AdminQuestionSettings,
    #[at("/admin-stats")]
    AdminStats,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The screen this route activates; `None` for the not-found fallback.
    pub fn screen(&self) -> Option<Screen> {
        match self {
            Route::Home => Some(Screen::Home),
            Route::Waiting => Some(Screen::Waiting),
            Route::BeReady => Some(Screen::BeReady),
            Route::Quizz => Some(Screen::Quizz),
            Route::Stats => Some(Screen::Stats),
            Route::Leaderboard => Some(Screen::Leaderboard),
            Route::AdminHome => Some(Screen::AdminHome),
            Route::AdminWaiting => Some(Screen::AdminWaiting),
            Route::AdminQuestionSettings => Some(Screen::AdminQuestionSettings),
            Route::AdminStats => Some(Screen::AdminStats),
            Route::NotFound => None,
        }
    }

    pub fn for_screen(screen: Screen) -> Route {
        match screen {
            Screen::Home => Route::Home,
            Screen::Waiting => Route::Waiting,
            Screen::BeReady => Route::BeReady,
            Screen::Quizz => Route::Quizz,
            Screen::Stats => Route::Stats,
            Screen::Leaderboard => Route::Leaderboard,
            Screen::AdminHome => Route::AdminHome,
            Screen::AdminWaiting => Route::AdminWaiting,
            Screen::AdminQuestionSettings => Route::AdminQuestionSettings,
            Screen::AdminStats => Route::AdminStats,
        }
    }
}

/// Router basename, injected at build time.
pub fn base_path() -> Option<AttrValue> {
    option_env!("QUIZCAST_BASE_PATH").map(AttrValue::from)
}

pub fn switch(route: Route) -> Html {
    match route.screen() {
        Some(Screen::Home) => html! { <PlayerHomePage /> },
        Some(Screen::Waiting) => html! { <PlayerWaitingRoomPage /> },
        Some(Screen::BeReady) => html! { <PlayerBeReadyPage /> },
        Some(Screen::Quizz) => html! { <PlayerQuizPage /> },
        Some(Screen::Stats) => html! { <PlayerStatsPage /> },
        Some(Screen::Leaderboard) => html! { <LeaderboardPage /> },
        Some(Screen::AdminHome) => html! { <AdminHomePage /> },
        Some(Screen::AdminWaiting) => html! { <AdminWaitingRoomPage /> },
        Some(Screen::AdminQuestionSettings) => html! { <AdminQuestionSettingsPage /> },
        Some(Screen::AdminStats) => html! { <AdminStatsPage /> },
        None => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizcast::routes::game_routes;

    #[test]
    fn route_enum_matches_the_table() {
        let table = game_routes().unwrap();

        for entry in table.iter() {
            let route = Route::for_screen(entry.screen);
            assert_eq!(route.to_path(), entry.path, "screen {:?}", entry.screen);
            assert_eq!(route.screen(), Some(entry.screen));
        }
    }

    #[test]
    fn every_declared_path_recognizes_exactly_its_screen() {
        let table = game_routes().unwrap();

        for entry in table.iter() {
            let route = Route::recognize(entry.path).unwrap();
            assert_eq!(route.screen(), Some(entry.screen), "path {}", entry.path);
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/does-not-exist"), Some(Route::NotFound));

        let table = game_routes().unwrap();
        assert!(table.resolve("/does-not-exist").is_err());
    }
}
