//! The declarative navigation model for the quiz client.
//!
//! A [`RouteTable`] is an immutable, ordered list of path → screen bindings,
//! validated eagerly at construction: empty or duplicate paths and names are
//! rejected before the table exists. Matching is exact string comparison;
//! a miss is an explicit [`RouteError::NotFound`], never a silent fallthrough.

use std::collections::HashSet;

use crate::errors::{RouteConfigError, RouteError};

/// Which role-based flow a route belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flow {
    Player,
    Admin,
    Shared,
}

/// The renderable screens of the client, one per route binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Waiting,
    BeReady,
    Quizz,
    Stats,
    Leaderboard,
    AdminHome,
    AdminWaiting,
    AdminQuestionSettings,
    AdminStats,
}

/// A single binding from a URL path to a screen, with a unique symbolic name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub screen: Screen,
    pub flow: Flow,
}

/// An immutable, construction-validated set of route bindings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Builds a table, rejecting empty and duplicate paths or names eagerly.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteConfigError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for entry in &entries {
            if entry.path.is_empty() {
                return Err(RouteConfigError::EmptyPath {
                    name: entry.name.to_string(),
                });
            }
            if entry.name.is_empty() {
                return Err(RouteConfigError::EmptyName {
                    path: entry.path.to_string(),
                });
            }
            if !paths.insert(entry.path) {
                return Err(RouteConfigError::DuplicatePath(entry.path.to_string()));
            }
            if !names.insert(entry.name) {
                return Err(RouteConfigError::DuplicateName(entry.name.to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// Resolves a path by exact match.
    pub fn resolve(&self, path: &str) -> Result<&RouteEntry, RouteError> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .ok_or_else(|| RouteError::NotFound {
                path: path.to_string(),
            })
    }

    /// Reverse lookup by symbolic name.
    pub fn entry_named(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// The entry a screen is bound to, if any.
    pub fn entry_for(&self, screen: Screen) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.screen == screen)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The client's route surface: player flow, admin flow, shared leaderboard.
pub fn game_routes() -> Result<RouteTable, RouteConfigError> {
    RouteTable::new(vec![
        RouteEntry {
            path: "/",
            name: "home",
            screen: Screen::Home,
            flow: Flow::Player,
        },
        RouteEntry {
            path: "/waiting",
            name: "waiting",
            screen: Screen::Waiting,
            flow: Flow::Player,
        },
        RouteEntry {
            path: "/be-ready",
            name: "beReady",
            screen: Screen::BeReady,
            flow: Flow::Player,
        },
        RouteEntry {
            path: "/quizz",
            name: "quizz",
            screen: Screen::Quizz,
            flow: Flow::Player,
        },
        RouteEntry {
            path: "/stats",
            name: "stats",
            screen: Screen::Stats,
            flow: Flow::Player,
        },
        RouteEntry {
            path: "/leaderboard",
            name: "leaderboard",
            screen: Screen::Leaderboard,
            flow: Flow::Shared,
        },
        RouteEntry {
            path: "/admin-home",
            name: "admin-home",
            screen: Screen::AdminHome,
            flow: Flow::Admin,
        },
        RouteEntry {
            path: "/admin-waiting",
            name: "admin-waiting",
            screen: Screen::AdminWaiting,
            flow: Flow::Admin,
        },
        RouteEntry {
            path: "/admin-question-settings",
            name: "admin-question-settings",
            screen: Screen::AdminQuestionSettings,
            flow: Flow::Admin,
        },
        RouteEntry {
            path: "/admin-stats",
            name: "admin-stats",
            screen: Screen::AdminStats,
            flow: Flow::Admin,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &'static str, name: &'static str) -> RouteEntry {
        RouteEntry {
            path,
            name,
            screen: Screen::Home,
            flow: Flow::Player,
        }
    }

    #[test]
    fn game_routes_build() {
        let table = game_routes().unwrap();
        assert_eq!(table.len(), 10);
        assert!(!table.is_empty());
    }

    #[test]
    fn resolve_every_declared_path() {
        let table = game_routes().unwrap();
        let expected = [
            ("/", Screen::Home),
            ("/waiting", Screen::Waiting),
            ("/be-ready", Screen::BeReady),
            ("/quizz", Screen::Quizz),
            ("/stats", Screen::Stats),
            ("/leaderboard", Screen::Leaderboard),
            ("/admin-home", Screen::AdminHome),
            ("/admin-waiting", Screen::AdminWaiting),
            ("/admin-question-settings", Screen::AdminQuestionSettings),
            ("/admin-stats", Screen::AdminStats),
        ];

        for (path, screen) in expected {
            let entry = table.resolve(path).unwrap();
            assert_eq!(entry.screen, screen, "path {path}");
        }
    }

    #[test]
    fn resolve_is_exact_match() {
        let table = game_routes().unwrap();

        assert!(table.resolve("/waiting/").is_err());
        assert!(table.resolve("waiting").is_err());
        assert_eq!(
            table.resolve("/does-not-exist"),
            Err(RouteError::NotFound {
                path: "/does-not-exist".to_string()
            })
        );
    }

    #[test]
    fn names_round_trip() {
        let table = game_routes().unwrap();

        for entry in table.iter() {
            let found = table.entry_named(entry.name).unwrap();
            assert_eq!(found, entry);
        }
        assert!(table.entry_named("nope").is_none());
    }

    #[test]
    fn no_duplicate_paths_or_names() {
        let table = game_routes().unwrap();

        let paths: HashSet<_> = table.iter().map(|e| e.path).collect();
        let names: HashSet<_> = table.iter().map(|e| e.name).collect();
        assert_eq!(paths.len(), table.len());
        assert_eq!(names.len(), table.len());
    }

    #[test]
    fn every_screen_is_bound_once() {
        let table = game_routes().unwrap();
        let screens = [
            Screen::Home,
            Screen::Waiting,
            Screen::BeReady,
            Screen::Quizz,
            Screen::Stats,
            Screen::Leaderboard,
            Screen::AdminHome,
            Screen::AdminWaiting,
            Screen::AdminQuestionSettings,
            Screen::AdminStats,
        ];

        for screen in screens {
            let bound = table.iter().filter(|e| e.screen == screen).count();
            assert_eq!(bound, 1, "screen {screen:?}");
        }
    }

    #[test]
    fn flows_partition_the_table() {
        let table = game_routes().unwrap();

        let count = |flow| table.iter().filter(|e| e.flow == flow).count();
        assert_eq!(count(Flow::Player), 5);
        assert_eq!(count(Flow::Admin), 4);
        assert_eq!(count(Flow::Shared), 1);
    }

    #[test]
    fn duplicate_path_rejected() {
        let result = RouteTable::new(vec![entry("/a", "a"), entry("/a", "b")]);
        assert_eq!(
            result,
            Err(RouteConfigError::DuplicatePath("/a".to_string()))
        );
    }

    #[test]
    fn duplicate_name_rejected() {
        let result = RouteTable::new(vec![entry("/a", "a"), entry("/b", "a")]);
        assert_eq!(result, Err(RouteConfigError::DuplicateName("a".to_string())));
    }

    #[test]
    fn empty_path_and_name_rejected() {
        assert_eq!(
            RouteTable::new(vec![entry("", "a")]),
            Err(RouteConfigError::EmptyPath {
                name: "a".to_string()
            })
        );
        assert_eq!(
            RouteTable::new(vec![entry("/a", "")]),
            Err(RouteConfigError::EmptyName {
                path: "/a".to_string()
            })
        );
    }
}
