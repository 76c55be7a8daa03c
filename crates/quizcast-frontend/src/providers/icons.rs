//! The shared icon registry.
//!
//! Icons are registered once at bootstrap, keyed by name and variant, and
//! handed to screens through context. The registry is immutable after
//! construction.

use std::collections::HashMap;
use std::rc::Rc;

/// Which rendering of a glyph to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconVariant {
    Filled,
    Outline,
}

/// SVG geometry for one registered icon variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconDef {
    pub view_box: &'static str,
    pub path: &'static str,
}

const HEART_FILLED: IconDef = IconDef {
    view_box: "0 0 512 512",
    path: "M47.6 300.4L228.3 469.1c7.5 7 17.4 10.9 27.7 10.9s20.2-3.9 27.7-10.9L464.4 300.4c30.4-28.3 47.6-68 47.6-109.5v-5.8c0-69.9-50.5-129.5-119.4-141C347 36.5 300.6 51.4 268 84L256 96 244 84c-32.6-32.6-79-47.5-124.6-39.9C50.5 55.6 0 115.2 0 185.1v5.8c0 41.5 17.2 81.2 47.6 109.5z",
};

const HEART_OUTLINE: IconDef = IconDef {
    view_box: "0 0 512 512",
    path: "M225.8 468.2l-2.5-2.3L48.1 303.2C17.4 274.7 0 234.7 0 192.8l0-3.3c0-70.4 50-130.8 119.2-144C158.6 37.9 198.9 47 231 69.6c9 6.4 17.4 13.8 25 22.3c4.2-4.8 8.7-9.2 13.5-13.3c3.7-3.2 7.5-6.2 11.5-9C313.1 47 353.4 37.9 392.8 45.4C462 58.6 512 119.1 512 189.5l0 3.3c0 41.9-17.4 81.9-48.1 110.4L288.7 465.9l-2.5 2.3c-8.2 7.6-19 11.9-30.2 11.9s-22-4.2-30.2-11.9zM239.1 145c-.4-.3-.7-.7-1-1.1l-17.8-20c-23.1-25.9-58-37.7-92-31.2C81.6 101.5 48 142.1 48 189.5l0 3.3c0 28.5 11.9 55.8 32.8 75.2L256 430.7 431.2 268c20.9-19.4 32.8-46.7 32.8-75.2l0-3.3c0-47.3-33.6-88-80.1-96.9c-34-6.5-69 5.4-92 31.2l-17.8 20c-.3 .4-.7 .7-1 1.1c-4.5 4.5-10.6 7-16.9 7s-12.4-2.5-16.9-7z",
};

/// An immutable icon set shared through context.
#[derive(Clone, PartialEq)]
pub struct IconRegistry {
    icons: Rc<HashMap<(String, IconVariant), IconDef>>,
}

impl IconRegistry {
    /// The icon set the quiz screens use: the heart glyph in its filled and
    /// outline variants, for full and spent lives.
    pub fn game_icons() -> Self {
        let mut icons = HashMap::new();
        icons.insert(("heart".to_string(), IconVariant::Filled), HEART_FILLED);
        icons.insert(("heart".to_string(), IconVariant::Outline), HEART_OUTLINE);
        Self {
            icons: Rc::new(icons),
        }
    }

    pub fn get(&self, name: &str, variant: IconVariant) -> Option<IconDef> {
        self.icons.get(&(name.to_string(), variant)).copied()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_both_heart_variants() {
        let registry = IconRegistry::game_icons();

        assert_eq!(registry.len(), 2);
        assert!(registry.get("heart", IconVariant::Filled).is_some());
        assert!(registry.get("heart", IconVariant::Outline).is_some());
    }

    #[test]
    fn unknown_icons_resolve_to_none() {
        let registry = IconRegistry::game_icons();

        assert!(registry.get("star", IconVariant::Filled).is_none());
        assert!(registry.get("", IconVariant::Outline).is_none());
    }
}
