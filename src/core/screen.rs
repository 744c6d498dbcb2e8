//! Screen identifiers, used as navigation intents.
//!
//! The core never drives the terminal directly. When a submit is accepted
//! (or the user asks to move), the reducer records the destination here and
//! the TUI router mounts the matching screen on its next pass.

/// A destination the router can resolve to a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Login,
    Registration,
    Main,
}

impl ScreenId {
    /// Stable route name, as used in config and logs.
    pub fn route(self) -> &'static str {
        match self {
            ScreenId::Login => "login",
            ScreenId::Registration => "registration",
            ScreenId::Main => "main",
        }
    }

    /// Parse a route name back into a screen. Returns `None` for unknown routes.
    pub fn from_route(route: &str) -> Option<Self> {
        match route {
            "login" => Some(ScreenId::Login),
            "registration" => Some(ScreenId::Registration),
            "main" => Some(ScreenId::Main),
            _ => None,
        }
    }

    /// Human-readable screen title for the title bar.
    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Login => "Sign in",
            ScreenId::Registration => "Sign up",
            ScreenId::Main => "Storefront",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_round_trip() {
        for screen in [ScreenId::Login, ScreenId::Registration, ScreenId::Main] {
            assert_eq!(ScreenId::from_route(screen.route()), Some(screen));
        }
    }

    #[test]
    fn test_unknown_route_is_none() {
        assert_eq!(ScreenId::from_route("checkout"), None);
        assert_eq!(ScreenId::from_route(""), None);
    }
}
