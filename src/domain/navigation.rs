//! Top-level screen and Home-tab navigation.

/// Top-level navigation destination. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    SignUp,
    Home,
}

impl Screen {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Login => "login",
            Self::SignUp => "sign-up",
            Self::Home => "home",
        }
    }
}

/// Home-screen sub-view. Only meaningful while the screen is [`Screen::Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Chats,
    Profile,
    Contacts,
    Settings,
}

impl Tab {
    /// Tabs in tab-bar order.
    pub const ALL: [Tab; 4] = [Tab::Chats, Tab::Profile, Tab::Contacts, Tab::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Self::Chats => "Chats",
            Self::Profile => "Profile",
            Self::Contacts => "Contacts",
            Self::Settings => "Settings",
        }
    }

    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|tab| *tab == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Maps the `1`..`4` hotkeys to tabs.
    pub fn from_hotkey(key: &str) -> Option<Self> {
        match key {
            "1" => Some(Self::Chats),
            "2" => Some(Self::Profile),
            "3" => Some(Self::Contacts),
            "4" => Some(Self::Settings),
            _ => None,
        }
    }
}

/// Identifies one visit to the Splash screen.
///
/// A splash timer carries the entry it was started for, so a firing that
/// belongs to an earlier visit (or arrives twice) can be told apart from the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplashEntry(u64);

impl SplashEntry {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Single source of truth for the active screen and, on Home, the active tab.
///
/// Every transition is a named method returning `true` when it was applied
/// and `false` when the current screen has no such edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    screen: Screen,
    tab: Tab,
    splash_generation: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            screen: Screen::Splash,
            tab: Tab::Chats,
            splash_generation: 1,
        }
    }
}

impl Navigator {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Active tab, present only while on Home.
    pub fn active_tab(&self) -> Option<Tab> {
        (self.screen == Screen::Home).then_some(self.tab)
    }

    /// Token for the current Splash visit, if the Splash screen is showing.
    pub fn splash_entry(&self) -> Option<SplashEntry> {
        (self.screen == Screen::Splash).then_some(SplashEntry(self.splash_generation))
    }

    /// Splash -> Login, driven by the splash timer.
    pub fn advance_from_splash(&mut self, entry: SplashEntry) -> bool {
        if self.splash_entry() != Some(entry) {
            return false;
        }

        self.transition(Screen::Login)
    }

    /// Retires the current Splash visit so a timer started for it can no
    /// longer advance. Returns `false` when not on Splash.
    pub fn dispose_splash(&mut self) -> bool {
        if self.screen != Screen::Splash {
            return false;
        }

        self.splash_generation += 1;
        true
    }

    /// Login -> Home. No credentials are checked.
    pub fn login_succeeded(&mut self) -> bool {
        self.screen == Screen::Login && self.transition(Screen::Home)
    }

    /// Login -> SignUp.
    pub fn go_to_sign_up(&mut self) -> bool {
        self.screen == Screen::Login && self.transition(Screen::SignUp)
    }

    /// SignUp -> Login after an account was created.
    pub fn sign_up_succeeded(&mut self) -> bool {
        self.go_to_login()
    }

    /// SignUp -> Login.
    pub fn go_to_login(&mut self) -> bool {
        self.screen == Screen::SignUp && self.transition(Screen::Login)
    }

    /// Overwrites the active tab. Every tab is reachable from every other.
    pub fn set_tab(&mut self, tab: Tab) -> bool {
        if self.screen != Screen::Home {
            return false;
        }

        self.tab = tab;
        true
    }

    fn transition(&mut self, to: Screen) -> bool {
        if to == Screen::Home {
            self.tab = Tab::Chats;
        }

        self.screen = to;
        true
    }
}
