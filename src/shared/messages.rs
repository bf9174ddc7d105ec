//! User-facing text
//!
//! Every string the client shows lives here, once per locale. Japanese is the
//! default and mirrors the wording the service launched with.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::shared::config::ConfigError;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ja => write!(f, "ja"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "ja-jp" | "ja_jp" => Ok(Locale::Ja),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => Err(ConfigError::InvalidLocale(other.to_string())),
        }
    }
}

/// Message catalog for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn pick(&self, ja: &'static str, en: &'static str) -> &'static str {
        match self.locale {
            Locale::Ja => ja,
            Locale::En => en,
        }
    }

    // Notices

    pub fn signup_succeeded(&self) -> &'static str {
        self.pick("新規登録できました", "Account created")
    }

    pub fn signup_failed(&self) -> &'static str {
        self.pick("新規登録に失敗しました", "Sign-up failed")
    }

    pub fn login_succeeded(&self) -> &'static str {
        self.pick("ログインできました", "Logged in")
    }

    pub fn login_failed(&self) -> &'static str {
        self.pick("ログインに失敗しました", "Login failed")
    }

    pub fn logged_out(&self) -> &'static str {
        self.pick("ログアウトしました", "Logged out")
    }

    pub fn login_first(&self) -> &'static str {
        self.pick("先にログインしてください", "Please log in first")
    }

    pub fn checkin_succeeded(&self) -> &'static str {
        self.pick("✅ 記録しました", "✅ Recorded")
    }

    pub fn checkin_failed(&self) -> &'static str {
        self.pick("記録に失敗しました", "Could not record your check-in")
    }

    // Labels

    pub fn title(&self) -> &'static str {
        self.pick("今日も無事？", "Safe today?")
    }

    pub fn email_hint(&self) -> &'static str {
        "email"
    }

    pub fn password_hint(&self) -> &'static str {
        "password"
    }

    pub fn login_button(&self) -> &'static str {
        self.pick("ログイン", "Log in")
    }

    pub fn signup_button(&self) -> &'static str {
        self.pick("新規登録", "Sign up")
    }

    pub fn logout_button(&self) -> &'static str {
        self.pick("ログアウト", "Log out")
    }

    pub fn status_button(&self) -> &'static str {
        self.pick("今日の状態を見る", "View today's status")
    }

    pub fn checkin_button(&self, confirmed: bool) -> &'static str {
        if confirmed {
            self.pick("今日は確認済み ✅", "Confirmed for today ✅")
        } else {
            self.pick("今日も無事 ✅", "I'm safe today ✅")
        }
    }

    pub fn logged_in_as(&self, email: &str) -> String {
        match self.locale {
            Locale::Ja => format!("ログイン中: {email}"),
            Locale::En => format!("Logged in as: {email}"),
        }
    }

    /// Status line, e.g. `今日の状態: ✅ 確認済み（2024/1/1 9:00:00）`
    pub fn status_line(&self, checked: bool, when: Option<&str>) -> String {
        let state = if checked {
            self.pick("✅ 確認済み", "✅ Confirmed")
        } else {
            self.pick("⏳ 未確認", "⏳ Not yet")
        };
        let suffix = match (checked, when) {
            (true, Some(when)) => match self.locale {
                Locale::Ja => format!("（{when}）"),
                Locale::En => format!(" ({when})"),
            },
            _ => String::new(),
        };
        match self.locale {
            Locale::Ja => format!("今日の状態: {state}{suffix}"),
            Locale::En => format!("Today's status: {state}{suffix}"),
        }
    }

    /// Render a backend timestamp in `tz` the way the locale writes dates.
    ///
    /// Unparsable input is returned verbatim.
    pub fn format_timestamp<Tz>(&self, raw: &str, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => {
                let local = parsed.with_timezone(tz);
                let pattern = match self.locale {
                    Locale::Ja => "%Y/%-m/%-d %-H:%M:%S",
                    Locale::En => "%-m/%-d/%Y, %-I:%M:%S %p",
                };
                local.format(pattern).to_string()
            }
            Err(_) => raw.to_string(),
        }
    }
}
