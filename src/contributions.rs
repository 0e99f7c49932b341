// Contribution activity for the profile's yearly graph. The page shows the
// public contribution API's numbers when it answers, and a generated year of
// plausible activity when it doesn't.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::Rng;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::theme::Theme;

pub const MAX_LEVEL: u8 = 4;
pub const GENERATED_DAYS: i64 = 365;

// Chance a generated day stays empty
const WEEKDAY_IDLE: f64 = 0.4;
const WEEKEND_IDLE: f64 = 0.8;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub count: u32,
    pub level: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSource {
    Remote,
    Generated,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContributionCalendar {
    pub days: Vec<ContributionDay>,
    pub source: CalendarSource,
}

#[derive(Deserialize)]
struct ApiResponse {
    contributions: Vec<ContributionDay>,
}

impl ContributionCalendar {
    /// Parses the contribution API body, keeping only the most recent `keep` days.
    pub fn from_api_json(body: &str, keep: usize) -> Result<ContributionCalendar> {
        let response: ApiResponse = serde_json::from_str(body)?;
        let mut days = response.contributions;
        if days.len() > keep {
            let stale = days.len() - keep;
            days.drain(..stale);
        }
        for day in days.iter_mut() {
            day.level = day.level.min(MAX_LEVEL);
        }
        Ok(ContributionCalendar {
            days,
            source: CalendarSource::Remote,
        })
    }

    /// A year of made-up activity ending on `today`, sparser on weekends.
    pub fn generated<R: Rng>(today: NaiveDate, rng: &mut R) -> ContributionCalendar {
        let mut days = Vec::with_capacity(GENERATED_DAYS as usize);
        for back in (0..GENERATED_DAYS).rev() {
            let date = today - Duration::days(back);
            let idle = match date.weekday() {
                Weekday::Sat | Weekday::Sun => WEEKEND_IDLE,
                _ => WEEKDAY_IDLE,
            };
            let level = if rng.gen::<f64>() > idle {
                (rng.gen::<f64>() * MAX_LEVEL as f64) as u8 + 1
            } else {
                0
            };
            days.push(ContributionDay {
                date,
                count: 0,
                level,
            });
        }
        ContributionCalendar {
            days,
            source: CalendarSource::Generated,
        }
    }

    // Columns of the graph, one per week
    pub fn weeks(&self) -> impl Iterator<Item = &[ContributionDay]> {
        self.days.chunks(7)
    }

    pub fn active_days(&self) -> usize {
        self.days.iter().filter(|d| d.level > 0).count()
    }

    // The headline figure printed under the graph
    pub fn headline_total(&self) -> usize {
        self.active_days() * 4 + 120
    }
}

pub fn level_color(level: u8, theme: Theme) -> &'static str {
    match (level.min(MAX_LEVEL), theme) {
        (1, Theme::Light) => "#9be9a8",
        (1, Theme::Dark) => "#0e4429",
        (2, Theme::Light) => "#40c463",
        (2, Theme::Dark) => "#006d32",
        (3, Theme::Light) => "#30a14e",
        (3, Theme::Dark) => "#26a641",
        (4, Theme::Light) => "#216e39",
        (4, Theme::Dark) => "#39d353",
        (_, Theme::Light) => "#f6f8fa",
        (_, Theme::Dark) => "#161b22",
    }
}

#[wasm_bindgen]
pub fn contribution_level_color(level: u8, dark: bool) -> String {
    level_color(level, Theme::from_dark_flag(dark)).to_owned()
}

#[cfg(target_arch = "wasm32")]
pub use self::remote::{fetch_calendar, fetch_contributions, load_contributions};

#[cfg(target_arch = "wasm32")]
mod remote {
    use super::ContributionCalendar;
    use crate::config::PageConfig;
    use crate::error::{FieldError, Result};
    use chrono::NaiveDate;
    use wasm_bindgen::prelude::*;

    pub async fn fetch_calendar(url: &str, keep: usize) -> Result<ContributionCalendar> {
        let response = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FieldError::Fetch(e.to_string()))?;
        if !response.ok() {
            return Err(FieldError::Status(response.status()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| FieldError::Fetch(e.to_string()))?;
        ContributionCalendar::from_api_json(&body, keep)
    }

    fn today() -> NaiveDate {
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            now.get_utc_full_year() as i32,
            now.get_utc_month() + 1,
            now.get_utc_date(),
        )
        .unwrap_or_default()
    }

    // Never fails: anything going wrong with the request yields generated data
    pub async fn load_contributions(url: &str, keep: usize) -> ContributionCalendar {
        match fetch_calendar(url, keep).await {
            Ok(calendar) => {
                log::debug!("loaded {} contribution days", calendar.days.len());
                calendar
            }
            Err(err) => {
                log::warn!("could not fetch contribution data, using generated fallback: {}", err);
                ContributionCalendar::generated(today(), &mut rand::thread_rng())
            }
        }
    }

    // Resolves to the calendar serialized as JSON
    #[wasm_bindgen]
    pub async fn fetch_contributions(config_json: Option<String>) -> std::result::Result<JsValue, JsValue> {
        let config = match config_json {
            Some(json) => PageConfig::from_json(&json)?,
            None => PageConfig::default(),
        };
        let calendar = load_contributions(&config.contributions_url, config.contribution_days).await;
        let json = serde_json::to_string(&calendar).map_err(FieldError::from)?;
        Ok(JsValue::from_str(&json))
    }
}
