//! User prompt for the market update

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

const WHEN_FORMAT: &str = "%B %-d, %Y %-I:%M %p %Z";

/// Prompt asking for an update at `now`, stated in `timezone` (host-local when `None`)
pub fn market_update_prompt(now: DateTime<Utc>, timezone: Option<Tz>) -> String {
    let when = match timezone {
        Some(tz) => now.with_timezone(&tz).format(WHEN_FORMAT).to_string(),
        None => now.with_timezone(&Local).format(WHEN_FORMAT).to_string(),
    };

    format!(
        "Generate a stock market update for {when}. Include major indices, notable movers, \
         and market sentiment. Keep it concise for a Telegram message."
    )
}
