//! Inline title directives for priority and deadline.
//!
//! A title may carry two kinds of shorthand:
//!
//! - `!1` to `!4` sets the priority (critical, high, medium, low);
//! - `!before <date>` sets the deadline, with the date written `d.mm.yyyy`
//!   or `d-mm-yyyy` in ASCII digits.
//!
//! Directives are removed from the title whether or not their value is used.
//! Values supplied explicitly by the caller always take precedence over the
//! ones written in the title. Any other `!word` is ordinary title text.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use taskflow::task::domain::{ParsedTitle, TaskPriority};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
//! let parsed = ParsedTitle::parse("Ship it !2 !before 01.07.2025", None, None, today)
//!     .expect("directives parse");
//!
//! assert_eq!(parsed.title(), "Ship it");
//! assert_eq!(parsed.priority(), TaskPriority::High);
//! assert_eq!(parsed.deadline(), NaiveDate::from_ymd_opt(2025, 7, 1));
//! ```

use super::{MacroParseError, TaskPriority};
use chrono::{Datelike, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Literal keyword that introduces a deadline directive.
pub const DEADLINE_KEYWORD: &str = "!before";

#[expect(clippy::expect_used, reason = "pattern is a fixed literal")]
static PRIORITY_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!([1-4])").expect("valid priority directive regex"));

#[expect(clippy::expect_used, reason = "pattern is a fixed literal")]
static DEADLINE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!before[ \t\n\x0B\f\r]+([0-9]{1,2}[.\-][0-9]{1,2}[.\-][0-9]{4})")
        .expect("valid deadline directive regex")
});

/// Title with directives removed and the resulting field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    title: String,
    priority: TaskPriority,
    deadline: Option<NaiveDate>,
}

impl ParsedTitle {
    /// Extracts directives from `title` and reconciles them with explicit
    /// values.
    ///
    /// `today` is used when the title holds a bare `!before` with no
    /// readable date and no explicit deadline was given: the deadline then
    /// defaults to today and the keyword is dropped from the title.
    ///
    /// # Errors
    ///
    /// Returns [`MacroParseError`] when a `!before` directive matches the
    /// date shape but has a day outside 1-31, a month outside 1-12 or mixed
    /// separators, and no explicit deadline makes the directive irrelevant.
    /// A day past the end of a shorter month is clamped to its last day.
    pub fn parse(
        title: &str,
        explicit_priority: Option<TaskPriority>,
        explicit_deadline: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, MacroParseError> {
        let (title_priority, without_priority) = strip_priority(title);
        let priority = match (explicit_priority, title_priority) {
            (Some(explicit), Some(ignored)) => {
                tracing::debug!(%explicit, %ignored, "explicit priority overrides title directive");
                explicit
            }
            (Some(explicit), None) => explicit,
            (None, Some(from_title)) => from_title,
            (None, None) => TaskPriority::default(),
        };

        let (deadline, cleaned) =
            resolve_deadline(&without_priority, explicit_deadline, today)?;

        Ok(Self {
            title: cleaned.trim().to_owned(),
            priority,
            deadline,
        })
    }

    /// Returns the cleaned title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the resolved priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the resolved deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Splits the result into title, priority and deadline.
    #[must_use]
    pub fn into_parts(self) -> (String, TaskPriority, Option<NaiveDate>) {
        (self.title, self.priority, self.deadline)
    }
}

/// Deadline directive found in a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeadlineDirective<'a> {
    /// `!before` followed by something shaped like a date.
    Dated(&'a str),
    /// `!before` present without a date-shaped argument.
    Fallback,
    /// No deadline keyword at all.
    Absent,
}

impl<'a> DeadlineDirective<'a> {
    fn find(title: &'a str) -> Self {
        if let Some(date) = DEADLINE_DIRECTIVE
            .captures(title)
            .and_then(|captures| captures.get(1))
        {
            return Self::Dated(date.as_str());
        }
        if title.contains(DEADLINE_KEYWORD) {
            return Self::Fallback;
        }
        Self::Absent
    }
}

fn strip_priority(title: &str) -> (Option<TaskPriority>, String) {
    let level = PRIORITY_DIRECTIVE
        .captures(title)
        .and_then(|captures| captures.get(1))
        .and_then(|digit| digit.as_str().parse::<u8>().ok())
        .and_then(TaskPriority::from_level);
    (level, PRIORITY_DIRECTIVE.replace_all(title, "").into_owned())
}

fn resolve_deadline(
    title: &str,
    explicit_deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(Option<NaiveDate>, String), MacroParseError> {
    match DeadlineDirective::find(title) {
        DeadlineDirective::Dated(text) => {
            let deadline = match explicit_deadline {
                Some(explicit) => explicit,
                None => parse_directive_date(text)?,
            };
            Ok((Some(deadline), DEADLINE_DIRECTIVE.replace_all(title, "").into_owned()))
        }
        DeadlineDirective::Fallback if explicit_deadline.is_none() => {
            tracing::debug!(%today, "deadline directive without a date, defaulting to today");
            Ok((Some(today), title.replace(DEADLINE_KEYWORD, "")))
        }
        DeadlineDirective::Fallback | DeadlineDirective::Absent => {
            Ok((explicit_deadline, title.to_owned()))
        }
    }
}

/// Date layouts accepted after `!before`, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateLayout {
    /// `d.mm.yyyy`
    Dotted,
    /// `d-mm-yyyy`
    Dashed,
}

impl DateLayout {
    const ALL: [Self; 2] = [Self::Dotted, Self::Dashed];

    const fn separator(self) -> char {
        match self {
            Self::Dotted => '.',
            Self::Dashed => '-',
        }
    }

    fn parse(self, text: &str) -> Option<NaiveDate> {
        let mut fields = text.split(self.separator());
        let day_field = fields.next()?;
        let month_field = fields.next()?;
        let year_field = fields.next()?;
        if fields.next().is_some() {
            return None;
        }
        let well_formed = is_digits(day_field, 1, 2)
            && is_digits(month_field, 2, 2)
            && is_digits(year_field, 4, 4);
        if !well_formed {
            return None;
        }
        let day: u32 = day_field.parse().ok()?;
        if !(1..=31).contains(&day) {
            return None;
        }
        let first =
            NaiveDate::from_ymd_opt(year_field.parse().ok()?, month_field.parse().ok()?, 1)?;
        // Days past the end of a shorter month clamp to its last day.
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
        first.with_day(day.min(last.day()))
    }
}

fn is_digits(field: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&field.len()) && field.bytes().all(|byte| byte.is_ascii_digit())
}

fn parse_directive_date(text: &str) -> Result<NaiveDate, MacroParseError> {
    DateLayout::ALL
        .into_iter()
        .find_map(|layout| layout.parse(text))
        .ok_or_else(|| MacroParseError(text.to_owned()))
}
