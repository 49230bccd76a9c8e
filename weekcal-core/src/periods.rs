//! The fixed period time table and block span resolution.
//!
//! Times are minutes since local midnight. The vocabulary is closed: the
//! parser accepts any period code verbatim, and the lookup here is where
//! an unknown code finally fails.

use crate::error::{WeekcalError, WeekcalResult};

/// The code of the pause-length override entry for period P8.
pub const P8_PAUSE: &str = "P8_Pause";

/// Start and duration of one teaching slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodTimes {
    pub start_minute: u32,
    pub duration_minutes: u32,
}

/// A resolved wall-clock span, minutes since local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteSpan {
    pub start: u32,
    pub end: u32,
}

const fn times(start_minute: u32, duration_minutes: u32) -> PeriodTimes {
    PeriodTimes {
        start_minute,
        duration_minutes,
    }
}

/// The school's bell times. `P8_Pause` is not a slot of its own: it is
/// the alternate, shorter duration a pause activity gets when it runs
/// through P8.
pub fn period_times(code: &str) -> Option<PeriodTimes> {
    let t = match code {
        "P1" => times(8 * 60 + 45, 38),
        "P2" => times(9 * 60 + 23, 39),
        "P3b" => times(10 * 60 + 32, 40),
        "P4" => times(11 * 60 + 12, 37),
        "P5" => times(11 * 60 + 49, 40),
        "P6b" => times(12 * 60 + 59, 38),
        "P7" => times(13 * 60 + 37, 40),
        "P8" => times(14 * 60 + 17, 40),
        P8_PAUSE => times(14 * 60 + 17, 29),
        _ => return None,
    };
    Some(t)
}

fn lookup(code: &str) -> WeekcalResult<PeriodTimes> {
    period_times(code).ok_or_else(|| WeekcalError::UnknownPeriod(code.to_string()))
}

/// Resolve a block's period list into wall-clock spans.
///
/// Merged mode yields a single span from the first period's start to the
/// last period's end; otherwise each period becomes its own span. A pause
/// block whose periods include P8 ends on the `P8_Pause` timing instead
/// of P8's full length — the override needs both conditions, a pause
/// subject alone is not enough.
pub fn resolve_spans(
    periods: &[String],
    is_pause: bool,
    merge: bool,
) -> WeekcalResult<Vec<MinuteSpan>> {
    if periods.is_empty() {
        return Ok(Vec::new());
    }

    if merge {
        return Ok(vec![resolve_span(periods, is_pause)?]);
    }

    periods
        .iter()
        .map(|p| resolve_span(std::slice::from_ref(p), is_pause))
        .collect()
}

fn resolve_span(periods: &[String], is_pause: bool) -> WeekcalResult<MinuteSpan> {
    let first = lookup(&periods[0])?;

    let closes_with_pause = is_pause && periods.iter().any(|p| p == "P8");
    let last = if closes_with_pause {
        lookup(P8_PAUSE)?
    } else {
        lookup(&periods[periods.len() - 1])?
    };

    Ok(MinuteSpan {
        start: first.start_minute,
        end: last.start_minute + last.duration_minutes,
    })
}
