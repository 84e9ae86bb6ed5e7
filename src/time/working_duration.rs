use core::fmt;
use std::time::Duration;

/// Time spent on an activity, rendered the way the register expects it:
/// `6` for six full hours and `6:45` otherwise.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkingDuration {
    hours: u64,
    minutes: u8,
}

impl WorkingDuration {
    #[must_use]
    pub const fn hours(&self) -> u64 {
        self.hours
    }

    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn to_duration(&self) -> Duration {
        Duration::from_secs(self.hours * 3600 + self.minutes as u64 * 60)
    }
}

impl From<Duration> for WorkingDuration {
    /// Seconds are truncated.
    fn from(duration: Duration) -> Self {
        let minutes = duration.as_secs() / 60;

        Self {
            hours: minutes / 60,
            minutes: (minutes % 60) as u8,
        }
    }
}

impl fmt::Display for WorkingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 0 {
            write!(f, "{}", self.hours)
        } else {
            write!(f, "{}:{:02}", self.hours, self.minutes)
        }
    }
}
