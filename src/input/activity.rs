use serde::Deserialize;

/// What was done on a day, written as `["ACTIVITY", "start", "end"]` in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "(String, String, String)")]
pub struct Activity {
    action: String,
    start: String,
    end: String,
}

impl Activity {
    #[must_use]
    pub fn new(action: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The start time, not yet parsed, because the hour format is only known when filling.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }
}

impl From<(String, String, String)> for Activity {
    fn from((action, start, end): (String, String, String)) -> Self {
        Self { action, start, end }
    }
}

/// Used when neither the day nor the month provide an activity.
#[must_use]
pub fn default_activities() -> Vec<Activity> {
    vec![Activity::new("ANALISI LETTERATURA", "10:00", "16:00")]
}
