use chrono::{Local, NaiveDate};

/// Source of "today" for past-day checks.
///
/// Services read the local date unless a fixed date was set, which keeps
/// calendar and selection tests independent of the machine clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    fixed: Option<NaiveDate>,
}

impl Clock {
    pub fn system() -> Self {
        Self { fixed: None }
    }

    pub fn fixed(today: NaiveDate) -> Self {
        Self { fixed: Some(today) }
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed.unwrap_or_else(|| Local::now().date_naive())
    }
}
