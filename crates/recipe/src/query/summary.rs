use std::fmt;

/// A single badge describing one active search or bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    Search(String),
    MaxPrepTime(u32),
    MaxCookingTime(u32),
    MinServings(u32),
    MaxServings(u32),
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(term) => write!(f, "Search: \"{term}\""),
            Self::MaxPrepTime(minutes) => write!(f, "Prep ≤ {minutes}min"),
            Self::MaxCookingTime(minutes) => write!(f, "Cook ≤ {minutes}min"),
            Self::MinServings(servings) => write!(f, "Serves ≥ {servings}"),
            Self::MaxServings(servings) => write!(f, "Serves ≤ {servings}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySummary {
    pub shown: usize,
    pub total: usize,
}

impl QuerySummary {
    pub fn is_complete(&self) -> bool {
        self.shown == self.total
    }
}

impl fmt::Display for QuerySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            write!(f, "Showing all {} recipes", self.total)
        } else {
            write!(f, "Showing {} of {} recipes", self.shown, self.total)
        }
    }
}
