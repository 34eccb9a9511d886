use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque identifier of a task, unique for the lifetime of its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn new(raw: u64) -> Self {
        TaskId(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of task categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Personal,
    Work,
    Shopping,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Personal, Category::Work, Category::Shopping];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Shopping => "shopping",
        }
    }

    /// Next category in declaration order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Category::Personal => Category::Work,
            Category::Work => Category::Shopping,
            Category::Shopping => Category::Personal,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category `{0}` (expected personal, work or shopping)")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Category::Personal),
            "work" => Ok(Category::Work),
            "shopping" => Ok(Category::Shopping),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// The fixed set of task priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority `{0}` (expected high, medium or low)")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

/// A single to-do entry. Only `completed` changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub category: Category,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

/// Field values of the next task, edited before it is submitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub text: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_draft_defaults() {
        let draft = Draft::default();
        assert_eq!(draft.text, "");
        assert_eq!(draft.category, Category::Personal);
        assert_eq!(draft.priority, Priority::Medium);
        assert!(draft.due_date.is_none());
    }

    #[rstest]
    #[case("personal", Category::Personal)]
    #[case("work", Category::Work)]
    #[case(" Shopping ", Category::Shopping)]
    fn test_category_parses_known_names(#[case] input: &str, #[case] expected: Category) {
        assert_eq!(input.parse::<Category>(), Ok(expected));
    }

    #[rstest]
    #[case("high", Priority::High)]
    #[case("MEDIUM", Priority::Medium)]
    #[case("low", Priority::Low)]
    fn test_priority_parses_known_names(#[case] input: &str, #[case] expected: Priority) {
        assert_eq!(input.parse::<Priority>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("errands")]
    #[case("urgent")]
    fn test_unknown_names_are_rejected(#[case] input: &str) {
        assert!(input.parse::<Category>().is_err());
        assert!(input.parse::<Priority>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        for priority in Priority::ALL {
            assert_eq!(priority.to_string().parse::<Priority>(), Ok(priority));
        }
    }

    #[test]
    fn test_next_cycles_through_every_variant() {
        let mut category = Category::default();
        for expected in [Category::Work, Category::Shopping, Category::Personal] {
            category = category.next();
            assert_eq!(category, expected);
        }

        let mut priority = Priority::default();
        for expected in [Priority::Low, Priority::High, Priority::Medium] {
            priority = priority.next();
            assert_eq!(priority, expected);
        }
    }
}
