use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market/news region. Selects which feed URLs and tickers are queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    World,
    Malaysia,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::World, Category::Malaysia];

    /// Upper-case label used in report section headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::World => "WORLD",
            Category::Malaysia => "MALAYSIA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::World => "World",
            Category::Malaysia => "Malaysia",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::World => write!(f, "world"),
            Category::Malaysia => write!(f, "malaysia"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "world" => Ok(Category::World),
            "malaysia" | "my" => Ok(Category::Malaysia),
            _ => Err(format!("Unknown category: {s}. Use 'world' or 'malaysia'")),
        }
    }
}
