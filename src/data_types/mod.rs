pub mod dinner_data_types;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Meal course a dish belongs to. The set is closed; the service uses the
/// snake_case names on the wire.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MainCourse,
    Soup,
    SideDish,
    Salad,
    Dessert,
}

/// Fixed display identity of a category.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::MainCourse,
        Category::Soup,
        Category::SideDish,
        Category::Salad,
        Category::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MainCourse => "main_course",
            Category::Soup => "soup",
            Category::SideDish => "side_dish",
            Category::Salad => "salad",
            Category::Dessert => "dessert",
        }
    }

    pub fn info(&self) -> CategoryInfo {
        match self {
            Category::MainCourse => CategoryInfo {
                label: "Main Course",
                icon: "🍽️",
                color: "red",
            },
            Category::Soup => CategoryInfo {
                label: "Soup",
                icon: "🥣",
                color: "orange",
            },
            Category::SideDish => CategoryInfo {
                label: "Side Dish",
                icon: "🥗",
                color: "green",
            },
            Category::Salad => CategoryInfo {
                label: "Salad",
                icon: "🥬",
                color: "emerald",
            },
            Category::Dessert => CategoryInfo {
                label: "Dessert",
                icon: "🍰",
                color: "pink",
            },
        }
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid category: {0}")]
pub struct CategoryParseError(pub String);

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|cat| cat.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}
