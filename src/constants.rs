use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

pub const RANDOM_DINNER_PATH: &str = "/api/dinner/random";
pub const CATEGORIES_PATH: &str = "/api/dinner/categories";
pub const MEALS_PATH: &str = "/api/dinner/meals";

pub const REQUEST_ERROR_MSG: &str = "Failed to fetch random dinner";
pub const CATEGORIES_ERROR_MSG: &str = "Failed to fetch categories";
pub const MEALS_ERROR_MSG: &str = "Failed to fetch meals";
pub const FALLBACK_ERROR_MSG: &str = "An error occurred";

pub const SPIN_TICK: Duration = Duration::from_millis(100);
pub const SPIN_DURATION: Duration = Duration::from_millis(3000);
pub const SPIN_COMPLETE_DELAY: Duration = Duration::from_millis(1000);

/// Ingredients shown on a dish card before collapsing into "+N more".
pub const MAX_SHOWN_INGREDIENTS: usize = 4;
