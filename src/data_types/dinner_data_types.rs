use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
}

/// One dish per course. The service always fills `main_course` when it was
/// requested, but omits it otherwise, so it is decoded leniently.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DinnerSuggestion {
    #[serde(default)]
    pub main_course: Option<Dish>,
    #[serde(default)]
    pub soup: Option<Dish>,
    #[serde(default)]
    pub side_dish: Option<Dish>,
    #[serde(default)]
    pub salad: Option<Dish>,
    #[serde(default)]
    pub dessert: Option<Dish>,
}

impl DinnerSuggestion {
    pub fn dish(&self, category: Category) -> Option<&Dish> {
        match category {
            Category::MainCourse => self.main_course.as_ref(),
            Category::Soup => self.soup.as_ref(),
            Category::SideDish => self.side_dish.as_ref(),
            Category::Salad => self.salad.as_ref(),
            Category::Dessert => self.dessert.as_ref(),
        }
    }

    /// Present courses in display order.
    pub fn courses(&self) -> Vec<(Category, &Dish)> {
        Category::ALL
            .into_iter()
            .filter_map(|cat| self.dish(cat).map(|dish| (cat, dish)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.courses().is_empty()
    }
}
