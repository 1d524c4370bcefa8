use crate::constants::MAX_SHOWN_INGREDIENTS;
use crate::data_backend::dinner_client::FetchState;
use crate::data_backend::{bold, underline};
use crate::data_types::dinner_data_types::{DinnerSuggestion, Dish};
use crate::data_types::Category;
use crate::selection::CategorySelection;
use crate::spin::{SpinFrame, SpinPhase};

/// What the main area shows. More than one can be visible at once: an error
/// is shown on top of whatever else applies.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Spin,
    Initial,
    Loading,
    Error(String),
    Dinner(DinnerSuggestion),
}

pub fn screens(state: &FetchState, spin_visible: bool) -> Vec<Screen> {
    let mut screens = Vec::new();

    if spin_visible {
        screens.push(Screen::Spin);
    }
    if state.dinner.is_none() && !state.loading && !spin_visible {
        screens.push(Screen::Initial);
    }
    if state.loading && !spin_visible {
        screens.push(Screen::Loading);
    }
    if let Some(err) = &state.error {
        screens.push(Screen::Error(err.clone()));
    }
    if let Some(dinner) = &state.dinner {
        if !state.loading && !spin_visible {
            screens.push(Screen::Dinner(dinner.clone()));
        }
    }

    screens
}

/// Renders every screen except [`Screen::Spin`], which is drawn from live
/// frames instead.
pub fn build_screens_msg(screens: &[Screen]) -> String {
    let mut msg = String::new();

    for screen in screens {
        match screen {
            Screen::Spin => {}
            Screen::Initial => {
                msg += &format!("\n{}\n", bold("Ready? 🍽️"));
                msg += "Choose categories and spin!\n";
            }
            Screen::Loading => {
                msg += &format!("\n{}\n", bold("Preparing..."));
                msg += "Selecting your meal\n";
            }
            Screen::Error(err) => {
                msg += &format!("\n{}\n", bold("Error"));
                msg += &format!("{}\n", err);
                msg += "Press r to retry\n";
            }
            Screen::Dinner(dinner) => msg += &build_dinner_msg(dinner),
        }
    }

    msg
}

pub fn build_dinner_msg(dinner: &DinnerSuggestion) -> String {
    let mut msg = String::new();
    let courses = dinner.courses();

    if courses.is_empty() {
        msg += &format!("\n{}\n", bold("No Categories Selected"));
        msg += "Please select at least one category to get dinner suggestions.\n";
        return msg;
    }

    msg += &format!("\n✨ {} ✨\n", bold("Tonight's Dinner"));
    for (_, dish) in courses {
        msg += "\n";
        msg += &build_dish_card(dish);
    }

    msg
}

/// Labelled with the dish's own category, not the course slot it came in.
pub fn build_dish_card(dish: &Dish) -> String {
    let info = dish.category.info();
    let mut msg = String::new();

    msg += &format!("{} {}", info.icon, info.label);
    if let Some(difficulty) = &dish.difficulty {
        msg += &format!("  [{}]", difficulty);
    }
    msg += "\n";

    msg += &format!(" • {}\n", underline(&dish.name));

    if let Some(description) = dish.description.as_deref().filter(|d| !d.is_empty()) {
        msg += &format!("   {}\n", description);
    }
    if let Some(cooking_time) = &dish.cooking_time {
        msg += &format!("   ⏱ {}\n", cooking_time);
    }

    if let Some(ingredients) = dish.ingredients.as_ref().filter(|i| !i.is_empty()) {
        let shown = ingredients
            .iter()
            .take(MAX_SHOWN_INGREDIENTS)
            .map(String::as_str)
            .collect::<Vec<&str>>()
            .join(", ");
        msg += &format!("   Ingredients: {}", shown);
        if ingredients.len() > MAX_SHOWN_INGREDIENTS {
            msg += &format!(" +{} more", ingredients.len() - MAX_SHOWN_INGREDIENTS);
        }
        msg += "\n";
    }

    msg
}

pub fn build_spin_msg(frame: &SpinFrame) -> String {
    let mut msg = String::new();

    msg += &format!("🎰 {} 🎰 ", bold("Spinning!"));
    msg += match frame.phase {
        SpinPhase::Spinning => "Spinning...",
        SpinPhase::Settled => "Ready!",
    };

    let slots = frame
        .slots
        .iter()
        .map(|slot| format!("[{} {}]", slot.icon, slot.name))
        .collect::<Vec<String>>()
        .join(" ");
    if !slots.is_empty() {
        msg += "  ";
        msg += &slots;
    }

    match frame.phase {
        SpinPhase::Spinning => msg += &format!("  ({})", frame.spins),
        SpinPhase::Settled if !frame.slots.is_empty() => msg += "  🎉 Afiyet olsun! 🍽️",
        SpinPhase::Settled => {}
    }

    msg
}

pub fn build_selector_msg(selection: &CategorySelection) -> String {
    let mut msg = String::new();

    for (idx, category) in Category::ALL.iter().enumerate() {
        let info = category.info();
        let mark = if selection.contains(*category) {
            "✓"
        } else {
            " "
        };
        msg += &format!("  {}) [{}] {} {}\n", idx + 1, mark, info.icon, info.label);
    }

    msg
}

pub fn build_catalog_msg(dishes: &[Dish], only: Option<Category>) -> String {
    let mut msg = String::new();

    for category in Category::ALL {
        if only.is_some_and(|c| c != category) {
            continue;
        }
        let in_category = dishes
            .iter()
            .filter(|dish| dish.category == category)
            .collect::<Vec<&Dish>>();

        msg += &format!("\n{}\n", bold(category.label()));
        if in_category.is_empty() {
            msg += "   no dishes...\n";
            continue;
        }
        for dish in in_category {
            msg += &format!(" • {}", dish.name);
            if let Some(cooking_time) = &dish.cooking_time {
                msg += &format!(" ({})", cooking_time);
            }
            msg += "\n";
        }
    }

    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin::SlotItem;

    fn dish(category: Category, name: &str) -> Dish {
        Dish {
            id: 1,
            name: name.to_string(),
            category,
            description: None,
            cooking_time: None,
            difficulty: None,
            cuisine_type: None,
            ingredients: None,
        }
    }

    fn sample_dinner() -> DinnerSuggestion {
        DinnerSuggestion {
            main_course: Some(dish(Category::MainCourse, "Köfte")),
            soup: Some(dish(Category::Soup, "Yayla Çorbası")),
            ..Default::default()
        }
    }

    #[test]
    fn screen_resolution_follows_state() {
        let idle = FetchState::default();
        assert_eq!(screens(&idle, false), vec![Screen::Initial]);
        assert_eq!(screens(&idle, true), vec![Screen::Spin]);

        let loading = FetchState {
            loading: true,
            ..Default::default()
        };
        assert_eq!(screens(&loading, true), vec![Screen::Spin]);
        assert_eq!(screens(&loading, false), vec![Screen::Loading]);

        let done = FetchState {
            dinner: Some(sample_dinner()),
            ..Default::default()
        };
        assert_eq!(screens(&done, false), vec![Screen::Dinner(sample_dinner())]);

        let failed_retry = FetchState {
            dinner: Some(sample_dinner()),
            loading: false,
            error: Some("Failed to fetch random dinner".into()),
        };
        assert_eq!(
            screens(&failed_retry, false),
            vec![
                Screen::Error("Failed to fetch random dinner".into()),
                Screen::Dinner(sample_dinner())
            ]
        );
    }

    #[test]
    fn dish_card_collapses_long_ingredient_lists() {
        let mut d = dish(Category::Dessert, "Baklava");
        d.difficulty = Some("Hard".into());
        d.cooking_time = Some("2 hours".into());
        d.ingredients = Some(
            ["yufka", "walnut", "butter", "sugar", "lemon", "water"]
                .map(String::from)
                .to_vec(),
        );

        let card = build_dish_card(&d);
        assert!(card.starts_with("🍰 Dessert  [Hard]\n"));
        assert!(card.contains("⏱ 2 hours"));
        assert!(card.contains("Ingredients: yufka, walnut, butter, sugar +2 more"));
        assert!(!card.contains("lemon"));
    }

    #[test]
    fn dish_card_skips_missing_fields() {
        let card = build_dish_card(&dish(Category::Soup, "Ezogelin"));
        assert_eq!(card, format!("🥣 Soup\n • {}\n", underline("Ezogelin")));
    }

    #[test]
    fn dinner_lists_courses_in_display_order() {
        let msg = build_dinner_msg(&sample_dinner());
        assert!(msg.contains("Tonight's Dinner"));
        let main_pos = msg.find("Köfte").unwrap();
        let soup_pos = msg.find("Yayla Çorbası").unwrap();
        assert!(main_pos < soup_pos);
    }

    #[test]
    fn card_label_follows_dish_category() {
        let misfiled = DinnerSuggestion {
            soup: Some(dish(Category::Dessert, "Aşure")),
            ..Default::default()
        };
        let msg = build_dinner_msg(&misfiled);
        assert!(msg.contains("🍰 Dessert\n"));
        assert!(!msg.contains("Soup"));
    }

    #[test]
    fn empty_dinner_asks_for_categories() {
        let msg = build_dinner_msg(&DinnerSuggestion::default());
        assert!(msg.contains("No Categories Selected"));
    }

    #[test]
    fn spin_line_shows_counter_then_greeting() {
        let slot = SlotItem {
            id: "3",
            name: "Soup",
            icon: "🥣",
            color: "orange",
        };
        let mut frame = SpinFrame {
            phase: SpinPhase::Spinning,
            spins: 12,
            slots: vec![slot],
        };
        let line = build_spin_msg(&frame);
        assert!(line.contains("Spinning..."));
        assert!(line.contains("[🥣 Soup]"));
        assert!(line.ends_with("(12)"));

        frame.phase = SpinPhase::Settled;
        let line = build_spin_msg(&frame);
        assert!(line.contains("Ready!"));
        assert!(line.contains("Afiyet olsun!"));
    }

    #[test]
    fn selector_marks_selected_categories() {
        let selection: CategorySelection = [Category::Salad].into_iter().collect();
        let msg = build_selector_msg(&selection);
        assert!(msg.contains("4) [✓] 🥬 Salad"));
        assert!(msg.contains("1) [ ] 🍽️ Main Course"));
    }

    #[test]
    fn catalog_filters_by_category() {
        let dishes = vec![
            dish(Category::MainCourse, "Nohut"),
            dish(Category::Salad, "Çoban Salatası"),
        ];
        let msg = build_catalog_msg(&dishes, Some(Category::Salad));
        assert!(msg.contains("Çoban Salatası"));
        assert!(!msg.contains("Nohut"));
        assert!(!msg.contains("Main Course"));
    }
}
