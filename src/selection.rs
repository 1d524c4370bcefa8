use crate::data_types::Category;

/// Categories the user wants in the next dinner. Iteration follows the order
/// in which categories were picked; that order ends up in the request filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    selected: Vec<Category>,
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self {
            selected: Category::ALL.to_vec(),
        }
    }
}

impl CategorySelection {
    pub fn empty() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    pub fn toggle(&mut self, category: Category) {
        if let Some(pos) = self.selected.iter().position(|c| *c == category) {
            self.selected.remove(pos);
        } else {
            self.selected.push(category);
        }
    }

    pub fn select_all(&mut self) {
        self.selected = Category::ALL.to_vec();
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_all_selected(&self) -> bool {
        self.selected.len() == Category::ALL.len()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.selected.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Category> {
        self.selected.clone()
    }
}

impl FromIterator<Category> for CategorySelection {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut selection = CategorySelection::empty();
        for cat in iter {
            if !selection.contains(cat) {
                selection.selected.push(cat);
            }
        }
        selection
    }
}
