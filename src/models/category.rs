//! Expense categories
//!
//! The category set is closed: five fixed categories in a fixed order.
//! Anything keyed by category (budgets, images, chart rows) is built as a
//! [`CategoryMap`] over [`Category::ALL`], so no mapping can miss one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::ExpenseError;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Rent,
    Utilities,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Rent,
        Category::Utilities,
    ];

    /// Number of categories
    pub const COUNT: usize = Self::ALL.len();

    /// Display name
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
        }
    }

    /// Position in [`Category::ALL`]
    pub const fn index(&self) -> usize {
        match self {
            Category::Food => 0,
            Category::Transport => 1,
            Category::Entertainment => 2,
            Category::Rent => 3,
            Category::Utilities => 4,
        }
    }

    /// Image shown next to the category selector
    pub const fn image_url(&self) -> &'static str {
        match self {
            Category::Food => "https://via.placeholder.com/300x200.png?text=Food",
            Category::Transport => "https://via.placeholder.com/300x200.png?text=Transport",
            Category::Entertainment => {
                "https://via.placeholder.com/300x200.png?text=Entertainment"
            }
            Category::Rent => "https://via.placeholder.com/300x200.png?text=Rent",
            Category::Utilities => "https://via.placeholder.com/300x200.png?text=Utilities",
        }
    }

    /// Caption shown under the category image
    pub fn image_caption(&self) -> String {
        format!("{} Expenses", self.name())
    }

    /// The next category, wrapping around (selector cycling)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// The previous category, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Food
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ExpenseError::unknown_category(s))
    }
}

/// A total mapping from every [`Category`] to a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    values: [T; Category::COUNT],
}

impl<T> CategoryMap<T> {
    /// Build the map by evaluating `f` for every category
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            values: Category::ALL.map(&mut f),
        }
    }

    /// Value for a category
    pub fn get(&self, category: Category) -> &T {
        &self.values[category.index()]
    }

    /// Replace the value for a category, returning the old one
    pub fn set(&mut self, category: Category, value: T) -> T {
        std::mem::replace(&mut self.values[category.index()], value)
    }

    /// Iterate in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().zip(self.values.iter())
    }

    /// Transform every value, keeping the category keys
    pub fn map<U>(&self, mut f: impl FnMut(Category, &T) -> U) -> CategoryMap<U> {
        CategoryMap::from_fn(|c| f(c, self.get(c)))
    }
}

impl<T: Default> Default for CategoryMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        self.get(category)
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        &mut self.values[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["Food", "Transport", "Entertainment", "Rent", "Utilities"]
        );
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" RENT ".parse::<Category>().unwrap(), Category::Rent);
        assert!("Groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_every_category_has_an_image() {
        for c in Category::ALL {
            assert!(c.image_url().starts_with("https://"));
            assert!(c.image_caption().ends_with("Expenses"));
        }
    }

    #[test]
    fn test_cycling() {
        assert_eq!(Category::Food.next(), Category::Transport);
        assert_eq!(Category::Utilities.next(), Category::Food);
        assert_eq!(Category::Food.prev(), Category::Utilities);
    }

    #[test]
    fn test_category_map_is_total() {
        let mut map: CategoryMap<u32> = CategoryMap::default();
        assert_eq!(map.iter().count(), Category::COUNT);

        let old = map.set(Category::Rent, 7);
        assert_eq!(old, 0);
        assert_eq!(map[Category::Rent], 7);

        map[Category::Food] += 2;
        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled[Category::Food], 4);
        assert_eq!(doubled[Category::Rent], 14);
    }
}
