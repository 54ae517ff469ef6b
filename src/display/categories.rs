//! Category listing

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Category")]
    name: &'static str,
    #[tabled(rename = "Image")]
    image: &'static str,
}

/// Table of every category with its image reference
pub fn format_category_list() -> String {
    let rows: Vec<CategoryRow> = Category::ALL
        .iter()
        .map(|c| CategoryRow {
            position: c.index() + 1,
            name: c.name(),
            image: c.image_url(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_category() {
        let text = format_category_list();
        for category in Category::ALL {
            assert!(text.contains(category.name()));
            assert!(text.contains(category.image_url()));
        }
    }
}
