//! Configuration and category commands

use crate::config::{ExpensePaths, Settings};
use crate::display::format_category_list;
use crate::error::ExpenseResult;

/// Describe the active configuration
pub fn format_config(paths: &ExpensePaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Expense Tracker Configuration\n");
    output.push_str("=============================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", paths.settings_file().display()));
    output.push_str(&format!("Log file (TUI):   {}\n", paths.log_file().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol:  {}\n", settings.currency_symbol));
    output.push_str(&format!("  Date format:      {}\n", settings.date_format));
    output.push_str(&format!("  Export file name: {}\n", settings.export_file_name));
    output.push_str(&format!("  Log filter:       {}\n", settings.log_filter));
    output
}

/// Handle `expense config`
pub fn handle_config_command(
    paths: &ExpensePaths,
    settings: &Settings,
    init: bool,
) -> ExpenseResult<()> {
    if init {
        settings.save(paths)?;
        println!("Settings written to {}", paths.settings_file().display());
        println!();
    }
    print!("{}", format_config(paths, settings));
    Ok(())
}

/// Handle `expense categories`
pub fn handle_categories_command() -> ExpenseResult<()> {
    println!("{}", format_category_list());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_config() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let text = format_config(&paths, &Settings::default());

        assert!(text.contains("config.json"));
        assert!(text.contains("expenses.csv"));
    }

    #[test]
    fn test_init_writes_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        handle_config_command(&paths, &Settings::default(), true).unwrap();
        assert!(paths.is_initialized());
    }
}
