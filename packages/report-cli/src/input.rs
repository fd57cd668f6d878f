use anyhow::{Context, Result};
use std::path::Path;

/// Read a URL list: one URL per line, trimmed, blanks dropped.
pub fn read_urls(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read URL list {}", path.display()))?;
    Ok(parse_urls(&contents))
}

pub fn parse_urls(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_drops_blanks() {
        let urls = parse_urls("  https://a \n\n\thttps://b\r\n   \nhttps://a\n");
        assert_eq!(urls, vec!["https://a", "https://b", "https://a"]);
    }

    #[test]
    fn test_empty_file() {
        assert!(parse_urls("\n  \n").is_empty());
    }
}
