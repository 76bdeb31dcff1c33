//! Bullet rendering of free-text blocks

/// Bullet marker prefixed to every rendered line
pub const BULLET: &str = "- ";

/// Render a text block as one bullet per non-empty trimmed line
pub fn render_block(text: &str) -> Vec<String> {
    text.trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{BULLET}{line}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block() {
        assert!(render_block("").is_empty());
        assert!(render_block("  \n\t\n").is_empty());
    }

    #[test]
    fn test_blank_lines_dropped() {
        assert_eq!(render_block("a\n\nb \n"), vec!["- a", "- b"]);
    }

    #[test]
    fn test_lines_trimmed() {
        let block = "  Added support for retries\n    Fixed a crash on reload  \r\n";
        assert_eq!(
            render_block(block),
            vec!["- Added support for retries", "- Fixed a crash on reload"]
        );
    }

    #[test]
    fn test_rerendering_bullet_text_is_idempotent() {
        let bullets = render_block("  one\n two \n\n\tthree\n");
        let text: String = bullets
            .iter()
            .map(|bullet| format!("  {} \n", bullet.strip_prefix(BULLET).unwrap()))
            .collect();

        assert_eq!(render_block(&text), bullets);
        assert_eq!(bullets, vec!["- one", "- two", "- three"]);
    }
}
