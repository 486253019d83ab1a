//! Output formatting utilities for the CLI.

use serde::Serialize;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    println!("{}", render(result, json_mode));
}

/// Render `result` the way [`output`] prints it.
pub fn render<T: CommandOutput>(result: &T, json_mode: bool) -> String {
    if json_mode {
        serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
    } else {
        result.to_human()
    }
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Greeting {
        text: String,
    }

    impl CommandOutput for Greeting {
        fn to_human(&self) -> String {
            format!("Hello, {}", self.text)
        }
    }

    #[test]
    fn test_render_modes() {
        let greeting = Greeting {
            text: "world".to_string(),
        };
        assert_eq!(render(&greeting, false), "Hello, world");

        let json: serde_json::Value = serde_json::from_str(&render(&greeting, true)).unwrap();
        assert_eq!(json["text"], "world");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("this is a long line", 10), "this is...");
        assert_eq!(truncate("crème brûlée tart", 8), "crème...");
    }
}
