//! Cleanup of generated output before grading.
//!
//! Documentation generators usually wrap their answer in a markdown code
//! fence. The fence lines carry no documentation, so they are removed before
//! the text is handed to the rubric.

use std::sync::OnceLock;

use regex::Regex;

fn opening_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^```[\w+-]*[ \t]*\n?").expect("opening fence pattern is valid"))
}

fn closing_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n?```$").expect("closing fence pattern is valid"))
}

/// Remove a leading and a trailing markdown fence from `code`.
///
/// Only the outermost fence pair is stripped, so fenced examples inside a
/// docstring survive. Text without fences comes back trimmed.
///
/// ```
/// use docgrade::cleanup::clean_code_output;
///
/// let cleaned = clean_code_output("```python\ndef f(): pass\n```\n");
/// assert_eq!(cleaned, "def f(): pass");
/// ```
pub fn clean_code_output(code: &str) -> String {
    let without_open = opening_fence().replace(code.trim(), "");
    let without_close = closing_fence().replace(without_open.trim(), "");
    without_close.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_python_fence() {
        let output = "```python\ndef add(a: int, b: int) -> int:\n    return a + b\n```";
        assert_eq!(
            clean_code_output(output),
            "def add(a: int, b: int) -> int:\n    return a + b"
        );
    }

    #[test]
    fn test_strips_bare_fence() {
        assert_eq!(clean_code_output("```\nx = 1\n```"), "x = 1");
    }

    #[test]
    fn test_strips_other_language_tags() {
        assert_eq!(clean_code_output("```py3\nx = 1\n```"), "x = 1");
        assert_eq!(clean_code_output("```c++\nint x;\n```"), "int x;");
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(clean_code_output("\n\n  ```python\nx = 1\n```  \n"), "x = 1");
    }

    #[test]
    fn test_unfenced_text_only_trimmed() {
        assert_eq!(clean_code_output("  def f(): pass \n"), "def f(): pass");
    }

    #[test]
    fn test_inner_fences_kept() {
        let output = "```python\ndef f():\n    \"\"\"Example:\n    ```\n    f()\n    ```\n    \"\"\"\n```";
        let cleaned = clean_code_output(output);
        assert!(cleaned.starts_with("def f():"));
        assert!(cleaned.contains("    ```\n    f()"));
        assert!(cleaned.ends_with("\"\"\""));
    }

    #[test]
    fn test_unclosed_fence() {
        assert_eq!(clean_code_output("```python\nx = 1"), "x = 1");
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean_code_output(""), "");
        assert_eq!(clean_code_output("```"), "");
    }
}
