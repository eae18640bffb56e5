//! Tokenizer — turns free-form text into lowercase tokens for skill matching.
//!
//! A token is a maximal run of alphanumeric characters plus `+`, `#`, and `.`,
//! so names like "C++", "C#", and "Node.js" survive as single tokens. Everything
//! else (whitespace, commas, slashes, ...) acts as a separator.

/// Splits `text` into lowercase tokens. Pure; empty input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if is_token_char(ch) {
            for lower in ch.to_lowercase() {
                current.push(lower);
            }
        } else if !current.is_empty() {
            push_token(&mut tokens, std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        push_token(&mut tokens, current);
    }
    tokens
}

fn is_token_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '+' | '#' | '.')
}

/// Sentence-final periods glue onto the preceding word ("via Docker." would
/// yield "docker."), so trailing `.` runs are stripped from any token that
/// contains an alphanumeric. Interior and leading dots ("node.js", ".net")
/// and symbol-only tokens (a stray ".") are untouched.
fn push_token(tokens: &mut Vec<String>, mut token: String) {
    if token.chars().any(char::is_alphanumeric) {
        let trimmed_len = token.trim_end_matches('.').len();
        token.truncate(trimmed_len);
    }
    tokens.push(token);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn test_lowercases_all_tokens() {
        assert_eq!(tokenize("Python DOCKER aws"), vec!["python", "docker", "aws"]);
    }

    #[test]
    fn test_symbols_inside_tokens_are_kept() {
        assert_eq!(tokenize("C++ and C# and Node.js"), vec!["c++", "and", "c#", "and", "node.js"]);
    }

    #[test]
    fn test_punctuation_outside_class_separates() {
        assert_eq!(tokenize("python, docker/aws (kubernetes)"), vec!["python", "docker", "aws", "kubernetes"]);
    }

    #[test]
    fn test_symbol_only_token_is_valid() {
        // A stray "." is still a token; no extra filtering happens here.
        assert_eq!(tokenize("end . start"), vec!["end", ".", "start"]);
    }

    #[test]
    fn test_deterministic_on_same_input() {
        let text = "Rust, Go, C++ & more Rust";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn test_sentence_final_period_is_stripped() {
        assert_eq!(tokenize("deployed via Docker."), vec!["deployed", "via", "docker"]);
        assert_eq!(
            tokenize("Looking for Python, Docker, and AWS."),
            vec!["looking", "for", "python", "docker", "and", "aws"]
        );
    }

    #[test]
    fn test_trailing_period_run_is_stripped() {
        assert_eq!(tokenize("the end..."), vec!["the", "end"]);
    }

    #[test]
    fn test_interior_and_leading_dots_survive_stripping() {
        assert_eq!(tokenize("a Node.js gateway."), vec!["a", "node.js", "gateway"]);
        // "Node.js." at sentence end loses only the final period.
        assert_eq!(tokenize("built on Node.js."), vec!["built", "on", "node.js"]);
        assert_eq!(tokenize("migrated to .NET"), vec!["migrated", "to", ".net"]);
    }

    #[test]
    fn test_digits_are_token_chars() {
        assert_eq!(tokenize("HTML5 and ES2015"), vec!["html5", "and", "es2015"]);
    }
}
