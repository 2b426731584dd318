//! Grouping raw query tokens into homogeneous expressions.

/// Operators recognized between tokens, in the order they are tried.
const OPERATORS: [&str; 3] = ["AND", "OR", "NOT"];

/// Group raw query tokens into expressions.
///
/// Scanning left to right, an expression starts at the current token and
/// greedily consumes directly-following operator-joined terms: `AND` joins
/// are tried first, and only if none applied, `OR` joins, then `NOT`
/// joins. An expression is homogeneous, it never mixes operators; the
/// first non-matching separator ends it and the remainder starts a new
/// expression. An operator token that does not sit between two terms is
/// just a literal single-term expression.
///
/// `["cat", "AND", "dog", "OR", "bird"]` therefore parses to
/// `"cat AND dog"`, `"OR"`, `"bird"`: once the `AND` chain has been
/// consumed the scan resumes at the orphaned `OR`. This asymmetric
/// grouping is deliberate and matches the source system.
///
/// The returned expressions are deduplicated and sorted lexicographically.
pub fn parse_queries(args: &[String]) -> Vec<String> {
    let mut expressions: Vec<String> = Vec::new();
    let mut i = 0;

    while i < args.len() {
        let mut expr = args[i].clone();
        for op in OPERATORS {
            let mut joined = false;
            while i + 2 < args.len() && args[i + 1] == op {
                expr.push(' ');
                expr.push_str(op);
                expr.push(' ');
                expr.push_str(&args[i + 2]);
                i += 2;
                joined = true;
            }
            if joined {
                break;
            }
        }
        expressions.push(expr);
        i += 1;
    }

    expressions.sort();
    expressions.dedup();
    expressions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_single_term() {
        assert_eq!(parse_queries(&tokens(&["cat"])), vec!["cat"]);
    }

    #[test]
    fn test_homogeneous_chain() {
        assert_eq!(
            parse_queries(&tokens(&["cat", "AND", "dog", "AND", "bird"])),
            vec!["cat AND dog AND bird"]
        );
        assert_eq!(
            parse_queries(&tokens(&["cat", "OR", "dog"])),
            vec!["cat OR dog"]
        );
        assert_eq!(
            parse_queries(&tokens(&["cat", "NOT", "dog"])),
            vec!["cat NOT dog"]
        );
    }

    #[test]
    fn test_mixed_operators_do_not_merge() {
        // The orphaned OR becomes a literal expression of its own.
        assert_eq!(
            parse_queries(&tokens(&["cat", "AND", "dog", "OR", "bird"])),
            vec!["OR", "bird", "cat AND dog"]
        );
    }

    #[test]
    fn test_trailing_operator_is_literal() {
        assert_eq!(
            parse_queries(&tokens(&["cat", "AND"])),
            vec!["AND", "cat"]
        );
    }

    #[test]
    fn test_duplicates_removed_and_sorted() {
        assert_eq!(
            parse_queries(&tokens(&["dog", "cat", "dog"])),
            vec!["cat", "dog"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_queries(&[]).is_empty());
    }
}
