//! Binding expression scanning and prefix rewriting.
//!
//! A binding expression is an `@{...}` token embedded in a string attribute:
//! `@{title}`, `@{item.name}`, or `@{title ?? fallback}`. Include expansion
//! rewrites un-dotted identifiers with the site's namespace prefix; dotted
//! identifiers are already scoped to a receiver (`this`, `item`) and are
//! never touched.

use trellis_common::combine_prefixed;

/// Rewrites every `@{...}` binding in `input` with the given prefix.
///
/// Each identifier inside a binding is prefixed via
/// [`combine_prefixed`] unless it contains a `.`. Identifiers on both
/// sides of a `??` fallback are rewritten independently. Text outside
/// binding tokens and malformed (unterminated) tokens pass through
/// unchanged. An empty prefix is the identity.
pub fn rewrite_bindings(input: &str, prefix: &str) -> String {
    if prefix.is_empty() || !input.contains("@{") {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("@{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                out.push_str("@{");
                out.push_str(&rewrite_expr(&after[..end], prefix));
                out.push('}');
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated token; emit the rest verbatim.
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Rewrites the inside of one binding token.
fn rewrite_expr(expr: &str, prefix: &str) -> String {
    expr.split("??")
        .map(|part| rewrite_ident(part.trim(), prefix))
        .collect::<Vec<_>>()
        .join(" ?? ")
}

fn rewrite_ident(ident: &str, prefix: &str) -> String {
    if ident.is_empty() || ident.contains('.') {
        ident.to_string()
    } else {
        combine_prefixed(prefix, ident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_identifier_is_prefixed() {
        assert_eq!(rewrite_bindings("@{title}", "header1"), "@{header1Title}");
    }

    #[test]
    fn dotted_identifier_is_untouched() {
        assert_eq!(rewrite_bindings("@{item.name}", "header1"), "@{item.name}");
        assert_eq!(rewrite_bindings("@{this.count}", "p"), "@{this.count}");
    }

    #[test]
    fn empty_prefix_is_identity() {
        assert_eq!(rewrite_bindings("@{title}", ""), "@{title}");
    }

    #[test]
    fn surrounding_text_preserved() {
        assert_eq!(
            rewrite_bindings("Hello @{name}!", "card"),
            "Hello @{cardName}!"
        );
    }

    #[test]
    fn multiple_bindings_in_one_string() {
        assert_eq!(
            rewrite_bindings("@{first} @{second}", "p"),
            "@{pFirst} @{pSecond}"
        );
    }

    #[test]
    fn fallback_rewrites_both_sides() {
        assert_eq!(
            rewrite_bindings("@{title ?? placeholder}", "header1"),
            "@{header1Title ?? header1Placeholder}"
        );
    }

    #[test]
    fn fallback_with_dotted_side() {
        assert_eq!(
            rewrite_bindings("@{item.title ?? fallback}", "p"),
            "@{item.title ?? pFallback}"
        );
    }

    #[test]
    fn snake_case_identifier_is_camel_cased() {
        assert_eq!(
            rewrite_bindings("@{sub_title}", "header1"),
            "@{header1SubTitle}"
        );
    }

    #[test]
    fn no_binding_passthrough() {
        assert_eq!(rewrite_bindings("plain text", "p"), "plain text");
    }

    #[test]
    fn unterminated_token_passthrough() {
        assert_eq!(rewrite_bindings("broken @{title", "p"), "broken @{title");
    }
}
