//! Directive expression helpers
//!
//! Small string parsers shared by the directive resolver. Expressions have
//! no operator language: the only syntax is the optional `$ctx.` context
//! prefix, a chain of leading `!` negations on `show` expressions, and the
//! `name=expression` pair list of `attr`/`attrs`.

/// The context prefix; purely cosmetic, resolved identically to the bare key.
pub const CTX_PREFIX: &str = "$ctx.";

/// Strip the `$ctx.` prefix from an expression if present.
pub(crate) fn strip_ctx_prefix(expr: &str) -> &str {
    expr.strip_prefix(CTX_PREFIX).unwrap_or(expr)
}

/// Parse a `show` expression into its negation parity and bare key.
///
/// The `$ctx.` prefix is stripped first, then every leading `!` marker.
/// Returns `(negated, key)` where `negated` is true for an odd negation
/// count.
pub(crate) fn parse_show_expr(expr: &str) -> (bool, &str) {
    let stripped = strip_ctx_prefix(expr);
    let key = stripped.trim_start_matches('!');
    let negations = stripped.len() - key.len();
    (negations % 2 == 1, key)
}

/// Split an `attr`/`attrs` value into `(attribute name, expression)` pairs.
///
/// Pairs are comma-separated and split on the first `=`. A pair without `=`
/// yields an empty expression, which resolves like any other missing key;
/// malformed lists surface in the output rather than erroring.
pub(crate) fn parse_attr_pairs(list: &str) -> impl Iterator<Item = (&str, &str)> {
    list.split(',')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}
