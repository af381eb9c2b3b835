//! Tokenizer and formatter for the delimited rule grammar.

use super::RuleError;

/// AND/OR relation of a condition term to its predecessor.
///
/// The first condition in a sequence carries no joiner; every later
/// condition is prefixed with `;` (AND) or `|` (OR) in the serialized
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionJoiner {
    /// The condition must hold in addition to its predecessor.
    And,
    /// The condition may hold instead of its predecessor.
    Or,
}

impl ConditionJoiner {
    /// The grammar character prefixed to a joined condition term.
    #[must_use]
    pub(crate) const fn prefix(self) -> char {
        match self {
            Self::And => ';',
            Self::Or => '|',
        }
    }

    const fn from_prefix(ch: char) -> Option<Self> {
        match ch {
            ';' => Some(Self::And),
            '|' => Some(Self::Or),
            _ => None,
        }
    }
}

/// One parsed `Name(p1,p2)` term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedTerm {
    pub name: String,
    pub params: Vec<String>,
}

/// Renders a term as `Name(p1<delimiter>p2)`.
pub(crate) fn format_term(name: &str, params: &[String], delimiter: &str) -> String {
    format!("{name}({})", params.join(delimiter))
}

/// Splits an events/actions string into its terms.
///
/// Both separators are accepted interchangeably here; grouping only
/// matters for conditions.
pub(crate) fn split_terms(raw: &str) -> Vec<String> {
    raw.replace('|', ";")
        .split(';')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Splits a conditions string into `(joiner, term)` pairs in order.
///
/// Joiner characters are prefixed to the term they belong to rather than
/// separating terms, so the scan attributes each `;`/`|` to the term
/// that follows it. The first term has no joiner.
pub(crate) fn tokenize_conditions(raw: &str) -> Vec<(Option<ConditionJoiner>, String)> {
    let mut terms = Vec::new();
    let mut pending: Option<ConditionJoiner> = None;
    let mut current = String::new();

    for ch in raw.chars() {
        if let Some(joiner) = ConditionJoiner::from_prefix(ch) {
            push_term(&mut terms, pending, &current);
            current.clear();
            pending = Some(joiner);
        } else {
            current.push(ch);
        }
    }
    push_term(&mut terms, pending, &current);

    terms
}

fn push_term(
    terms: &mut Vec<(Option<ConditionJoiner>, String)>,
    joiner: Option<ConditionJoiner>,
    term: &str,
) {
    let term = term.trim();
    if !term.is_empty() {
        terms.push((joiner, term.to_string()));
    }
}

/// Parses a term into its operation name and parameter list.
///
/// Empty parentheses yield an empty parameter list. `Ping_APIURL`'s
/// `::`-joined parameters are not split here; a literal `::` inside a
/// parameter value is indistinguishable from the delimiter, so the raw
/// text is preserved as a single parameter.
pub(crate) fn parse_term(term: &str) -> Result<ParsedTerm, RuleError> {
    let (name, rest) = term
        .split_once('(')
        .ok_or_else(|| RuleError::MalformedTerm(term.to_string()))?;
    let inner = rest.trim_end_matches(')');
    let params = if inner.is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(ToString::to_string).collect()
    };
    Ok(ParsedTerm {
        name: name.to_string(),
        params,
    })
}
