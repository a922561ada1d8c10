use crate::error::QueryError;
use crate::utils::{split, SplitPolicy};

/// Verb for a conjunctive search
pub const AND_VERB: &str = "sa";
/// Verb for a disjunctive search
pub const OR_VERB: &str = "so";
/// Verb that ends a search session
pub const QUIT_VERB: &str = "q";

/// Boolean combination applied to the query terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Documents containing every term
    And,
    /// Documents containing at least one term
    Or,
}

/// Parsed search: a mode and its terms, without the verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub mode: QueryMode,
    pub terms: Vec<String>,
}

impl Query {
    pub fn new<I, S>(mode: QueryMode, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode,
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn and<I: IntoIterator<Item = S>, S: Into<String>>(terms: I) -> Self {
        Self::new(QueryMode::And, terms)
    }

    pub fn or<I: IntoIterator<Item = S>, S: Into<String>>(terms: I) -> Self {
        Self::new(QueryMode::Or, terms)
    }
}

/// One line of input to the search shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(Query),
    Quit,
}

/// Parse a command line such as `sa fox dog`.
///
/// Words are separated by spaces; repeated words are grouped together but
/// otherwise keep their order. The first word is the verb and never becomes
/// a search term. Returns `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, QueryError> {
    let mut words = split(line.trim_end_matches(['\r', '\n']), b' ', SplitPolicy::Group)
        .into_iter()
        .filter(|w| !w.is_empty());

    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let mode = match verb.as_str() {
        AND_VERB => QueryMode::And,
        OR_VERB => QueryMode::Or,
        QUIT_VERB => return Ok(Some(Command::Quit)),
        _ => return Err(QueryError::UnknownCommand(verb.clone())),
    };

    Ok(Some(Command::Search(Query::new(mode, words))))
}
