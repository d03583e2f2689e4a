//! Filter expressions
//!
//! Each variant renders to one predicate in the API's query language:
//!
//! - `name=value`, `name!=value` (match, regex)
//! - `name=a,b,c`, `name!=a,b,c` (include, exclude)
//! - `name`, `!name` (exists)
//! - `name<5`, `name<=5`, `name>5`, `name>=5` (range)
//!
//! Expressions are never combined; the last one applied wins.

use std::fmt;

/// A single filter predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// A pre-formatted expression, used verbatim
    Raw(String),

    /// `field=value` or `field!=value`
    Match {
        field: String,
        value: String,
        negate: bool,
    },

    /// `field=v1,v2,...` or `field!=v1,v2,...`
    Include {
        field: String,
        values: Vec<String>,
        negate: bool,
    },

    /// `field` or `!field`
    Exists { field: String, negate: bool },

    /// `field=/pattern/flags` or `field!=/pattern/flags`
    Regex {
        field: String,
        pattern: String,
        negate: bool,
    },

    /// `field<value` or `field<=value`
    LessThan {
        field: String,
        value: String,
        or_equal: bool,
    },

    /// `field>value` or `field>=value`
    GreaterThan {
        field: String,
        value: String,
        or_equal: bool,
    },
}

impl Filter {
    /// Use a literal expression
    pub fn raw(expression: impl Into<String>) -> Self {
        Self::Raw(expression.into())
    }

    /// Match a field against a single value
    pub fn match_field(field: impl Into<String>, value: impl fmt::Display, negate: bool) -> Self {
        Self::Match {
            field: field.into(),
            value: value.to_string(),
            negate,
        }
    }

    /// Match a field against any of the given values
    pub fn include<I, V>(field: impl Into<String>, values: I, negate: bool) -> Self
    where
        I: IntoIterator<Item = V>,
        V: fmt::Display,
    {
        Self::Include {
            field: field.into(),
            values: values.into_iter().map(|v| v.to_string()).collect(),
            negate,
        }
    }

    /// Match a field against none of the given values
    pub fn exclude<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: fmt::Display,
    {
        Self::include(field, values, true)
    }

    /// Require a field to exist (or not)
    pub fn exists(field: impl Into<String>, negate: bool) -> Self {
        Self::Exists {
            field: field.into(),
            negate,
        }
    }

    /// Match a field against a regex, delimiters and flags included
    pub fn regex(field: impl Into<String>, pattern: impl Into<String>, negate: bool) -> Self {
        Self::Regex {
            field: field.into(),
            pattern: pattern.into(),
            negate,
        }
    }

    /// Values strictly below (or up to) `value`
    pub fn less_than(field: impl Into<String>, value: impl fmt::Display, or_equal: bool) -> Self {
        Self::LessThan {
            field: field.into(),
            value: value.to_string(),
            or_equal,
        }
    }

    /// Values strictly above (or from) `value`
    pub fn greater_than(
        field: impl Into<String>,
        value: impl fmt::Display,
        or_equal: bool,
    ) -> Self {
        Self::GreaterThan {
            field: field.into(),
            value: value.to_string(),
            or_equal,
        }
    }
}

fn bang(negate: bool) -> &'static str {
    if negate {
        "!"
    } else {
        ""
    }
}

fn equal_sign(or_equal: bool) -> &'static str {
    if or_equal {
        "="
    } else {
        ""
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Raw(expression) => f.write_str(expression),
            Filter::Match {
                field,
                value,
                negate,
            } => write!(f, "{field}{}={value}", bang(*negate)),
            Filter::Include {
                field,
                values,
                negate,
            } => write!(f, "{field}{}={}", bang(*negate), values.join(",")),
            Filter::Exists { field, negate } => write!(f, "{}{field}", bang(*negate)),
            Filter::Regex {
                field,
                pattern,
                negate,
            } => write!(f, "{field}{}={pattern}", bang(*negate)),
            Filter::LessThan {
                field,
                value,
                or_equal,
            } => write!(f, "{field}<{}{value}", equal_sign(*or_equal)),
            Filter::GreaterThan {
                field,
                value,
                or_equal,
            } => write!(f, "{field}>{}{value}", equal_sign(*or_equal)),
        }
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.to_string()
    }
}
