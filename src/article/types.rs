//! Article type definitions

use std::fmt;

/// Ordered article headers
///
/// Iteration follows arrival order. Names are stored exactly as received, so
/// "Subject" and "subject" are separate entries; setting a name that is already
/// present replaces its value in place. Lookups prefer the exact spelling and
/// fall back to a case-insensitive match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty header map
    pub fn new() -> Self {
        Self::default()
    }

    fn exact_position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    fn lookup(&self, name: &str) -> Option<usize> {
        self.exact_position(name).or_else(|| {
            self.entries
                .iter()
                .position(|(n, _)| n.eq_ignore_ascii_case(name))
        })
    }

    /// Set a header, overwriting any previous value for the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.exact_position(&name) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Append a folded continuation line to an existing header
    ///
    /// The line is kept verbatim, leading whitespace included, joined by "\n".
    /// Returns `false` if no header of exactly that name exists.
    pub fn append_continuation(&mut self, name: &str, line: &str) -> bool {
        let Some(i) = self.exact_position(name) else {
            return false;
        };
        let value = &mut self.entries[i].1;
        value.push('\n');
        value.push_str(line);
        true
    }

    /// Value of a header
    pub fn get(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|i| self.entries[i].1.as_str())
    }

    /// Whether a header is present
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of distinct headers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no headers
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in arrival order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Header names in arrival order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// An article retrieved from the server
///
/// Built in one pass over an ARTICLE data block; the number and message-id come
/// from the status line and are absent when the server did not report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    /// Article number within the selected group
    pub number: Option<u64>,
    /// Message-id, including angle brackets
    pub message_id: Option<String>,
    /// Headers in arrival order
    pub headers: Headers,
    /// Body text, every line terminated by "\n"
    pub body: String,
}

impl Article {
    /// Value of a header
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Subject header
    pub fn subject(&self) -> Option<&str> {
        self.header("Subject")
    }

    /// Author, from the From header
    pub fn author(&self) -> Option<&str> {
        self.header("From")
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self
            .message_id
            .as_deref()
            .or_else(|| self.header("Message-ID"))
            .unwrap_or("<unknown>");
        writeln!(f, "Article {} {{", id)?;
        for (name, value) in self.headers.iter() {
            writeln!(f, "  [{:<26}] {}", name, value)?;
        }
        writeln!(f)?;
        for line in self.body.lines() {
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}
