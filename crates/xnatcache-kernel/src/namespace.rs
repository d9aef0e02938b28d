//! The fixed namespace table shared by every field lookup.
//!
//! XNAT session documents declare four namespaces. Field paths refer to them
//! by prefix (`xnat:note`), so every resolver call needs the same table. It is
//! a process-wide constant and is never mutated.

pub const XNAT_NS: &str = "http://nrg.wustl.edu/xnat";
pub const PROC_NS: &str = "http://nrg.wustl.edu/proc";
pub const FS_NS: &str = "http://nrg.wustl.edu/fs";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// The table every node lookup resolves prefixes against.
pub static NAMESPACES: NamespaceTable = NamespaceTable {
    entries: &[
        ("xnat", XNAT_NS),
        ("proc", PROC_NS),
        ("fs", FS_NS),
        ("xsi", XSI_NS),
    ],
};

/// Prefix → namespace URI mapping.
#[derive(Debug)]
pub struct NamespaceTable {
    entries: &'static [(&'static str, &'static str)],
}

/// A name with its prefix resolved to a namespace URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandedName<'a> {
    pub namespace: Option<&'a str>,
    pub local: &'a str,
}

impl NamespaceTable {
    pub fn uri(&self, prefix: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, uri)| *uri)
    }

    pub fn prefix(&self, uri: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, u)| *u == uri)
            .map(|(prefix, _)| *prefix)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Expand a single name step.
    ///
    /// Accepts `local`, `prefix:local` and Clark notation `{uri}local`.
    /// Returns `None` for an unknown prefix or an unterminated Clark name,
    /// which callers treat as "matches nothing".
    pub fn expand<'a>(&self, name: &'a str) -> Option<ExpandedName<'a>> {
        if let Some(rest) = name.strip_prefix('{') {
            let (uri, local) = rest.split_once('}')?;
            return Some(ExpandedName {
                namespace: Some(uri),
                local,
            });
        }
        match name.split_once(':') {
            Some((prefix, local)) => Some(ExpandedName {
                namespace: Some(self.uri(prefix)?),
                local,
            }),
            None => Some(ExpandedName {
                namespace: None,
                local: name,
            }),
        }
    }
}

/// Split a field path into `/`-separated steps, ignoring slashes inside
/// Clark braces.
pub fn split_steps(path: &str) -> Vec<&str> {
    let mut steps = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in path.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => {
                steps.push(&path[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    steps.push(&path[start..]);
    steps
}

/// Split a field path at its last step separator.
pub fn split_last_step(path: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    let mut last = None;
    for (idx, ch) in path.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => last = Some(idx),
            _ => {}
        }
    }
    last.map(|idx| (&path[..idx], &path[idx + 1..]))
}
