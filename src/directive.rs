/// One recognized include directive, tagged by its delimiter form.
///
/// The carried string is the exact text between the delimiters: no trimming,
/// no escape handling, empty allowed. The tag alone implies no path
/// semantics; resolution policy lives in [`crate::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeDirective {
    /// `#include "X"` — resolved against the including file's directory
    /// first, then the search path.
    Local(String),
    /// `#include <X>` — resolved against the search path only.
    System(String),
}

impl IncludeDirective {
    pub fn filename(&self) -> &str {
        match self {
            IncludeDirective::Local(name) | IncludeDirective::System(name) => name,
        }
    }
}

/// Classify one line of input.
///
/// Grammar: optional horizontal whitespace around `#`, the case-exact token
/// `include`, and the opening delimiter; the filename runs to the first
/// closing delimiter; after it only horizontal whitespace may remain. A line
/// failing any of these (trailing garbage, missing delimiter, `#include`
/// embedded mid-line) is plain content and yields `None` — never an error.
pub fn parse_line(line: &str) -> Option<IncludeDirective> {
    let rest = skip_hws(line).strip_prefix('#')?;
    let rest = skip_hws(rest).strip_prefix("include")?;
    let rest = skip_hws(rest);

    let mut chars = rest.chars();
    let (closing, constructor): (char, fn(String) -> IncludeDirective) = match chars.next()? {
        '"' => ('"', IncludeDirective::Local),
        '<' => ('>', IncludeDirective::System),
        _ => return None,
    };

    let body = chars.as_str();
    let end = body.find(closing)?;
    let tail = &body[end + closing.len_utf8()..];
    if !skip_hws(tail).is_empty() {
        return None;
    }

    Some(constructor(body[..end].to_string()))
}

/// Skip a run of spaces and tabs.
fn skip_hws(s: &str) -> &str {
    s.trim_start_matches([' ', '\t'])
}
