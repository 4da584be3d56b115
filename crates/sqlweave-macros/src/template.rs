//! Splitting a `sql!` template string into literal segments and holes.

/// A `{...}` hole in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Hole {
    /// `{}`: the next positional argument.
    Positional,
    /// `{name}`: a variable captured from the caller's scope.
    Named(String),
}

/// A parsed template. Always `segments.len() == holes.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Template {
    pub segments: Vec<String>,
    pub holes: Vec<Hole>,
}

pub(crate) fn parse_template(s: &str) -> Result<Template, String> {
    let mut segments = Vec::new();
    let mut holes = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                current.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                current.push('}');
            }
            '{' => {
                let mut inner = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') => return Err("nested `{` in placeholder".to_string()),
                        Some(c) => inner.push(c),
                        None => return Err("unclosed `{` in template (use `{{` for a literal brace)".to_string()),
                    }
                }
                let name = inner.trim();
                let hole = if name.is_empty() {
                    Hole::Positional
                } else if is_rust_ident(name) {
                    Hole::Named(name.to_string())
                } else {
                    return Err(format!(
                        "invalid placeholder `{{{inner}}}`: expected `{{}}` or `{{name}}`"
                    ));
                };
                segments.push(std::mem::take(&mut current));
                holes.push(hole);
            }
            '}' => return Err("unmatched `}` in template (use `}}` for a literal brace)".to_string()),
            c => current.push(c),
        }
    }
    segments.push(current);

    Ok(Template { segments, holes })
}

fn is_rust_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && s != "_"
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}
