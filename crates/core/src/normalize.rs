use std::collections::HashMap;

const TYPE_KEYWORDS: &[&str] = &[
    "int", "float", "double", "char", "string", "bool", "vector", "auto", "size_t",
];

// Control keywords, built-in type names and common library identifiers are
// never assigned a canonical name.
const RESERVED_NAMES: &[&str] = &[
    "main", "cout", "cin", "endl", "vector", "string", "bool", "char", "int", "float", "double",
    "return", "for", "if", "while",
];

/// Original identifier -> canonical substitute (`var1`, `var2`, ...).
///
/// One `NameMap` covers exactly one source unit; the pipeline constructs a
/// fresh map per unit so identical code in different files canonicalizes to
/// the same sequence.
#[derive(Debug)]
pub struct NameMap {
    canonical: HashMap<String, String>,
    next_id: usize,
}

impl NameMap {
    pub fn new() -> Self {
        Self {
            canonical: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    pub fn canonical_for(&self, name: &str) -> Option<&str> {
        self.canonical.get(name).map(String::as_str)
    }

    fn assign(&mut self, name: &str) {
        if self.canonical.contains_key(name) {
            return;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.canonical.insert(name.to_string(), format!("var{id}"));
    }
}

impl Default for NameMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize raw source text: whitespace/line cleanup, then comment
/// stripping, then identifier canonicalization into `names`.
pub fn normalize(text: &str, names: &mut NameMap) -> String {
    let text = normalize_lines(text);
    let text = strip_comments(&text);
    canonicalize_identifiers(&text, names)
}

fn normalize_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut pending_space = false;
        for ch in trimmed.chars() {
            if ch == ' ' || ch == '\t' {
                pending_space = true;
                continue;
            }
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn strip_comments(text: &str) -> String {
    strip_line_comments(&strip_block_comments(text))
}

// Shortest span per occurrence; an opener with no closer is left in place.
fn strip_block_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("/*") {
        let Some(end) = rest[start + 2..].find("*/") else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[start + 2 + end + 2..];
    }
    out.push_str(rest);
    out
}

fn strip_line_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in text.split_inclusive('\n') {
        let (line, has_newline) = match segment.strip_suffix('\n') {
            Some(line) => (line, true),
            None => (segment, false),
        };
        match line.find("//") {
            Some(pos) => out.push_str(&line[..pos]),
            None => out.push_str(line),
        }
        if has_newline {
            out.push('\n');
        }
    }
    out
}

fn canonicalize_identifiers(text: &str, names: &mut NameMap) -> String {
    collect_declared_names(text, names);
    if names.is_empty() {
        return text.to_string();
    }
    rewrite_identifiers(text, names)
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// Scans for `<type-keyword> <declarator>(, <declarator>)*` up to the first
// `;`, `=` or `)`. A list with no terminator is malformed and skipped; the
// scan is best-effort, never fatal.
fn collect_declared_names(text: &str, names: &mut NameMap) {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !is_ident_continue(bytes[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && is_ident_continue(bytes[i]) {
            i += 1;
        }
        if !is_ident_start(bytes[start]) {
            // digit-led run, not a word
            continue;
        }
        let word = &text[start..i];
        if !TYPE_KEYWORDS.contains(&word) {
            continue;
        }

        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j == i {
            continue;
        }

        let list_start = j;
        while j < bytes.len() && !matches!(bytes[j], b';' | b'=' | b')') {
            j += 1;
        }
        if j == bytes.len() || j == list_start {
            continue;
        }

        for declarator in text[list_start..j].split(',') {
            if let Some(name) = declared_name(declarator)
                && !RESERVED_NAMES.contains(&name)
            {
                names.assign(name);
            }
        }
        i = j + 1;
    }
}

// Strip the array-subscript suffix, trim, take the first identifier-shaped
// substring (initializers and other trailing text are ignored).
fn declared_name(declarator: &str) -> Option<&str> {
    let head = match declarator.find('[') {
        Some(pos) => &declarator[..pos],
        None => declarator,
    };
    let head = head.trim();
    let bytes = head.as_bytes();

    let mut start = 0;
    while start < bytes.len() && !is_ident_start(bytes[start]) {
        start += 1;
    }
    if start == bytes.len() {
        return None;
    }
    let mut end = start + 1;
    while end < bytes.len() && is_ident_continue(bytes[end]) {
        end += 1;
    }
    Some(&head[start..end])
}

// Single left-to-right pass; a word is a maximal [A-Za-z0-9_] run and only
// runs starting with a letter or underscore are replaced, so substrings of
// longer identifiers are never touched and replacements cannot chain.
fn rewrite_identifiers(text: &str, names: &NameMap) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            word.push(ch);
            continue;
        }
        flush_word(&mut out, &mut word, names);
        out.push(ch);
    }
    flush_word(&mut out, &mut word, names);
    out
}

fn flush_word(out: &mut String, word: &mut String, names: &NameMap) {
    if word.is_empty() {
        return;
    }
    let replacement = if word.as_bytes()[0].is_ascii_digit() {
        None
    } else {
        names.canonical_for(word)
    };
    match replacement {
        Some(canonical) => out.push_str(canonical),
        None => out.push_str(word),
    }
    word.clear();
}
