//! Just-enough HTML scanning for the pricing pages.
//!
//! The pricing site serves a fixed table layout; finding one labeled cell
//! does not need a full parser. Tag matching is ASCII case-insensitive and
//! tolerates attributes in opening tags. Anything malformed simply yields
//! no match, which callers treat as "value unknown".

/// ASCII-lowercase a string without changing its byte length, so byte
/// offsets found in the lowered copy index the original too.
fn ascii_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Byte range of the next `<tag ...>...</tag>` block at or after `from`.
///
/// Skips longer tag names sharing the prefix (`<table` is not a `<t`
/// match). Returns `None` when no complete block remains.
pub fn next_block(html: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lower = ascii_lower(html);
    let open = format!("<{}", ascii_lower(tag));
    let close = format!("</{}", ascii_lower(tag));

    let mut at = from;
    loop {
        let start = lower.get(at..)?.find(&open)? + at;
        let after_name = start + open.len();
        match lower.as_bytes().get(after_name) {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') | Some(b'/') => {
                let open_end = lower[start..].find('>')? + start + 1;
                let close_start = lower[open_end..].find(&close)? + open_end;
                let close_end = lower[close_start..].find('>')? + close_start + 1;
                return Some((start, close_end));
            }
            _ => at = after_name,
        }
    }
}

/// Inner HTML of a block returned by [`next_block`].
pub fn inner(block: &str) -> &str {
    let open_end = match block.find('>') {
        Some(i) => i + 1,
        None => return "",
    };
    match block.rfind('<') {
        Some(close_start) if close_start >= open_end => &block[open_end..close_start],
        _ => "",
    }
}

/// Inner HTML of every `tag` block, in document order.
pub fn inner_blocks<'a>(html: &'a str, tag: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut at = 0;
    while let Some((start, end)) = next_block(html, tag, at) {
        out.push(inner(&html[start..end]));
        at = end;
    }
    out
}

/// Visible text of a fragment: tags removed, whitespace collapsed.
pub fn text(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible text runs of a fragment, split at tag boundaries and newlines.
///
/// A heading like `Charizard #4 <a href="...">Base Set</a>` yields two
/// runs, one per text segment, with empty runs dropped.
pub fn text_runs(fragment: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    let mut in_tag = false;

    let mut flush = |current: &mut String, runs: &mut Vec<String>| {
        let normalized = current.split_whitespace().collect::<Vec<_>>().join(" ");
        if !normalized.is_empty() {
            runs.push(normalized);
        }
        current.clear();
    };

    for ch in fragment.chars() {
        match ch {
            '<' => {
                in_tag = true;
                flush(&mut current, &mut runs);
            }
            '>' => in_tag = false,
            '\n' if !in_tag => flush(&mut current, &mut runs),
            _ if !in_tag => current.push(ch),
            _ => {}
        }
    }
    flush(&mut current, &mut runs);
    runs
}
