// src/core/html.rs
// Naive, case-insensitive tag scanning. Good enough for the occupancy page;
// not a general HTML parser.

fn to_lower(s: &str) -> String {
    // ASCII-only lowering keeps byte offsets aligned with the input.
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Next `<tag ...>...</tag>` block at or after `from`, as byte offsets into `s`.
/// `lc` is `s` lowered; `ol`/`cl` are the lowered open and close markers.
fn next_block_in(s: &str, lc: &str, ol: &str, cl: &str, from: usize) -> Option<(usize, usize)> {
    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(ol)? + at;
        // `<strong` must not match `<strongest`
        let boundary = lc[start + ol.len()..].chars().next()?;
        if !(boundary == '>' || boundary == '/' || boundary.is_ascii_whitespace()) {
            at = start + ol.len();
            continue;
        }
        let open_end = s[start..].find('>')? + start + 1;
        let end_rel = lc[open_end..].find(cl)?;
        return Some((start, open_end + end_rel + cl.len()));
    }
}

/// Every `<tag>` block in document order, including the tags themselves.
pub fn tag_blocks_ci<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let open = format!("<{}", to_lower(tag));
    let close = format!("</{}>", to_lower(tag));

    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b, e)) = next_block_in(s, &lc, &open, &close, pos) {
        out.push(&s[b..e]);
        pos = e;
    }
    out
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
