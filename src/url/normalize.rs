use super::has_http_scheme;

/// Resolves an href found on `base_url` into the URL used as a traversal key
///
/// # Normalization Steps
///
/// 1. An href with an `http` scheme prefix is already absolute and is
///    returned unchanged
/// 2. Otherwise trim leading and trailing `/` from the href
/// 3. Join it to `base_url` with a single `/`
/// 4. Collapse every run of `/` into one, except the `//` of a `scheme://`
///    separator
///
/// The join is textual: `page` found on `https://a.test/docs` resolves to
/// `https://a.test/docs/page`, not to a sibling of `docs`.
///
/// # Examples
///
/// ```
/// use trawl::url::normalize_href;
///
/// assert_eq!(normalize_href("/about/", "https://a.test/"), "https://a.test/about");
/// assert_eq!(normalize_href("https://b.test/x", "https://a.test/"), "https://b.test/x");
/// ```
pub fn normalize_href(href: &str, base_url: &str) -> String {
    if has_http_scheme(href) {
        return href.to_string();
    }

    let joined = format!("{}/{}", base_url, href.trim_matches('/'));
    collapse_slashes(&joined)
}

/// Collapses consecutive slashes that are not part of a `://` separator
///
/// A run of slashes directly after `:` keeps at most two slashes; any other
/// run becomes a single slash.
pub fn collapse_slashes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut prev: Option<char> = None;

    while let Some(c) = chars.next() {
        if c != '/' {
            out.push(c);
            prev = Some(c);
            continue;
        }

        let mut run = 1;
        while chars.peek() == Some(&'/') {
            chars.next();
            run += 1;
        }

        let keep = if prev == Some(':') { run.min(2) } else { 1 };
        for _ in 0..keep {
            out.push('/');
        }
        prev = Some('/');
    }

    out
}
