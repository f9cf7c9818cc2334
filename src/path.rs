use std::borrow::Cow;

/// Normalizes a path for matching: runs of slashes collapse to a single
/// slash, and one trailing slash is stripped unless the result would be
/// shorter than the root path.
///
/// The same normalization is applied to templates at registration time and
/// to request paths at lookup time, which is what makes `/users/42` and
/// `/users/42/` (or `//users///42`) equivalent.
///
/// Borrows the input when it is already normal, so the common case of a
/// well-formed request path does not allocate.
pub(crate) fn normalize(path: &str) -> Cow<'_, str> {
    if is_normal(path) {
        return Cow::Borrowed(path);
    }

    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }

    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }

    Cow::Owned(out)
}

fn is_normal(path: &str) -> bool {
    !path.contains("//") && !(path.len() > 1 && path.ends_with('/'))
}
