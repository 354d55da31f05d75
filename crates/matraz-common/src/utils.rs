//! Small shared helpers: slug generation and listing conventions.

/// Generate a URL slug from a display name.
///
/// Lowercases, folds Latin accented characters to ASCII, collapses every
/// run of other characters into a single `-`, and trims leading/trailing
/// dashes. Mirrors how catalog slugs are minted when a client does not
/// provide one.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    let mut push = |c: char, slug: &mut String, pending_dash: &mut bool| {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if *pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            *pending_dash = false;
            slug.push(c);
        } else {
            *pending_dash = true;
        }
    };

    for c in name.chars() {
        match fold_accent(c) {
            Some(folded) => push(folded, &mut slug, &mut pending_dash),
            None => push(c, &mut slug, &mut pending_dash),
        }
    }

    slug
}

/// Fold common Latin accented characters to their ASCII base.
fn fold_accent(c: char) -> Option<char> {
    let folded = match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'Á' | 'À' | 'Â' | 'Ä' | 'Ã' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ñ' | 'Ñ' => 'n',
        'ç' | 'Ç' => 'c',
        _ => return None,
    };

    Some(folded)
}

/// Listing endpoints only show inactive rows when the `active` query
/// parameter is the literal string `"false"`.
pub fn include_inactive(active_param: Option<&str>) -> bool {
    active_param == Some("false")
}
