/// Longest slug, in bytes, that [`to_slug`] produces.
pub const MAX_SLUG_LEN: usize = 200;

/// Slugifies arbitrary text into something usable as a slashlink slug.
///
/// Lowercases, drops every char outside `[a-z0-9_-/]`, joins words with `-`
/// and collapses empty path segments. A leading `/` is ignored.
pub fn to_slug(input: &str) -> String {
    let words: Vec<String> = input
        .trim()
        .trim_start_matches('/')
        .to_lowercase()
        .replace(['\n', '\t'], " ")
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            word.chars()
                .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '/'))
                .collect()
        })
        .collect();

    let mut slug = words
        .join("-")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    // Only ASCII survives the filter, so any byte index is a char boundary.
    slug.truncate(MAX_SLUG_LEN);
    slug
}
