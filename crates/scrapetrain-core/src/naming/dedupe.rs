//! Per-run disambiguation of repeated slugs.

use std::collections::HashSet;

/// Makes every slug in `slugs` unique, in order.
///
/// The first occurrence keeps its name; later repeats get ` 2`, ` 3`, …
/// appended, skipping any candidate already taken by another slug in the run.
/// Comparison is exact, so near-duplicates (`Beat` vs `beat`) are left alone.
pub fn disambiguate<'a, I>(slugs: I)
where
    I: IntoIterator<Item = &'a mut String>,
{
    let slugs: Vec<&mut String> = slugs.into_iter().collect();
    let mut taken: HashSet<String> = slugs.iter().map(|s| s.to_string()).collect();
    let mut seen: HashSet<String> = HashSet::new();

    for slug in slugs {
        if seen.insert(slug.clone()) {
            continue;
        }
        let mut n = 2u32;
        let unique = loop {
            let candidate = format!("{} {}", slug, n);
            if !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        tracing::debug!(original = %slug, renamed = %unique, "duplicate track title");
        taken.insert(unique.clone());
        seen.insert(unique.clone());
        *slug = unique;
    }
}
