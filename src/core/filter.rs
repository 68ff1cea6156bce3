use crate::domain::model::{Advocate, SearchQuery};

/// Returns the advocates satisfying every active predicate of `query`, in input order.
///
/// Predicates run cheapest-to-reject first: specialty, minimum years, then degree.
/// The input slice is left untouched; the result is a fresh vector of references.
pub fn apply<'a>(records: &'a [Advocate], query: &SearchQuery) -> Vec<&'a Advocate> {
    let specialty = query.specialty.as_deref().map(str::to_lowercase);

    records
        .iter()
        .filter(|advocate| {
            specialty
                .as_deref()
                .is_none_or(|term| matches_specialty(advocate, term))
        })
        .filter(|advocate| {
            query
                .min_years
                .is_none_or(|min| advocate.years_of_experience as usize >= min)
        })
        .filter(|advocate| {
            query
                .degree
                .as_deref()
                .is_none_or(|degree| advocate.degree.as_str() == degree)
        })
        .collect()
}

/// `term` must already be lowercased.
fn matches_specialty(advocate: &Advocate, term: &str) -> bool {
    advocate
        .specialties
        .iter()
        .any(|s| s.to_lowercase().contains(term))
}
