use advocate_directory::{
    Advocate, Degree, DirectoryService, InMemoryRepository, PhoneNumber, QueryParams,
};
use advocate_directory::domain::ports::Repository;
use std::sync::Arc;

fn advocate(first: &str, last: &str, degree: Degree, years: u32, specialties: &[&str]) -> Advocate {
    Advocate {
        first_name: first.to_string(),
        last_name: last.to_string(),
        city: "Austin".to_string(),
        degree,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        years_of_experience: years,
        phone_number: PhoneNumber::Numeric(5550000000 + years as u64),
    }
}

/// `n` advocates with distinct, zero-padded last names, in reverse alphabetical order.
fn numbered(n: usize) -> Vec<Advocate> {
    (0..n)
        .rev()
        .map(|i| {
            let degree = Degree::ALL[i % 3];
            advocate(&format!("F{i}"), &format!("Last{i:03}"), degree, (i % 15) as u32, &["General"])
        })
        .collect()
}

fn service(records: Vec<Advocate>) -> DirectoryService<InMemoryRepository> {
    DirectoryService::new(InMemoryRepository::new(records))
}

fn params(query: &str) -> QueryParams {
    QueryParams::from_query_string(query)
}

fn last_names(page: &advocate_directory::Page<Advocate>) -> Vec<String> {
    page.data.iter().map(|a| a.last_name.clone()).collect()
}

#[test]
fn test_three_cardio_matches_fit_on_one_page() {
    let mut records = numbered(9);
    records.push(advocate("A", "Heart", Degree::Md, 4, &["Cardiology"]));
    records.push(advocate("B", "Pulse", Degree::PhD, 9, &["Pediatric CARDIOLOGY"]));
    records.push(advocate("C", "Beat", Degree::Msw, 2, &["Grief", "cardiovascular health"]));
    assert_eq!(records.len(), 12);

    let page = service(records).search(&params("specialty=cardio&limit=10")).unwrap();
    assert_eq!(page.data.len(), 3);
    assert_eq!(page.total, 3);
    assert_eq!(page.next_cursor, None);
    assert_eq!(page.prev_cursor, None);
    assert_eq!(last_names(&page), vec!["Beat", "Heart", "Pulse"]);
}

#[test]
fn test_thirty_records_page_through_in_tens() {
    let svc = service(numbered(30));

    let first = svc.search(&params("cursor=0&limit=10")).unwrap();
    assert_eq!(first.data.len(), 10);
    assert_eq!(first.total, 30);
    assert_eq!(first.next_cursor, Some(10));
    assert_eq!(first.prev_cursor, None);
    assert_eq!(first.data[0].last_name, "Last000");

    let second = svc.search(&params("cursor=10&limit=10")).unwrap();
    assert_eq!(second.next_cursor, Some(20));
    assert_eq!(second.prev_cursor, Some(0));

    let third = svc.search(&params("cursor=20&limit=10")).unwrap();
    assert_eq!(third.data.len(), 10);
    assert_eq!(third.next_cursor, None);
    assert_eq!(third.prev_cursor, Some(10));
}

#[test]
fn test_min_years_zero_is_same_as_absent() {
    let svc = service(numbered(30));
    let absent = svc.search(&params("limit=50")).unwrap();
    let zero = svc.search(&params("minYears=0&limit=50")).unwrap();
    assert_eq!(absent, zero);
    assert_eq!(zero.total, 30);
}

#[test]
fn test_total_is_independent_of_cursor_and_limit() {
    let svc = service(numbered(40));
    let expected = numbered(40)
        .iter()
        .filter(|a| a.degree == Degree::Md && a.years_of_experience >= 5)
        .count();

    for query in [
        "degree=MD&minYears=5",
        "degree=MD&minYears=5&limit=1",
        "degree=MD&minYears=5&cursor=3&limit=2",
        "degree=MD&minYears=5&cursor=500",
    ] {
        assert_eq!(svc.search(&params(query)).unwrap().total, expected, "{query}");
    }
}

#[test]
fn test_following_next_cursor_yields_full_sequence() {
    let svc = service(numbered(23));
    let full = svc.search(&params("limit=100")).unwrap();
    assert_eq!(full.data.len(), 23);

    let mut collected = Vec::new();
    let mut cursor = Some(0);
    while let Some(c) = cursor {
        let page = svc.search(&params(&format!("cursor={c}&limit=4"))).unwrap();
        collected.extend(page.data);
        cursor = page.next_cursor;
    }
    assert_eq!(collected, full.data);
}

#[test]
fn test_prev_cursor_reproduces_previous_page() {
    let svc = service(numbered(23));
    let pages: Vec<_> = [0, 5, 10, 15, 20]
        .iter()
        .map(|c| svc.search(&params(&format!("cursor={c}&limit=5"))).unwrap())
        .collect();

    for window in pages.windows(2) {
        let prev = window[1].prev_cursor.unwrap();
        let replay = svc.search(&params(&format!("cursor={prev}&limit=5"))).unwrap();
        assert_eq!(replay, window[0]);
    }
}

#[test]
fn test_cursor_at_or_past_total() {
    let svc = service(numbered(12));

    let exact = svc.search(&params("cursor=12&limit=5")).unwrap();
    assert!(exact.data.is_empty());
    assert_eq!(exact.total, 12);
    assert_eq!(exact.next_cursor, None);
    assert_eq!(exact.prev_cursor, Some(7));

    let beyond = svc.search(&params("cursor=100&limit=5")).unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.prev_cursor, Some(95));
}

#[test]
fn test_no_matches_is_an_empty_result() {
    let page = service(numbered(10)).search(&params("specialty=astrology")).unwrap();
    assert_eq!(page.total, 0);
    assert!(page.data.is_empty());
    assert_eq!(page.next_cursor, None);
    assert_eq!(page.prev_cursor, None);
}

#[test]
fn test_unknown_degree_matches_nothing() {
    let page = service(numbered(10)).search(&params("degree=DDS")).unwrap();
    assert_eq!(page.total, 0);
}

#[test]
fn test_empty_degree_matches_nothing() {
    let page = service(numbered(12)).search(&params("degree=")).unwrap();
    assert_eq!(page.total, 0);
    assert!(page.data.is_empty());
}

#[test]
fn test_any_degree_disables_filter() {
    let page = service(numbered(10)).search(&params("degree=Any")).unwrap();
    assert_eq!(page.total, 10);
}

#[test]
fn test_equal_last_names_keep_filtered_order() {
    let records = vec![
        advocate("Zoe", "Lee", Degree::Md, 3, &["Grief"]),
        advocate("Ann", "adams", Degree::Md, 3, &["Grief"]),
        advocate("Max", "Lee", Degree::PhD, 3, &["Bipolar"]),
        advocate("Bea", "Lee", Degree::Msw, 3, &["Grief"]),
    ];
    let page = service(records).search(&params("specialty=grief")).unwrap();
    let firsts: Vec<_> = page.data.iter().map(|a| a.first_name.as_str()).collect();
    assert_eq!(firsts, vec!["Ann", "Zoe", "Bea"]);
}

#[test]
fn test_identical_parameters_give_identical_bytes() {
    let svc = service(numbered(30));
    let query = params("specialty=gen&minYears=2&cursor=5&limit=7");
    let a = serde_json::to_vec(&svc.search(&query).unwrap()).unwrap();
    let b = serde_json::to_vec(&svc.search(&query).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_validation_failures_are_rejected() {
    let svc = service(numbered(5));
    for query in [
        "limit=0",
        "limit=-1",
        "limit=ten",
        "limit=",
        "limit=%20%20",
        "cursor=-5",
        "cursor=2.5",
        "cursor=",
        "cursor=%205%20",
        "minYears=-1",
    ] {
        let err = svc.search(&params(query)).unwrap_err();
        assert!(err.is_validation(), "{query}");
    }
}

#[test]
fn test_queries_do_not_reorder_repository() {
    let repo = InMemoryRepository::new(numbered(20));
    let before: Vec<Advocate> = repo.fetch_all().to_vec();
    let svc = DirectoryService::new(repo.clone());
    svc.search(&params("limit=20")).unwrap();
    let after = repo.fetch_all().to_vec();
    assert_eq!(before, after);
}

#[test]
fn test_concurrent_queries_agree() {
    let svc = Arc::new(service(numbered(200)));
    let expected = svc.search(&params("minYears=3&cursor=40&limit=15")).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let svc = Arc::clone(&svc);
            std::thread::spawn(move || {
                // 其他查詢同時進行
                svc.search(&params(&format!("degree=PhD&cursor={}", i * 3))).unwrap();
                svc.search(&params("minYears=3&cursor=40&limit=15")).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_cities_are_distinct_and_sorted() {
    let mut records = numbered(3);
    records[0].city = "Seattle".to_string();
    records[1].city = "Boston".to_string();
    records[2].city = "Seattle".to_string();
    let cities = service(records).cities();
    assert_eq!(cities.cities, vec!["Boston", "Seattle"]);
}
