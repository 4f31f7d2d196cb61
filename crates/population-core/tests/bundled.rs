use population_core::prelude::*;
use population_core::{loader, normalize};

fn check_same<F: Fn(&str) -> Option<u64>>(codes: &[&str], f: F) -> u64 {
    let values: Vec<Option<u64>> = codes.iter().map(|c| f(c)).collect();
    assert!(values.iter().all(Option::is_some), "{codes:?} -> {values:?}");
    assert!(values.windows(2).all(|w| w[0] == w[1]), "{codes:?} -> {values:?}");
    values[0].unwrap_or_default()
}

#[test]
fn germany() {
    let a2 = check_same(&["de", "DE", "dE"], get_population_a2);
    let a3 = check_same(&["deu", "DEU", "dEu"], get_population_a3);
    let any = check_same(&["de", "DE", "dE", "deu", "DEU", "dEu"], get_population);

    assert_eq!(a2, 83_132_799);
    assert_eq!(a2, a3);
    assert_eq!(a2, any);
    assert_eq!(get_population_a2("deu"), None);
    assert_eq!(get_population_a3("de"), None);
}

#[test]
fn non_country() {
    for code in ["abcde", "", "e", "xx", "XXX", " de", "de "] {
        assert_eq!(get_population(code), None, "code: {code:?}");
    }
}

#[test]
fn every_code_is_case_insensitive() {
    let db = PopulationDb::load().unwrap();
    for code in db.alpha_2_codes() {
        let expected = db.get_population_a2(code);
        assert!(expected.is_some());
        assert_eq!(db.get_population_a2(&code.to_lowercase()), expected);
        assert_eq!(db.get_population_a2(&code.to_uppercase()), expected);
    }
    for code in db.alpha_3_codes() {
        let expected = db.get_population_a3(code);
        assert!(expected.is_some());
        assert_eq!(db.get_population_a3(&code.to_lowercase()), expected);
        assert_eq!(db.get_population(&code.to_lowercase()), expected);
    }
}

#[test]
fn map_keys_hold_their_invariants() {
    let db = PopulationDb::load().unwrap();
    for code in db.alpha_2_codes() {
        assert_eq!(code.chars().count(), 2, "{code}");
        assert_eq!(normalize(code), code);
    }
    for code in db.alpha_3_codes() {
        assert_eq!(code.chars().count(), 3, "{code}");
        assert_eq!(normalize(code), code);
    }
}

#[test]
fn dataset_codes_are_unique() {
    let records = loader::load().unwrap();
    let stats = PopulationDb::load().unwrap().stats();
    assert_eq!(stats.alpha_2, records.len());
    assert_eq!(stats.alpha_3, records.len());
}

#[test]
fn rebuilding_is_deterministic() {
    let records = loader::load().unwrap();
    let a = PopulationDb::from_records(records);
    let b = PopulationDb::from_records(records);
    assert_eq!(a, b);
    assert_eq!(&a, PopulationDb::load().unwrap());
}

#[test]
fn concurrent_first_access_sees_one_instance() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| PopulationDb::load().unwrap() as *const PopulationDb as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(get_population("de"), Some(83_132_799));
}
