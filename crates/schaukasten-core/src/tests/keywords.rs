use crate::keywords::{canonical_keywords, canonicalize, matches_canonical, variants_of};

#[test]
fn canonicalize_maps_variants_case_insensitively() {
    assert_eq!(canonicalize("antisemitisch"), "antisemitismus");
    assert_eq!(canonicalize("Antisemitisch"), "antisemitismus");
    assert_eq!(canonicalize("RECHTSEXTREMISTISCH"), "rechtsextremismus");
    assert_eq!(canonicalize("nationalsozialistische"), "nationalsozialismus");
}

#[test]
fn unknown_tokens_are_their_own_canonical_form() {
    assert_eq!(canonicalize("Graffiti"), "graffiti");
}

#[test]
fn variants_include_all_spellings_and_the_canonical_itself() {
    let variants = variants_of("rechtsextremismus");
    assert!(variants.contains(&"rechtsextremisch".to_string()));
    assert!(variants.contains(&"rechtsextremistisch".to_string()));
    assert!(variants.contains(&"rechtsextremismus".to_string()));
}

#[test]
fn every_variant_matches_its_canonical_keyword() {
    for canonical in canonical_keywords() {
        for variant in variants_of(&canonical) {
            assert!(
                matches_canonical(&variant, &canonical),
                "{variant} should match {canonical}"
            );
            assert!(
                matches_canonical(&variant.to_uppercase(), &canonical),
                "{variant} should match {canonical} case-insensitively"
            );
        }
    }
}

#[test]
fn canonical_set_is_distinct_and_german_sorted() {
    let keywords = canonical_keywords();
    assert!(keywords.contains(&"antisemitismus".to_string()));
    // One entry per canonical id even though several variants map to it.
    assert_eq!(
        keywords.iter().filter(|k| *k == "rassismus").count(),
        1
    );
    let mut resorted = keywords.clone();
    resorted.sort_by(|a, b| crate::collate::compare_de(a, b));
    assert_eq!(keywords, resorted);
}

#[test]
fn german_collation_folds_umlauts() {
    use crate::collate::compare_de;
    use std::cmp::Ordering;
    let mut values = vec!["zug".to_string(), "äpfel".to_string(), "beere".to_string()];
    values.sort_by(|a, b| compare_de(a, b));
    assert_eq!(values, vec!["äpfel", "beere", "zug"]);
    assert_eq!(compare_de("straße", "strasse"), Ordering::Greater);
}
