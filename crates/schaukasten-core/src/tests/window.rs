use super::incident;
use crate::dates::DateParser;
use crate::window::windowed;

#[test]
fn orders_mixed_formats_descending_with_undated_last() {
    let collection = vec![
        incident(Some("A"), &[], Some("2024-01-05")),
        incident(Some("B"), &[], Some("3.2.24")),
        incident(Some("C"), &[], None),
    ];
    let dates = DateParser::new();
    let window = windowed(&collection, 300, &dates);

    // 3.2.24 → 2024-02-03 outranks 2024-01-05; the undated incident is last.
    let order: Vec<&str> = window
        .iter()
        .map(|i| i.district.as_deref().unwrap())
        .collect();
    assert_eq!(order, vec!["B", "A", "C"]);
}

#[test]
fn truncates_to_the_window_size() {
    let collection: Vec<_> = (1..=10)
        .map(|day| {
            let date = format!("2024-01-{day:02}");
            incident(None, &[], Some(date.as_str()))
        })
        .collect();
    let dates = DateParser::new();
    let window = windowed(&collection, 3, &dates);

    assert_eq!(window.len(), 3);
    assert_eq!(window[0].date_extracted.as_deref(), Some("2024-01-10"));
    assert_eq!(window[2].date_extracted.as_deref(), Some("2024-01-08"));
}

#[test]
fn undated_incidents_keep_their_input_order() {
    let mut first = incident(Some("first"), &[], None);
    first.date_raw = Some("unbekannt".to_string());
    let second = incident(Some("second"), &[], None);
    let collection = vec![first, second];
    let dates = DateParser::new();

    let window = windowed(&collection, 300, &dates);
    assert_eq!(window[0].district.as_deref(), Some("first"));
    assert_eq!(window[1].district.as_deref(), Some("second"));
}
