use archive_core::{
    count_by_decade, filter_by_decade, load_records_from_reader, parse_location, Decade, Record,
};

fn record(decade: Decade, title: &str) -> Record {
    Record::new(decade, title, format!("images/{title}.jpg"))
}

#[test]
fn filter_returns_only_matching_records_in_source_order() {
    let records = vec![
        record(Decade::Fifties, "a"),
        record(Decade::Forties, "b"),
        record(Decade::Fifties, "c"),
        record(Decade::Seventies, "d"),
        record(Decade::Fifties, "e"),
    ];

    for decade in Decade::ALL {
        let expected = records
            .iter()
            .filter(|candidate| candidate.decade == decade)
            .map(|candidate| candidate.title.clone())
            .collect::<Vec<_>>();
        let filtered = filter_by_decade(&records, decade);
        assert!(filtered.iter().all(|candidate| candidate.decade == decade));
        assert_eq!(
            filtered
                .iter()
                .map(|candidate| candidate.title.clone())
                .collect::<Vec<_>>(),
            expected
        );
    }

    let fifties = filter_by_decade(&records, Decade::Fifties);
    assert_eq!(
        fifties.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
        vec!["a", "c", "e"]
    );
}

#[test]
fn filter_on_empty_decade_is_empty_not_error() {
    let records = vec![record(Decade::Forties, "only")];
    assert!(filter_by_decade(&records, Decade::EightiesNineties).is_empty());
}

#[test]
fn counts_follow_decade_order() {
    let records = vec![
        record(Decade::Sixties, "a"),
        record(Decade::Sixties, "b"),
        record(Decade::Forties, "c"),
    ];
    assert_eq!(
        count_by_decade(&records),
        vec![
            (Decade::Forties, 1),
            (Decade::Fifties, 0),
            (Decade::Sixties, 2),
            (Decade::Seventies, 0),
            (Decade::EightiesNineties, 0),
        ]
    );
}

#[test]
fn single_fifties_record_scenario() {
    let table = "decade,title,image_path,description,location\n\
                 1950s,Municipal Office,images/pmc.jpg,,\"18.5,73.8\"\n";
    let records = load_records_from_reader(table.as_bytes()).unwrap();

    let fifties = filter_by_decade(&records, Decade::Fifties);
    assert_eq!(fifties, records);
    assert_eq!(
        parse_location(fifties[0].location.as_deref()),
        Some((18.5, 73.8))
    );
    assert!(filter_by_decade(&records, Decade::Sixties).is_empty());
}
