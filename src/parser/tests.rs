use crate::ast::{Clock, DataItem, FooterLine, LogEvent, LogTag, Modality};
use crate::error::PhysioError;
use crate::parser::api::parse_document;

const FOOTER: &str = "5003
ECG  Freq Per: 0 0
ECG  Min Max Avg StdDiff: 0 0 0 0
NrTrig NrMP NrArr AcqWin: 0 0 0 0
LogStartMDHTime:  36632877
LogStopMDHTime:   39805825
6003
";

fn with_footer(body: &str) -> String {
    format!("{} {}", body, FOOTER)
}

#[test]
fn test_body_without_annotations() {
    let source = with_footer("1 2 40 280 1236 1251 5000 1679 1871");
    let doc = parse_document(&source, 4).expect("Failed to parse");

    assert_eq!(doc.body.params, vec![1, 2, 40, 280]);
    assert_eq!(
        doc.body.data,
        vec![
            DataItem::Sample(1236),
            DataItem::Sample(1251),
            DataItem::Sample(1679),
            DataItem::Sample(1871),
        ]
    );
}

#[test]
fn test_annotations_before_and_among_samples() {
    let source = with_footer(
        "1 8 20 2 5002 LOGVERSION 102 6002 367 508 5002 MSGTYPE 103 6002 520 5000 532",
    );
    let doc = parse_document(&source, 4).expect("Failed to parse");

    assert_eq!(doc.body.params, vec![1, 8, 20, 2]);
    assert_eq!(
        doc.body.data,
        vec![
            DataItem::Info("LOGVERSION 102".to_string()),
            DataItem::Sample(367),
            DataItem::Sample(508),
            DataItem::Info("MSGTYPE 103".to_string()),
            DataItem::Sample(520),
            DataItem::Sample(532),
        ]
    );
}

#[test]
fn test_annotation_after_last_sample() {
    let source = with_footer("1 2 40 280 1236 5002 trailing note 6002");
    let doc = parse_document(&source, 4).expect("Failed to parse");

    assert_eq!(doc.body.samples().collect::<Vec<_>>(), vec![1236]);
    assert_eq!(doc.body.annotations().collect::<Vec<_>>(), vec!["trailing note"]);
}

#[test]
fn test_annotation_spanning_lines_keeps_units() {
    let source = with_footer("1 2 40 280 5002 LOGVERSION_PULS:   3\n  uiHwRevisionPeru 6002 7");
    let doc = parse_document(&source, 4).expect("Failed to parse");

    assert_eq!(
        doc.body.annotations().collect::<Vec<_>>(),
        vec!["LOGVERSION_PULS: 3 uiHwRevisionPeru"]
    );
    assert_eq!(doc.body.samples().collect::<Vec<_>>(), vec![7]);
}

#[test]
fn test_five_params() {
    let source = with_footer("1 8 1 20 2 5002 x 6002 367");
    let doc = parse_document(&source, 5).expect("Failed to parse");

    assert_eq!(doc.body.params, vec![1, 8, 1, 20, 2]);
    assert_eq!(doc.body.samples().collect::<Vec<_>>(), vec![367]);
}

#[test]
fn test_footer_lines_in_source_order() {
    let source = with_footer("1 2 40 280");
    let doc = parse_document(&source, 4).expect("Failed to parse");

    assert_eq!(
        doc.footer.lines,
        vec![
            FooterLine::Rate {
                modality: Modality::Ecg,
                freq: 0,
                per: 0,
            },
            FooterLine::Stat {
                modality: Modality::Ecg,
                min: 0,
                max: 0,
                avg: 0,
                std_diff: 0,
            },
            FooterLine::Nr {
                nr_trig: 0,
                nr_m_p: 0,
                nr_arr: 0,
                acq_win: 0,
            },
            FooterLine::Log {
                tag: LogTag::new(LogEvent::Start, Clock::Mdh),
                value: 36632877,
            },
            FooterLine::Log {
                tag: LogTag::new(LogEvent::Stop, Clock::Mdh),
                value: 39805825,
            },
        ]
    );
}

#[test]
fn test_empty_footer_parses() {
    let doc = parse_document("1 2 40 280 5003 6003", 4).expect("Failed to parse");
    assert!(doc.footer.lines.is_empty());
}

#[test]
fn test_sentinel_literals_are_plain_values_in_the_footer() {
    let source = "1 2 40 280 5003\nPULS Freq Per: 5000 6003\nLogStopMDHTime: 5002\n6003\n";
    let doc = parse_document(source, 4).expect("Failed to parse");

    assert_eq!(
        doc.footer.lines,
        vec![
            FooterLine::Rate {
                modality: Modality::Puls,
                freq: 5000,
                per: 6003,
            },
            FooterLine::Log {
                tag: LogTag::new(LogEvent::Stop, Clock::Mdh),
                value: 5002,
            },
        ]
    );
}

#[test]
fn test_unknown_footer_keyword_is_an_error() {
    let source = "1 2 40 280 5003\nFOO Freq Per: 0 0\n6003\n";
    let err = parse_document(source, 4).unwrap_err();

    match err {
        PhysioError::Parse(e) => {
            assert_eq!(e.found.as_deref(), Some("FOO"));
            assert_eq!(e.line, 2);
            assert_eq!(e.column, 1);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_truncated_stat_line_is_an_error() {
    let source = "1 2 40 280 5003\nECG Min Max Avg StdDiff: 1 2 3\n6003\n";
    assert!(matches!(
        parse_document(source, 4),
        Err(PhysioError::Parse(_))
    ));
}

#[test]
fn test_missing_footer_close_is_an_error() {
    let source = "1 2 40 280 5003\nECG Freq Per: 0 0\n";
    match parse_document(source, 4) {
        Err(PhysioError::Parse(e)) => assert_eq!(e.found, None),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_missing_footer_is_an_error() {
    assert!(matches!(
        parse_document("1 2 40 280 1236 1251", 4),
        Err(PhysioError::Parse(_))
    ));
}

#[test]
fn test_params_are_the_first_integers_across_annotations() {
    let source = with_footer("1 8 5002 LOGVERSION 102 6002 20 2 367 5000 508");
    let doc = parse_document(&source, 4).expect("Failed to parse");

    assert_eq!(doc.body.params, vec![1, 8, 20, 2]);
    assert_eq!(
        doc.body.data,
        vec![
            DataItem::Info("LOGVERSION 102".to_string()),
            DataItem::Sample(367),
            DataItem::Sample(508),
        ]
    );
}

#[test]
fn test_explicit_five_params_reach_past_an_annotation() {
    let source = with_footer("1 8 20 2 5002 LOGVERSION 102 6002 367 508");
    let doc = parse_document(&source, 5).expect("Failed to parse");

    assert_eq!(doc.body.params, vec![1, 8, 20, 2, 367]);
    assert_eq!(doc.body.samples().collect::<Vec<_>>(), vec![508]);
    assert_eq!(doc.body.annotations().collect::<Vec<_>>(), vec!["LOGVERSION 102"]);
}

#[test]
fn test_too_few_integers_in_the_whole_body_is_an_error() {
    match parse_document("1 2 40 5002 x 6002 5003 6003", 4) {
        Err(PhysioError::Parse(e)) => {
            assert_eq!(e.found.as_deref(), Some("5003"));
            assert_eq!(e.position, 6);
            assert_eq!((e.line, e.column), (1, 20));
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_trailing_tokens_after_footer_are_an_error() {
    assert!(matches!(
        parse_document("1 2 40 280 5003 6003 1", 4),
        Err(PhysioError::Parse(_))
    ));
}

#[test]
fn test_empty_input_is_a_lex_error() {
    assert!(matches!(parse_document("", 4), Err(PhysioError::Lex(_))));
}
