//! End-to-end tests over the verified sample logs

use physio_log::ast::{Clock, Modality};
use physio_log::testing::{assert_log, PhysioSources};
use physio_log::{IntegrityError, NrSummary, ParseOptions, PhysioError, PhysioLog};

#[test]
fn test_basic_sample() {
    let log = PhysioSources::load("sample_basic").unwrap();

    assert_log(&log)
        .n_params(4)
        .params(&[1, 8, 20, 2])
        .rate(20)
        .ts(&[
            367, 508, 520, 532, 638, 708, 790, 814, 1037, 1108, 1072, 1190, 1413,
        ])
        .info(&["LOGVERSION 102", "TRIGGERMETHOD 1", "MSGTYPE 103"])
        .summary(Modality::Puls, |s| {
            s.freq(72).per(823).min(355).max(1646).avg(795).std_diff(5);
        })
        .summary(Modality::Resp, |s| {
            s.zeroed();
        })
        .no_summary(Modality::Ext2)
        .nr(NrSummary {
            nr_trig: 0,
            nr_m_p: 0,
            nr_arr: 0,
            acq_win: 0,
        })
        .log_time(Clock::Mdh, 36632877, 39805825)
        .log_time(Clock::Mpcu, 36632400, 39804637)
        .time_of_day(Clock::Mpcu, "10:10:32.400", "11:03:24.637");
}

#[test]
fn test_five_param_sample() {
    let log = PhysioSources::load("sample_five_params").unwrap();

    assert_log(&log)
        .n_params(5)
        .params(&[1, 8, 1, 20, 2])
        .rate(20)
        .ts_len(8)
        .info(&["LOGVERSION 102", "TRIGGERMETHOD 1"]);
}

#[test]
fn test_five_param_sample_forced_to_four() {
    let log =
        PhysioSources::load_with("sample_five_params", ParseOptions::with_n_params(4)).unwrap();

    assert_log(&log)
        .n_params(4)
        .params(&[1, 8, 1, 20])
        .rate(1)
        .ts_len(9);
    assert_eq!(log.ts()[0], 2);
}

#[test]
fn test_basic_sample_forced_to_five_params() {
    let log = PhysioSources::load_with("sample_basic", ParseOptions::with_n_params(5)).unwrap();

    assert_log(&log)
        .n_params(5)
        .params(&[1, 8, 20, 2, 367])
        .rate(2)
        .ts(&[508, 520, 532, 638, 708, 790, 814, 1037, 1108, 1072, 1190, 1413])
        .info(&["LOGVERSION 102", "TRIGGERMETHOD 1", "MSGTYPE 103"]);
}

#[test]
fn test_annotation_inside_the_parameter_block() {
    let source = PhysioSources::get_string("sample_basic")
        .unwrap()
        .replacen("1 8 20 2 5002 LOGVERSION 102 6002", "1 8 5002 LOGVERSION 102 6002 20 2", 1);
    let log = physio_log::parse(&source).unwrap();

    assert_log(&log)
        .n_params(4)
        .params(&[1, 8, 20, 2])
        .rate(20)
        .ts_len(13)
        .info(&["LOGVERSION 102", "TRIGGERMETHOD 1", "MSGTYPE 103"]);
}

#[test]
fn test_ext2_sample() {
    let log = PhysioSources::load("sample_with_ext2").unwrap();

    assert_log(&log)
        .params(&[1, 2, 40, 280])
        .rate(40)
        .ts(&[1236, 1251, 1679, 1871])
        .info(&[])
        .summary(Modality::Ext2, |s| {
            s.freq(3).per(4).min(10).max(20).avg(15).std_diff(2);
        });
}

#[test]
fn test_data_is_params_followed_by_samples() {
    for name in physio_log::testing::AVAILABLE_SAMPLES {
        let log = PhysioSources::load(name).unwrap();
        let expected: Vec<i64> = log.params().iter().chain(log.ts()).copied().collect();
        assert_eq!(log.data().collect::<Vec<_>>(), expected, "sample {}", name);
    }
}

#[test]
fn test_parsing_is_repeatable() {
    let source = PhysioSources::get_string("sample_basic").unwrap();
    let first = physio_log::parse(&source).unwrap();
    let second: PhysioLog = source.parse().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_crlf_line_endings() {
    let source = PhysioSources::get_string("sample_basic")
        .unwrap()
        .replace('\n', "\r\n");
    let log = physio_log::parse(&source).unwrap();
    assert_eq!(log.info()[1], "TRIGGERMETHOD 1");
    assert_eq!(log.ts().len(), 13);
}

#[test]
fn test_missing_required_channel() {
    let source = PhysioSources::get_string("sample_basic").unwrap();
    let source: String = source
        .lines()
        .filter(|line| !line.starts_with("RESP"))
        .map(|line| format!("{}\n", line))
        .collect();

    match physio_log::parse(&source) {
        Err(PhysioError::Integrity(IntegrityError::MissingSummary(Modality::Resp))) => {}
        other => panic!("Expected missing RESP summary, got {:?}", other),
    }
}

#[test]
fn test_missing_clock_line() {
    let source = PhysioSources::get_string("sample_basic")
        .unwrap()
        .replace("LogStopMPCUTime:  39804637\n", "");

    let err = physio_log::parse(&source).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Integrity error: Footer lacks the Stop time for MPCU"
    );
}

#[test]
fn test_truncated_log_reports_position() {
    let source = PhysioSources::get_string("sample_basic").unwrap();
    let truncated = &source[..source.find("6003").unwrap()];

    match physio_log::parse(truncated) {
        Err(PhysioError::Parse(e)) => assert_eq!(e.found, None),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_from_path_missing_file() {
    let err = PhysioLog::from_path("/nonexistent/run.puls", ParseOptions::default()).unwrap_err();
    assert!(matches!(err, PhysioError::Io(_)));
}
