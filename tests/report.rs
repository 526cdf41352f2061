use chrono::{FixedOffset, Utc};

use cdfview::prelude::*;
use cdfview::report;

fn stations(tn: Vec<f64>, tx: Vec<f64>, time: Vec<f64>) -> Catalog<MemContainer> {
    Catalog::new(
        MemContainer::new()
            .with_dimension("stations", 2)
            .with_dimension("time", time.len())
            .with_variable(MemVariable::strings("stationname", &["stations"], &["A", "B"]))
            .with_variable(MemVariable::doubles("tn", &["stations"], tn))
            .with_variable(MemVariable::doubles("tx", &["stations"], tx))
            .with_variable(MemVariable::doubles("time", &["time"], time)),
    )
}

#[test]
fn missing_readings() {
    let c = stations(vec![-310., 5.], vec![-320., 7.], vec![0.]);

    let r = report::read(&c).unwrap();

    assert!(r.rows[0].average.is_nan());
    assert_eq!(r.rows[1].average, 6.0);
    assert_eq!(r.rows[1].station_name, "B");
}

#[test]
fn full_report_in_utc() {
    let c = stations(vec![-310., 5.], vec![-320., 7.], vec![0.]);

    let out = report::read(&c).unwrap().to_string(&Utc).unwrap();

    assert_eq!(
        out,
        [
            " 1:   NaN°C  A",
            " 2:   6.0°C  B",
            "Tijd (UTC)  : Sun Jan  1 00:00:00 1950",
            "Tijd (local): Sun Jan  1 00:00:00 1950",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn injected_time_zone() {
    let c = stations(vec![10.2, 11.], vec![20.4, 19.], vec![2_348_352_000., 2_348_438_400.]);

    let cest = FixedOffset::east_opt(2 * 3600).unwrap();
    let out = report::read(&c).unwrap().to_string(&cest).unwrap();
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(lines[0], " 1:  15.3°C  A");
    assert_eq!(lines[1], " 2:  15.0°C  B");
    assert_eq!(lines[2], "Tijd (UTC)  : Sat Jun  1 00:00:00 2024");
    assert_eq!(lines[3], "Tijd (local): Sat Jun  1 02:00:00 2024");
}

#[test]
fn station_count_mismatch() {
    let c = Catalog::new(
        MemContainer::new()
            .with_dimension("stations", 2)
            .with_dimension("other", 3)
            .with_dimension("time", 1)
            .with_variable(MemVariable::strings("stationname", &["stations"], &["A", "B"]))
            .with_variable(MemVariable::doubles("tn", &["other"], vec![1., 2., 3.]))
            .with_variable(MemVariable::doubles("tx", &["stations"], vec![1., 2.]))
            .with_variable(MemVariable::doubles("time", &["time"], vec![0.])),
    );

    let e = report::read(&c).unwrap_err();
    assert!(
        matches!(&e, cdfview::Error::Consistency { variable, expected: 2, found: 3 } if variable == "tn"),
        "{e}"
    );
}

#[test]
fn two_dimensional_temperatures() {
    let c = Catalog::new(
        MemContainer::new()
            .with_dimension("stations", 2)
            .with_dimension("time", 1)
            .with_variable(MemVariable::strings("stationname", &["stations"], &["A", "B"]))
            .with_variable(MemVariable::doubles("tn", &["stations", "time"], vec![1., 3.]))
            .with_variable(MemVariable::doubles("tx", &["stations", "time"], vec![3., 5.]))
            .with_variable(MemVariable::doubles("time", &["time"], vec![0.])),
    );

    let r = report::read(&c).unwrap();
    let averages: Vec<_> = r.rows.iter().map(|r| r.average).collect();
    assert_eq!(averages, [2., 4.]);
}

#[test]
fn missing_variable() {
    let c = Catalog::new(
        MemContainer::new()
            .with_dimension("stations", 1)
            .with_variable(MemVariable::strings("stationname", &["stations"], &["A"])),
    );

    let e = report::read(&c).unwrap_err();
    assert!(e.to_string().contains("`tn`"), "{e}");
}

#[test]
fn empty_time() {
    let c = stations(vec![1., 2.], vec![3., 4.], vec![]);

    let e = report::read(&c).unwrap_err();
    assert!(e.to_string().contains("no time steps"), "{e}");
}
