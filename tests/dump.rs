use cdfview::prelude::*;

fn stations() -> MemContainer {
    MemContainer::new()
        .with_dimension("stations", 2)
        .with_dimension("time", 1)
        .with_variable(
            MemVariable::strings("stationname", &["stations"], &["De Bilt", "Eelde"])
                .with_attribute("long_name", MemAttribute::Text("Station name".into())),
        )
        .with_variable(
            MemVariable::doubles("tn", &["stations", "time"], vec![4.5, -310.])
                .with_attribute("units", MemAttribute::Text("degrees Celsius".into()))
                .with_attribute("_FillValue", MemAttribute::Double(-9999.))
                .with_attribute("scale", MemAttribute::Float(0.1))
                .with_attribute("valid_range", MemAttribute::Other("doubles".into())),
        )
        .with_variable(
            MemVariable::doubles("time", &["time"], vec![2_348_352_000.])
                .with_attribute("units", MemAttribute::Text("seconds since 1950-01-01".into())),
        )
}

#[test]
fn single_string_variable() {
    let c = Catalog::new(
        MemContainer::new()
            .with_dimension("stations", 2)
            .with_variable(MemVariable::strings("stationname", &["stations"], &["A", "B"])),
    );

    assert_eq!(
        cdfview::dump::to_string(&c, Style::Compact).unwrap(),
        r#"{"dimensions":{"stations":2},"variables":{"stationname":{"values":["A","B"]}}}"#
    );
}

#[test]
fn discovery_order() {
    let c = Catalog::new(stations());

    let json = cdfview::dump::to_string(&c, Style::Compact).unwrap();

    assert_eq!(
        json,
        concat!(
            r#"{"dimensions":{"stations":2,"time":1},"variables":{"#,
            r#""stationname":{"long_name":"Station name","values":["De Bilt","Eelde"]},"#,
            r#""tn":{"units":"degrees Celsius","_FillValue":-9999.0,"scale":0.1,"valid_range":null,"values":[4.5,-310]},"#,
            r#""time":{"units":"seconds since 1950-01-01","values":[2348352000]}"#,
            r#"}}"#
        )
    );
}

#[test]
fn pretty_is_same_document() {
    let c = Catalog::new(stations());

    let compact = cdfview::dump::to_string(&c, Style::Compact).unwrap();
    let pretty = cdfview::dump::to_string(&c, Style::Pretty).unwrap();

    assert!(pretty.contains("\n  \"dimensions\": {\n"));

    let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
    let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(a, b);
}

#[test]
fn write_to_sink() {
    let c = Catalog::new(stations());

    let mut buf = Vec::new();
    cdfview::dump::write(&c, &mut buf, Style::Compact).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        cdfview::dump::to_string(&c, Style::Compact).unwrap()
    );
}

#[test]
fn empty_container() {
    let c = Catalog::new(MemContainer::new());

    assert_eq!(
        cdfview::dump::to_string(&c, Style::Compact).unwrap(),
        r#"{"dimensions":{},"variables":{}}"#
    );
}
