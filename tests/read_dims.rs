use cdfview::prelude::*;

/// Test whether dimensions and variables of various rank are enumerated in declaration order.

fn container() -> MemContainer {
    MemContainer::new()
        .with_dimension("station", 3)
        .with_dimension("time", 1)
        .with_dimension("nv", 2)
        .with_variable(MemVariable::strings(
            "stationname",
            &["station"],
            &["De Bilt", "Eelde", "Vlissingen"],
        ))
        .with_variable(MemVariable::doubles(
            "tn",
            &["station", "time"],
            vec![12.1, 9.8, 14.0],
        ))
        .with_variable(MemVariable::doubles(
            "time_bnds",
            &["time", "nv"],
            vec![0., 86400.],
        ))
        .with_variable(MemVariable::typed("iso_dataset", ElementType::Text, &[]))
}

#[test]
fn dimensions() {
    let c = Catalog::new(container());

    let dims = c.dimensions().unwrap();
    let dims: Vec<_> = dims.iter().map(|d| (d.name.as_str(), d.len)).collect();

    assert_eq!(dims, [("station", 3), ("time", 1), ("nv", 2)]);
}

#[test]
fn variables_of_each_rank() {
    let c = Catalog::new(container());

    let vars = c.variables().unwrap();
    let ranks: Vec<_> = vars.iter().map(|v| (v.name.as_str(), v.rank())).collect();

    assert_eq!(
        ranks,
        [("stationname", 1), ("tn", 2), ("time_bnds", 2), ("iso_dataset", 0)]
    );
    assert_eq!(vars[3].element_type, ElementType::Text);
}

#[test]
fn two_dimensional_payload_order() {
    let c = Catalog::new(container());

    let v = c.find_variable("time_bnds").unwrap();
    let names: Vec<_> = c.dimensions_of(&v).iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["time", "nv"]);

    let node = c.read_array(&v).unwrap().to_node().unwrap();
    assert_eq!(
        node,
        Node::List(vec![
            Node::List(vec![Node::Int(0)]),
            Node::List(vec![Node::Int(86400)]),
        ])
    );
}

#[test]
fn scalar_has_no_payload() {
    let c = Catalog::new(container());

    let v = c.find_variable("iso_dataset").unwrap();
    assert!(c.read_array(&v).unwrap_err().is_shape());

    // attributes do not depend on rank
    assert!(c.attributes(&v).unwrap().is_empty());
}
