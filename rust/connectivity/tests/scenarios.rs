// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end editing scenarios against a small pipe-rack model.

use nalgebra::Point3;

use openframe_connectivity::{
    CantileverSpec, ElementKind, Model, StructuralElement, Warning,
};
use openframe_core::{Direction2, Orientation};

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::new(x, y, z)
}

/// Scenario A: a cantilever anchored on a column at elevation 2 extends
/// 3 m along +X, and the column records the mid-span touch.
#[test]
fn cantilever_on_column() {
    let mut model = Model::new("rack");
    model
        .place_column("C", p(0.0, 0.0, 0.0), 5.0, "HEB200", Orientation::Deg0)
        .unwrap();

    let (_, warnings) = model
        .place_cantilever(CantileverSpec {
            name: "K".to_string(),
            anchor: "C".to_string(),
            direction: Direction2::PlusX,
            length: 3.0,
            elevation: 2.0,
            profile: "IPE200".to_string(),
            orientation: Orientation::Deg0,
        })
        .unwrap();

    assert!(warnings.is_empty());

    let k = model.get_by_name("K").unwrap();
    assert_eq!(k.start(), p(0.0, 2.0, 0.0));
    assert_eq!(k.end(), p(3.0, 2.0, 0.0));

    assert_eq!(model.connected_names("C").unwrap(), vec!["K"]);
    assert_eq!(model.start_connected_names("K").unwrap(), vec!["C"]);
    assert!(model.verify_adjacency().is_ok());
}

/// Scenario B: two independent beams crossing in 3D warn once and stay
/// unconnected.
#[test]
fn crossing_beams_warn_without_linking() {
    let mut model = Model::new("rack");
    model
        .add_element(StructuralElement::new(
            "B1",
            ElementKind::Beam,
            p(-3.0, 4.0, 0.0),
            p(3.0, 4.0, 0.0),
        ))
        .unwrap();

    let (_, warnings) = model
        .add_element(StructuralElement::new(
            "B2",
            ElementKind::Beam,
            p(0.0, 4.0, -3.0),
            p(0.0, 4.0, 3.0),
        ))
        .unwrap();

    assert_eq!(
        warnings,
        vec![Warning::Crossing {
            first: "B2".to_string(),
            second: "B1".to_string(),
        }]
    );

    // The crossing itself never creates adjacency
    assert!(model.neighbor_names("B1").unwrap().is_empty());
    assert!(model.neighbor_names("B2").unwrap().is_empty());
}

/// Scenario C: removing the cantilever from Scenario A severs the column's
/// reference and drops the element.
#[test]
fn removing_the_cantilever_cleans_up() {
    let mut model = Model::new("rack");
    model
        .place_column("C", p(0.0, 0.0, 0.0), 5.0, "HEB200", Orientation::Deg0)
        .unwrap();
    model
        .place_cantilever(CantileverSpec {
            name: "K".to_string(),
            anchor: "C".to_string(),
            direction: Direction2::PlusX,
            length: 3.0,
            elevation: 2.0,
            profile: "IPE200".to_string(),
            orientation: Orientation::Deg0,
        })
        .unwrap();
    assert_eq!(model.connected_names("C").unwrap(), vec!["K"]);

    model.remove_element("K").unwrap();

    assert!(model.connected_names("C").unwrap().is_empty());
    assert!(!model.contains_name("K"));
    assert_eq!(model.element_count(), 1);
    assert!(model.verify_adjacency().is_ok());
}

/// A full rack bay: two columns, a beam across their tops, a diagonal
/// bracing, and a cantilever. Every edit keeps the graph symmetric and
/// free of dangling references.
#[test]
fn rack_bay_editing_session() {
    let mut model = Model::new("bay-1");
    model
        .place_column("C1", p(0.0, 0.0, 0.0), 6.0, "HEB200", Orientation::Deg0)
        .unwrap();
    model
        .place_column("C2", p(8.0, 0.0, 0.0), 6.0, "HEB200", Orientation::Deg0)
        .unwrap();

    // Beam across the column tops: linked at both ends
    let (_, warnings) = model
        .place_beam(
            "B1",
            p(0.0, 6.0, 0.0),
            Direction2::PlusX,
            8.0,
            "IPE300",
            Orientation::Deg0,
        )
        .unwrap();
    assert!(warnings.is_empty());
    assert_eq!(model.start_connected_names("B1").unwrap(), vec!["C1"]);
    assert_eq!(model.end_connected_names("B1").unwrap(), vec!["C2"]);
    assert_eq!(model.end_connected_names("C1").unwrap(), vec!["B1"]);

    // Diagonal bracing from the base of C1 to mid-height of C2
    model
        .place_bracing("D1", "C1", 0.0, "C2", 3.0, "L80x8")
        .unwrap();
    assert_eq!(model.start_connected_names("D1").unwrap(), vec!["C1"]);
    assert_eq!(model.end_connected_names("D1").unwrap(), vec!["C2"]);
    assert_eq!(model.connected_names("C2").unwrap(), vec!["D1"]);

    // Cantilever off C2, pointing away from the bay
    model
        .place_cantilever(CantileverSpec {
            name: "K1".to_string(),
            anchor: "C2".to_string(),
            direction: Direction2::PlusX,
            length: 2.0,
            elevation: 4.5,
            profile: "IPE200".to_string(),
            orientation: Orientation::Deg0,
        })
        .unwrap();
    assert_eq!(
        model.get_by_name("K1").unwrap().end(),
        p(10.0, 4.5, 0.0)
    );

    // Moving the beam down turns its end touches into mid-span touches
    model
        .move_element("B1", p(0.0, 4.0, 0.0), p(8.0, 4.0, 0.0))
        .unwrap();
    assert_eq!(model.connected_names("C1").unwrap(), vec!["B1"]);
    assert!(model.end_connected_names("C1").unwrap().is_empty());
    assert_eq!(model.start_connected_names("B1").unwrap(), vec!["C1"]);

    // Removing a column leaves no trace of it anywhere
    model.remove_element("C2").unwrap();
    for name in ["C1", "B1", "D1", "K1"] {
        assert!(!model
            .neighbor_names(name)
            .unwrap()
            .contains(&"C2".to_string()));
    }
    assert!(model.verify_adjacency().is_ok());
}

/// The serialized form of an edited model restores to an identical graph.
#[test]
fn snapshot_round_trip_preserves_the_session() {
    let mut model = Model::new("bay-2");
    model
        .place_column("C1", p(0.0, 0.0, 0.0), 6.0, "HEB200", Orientation::Deg0)
        .unwrap();
    model
        .place_column("C2", p(6.0, 0.0, 0.0), 6.0, "HEB200", Orientation::Deg45)
        .unwrap();
    model
        .place_beam(
            "B1",
            p(0.0, 6.0, 0.0),
            Direction2::PlusX,
            6.0,
            "IPE300",
            Orientation::Deg90,
        )
        .unwrap();
    model
        .move_element("B1", p(0.0, 5.0, 0.0), p(6.0, 5.0, 0.0))
        .unwrap();

    let json = model.to_json().unwrap();
    let restored = Model::from_json(&json).unwrap();

    assert_eq!(restored.element_names(), model.element_names());
    for name in ["C1", "C2", "B1"] {
        assert_eq!(
            restored.start_connected_names(name).unwrap(),
            model.start_connected_names(name).unwrap()
        );
        assert_eq!(
            restored.connected_names(name).unwrap(),
            model.connected_names(name).unwrap()
        );
        assert_eq!(
            restored.end_connected_names(name).unwrap(),
            model.end_connected_names(name).unwrap()
        );
    }
    assert_eq!(
        restored.get_by_name("C2").unwrap().orientation,
        Orientation::Deg45
    );
    assert!(restored.verify_adjacency().is_ok());
}

/// Zero-length members warn on creation and on edits that collapse them,
/// and the warning is distinct from a crossing advisory.
#[test]
fn zero_length_lifecycle() {
    let mut model = Model::new("rack");
    let (_, warnings) = model
        .add_element(StructuralElement::new(
            "Z",
            ElementKind::Beam,
            p(1.0, 1.0, 1.0),
            p(1.0, 1.0, 1.0),
        ))
        .unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], Warning::ZeroLength { .. }));

    // Stretch it into a real member: no warnings
    let warnings = model
        .move_element("Z", p(1.0, 1.0, 1.0), p(4.0, 1.0, 1.0))
        .unwrap();
    assert!(warnings.is_empty());

    // Collapse it again: the zero-length advisory returns
    let warnings = model
        .move_element("Z", p(2.0, 2.0, 2.0), p(2.0, 2.0, 2.0))
        .unwrap();
    assert_eq!(
        warnings,
        vec![Warning::ZeroLength {
            element: "Z".to_string()
        }]
    );
}
