// Integration tests driving the visualiser core end to end

use dsviz::engine::VisualisationEngine;
use dsviz::structures::{Outcome, Structure, StructureKind};

#[test]
fn bst_scenario_renders_by_depth() {
    let mut engine = VisualisationEngine::new(Structure::new(StructureKind::BinaryTree));
    for value in [5, 3, 8, 1] {
        engine.structure_mut().insert(value);
    }

    // In-order traversal yields ascending order
    let values: Vec<i32> = engine.structure().traverse().collect();
    assert_eq!(values, vec![1, 3, 5, 8]);

    // [5] at depth 0, [3] and [8] at depth 1, [1] at depth 2 under [3]
    assert_eq!(engine.render(), "[5]\n  [3]\n    [1]\n  [8]\n");
}

#[test]
fn linked_list_scenario_render_progression() {
    let mut engine = VisualisationEngine::new(Structure::new(StructureKind::LinkedList));
    assert_eq!(engine.render(), "null");

    engine.structure_mut().insert(7);
    assert_eq!(engine.render(), "[7] -> null");

    engine.structure_mut().insert(9);
    assert_eq!(engine.render(), "[7] -> [9] -> null");

    assert_eq!(engine.structure_mut().remove(7), Outcome::Removed(7));
    assert_eq!(engine.render(), "[9] -> null");
}

#[test]
fn stack_scenario_push_push_pop() {
    let mut engine = VisualisationEngine::new(Structure::new(StructureKind::Stack));
    assert_eq!(engine.render(), "");

    engine.structure_mut().insert(4);
    engine.structure_mut().insert(2);
    assert_eq!(engine.render(), "[2] \n[4] \n");

    // The removal argument is irrelevant for a stack: the top is popped.
    assert_eq!(engine.structure_mut().remove(0), Outcome::Popped(2));
    assert_eq!(engine.render(), "[4] \n");
}

#[test]
fn bst_remove_of_absent_value_reports_not_found() {
    let mut engine = VisualisationEngine::new(Structure::new(StructureKind::BinaryTree));
    for value in [5, 3, 8] {
        engine.structure_mut().insert(value);
    }

    let before = engine.render();
    assert_eq!(engine.structure_mut().remove(42), Outcome::NotFound(42));
    assert_eq!(engine.render(), before);
}

#[test]
fn switching_structures_discards_previous_nodes() {
    let mut engine = VisualisationEngine::new(Structure::new(StructureKind::LinkedList));
    engine.structure_mut().insert(1);
    engine.structure_mut().insert(2);

    engine.set_structure(Structure::new(StructureKind::Stack));
    assert_eq!(engine.kind(), StructureKind::Stack);
    assert_eq!(engine.render(), "");

    // Selecting the same kind again also starts from scratch
    engine.structure_mut().insert(9);
    engine.set_structure(Structure::new(StructureKind::Stack));
    assert_eq!(engine.render(), "");
}

#[test]
fn traversal_reflects_every_mutation() {
    let mut engine = VisualisationEngine::new(Structure::new(StructureKind::BinaryTree));
    for value in [5, 3, 8, 1] {
        engine.structure_mut().insert(value);
    }
    assert_eq!(engine.traverse_line(), "Binary tree in-order: 1 3 5 8");

    engine.structure_mut().remove(3);
    assert_eq!(engine.traverse_line(), "Binary tree in-order: 1 5 8");

    engine.structure_mut().insert(3);
    assert_eq!(engine.traverse_line(), "Binary tree in-order: 1 3 5 8");
}
