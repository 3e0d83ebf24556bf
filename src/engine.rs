//! Visualisation façade over the active structure
//!
//! [`VisualisationEngine`] owns the single active [`Structure`].  The UI asks
//! it for the structure to operate on, for the current rendering to display,
//! and for a traversal line when the user walks the structure.  Replacing the
//! structure drops the previous one, nodes and all.

use crate::structures::{Structure, StructureKind};

/// Holds the one structure currently selected for operations and display.
pub struct VisualisationEngine {
    structure: Structure,
}

impl VisualisationEngine {
    /// Start with the given initial structure.
    pub fn new(structure: Structure) -> Self {
        VisualisationEngine { structure }
    }

    /// Replace the active structure, releasing the previous one.
    pub fn set_structure(&mut self, structure: Structure) {
        self.structure = structure;
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn structure_mut(&mut self) -> &mut Structure {
        &mut self.structure
    }

    pub fn kind(&self) -> StructureKind {
        self.structure.kind()
    }

    /// Current textual rendering of the active structure.
    pub fn render(&self) -> String {
        self.structure.render()
    }

    /// One line summarising a full traversal in structure order.
    pub fn traverse_line(&self) -> String {
        let values: Vec<String> = self
            .structure
            .traverse()
            .map(|value| value.to_string())
            .collect();
        let label = match self.structure.kind() {
            StructureKind::LinkedList => "Linked list",
            StructureKind::Stack => "Stack (top to bottom)",
            StructureKind::BinaryTree => "Binary tree in-order",
        };
        if values.is_empty() {
            format!("{}: (empty)", label)
        } else {
            format!("{}: {}", label, values.join(" "))
        }
    }
}
