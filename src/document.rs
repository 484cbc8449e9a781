use egui::Pos2;

use crate::element::Item;

/// The display list: committed items in draw order, plus the redo stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    items: Vec<Item>,
    /// Most recently undone item last
    redo_stack: Vec<Item>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` on top of the scene. The redo stack is left alone.
    pub fn commit(&mut self, item: Item) -> usize {
        log::debug!("Committing {} as item {}", item.kind(), self.items.len());
        self.items.push(item);
        self.items.len() - 1
    }

    /// Move the most recently committed item onto the redo stack.
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.items.pop() {
            Some(item) => {
                self.redo_stack.push(item);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone item back on top of the scene.
    ///
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(item) => {
                self.items.push(item);
                true
            }
            None => false,
        }
    }

    /// Empty both the display list and the redo stack.
    pub fn clear(&mut self) {
        self.items.clear();
        self.redo_stack.clear();
    }

    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Extend the stroke at `index` with `point`.
    ///
    /// Returns false if `index` is not a stroke (e.g. it was undone meanwhile).
    pub fn append_point(&mut self, index: usize, point: Pos2) -> bool {
        match self.items.get_mut(index) {
            Some(Item::Stroke(line)) => {
                line.extend(point);
                true
            }
            _ => false,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn redo_stack(&self) -> &[Item] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
