//! Texture-unit binding cache shared by every texture of one context
//!
//! [`AppState`] is the single arbiter of which texture occupies which unit.
//! Each slot records the occupant's [`TextureId`] together with the
//! occupant's own unit cell, so a texture claiming a slot can mark the
//! previous occupant as unbound without holding a reference to it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::backend::TextureBackend;

/// Identifier of a texture, unique within one [`AppState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(u64);

impl TextureId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A texture's view of the unit it occupies; `None` means unbound.
pub(crate) type UnitCell = Rc<Cell<Option<u32>>>;

struct Occupant {
    id: TextureId,
    unit: UnitCell,
}

#[derive(Default)]
struct UnitTable {
    slots: Vec<Option<Occupant>>,
    capacity: Option<u32>,
    next_id: u64,
}

/// Shared texture-unit binding table
///
/// Cloning yields another handle to the same table. All textures created
/// against one graphics context must share one `AppState`.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Rc<RefCell<UnitTable>>,
}

impl AppState {
    /// Create an empty table that grows as units are bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table for a context exposing `units` texture units
    pub fn with_unit_capacity(units: u32) -> Self {
        let table = UnitTable {
            slots: std::iter::repeat_with(|| None).take(units as usize).collect(),
            capacity: Some(units),
            next_id: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(table)),
        }
    }

    /// Create a table sized from the backend's combined texture-unit count
    ///
    /// Falls back to an unbounded table when the backend reports no units.
    pub fn for_backend<B: TextureBackend>(gl: &B) -> Self {
        match gl.max_texture_units() {
            Some(units) => {
                tracing::debug!(target: "gltex", units, "texture unit table created");
                Self::with_unit_capacity(units)
            }
            None => {
                tracing::warn!(
                    target: "gltex",
                    "backend reported no texture units; unit table is unbounded"
                );
                Self::new()
            }
        }
    }

    /// Number of units the context reports, if known
    pub fn unit_capacity(&self) -> Option<u32> {
        self.inner.borrow().capacity
    }

    /// Texture currently occupying `unit`
    pub fn occupant(&self, unit: u32) -> Option<TextureId> {
        self.inner
            .borrow()
            .slots
            .get(unit as usize)
            .and_then(|slot| slot.as_ref().map(|occupant| occupant.id))
    }

    /// Every occupied unit with its occupant, in unit order
    pub fn bound_units(&self) -> Vec<(u32, TextureId)> {
        self.inner
            .borrow()
            .slots
            .iter()
            .enumerate()
            .filter_map(|(unit, slot)| slot.as_ref().map(|occupant| (unit as u32, occupant.id)))
            .collect()
    }

    pub(crate) fn next_texture_id(&self) -> TextureId {
        let mut table = self.inner.borrow_mut();
        table.next_id += 1;
        TextureId(table.next_id)
    }

    /// Record `id` as the occupant of `unit`.
    ///
    /// A different previous occupant is evicted: its unit cell is reset to
    /// unbound. Returns the evicted texture.
    pub(crate) fn claim(&self, unit: u32, id: TextureId, cell: &UnitCell) -> Option<TextureId> {
        let mut table = self.inner.borrow_mut();
        if let Some(capacity) = table.capacity {
            debug_assert!(
                unit < capacity,
                "texture unit {unit} out of range (context exposes {capacity})"
            );
        }

        let index = unit as usize;
        if table.slots.len() <= index {
            table.slots.resize_with(index + 1, || None);
        }

        let previous = table.slots[index].replace(Occupant {
            id,
            unit: Rc::clone(cell),
        });

        match previous {
            Some(evicted) if evicted.id != id => {
                evicted.unit.set(None);
                Some(evicted.id)
            }
            _ => None,
        }
    }

    /// Clear `unit` if `id` occupies it.
    pub(crate) fn release(&self, unit: u32, id: TextureId) {
        let mut table = self.inner.borrow_mut();
        if let Some(slot) = table.slots.get_mut(unit as usize) {
            if slot.as_ref().is_some_and(|occupant| occupant.id == id) {
                *slot = None;
            }
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("bound_units", &self.bound_units())
            .field("unit_capacity", &self.unit_capacity())
            .finish()
    }
}
