use smallvec::SmallVec;
use trellis_ui_graphics::Rect;

use crate::{LayoutDirection, View, ViewId, ViewTag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    Missing { id: ViewId },
    TypeMismatch { id: ViewId, expected: &'static str },
    Cycle { parent: ViewId, child: ViewId },
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::Missing { id } => write!(f, "view {id} missing"),
            ViewError::TypeMismatch { id, expected } => {
                write!(f, "view {id} type mismatch; expected {expected}")
            }
            ViewError::Cycle { parent, child } => {
                write!(f, "attaching view {child} to {parent} would create a cycle")
            }
        }
    }
}

impl std::error::Error for ViewError {}

/// The native view system as seen by materialization.
///
/// All calls happen on the thread that owns the hierarchy.
pub trait ViewHost {
    fn create(&mut self, view: Box<dyn View>) -> ViewId;
    fn get(&self, id: ViewId) -> Result<&dyn View, ViewError>;
    fn get_mut(&mut self, id: ViewId) -> Result<&mut dyn View, ViewError>;

    fn frame(&self, id: ViewId) -> Result<Rect, ViewError>;
    fn set_frame(&mut self, id: ViewId, frame: Rect) -> Result<(), ViewError>;

    fn parent(&self, id: ViewId) -> Result<Option<ViewId>, ViewError>;
    fn children(&self, id: ViewId) -> Result<Vec<ViewId>, ViewError>;
    /// Appends `child` to `parent`, detaching it from any previous parent.
    fn add_child(&mut self, parent: ViewId, child: ViewId) -> Result<(), ViewError>;
    fn remove_from_parent(&mut self, id: ViewId) -> Result<(), ViewError>;
    /// Detaches `id` and drops it together with its whole subtree.
    fn dispose(&mut self, id: ViewId) -> Result<(), ViewError>;

    fn tag(&self, id: ViewId) -> Result<&ViewTag, ViewError>;
    fn set_tag(&mut self, id: ViewId, tag: ViewTag) -> Result<(), ViewError>;

    /// Ambient direction of the hierarchy, used to decide on mirroring.
    fn layout_direction(&self) -> LayoutDirection;
}

struct ViewSlot {
    view: Box<dyn View>,
    frame: Rect,
    tag: ViewTag,
    parent: Option<ViewId>,
    children: SmallVec<[ViewId; 4]>,
}

/// In-memory [`ViewHost`] used headless and in tests.
#[derive(Default)]
pub struct MemoryViewHost {
    slots: Vec<Option<ViewSlot>>,
    direction: LayoutDirection,
}

impl MemoryViewHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(direction: LayoutDirection) -> Self {
        Self {
            slots: Vec::new(),
            direction,
        }
    }

    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    pub fn with_view<V: View, R>(
        &mut self,
        id: ViewId,
        f: impl FnOnce(&mut V) -> R,
    ) -> Result<R, ViewError> {
        let view = self.get_mut(id)?;
        let typed = view.downcast_mut::<V>().ok_or(ViewError::TypeMismatch {
            id,
            expected: std::any::type_name::<V>(),
        })?;
        Ok(f(typed))
    }

    pub fn view<V: View>(&self, id: ViewId) -> Result<&V, ViewError> {
        self.get(id)?
            .downcast_ref::<V>()
            .ok_or(ViewError::TypeMismatch {
                id,
                expected: std::any::type_name::<V>(),
            })
    }

    pub fn contains(&self, id: ViewId) -> bool {
        matches!(self.slots.get(id), Some(Some(_)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dump_tree(&self, root: Option<ViewId>) -> String {
        let mut output = String::new();
        if let Some(root_id) = root {
            self.dump_view(&mut output, root_id, 0);
        } else {
            output.push_str("(no root)\n");
        }
        output
    }

    fn dump_view(&self, output: &mut String, id: ViewId, depth: usize) {
        let indent = "  ".repeat(depth);
        if let Some(Some(slot)) = self.slots.get(id) {
            let type_name = slot.view.type_name();
            let short = type_name.rsplit("::").next().unwrap_or(type_name);
            output.push_str(&format!("{indent}[{id}] {short} {}", slot.frame));
            if let Some(reuse_id) = &slot.tag.reuse_id {
                output.push_str(&format!(" #{reuse_id}"));
            }
            output.push('\n');
            for &child in &slot.children {
                self.dump_view(output, child, depth + 1);
            }
        } else {
            output.push_str(&format!("{indent}[{id}] (missing)\n"));
        }
    }

    fn slot(&self, id: ViewId) -> Result<&ViewSlot, ViewError> {
        self.slots
            .get(id)
            .and_then(Option::as_ref)
            .ok_or(ViewError::Missing { id })
    }

    fn slot_mut(&mut self, id: ViewId) -> Result<&mut ViewSlot, ViewError> {
        self.slots
            .get_mut(id)
            .and_then(Option::as_mut)
            .ok_or(ViewError::Missing { id })
    }

    fn is_ancestor(&self, candidate: ViewId, of: ViewId) -> bool {
        let mut current = self.slot(of).ok().and_then(|slot| slot.parent);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.slot(id).ok().and_then(|slot| slot.parent);
        }
        false
    }
}

impl ViewHost for MemoryViewHost {
    fn create(&mut self, view: Box<dyn View>) -> ViewId {
        let id = self.slots.len();
        self.slots.push(Some(ViewSlot {
            view,
            frame: Rect::ZERO,
            tag: ViewTag::default(),
            parent: None,
            children: SmallVec::new(),
        }));
        id
    }

    fn get(&self, id: ViewId) -> Result<&dyn View, ViewError> {
        Ok(&*self.slot(id)?.view)
    }

    fn get_mut(&mut self, id: ViewId) -> Result<&mut dyn View, ViewError> {
        Ok(&mut *self.slot_mut(id)?.view)
    }

    fn frame(&self, id: ViewId) -> Result<Rect, ViewError> {
        Ok(self.slot(id)?.frame)
    }

    fn set_frame(&mut self, id: ViewId, frame: Rect) -> Result<(), ViewError> {
        self.slot_mut(id)?.frame = frame;
        Ok(())
    }

    fn parent(&self, id: ViewId) -> Result<Option<ViewId>, ViewError> {
        Ok(self.slot(id)?.parent)
    }

    fn children(&self, id: ViewId) -> Result<Vec<ViewId>, ViewError> {
        Ok(self.slot(id)?.children.to_vec())
    }

    fn add_child(&mut self, parent: ViewId, child: ViewId) -> Result<(), ViewError> {
        self.slot(child)?;
        self.slot(parent)?;
        if parent == child || self.is_ancestor(child, parent) {
            log::warn!("refusing to attach view {child} below its descendant {parent}");
            return Err(ViewError::Cycle { parent, child });
        }
        self.remove_from_parent(child)?;
        self.slot_mut(parent)?.children.push(child);
        self.slot_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn remove_from_parent(&mut self, id: ViewId) -> Result<(), ViewError> {
        let Some(parent) = self.slot_mut(id)?.parent.take() else {
            return Ok(());
        };
        // A disposed parent has already forgotten its children.
        if let Ok(slot) = self.slot_mut(parent) {
            slot.children.retain(|child| *child != id);
        }
        Ok(())
    }

    fn dispose(&mut self, id: ViewId) -> Result<(), ViewError> {
        self.remove_from_parent(id)?;
        let children = std::mem::take(&mut self.slot_mut(id)?.children);
        for child in children {
            if let Ok(slot) = self.slot_mut(child) {
                slot.parent = None;
            }
            // Children already disposed elsewhere are skipped.
            let _ = self.dispose(child);
        }
        if let Some(slot) = self.slots.get_mut(id) {
            slot.take();
        }
        Ok(())
    }

    fn tag(&self, id: ViewId) -> Result<&ViewTag, ViewError> {
        Ok(&self.slot(id)?.tag)
    }

    fn set_tag(&mut self, id: ViewId, tag: ViewTag) -> Result<(), ViewError> {
        self.slot_mut(id)?.tag = tag;
        Ok(())
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }
}
