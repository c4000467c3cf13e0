use indexmap::IndexMap;
use trellis_core::{LayoutDirection, ReuseId, ViewError, ViewHost, ViewId};
use trellis_ui_graphics::Rect;
use trellis_ui_layout::LayoutArrangement;

use crate::Materialize;

/// Start and end frame of a keyed view present in both arrangements, in the
/// container's coordinates and before any direction mirroring.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub reuse_id: ReuseId,
    pub from: Rect,
    pub to: Rect,
}

/// A pending move of a container from one arrangement to another.
///
/// [`prepare`](Animation::prepare) puts the container into the start state;
/// [`apply`](Animation::apply), typically called inside an animation block of
/// the native view system, re-materializes the end state. Views are matched
/// by reuse id, so keyed views present in both states move instead of being
/// recreated.
#[must_use = "an animation does nothing until it is applied"]
pub struct Animation {
    from: LayoutArrangement,
    to: LayoutArrangement,
    container: ViewId,
    direction: LayoutDirection,
}

impl Animation {
    pub fn prepare<H: ViewHost + ?Sized>(
        from: &LayoutArrangement,
        to: &LayoutArrangement,
        host: &mut H,
        container: ViewId,
        direction: LayoutDirection,
    ) -> Result<Self, ViewError> {
        from.make_views(host, Some(container), direction)?;
        Ok(Self {
            from: from.clone(),
            to: to.clone(),
            container,
            direction,
        })
    }

    pub fn container(&self) -> ViewId {
        self.container
    }

    /// Frames of the views that persist across the animation.
    pub fn transitions(&self) -> Vec<Transition> {
        let mut start: IndexMap<ReuseId, Rect> = IndexMap::new();
        self.from.visit_absolute(&mut |arrangement: &LayoutArrangement, frame: Rect| {
            if let Some(reuse_id) = arrangement.layout.reuse_id() {
                start.entry(reuse_id.clone()).or_insert(frame);
            }
        });

        let mut transitions = Vec::new();
        self.to.visit_absolute(&mut |arrangement: &LayoutArrangement, frame: Rect| {
            let Some(reuse_id) = arrangement.layout.reuse_id() else {
                return;
            };
            if let Some(from) = start.shift_remove(reuse_id) {
                transitions.push(Transition {
                    reuse_id: reuse_id.clone(),
                    from,
                    to: frame,
                });
            }
        });
        transitions
    }

    /// Materializes the end state into the container.
    pub fn apply<H: ViewHost + ?Sized>(self, host: &mut H) -> Result<ViewId, ViewError> {
        self.to.make_views(host, Some(self.container), self.direction)
    }
}
