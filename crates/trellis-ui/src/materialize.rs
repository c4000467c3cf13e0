//! Turns arrangement trees into views on a [`ViewHost`].

use smallvec::{smallvec, SmallVec};
use trellis_core::{ContainerView, LayoutDirection, ViewError, ViewHost, ViewId};
use trellis_ui_graphics::{Point, Rect};
use trellis_ui_layout::LayoutArrangement;

use crate::ViewRecycler;

type Subviews = SmallVec<[ViewId; 4]>;

/// Materialization of a [`LayoutArrangement`].
///
/// Must run on the thread that owns the host's hierarchy.
pub trait Materialize {
    /// Creates or recycles the views of every node that needs one, sets their
    /// frames and configuration, and attaches them.
    ///
    /// With a `container`, its previous subviews are replaced by the new
    /// top-level views and the container is returned; views with a matching
    /// reuse id and kind are reused. Without one, a single top-level view is
    /// returned as is, and several are wrapped in a new [`ContainerView`] at
    /// the arrangement's frame.
    ///
    /// When `direction` differs from the host's layout direction every
    /// subview of the result is mirrored horizontally within its parent.
    fn make_views<H: ViewHost + ?Sized>(
        &self,
        host: &mut H,
        container: Option<ViewId>,
        direction: LayoutDirection,
    ) -> Result<ViewId, ViewError>;
}

impl Materialize for LayoutArrangement {
    fn make_views<H: ViewHost + ?Sized>(
        &self,
        host: &mut H,
        container: Option<ViewId>,
        direction: LayoutDirection,
    ) -> Result<ViewId, ViewError> {
        let mut recycler = ViewRecycler::new(host, container)?;
        let views = make_subviews(self, host, &mut recycler)?;

        let root = match container {
            Some(container) => {
                for &view in &views {
                    host.add_child(container, view)?;
                }
                container
            }
            None if views.len() == 1 => views[0],
            None => {
                let root = host.create(Box::new(ContainerView));
                host.set_frame(root, self.frame)?;
                let origin = self.frame.origin();
                let offset = Point::new(-origin.x, -origin.y);
                for &view in &views {
                    let frame = host.frame(view)?;
                    host.set_frame(view, frame.offset_by(offset))?;
                    host.add_child(root, view)?;
                }
                log::debug!("wrapped {} top-level views in container {root}", views.len());
                root
            }
        };
        recycler.purge_views(host)?;

        if direction != host.layout_direction() {
            flip_subviews_horizontally(host, root)?;
        }
        Ok(root)
    }
}

/// Views of `arrangement`'s subtree, with frames relative to the parent of
/// `arrangement`'s frame.
fn make_subviews<H: ViewHost + ?Sized>(
    arrangement: &LayoutArrangement,
    host: &mut H,
    recycler: &mut ViewRecycler,
) -> Result<Subviews, ViewError> {
    let mut subviews = Subviews::new();
    for sublayout in &arrangement.sublayouts {
        subviews.extend(make_subviews(sublayout, host, recycler)?);
    }

    let layout = &arrangement.layout;
    let config = layout.view_config().filter(|_| layout.needs_view());
    let Some(config) = config else {
        // No view of its own: children move into the parent's coordinates.
        let origin = arrangement.frame.origin();
        for &subview in &subviews {
            let frame = host.frame(subview)?;
            host.set_frame(subview, frame.offset_by(origin))?;
        }
        return Ok(subviews);
    };

    let view = recycler.make_view(host, config.reuse_id(), config.reuse_group(), config.kind())?;
    host.set_frame(view, arrangement.frame)?;
    layout.configure_view(host.get_mut(view)?);
    for subview in subviews {
        host.add_child(view, subview)?;
    }
    Ok(smallvec![view])
}

fn flip_subviews_horizontally<H: ViewHost + ?Sized>(
    host: &mut H,
    view: ViewId,
) -> Result<(), ViewError> {
    let width = host.frame(view)?.width;
    for subview in host.children(view)? {
        let frame = host.frame(subview)?;
        host.set_frame(
            subview,
            Rect::new(width - frame.max_x(), frame.y, frame.width, frame.height),
        )?;
        flip_subviews_horizontally(host, subview)?;
    }
    Ok(())
}
