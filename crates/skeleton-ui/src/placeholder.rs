use skeleton_core::{InflateError, Inflater, TemplateId, ViewId, ViewTree};
use skeleton_foundation::ShimmerFrame;

/// Inflates `template` as a detached placeholder, wrapped in `frame` when
/// one is given. The frame takes over the layout params of the inflated
/// view. Nothing is left in the tree on failure.
pub(crate) fn inflate_placeholder(
    tree: &mut ViewTree,
    inflater: &dyn Inflater,
    template: TemplateId,
    parent: ViewId,
    frame: Option<ShimmerFrame>,
) -> Result<ViewId, InflateError> {
    let Some(frame) = frame else {
        return inflater.inflate(tree, template, Some(parent));
    };

    let frame = tree.create(Box::new(frame));
    let inner = match inflater.inflate(tree, template, Some(frame)) {
        Ok(inner) => inner,
        Err(err) => {
            let _ = tree.remove(frame);
            return Err(err);
        }
    };

    let params = tree.layout_params(inner);
    let wrapped = tree
        .set_layout_params(frame, params)
        .and_then(|()| tree.add_view(frame, inner));
    if let Err(err) = wrapped {
        let _ = tree.remove(inner);
        let _ = tree.remove(frame);
        return Err(err.into());
    }
    Ok(frame)
}

/// Frees a placeholder that is no longer shown.
pub(crate) fn dispose(tree: &mut ViewTree, view: ViewId) {
    if let Err(err) = tree.remove(view) {
        log::warn!("could not dispose placeholder {view}: {err}");
    } else {
        log::trace!("disposed placeholder {view}");
    }
}
