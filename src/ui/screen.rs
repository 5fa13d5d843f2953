// src/ui/screen.rs
//! Element tree bound to a drawing surface
//!
//! Elements live in an arena in attachment order and refer to each other by
//! [`NodeId`]. Every operation that walks the tree (refresh, show, hide,
//! invalidate) goes depth-first, owner before children, children in
//! attachment order.

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;
use log::{debug, trace, warn};

use crate::config::ScreenConfig;
use crate::surface::Surface;
use crate::ui::components::Group;
use crate::ui::core::{Control, ElementState, NodeId};
use crate::ui::elements::{Element, Widget};
use crate::ui::{WidgetError, WidgetResult};

const ROOT: NodeId = NodeId(0);

/// Retained widget tree drawing onto a [`Surface`].
///
/// The host builds the tree once at start-up with [`attach`](Self::attach)
/// and then calls [`refresh`](Self::refresh) once per frame. Elements are
/// never removed.
///
/// # Examples
/// ```ignore
/// let mut screen = Screen::new(GraphicsSurface::new(display));
/// let root = screen.root();
///
/// let panel = screen.attach(root, Frame::new(Rectangle::new(Point::new(10, 10), Size::new(120, 40)), 1, WHITE))?;
/// let speed = Binding::new(0);
/// screen.attach(panel, BoundNumeric::new(Point::new(6, 8), WHITE).bound_to(speed.clone()))?;
///
/// loop {
///     speed.set(read_speed());
///     screen.refresh()?;
/// }
/// ```
pub struct Screen<S> {
    surface: S,
    elements: Vec<Element>,
    /// Scratch stack reused by every traversal.
    pending: Vec<NodeId>,
}

impl<S: Surface> Screen<S> {
    /// A screen with a black background at the panel origin.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, &ScreenConfig::default())
    }

    pub fn with_config(surface: S, config: &ScreenConfig) -> Self {
        let state = ElementState::new(
            Rectangle::new(config.origin(), Size::zero()),
            Rgb565::WHITE,
            config.background_color(),
            Alignment::Left,
        );
        let root = Element::new(state, Widget::Group(Group::new(config.origin())), None);

        Self {
            surface,
            elements: vec![root],
            pending: Vec::new(),
        }
    }

    /// The root element every tree hangs off.
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Attach `widget` as the last child of `owner`.
    ///
    /// The widget's bounds are resolved against the owner's absolute position
    /// and background now; they do not follow later changes to the owner.
    pub fn attach(&mut self, owner: NodeId, widget: impl Into<Widget>) -> WidgetResult<NodeId> {
        let widget = widget.into();
        let owner_state = self.element(owner)?.state;
        let state = widget.placement().resolve(&owner_state);

        let id = NodeId(self.elements.len());
        debug!(
            "Attaching {} #{} under #{} at {:?}",
            widget.kind(),
            id.index(),
            owner.index(),
            state.bounds
        );

        self.elements.push(Element::new(state, widget, Some(owner)));
        self.elements[owner.0].children.push(id);
        Ok(id)
    }

    /// Redraw the whole tree. Call once per frame.
    pub fn refresh(&mut self) -> Result<(), S::Error> {
        self.refresh_element(ROOT)
    }

    /// Redraw the subtree rooted at `id`.
    ///
    /// Hidden elements are still visited but emit nothing. A surface error
    /// stops the pass; elements not reached yet are drawn on the next one.
    /// An unknown `id` is ignored.
    pub fn refresh_element(&mut self, id: NodeId) -> Result<(), S::Error> {
        if !self.contains(id) {
            warn!("Refresh of unknown element #{} ignored", id.index());
            return Ok(());
        }
        trace!("Refresh pass from #{}", id.index());

        let mut pending = core::mem::take(&mut self.pending);
        pending.clear();
        pending.push(id);

        let mut result = Ok(());
        while let Some(next) = pending.pop() {
            let element = &mut self.elements[next.0];
            if let Err(err) = element.redraw(&mut self.surface) {
                result = Err(err);
                break;
            }
            pending.extend(element.children.iter().rev().copied());
        }

        self.pending = pending;
        result
    }

    /// Make `id` and all its descendants visible. Does not force a repaint of
    /// elements that are still drawn.
    pub fn show(&mut self, id: NodeId) -> WidgetResult<()> {
        debug!("Showing #{}", id.index());
        self.visit(id, ElementState::show)
    }

    /// Hide `id` and all its descendants. They repaint in full once shown
    /// again.
    pub fn hide(&mut self, id: NodeId) -> WidgetResult<()> {
        debug!("Hiding #{}", id.index());
        self.visit(id, ElementState::hide)
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> WidgetResult<()> {
        if visible { self.show(id) } else { self.hide(id) }
    }

    /// Change the foreground colour of `id` only. A different colour makes it
    /// repaint on the next refresh; the same colour changes nothing.
    pub fn set_foreground(&mut self, id: NodeId, color: Rgb565) -> WidgetResult<()> {
        let element = self.element_mut(id)?;
        if element.state.set_foreground(color) {
            trace!("Foreground of #{} changed", id.index());
        }
        Ok(())
    }

    /// Force `id` and all its descendants to repaint on the next refresh,
    /// e.g. after the host cleared the panel itself.
    pub fn invalidate(&mut self, id: NodeId) -> WidgetResult<()> {
        self.visit(id, ElementState::invalidate)
    }

    pub fn element(&self, id: NodeId) -> WidgetResult<&Element> {
        self.elements
            .get(id.0)
            .ok_or(WidgetError::UnknownElement { index: id.0 })
    }

    fn element_mut(&mut self, id: NodeId) -> WidgetResult<&mut Element> {
        self.elements
            .get_mut(id.0)
            .ok_or(WidgetError::UnknownElement { index: id.0 })
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.elements.len()
    }

    /// Number of elements, root included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`: a screen has at least its root.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Apply `f` to the state of `id` and every descendant, pre-order.
    fn visit(&mut self, id: NodeId, mut f: impl FnMut(&mut ElementState)) -> WidgetResult<()> {
        self.element(id)?;

        let mut pending = core::mem::take(&mut self.pending);
        pending.clear();
        pending.push(id);

        while let Some(next) = pending.pop() {
            let element = &mut self.elements[next.0];
            f(&mut element.state);
            pending.extend(element.children.iter().rev().copied());
        }

        self.pending = pending;
        Ok(())
    }
}
