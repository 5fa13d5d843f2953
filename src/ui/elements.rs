// src/ui/elements.rs
//! Concrete widget enum and the tree node that wraps it.
//!
//! `Control::redraw` is generic over the surface, which makes the trait
//! **not object-safe**, so the tree cannot hold `Box<dyn Control>`. The closed
//! [`Widget`] enum is the alternative: one variant per widget kind, dispatched
//! by `match`.

use alloc::vec::Vec;

use crate::surface::Surface;
use crate::ui::components::{
    Bitmap, BoundBar, BoundChar, BoundFloat, BoundLabel, BoundNumeric, Frame, Group, Icon,
    StaticLabel,
};
use crate::ui::core::{Control, ElementState, NodeId, Placement};

/// Every kind of element the tree can hold.
pub enum Widget {
    /// Draws nothing; offsets and groups its children.
    Group(Group),
    Icon(Icon),
    Bitmap(Bitmap),
    Frame(Frame),
    StaticLabel(StaticLabel),
    BoundLabel(BoundLabel),
    BoundNumeric(BoundNumeric),
    BoundFloat(BoundFloat),
    BoundChar(BoundChar),
    BoundBar(BoundBar),
}

impl Widget {
    /// Short name used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Group(_) => "group",
            Widget::Icon(_) => "icon",
            Widget::Bitmap(_) => "bitmap",
            Widget::Frame(_) => "frame",
            Widget::StaticLabel(_) => "static-label",
            Widget::BoundLabel(_) => "bound-label",
            Widget::BoundNumeric(_) => "bound-numeric",
            Widget::BoundFloat(_) => "bound-float",
            Widget::BoundChar(_) => "bound-char",
            Widget::BoundBar(_) => "bound-bar",
        }
    }
}

impl Control for Widget {
    fn placement(&self) -> &Placement {
        match self {
            Widget::Group(w) => w.placement(),
            Widget::Icon(w) => w.placement(),
            Widget::Bitmap(w) => w.placement(),
            Widget::Frame(w) => w.placement(),
            Widget::StaticLabel(w) => w.placement(),
            Widget::BoundLabel(w) => w.placement(),
            Widget::BoundNumeric(w) => w.placement(),
            Widget::BoundFloat(w) => w.placement(),
            Widget::BoundChar(w) => w.placement(),
            Widget::BoundBar(w) => w.placement(),
        }
    }

    fn redraw<S: Surface>(
        &mut self,
        state: &mut ElementState,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        match self {
            Widget::Group(w) => w.redraw(state, surface),
            Widget::Icon(w) => w.redraw(state, surface),
            Widget::Bitmap(w) => w.redraw(state, surface),
            Widget::Frame(w) => w.redraw(state, surface),
            Widget::StaticLabel(w) => w.redraw(state, surface),
            Widget::BoundLabel(w) => w.redraw(state, surface),
            Widget::BoundNumeric(w) => w.redraw(state, surface),
            Widget::BoundFloat(w) => w.redraw(state, surface),
            Widget::BoundChar(w) => w.redraw(state, surface),
            Widget::BoundBar(w) => w.redraw(state, surface),
        }
    }
}

impl From<Group> for Widget {
    fn from(widget: Group) -> Self {
        Widget::Group(widget)
    }
}

impl From<Icon> for Widget {
    fn from(widget: Icon) -> Self {
        Widget::Icon(widget)
    }
}

impl From<Bitmap> for Widget {
    fn from(widget: Bitmap) -> Self {
        Widget::Bitmap(widget)
    }
}

impl From<Frame> for Widget {
    fn from(widget: Frame) -> Self {
        Widget::Frame(widget)
    }
}

impl From<StaticLabel> for Widget {
    fn from(widget: StaticLabel) -> Self {
        Widget::StaticLabel(widget)
    }
}

impl From<BoundLabel> for Widget {
    fn from(widget: BoundLabel) -> Self {
        Widget::BoundLabel(widget)
    }
}

impl From<BoundNumeric> for Widget {
    fn from(widget: BoundNumeric) -> Self {
        Widget::BoundNumeric(widget)
    }
}

impl From<BoundFloat> for Widget {
    fn from(widget: BoundFloat) -> Self {
        Widget::BoundFloat(widget)
    }
}

impl From<BoundChar> for Widget {
    fn from(widget: BoundChar) -> Self {
        Widget::BoundChar(widget)
    }
}

impl From<BoundBar> for Widget {
    fn from(widget: BoundBar) -> Self {
        Widget::BoundBar(widget)
    }
}

/// A node of the element tree: the widget, its runtime state and its links.
pub struct Element {
    pub(crate) state: ElementState,
    pub(crate) widget: Widget,
    pub(crate) owner: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    pub(crate) fn new(state: ElementState, widget: Widget, owner: Option<NodeId>) -> Self {
        Self {
            state,
            widget,
            owner,
            children: Vec::new(),
        }
    }

    pub fn state(&self) -> &ElementState {
        &self.state
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    /// `None` for the root.
    pub fn owner(&self) -> Option<NodeId> {
        self.owner
    }

    /// Children in attachment order, which is also paint order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn redraw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.widget.redraw(&mut self.state, surface)
    }
}
