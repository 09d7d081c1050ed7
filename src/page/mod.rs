pub mod document;
pub mod geometry;
pub mod html;

pub use document::{
    Card, CardKind, ClassList, Container, ContainerId, Document, ErrorNotice, NavIcon, NavMenu,
    Node, UnitId, VisualUnit, ACTIVE_CLASS, ANIMATION_CLASS, VISIBLE_CLASS,
};
pub use geometry::Rect;
