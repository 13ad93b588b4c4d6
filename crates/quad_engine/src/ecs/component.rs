//! Component kinds and the closed component sum type
//!
//! Every component an entity can carry is one variant of [`Component`].
//! [`ComponentKind`] is the tag used for storage slots and queries, and
//! [`ComponentMask`] is the set form of it.

use bitflags::bitflags;

use super::components::{Position, Render, Velocity};

/// The tag identifying a component type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// World-space location
    Position,
    /// Movement direction
    Velocity,
    /// Marks an entity as drawable
    Render,
}

impl ComponentKind {
    /// Number of component kinds
    pub const COUNT: usize = 3;

    /// All kinds in slot order
    pub const ALL: [ComponentKind; Self::COUNT] = [Self::Position, Self::Velocity, Self::Render];

    /// Storage slot of this kind
    pub const fn index(self) -> usize {
        match self {
            Self::Position => 0,
            Self::Velocity => 1,
            Self::Render => 2,
        }
    }

    /// Mask containing only this kind
    pub const fn mask(self) -> ComponentMask {
        match self {
            Self::Position => ComponentMask::POSITION,
            Self::Velocity => ComponentMask::VELOCITY,
            Self::Render => ComponentMask::RENDER,
        }
    }
}

bitflags! {
    /// Set of component kinds, used for presence tracking and query matching
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ComponentMask: u8 {
        /// [`ComponentKind::Position`]
        const POSITION = 1 << 0;
        /// [`ComponentKind::Velocity`]
        const VELOCITY = 1 << 1;
        /// [`ComponentKind::Render`]
        const RENDER = 1 << 2;
    }
}

impl ComponentMask {
    /// Build a mask from a list of kinds. An empty list gives an empty mask,
    /// which every entity matches.
    pub fn from_kinds(kinds: &[ComponentKind]) -> Self {
        kinds.iter().fold(Self::empty(), |mask, kind| mask | kind.mask())
    }
}

impl From<ComponentKind> for ComponentMask {
    fn from(kind: ComponentKind) -> Self {
        kind.mask()
    }
}

/// A component value
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// See [`Position`]
    Position(Position),
    /// See [`Velocity`]
    Velocity(Velocity),
    /// See [`Render`]
    Render(Render),
}

impl Component {
    /// The kind tag of this component
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Position(_) => ComponentKind::Position,
            Self::Velocity(_) => ComponentKind::Velocity,
            Self::Render(_) => ComponentKind::Render,
        }
    }
}

/// Typed access to one variant of [`Component`]
pub trait ComponentType: Sized + Into<Component> {
    /// The kind tag of this type
    const KIND: ComponentKind;

    /// Borrow this type out of a component, if the variant matches
    fn from_component(component: &Component) -> Option<&Self>;

    /// Mutably borrow this type out of a component, if the variant matches
    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! impl_component_type {
    ($ty:ident) => {
        impl From<$ty> for Component {
            fn from(value: $ty) -> Self {
                Component::$ty(value)
            }
        }

        impl ComponentType for $ty {
            const KIND: ComponentKind = ComponentKind::$ty;

            fn from_component(component: &Component) -> Option<&Self> {
                match component {
                    Component::$ty(value) => Some(value),
                    _ => None,
                }
            }

            fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                match component {
                    Component::$ty(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

impl_component_type!(Position);
impl_component_type!(Velocity);
impl_component_type!(Render);
