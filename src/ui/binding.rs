// src/ui/binding.rs
//! Shared value cells that bound widgets poll on every refresh

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

/// A value owned jointly by the host application and the widgets bound to it.
///
/// The host keeps a clone and writes new values between frames; bound widgets
/// read it during [`Screen::refresh`](super::Screen::refresh) and repaint only
/// when it differs from what they last drew.
///
/// # Examples
/// ```ignore
/// let temperature = Binding::new(21.5_f32);
/// screen.attach(root, BoundFloat::new(Point::new(10, 10), WHITE).bound_to(temperature.clone()))?;
///
/// temperature.set(22.0);
/// screen.refresh()?;
/// ```
pub struct Binding<T>(Rc<RefCell<T>>);

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Replace the value, returning the previous one.
    ///
    /// # Panics
    /// If called from inside a [`with`](Self::with) closure on the same binding.
    pub fn set(&self, value: T) -> T {
        self.0.replace(value)
    }

    /// Mutate the value in place.
    ///
    /// # Panics
    /// If called from inside a [`with`](Self::with) closure on the same binding.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.0.borrow_mut());
    }

    /// Run `f` with a shared reference to the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }

    /// Like [`with`](Self::with), but returns `None` instead of panicking when
    /// the value is currently borrowed mutably.
    pub(crate) fn try_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.try_borrow().ok().map(|value| f(&value))
    }

    /// Whether both handles refer to the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Binding<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(value) => f.debug_tuple("Binding").field(&*value).finish(),
            Err(_) => f.write_str("Binding(<borrowed>)"),
        }
    }
}
