use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared two-way state between the widget and its caller.
///
/// The single-threaded rendition of a getter/setter binding pair: both
/// sides hold a handle onto the same cell, and either side may read or
/// reassign it. Handles are cheap to clone and only ever touched on the
/// UI event thread.
pub struct Binding<T> {
	cell: Rc<RefCell<T>>,
}

impl<T> Binding<T> {
	pub fn new(value: T) -> Self {
		Self {
			cell: Rc::new(RefCell::new(value)),
		}
	}

	/// Reassign the shared value. Observable through every handle.
	pub fn set(&self, value: T) {
		*self.cell.borrow_mut() = value;
	}

	/// Read the shared value without cloning it.
	pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
		read(&self.cell.borrow())
	}
}

impl<T: Clone> Binding<T> {
	pub fn get(&self) -> T {
		self.cell.borrow().clone()
	}
}

impl<T> Clone for Binding<T> {
	fn clone(&self) -> Self {
		Self {
			cell: Rc::clone(&self.cell),
		}
	}
}

impl<T: Default> Default for Binding<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Binding").field(&self.cell.borrow()).finish()
	}
}
