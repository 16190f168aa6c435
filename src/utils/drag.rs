//! Pointer-driven repositioning of a dialog box
//!
//! `DragSession` is a two-state machine (Idle / Dragging) that knows
//! nothing about the DOM. The element being moved is abstracted behind
//! [`DragTarget`] so the browser binding lives in `hooks::use_draggable`
//! and tests can drive the machine with a fake element.
//!
//! # Example
//! ```ignore
//! let mut session = DragSession::new();
//! session.pointer_move(Point::new(50.0, 50.0));
//! session.begin(element);                        // offset = pointer - origin
//! session.pointer_move(Point::new(80.0, 90.0));  // element placed at pointer - offset
//! session.end();
//! ```

use std::ops::Sub;

/// A position in page coordinates (CSS pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Something that can be moved around by a drag
pub trait DragTarget {
    /// Current top-left of the element relative to its offset parent
    fn origin(&self) -> Point;

    /// Move the element's top-left to `at`. Implementations must also
    /// switch the element to absolute positioning, on every call.
    fn place(&mut self, at: Point);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Drag bookkeeping for a single dialog
#[derive(Debug)]
pub struct DragSession<T> {
    active: Option<T>,
    pointer: Point,
    grab_offset: Point,
    dragging: bool,
}

impl<T> Default for DragSession<T> {
    fn default() -> Self {
        Self {
            active: None,
            pointer: Point::ZERO,
            grab_offset: Point::ZERO,
            dragging: false,
        }
    }
}

impl<T: DragTarget> DragSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        if self.active.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    /// Start dragging `target`.
    ///
    /// The grab offset is computed from the last pointer position seen by
    /// [`pointer_move`](Self::pointer_move), not from the pointer-down
    /// itself. Any element that was still active is abandoned and handed
    /// back to the caller.
    pub fn begin(&mut self, target: T) -> Option<T> {
        self.grab_offset = self.pointer - target.origin();
        self.active.replace(target)
    }

    /// Record the pointer and, while dragging, move the active element.
    ///
    /// Returns the new top-left of the element if one was moved.
    pub fn pointer_move(&mut self, at: Point) -> Option<Point> {
        self.pointer = at;

        let target = self.active.as_mut()?;
        self.dragging = true;
        let placed = self.pointer - self.grab_offset;
        target.place(placed);
        Some(placed)
    }

    /// Stop dragging. Returns false if there was nothing to stop.
    ///
    /// Pointer and grab offset are kept; the next `begin` recomputes the
    /// offset from whatever pointer position was last recorded.
    pub fn end(&mut self) -> bool {
        self.dragging = false;
        self.active.take().is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn grab_offset(&self) -> Point {
        self.grab_offset
    }

    pub fn active(&self) -> Option<&T> {
        self.active.as_ref()
    }
}

/// A [`DragSession`] that only accepts pointer-downs while armed.
///
/// The browser binding arms it once something is listening for the
/// matching pointer-up and disarms it when that listener goes away, so a
/// drag can never start without a way to end. Arming and disarming both
/// end whatever drag was left over.
#[derive(Debug)]
pub struct DragBinding<T> {
    session: DragSession<T>,
    armed: bool,
}

impl<T> Default for DragBinding<T> {
    fn default() -> Self {
        Self {
            session: DragSession::default(),
            armed: false,
        }
    }
}

impl<T: DragTarget> DragBinding<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns true if a stale drag was discarded
    pub fn arm(&mut self) -> bool {
        self.armed = true;
        self.session.end()
    }

    /// Returns true if a drag in progress was aborted
    pub fn disarm(&mut self) -> bool {
        self.armed = false;
        self.session.end()
    }

    /// Pointer-down on `target`.
    ///
    /// `Err` hands the target back untouched when disarmed; otherwise the
    /// result of [`DragSession::begin`].
    pub fn press(&mut self, target: T) -> Result<Option<T>, T> {
        if !self.armed {
            return Err(target);
        }
        Ok(self.session.begin(target))
    }

    pub fn session(&self) -> &DragSession<T> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DragSession<T> {
        &mut self.session
    }
}
