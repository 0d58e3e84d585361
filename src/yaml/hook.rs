//! Observer hooks for live path display.
//!
//! A host registers observers (a status line, a tooltip, a printer) and
//! calls [`PathHooks::cursor_moved`] whenever the point moves. Buffers over
//! the configured size are never resolved live.

use super::buffer::{Buffer, Point};
use super::resolver::PathResolver;

/// Something interested in the path at point.
pub trait PathObserver {
    /// Called with the point that was resolved and its path, or `None`
    /// when the point is not on a structural line.
    fn on_path(&mut self, point: Point, path: Option<&str>);
}

impl<F> PathObserver for F
where
    F: FnMut(Point, Option<&str>),
{
    fn on_path(&mut self, point: Point, path: Option<&str>) {
        self(point, path)
    }
}

pub struct PathHooks<'a> {
    resolver: PathResolver<'a>,
    observers: Vec<Box<dyn PathObserver + 'a>>,
}

impl<'a> PathHooks<'a> {
    pub fn new(resolver: PathResolver<'a>) -> Self {
        Self {
            resolver,
            observers: Vec::new(),
        }
    }

    pub fn register(&mut self, observer: impl PathObserver + 'a) {
        self.observers.push(Box::new(observer));
    }

    pub fn is_live(&self, buffer: &Buffer) -> bool {
        self.resolver.config().live_enabled(buffer.document())
    }

    /// Resolve the path at point and notify every observer.
    ///
    /// Returns `false` without notifying anyone when the buffer is too
    /// large for live updates.
    pub fn cursor_moved(&mut self, buffer: &mut Buffer) -> bool {
        if !self.is_live(buffer) {
            log::trace!(
                "buffer of {} bytes exceeds live limit",
                buffer.document().size()
            );
            return false;
        }
        let path = self.resolver.get_path(buffer);
        let point = buffer.point();
        for observer in self.observers.iter_mut() {
            observer.on_path(point, path.as_deref());
        }
        true
    }
}
