//! Explicit stack of parse scopes.
//!
//! Every nested parse (a type body, a method body) pushes a frame holding its own
//! path, import table and builder, and pops it when the body closes. Popping hands
//! the frame back to the caller, so the parent state is exactly what it was before
//! the push.

use classview::{ClassBuilder, ImportTable};
use log::trace;

/// What kind of body a frame covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Top level of a source file
    File,
    /// Body of a class, interface or enum
    Type,
    /// Body of a method or constructor; `depth` counts nested blocks entered
    MethodBody { depth: usize },
}

/// One frame of parser state.
#[derive(Debug, Clone)]
pub struct Scope {
    pub kind: ScopeKind,
    /// Package path at file level, otherwise the full name of the enclosing type
    pub path: String,
    /// Short name to full name
    pub imports: ImportTable,
    /// Type being built, or the scratch accumulator of a method body
    pub builder: Option<ClassBuilder>,
    /// Where the parent continues once this frame is popped
    pub resume_at: usize,
}

impl Scope {
    pub fn file() -> Self {
        Self {
            kind: ScopeKind::File,
            path: String::new(),
            imports: ImportTable::new(),
            builder: None,
            resume_at: 0,
        }
    }

    pub fn type_body(path: String, imports: ImportTable, builder: ClassBuilder, resume_at: usize) -> Self {
        Self {
            kind: ScopeKind::Type,
            path,
            imports,
            builder: Some(builder),
            resume_at,
        }
    }

    pub fn method_body(path: String, imports: ImportTable, scratch: ClassBuilder, resume_at: usize) -> Self {
        Self {
            kind: ScopeKind::MethodBody { depth: 0 },
            path,
            imports,
            builder: Some(scratch),
            resume_at,
        }
    }
}

/// Frames of one parse session; the file frame at the bottom is never popped.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    root: Scope,
    nested: Vec<Scope>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        Self {
            root: Scope::file(),
            nested: Vec::new(),
        }
    }

    pub fn push(&mut self, scope: Scope) {
        trace!("Entering {:?} scope {}", scope.kind, scope.path);
        self.nested.push(scope);
    }

    /// Pop the innermost frame. Returns `None` at file level.
    pub fn pop(&mut self) -> Option<Scope> {
        let scope = self.nested.pop()?;
        trace!("Leaving {:?} scope {}", scope.kind, scope.path);
        Some(scope)
    }

    pub fn current(&self) -> &Scope {
        self.nested.last().unwrap_or(&self.root)
    }

    pub fn current_mut(&mut self) -> &mut Scope {
        self.nested.last_mut().unwrap_or(&mut self.root)
    }

    /// Number of frames above the file frame.
    pub fn depth(&self) -> usize {
        self.nested.len()
    }

    pub fn in_method_body(&self) -> bool {
        matches!(self.current().kind, ScopeKind::MethodBody { .. })
    }

    /// Builder of the innermost type body, skipping method-body frames.
    pub fn enclosing_type_mut(&mut self) -> Option<&mut ClassBuilder> {
        self.nested
            .iter_mut()
            .rev()
            .find(|scope| scope.kind == ScopeKind::Type)
            .and_then(|scope| scope.builder.as_mut())
    }

    /// A block opened inside a method body.
    pub fn open_block(&mut self) {
        if let ScopeKind::MethodBody { depth } = &mut self.current_mut().kind {
            *depth += 1;
        }
    }

    /// A `}` was reached. Returns `true` if it closed a nested block of a method
    /// body, `false` if it ends the current frame's body.
    pub fn close_block(&mut self) -> bool {
        match &mut self.current_mut().kind {
            ScopeKind::MethodBody { depth } if *depth > 0 => {
                *depth -= 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classview::ClassKind;

    fn type_scope(path: &str) -> Scope {
        Scope::type_body(
            path.to_string(),
            ImportTable::new(),
            ClassBuilder::new(path, ClassKind::Class),
            0,
        )
    }

    #[test]
    fn test_root_frame_is_never_popped() {
        let mut stack = ScopeStack::new();
        assert_eq!(stack.current().kind, ScopeKind::File);
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 0);

        stack.current_mut().path = "com.example".into();
        assert_eq!(stack.current().path, "com.example");
    }

    #[test]
    fn test_pop_restores_parent() {
        let mut stack = ScopeStack::new();
        stack.push(type_scope("p.Outer"));
        stack.push(type_scope("p.Outer.Inner"));
        assert_eq!(stack.depth(), 2);

        let inner = stack.pop().unwrap();
        assert_eq!(inner.path, "p.Outer.Inner");
        assert_eq!(stack.current().path, "p.Outer");
    }

    #[test]
    fn test_enclosing_type_skips_method_bodies() {
        let mut stack = ScopeStack::new();
        assert!(stack.enclosing_type_mut().is_none());

        stack.push(type_scope("p.Outer"));
        stack.push(Scope::method_body(
            "p.Outer".into(),
            ImportTable::new(),
            ClassBuilder::scratch(&ImportTable::new()),
            0,
        ));
        assert!(stack.in_method_body());
        assert_eq!(stack.enclosing_type_mut().map(|b| b.name().to_string()), Some("Outer".into()));
    }

    #[test]
    fn test_block_depth_in_method_body() {
        let mut stack = ScopeStack::new();
        stack.push(Scope::method_body(
            String::new(),
            ImportTable::new(),
            ClassBuilder::scratch(&ImportTable::new()),
            0,
        ));
        stack.open_block();
        stack.open_block();
        assert!(stack.close_block());
        assert!(stack.close_block());
        assert!(!stack.close_block());
    }

    #[test]
    fn test_close_block_ends_type_and_file_bodies() {
        let mut stack = ScopeStack::new();
        stack.open_block();
        assert!(!stack.close_block());
        stack.push(type_scope("A"));
        stack.open_block();
        assert!(!stack.close_block());
    }
}
