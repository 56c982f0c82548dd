//! Declaration interpreter.
//!
//! Classifies each scanned statement (package, import, type declaration, member,
//! local variable) and applies it to the innermost scope. Type and method bodies are
//! parsed recursively with their own frame on the [`ScopeStack`].

use crate::keywords::{is_identifier, is_ignored_keyword};
use crate::scanner::{Scanner, Statement, Terminator};
use crate::scope::{Scope, ScopeStack};
use classview::{
    qualify, Accessibility, ClassBuilder, ClassKind, ClassRegistry, ParameterInfo, RegistryError,
    ValueInfo,
};
use log::{trace, warn};

/// Modifiers seen so far in one statement.
#[derive(Debug, Clone, Copy)]
struct Modifiers {
    accessibility: Accessibility,
    is_final: bool,
    is_static: bool,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            accessibility: Accessibility::Package,
            is_final: false,
            is_static: false,
        }
    }
}

/// State of parsing one source text into a registry.
///
/// Package and imports start empty for every session; only the registry outlives
/// it.
pub struct ParseSession<'r> {
    scanner: Scanner,
    registry: &'r mut ClassRegistry,
    scopes: ScopeStack,
    harvest_locals: bool,
    registered: Vec<String>,
}

impl<'r> ParseSession<'r> {
    pub fn new(source: &str, registry: &'r mut ClassRegistry) -> Self {
        Self {
            scanner: Scanner::new(source),
            registry,
            scopes: ScopeStack::new(),
            harvest_locals: true,
            registered: Vec::new(),
        }
    }

    /// Whether method bodies are scanned for local variables.
    pub fn with_harvest_locals(mut self, harvest_locals: bool) -> Self {
        self.harvest_locals = harvest_locals;
        self
    }

    /// Parse the whole text. Returns the full names registered, in registration
    /// order.
    pub fn run(mut self) -> Vec<String> {
        self.parse_body(0);
        self.registered
    }

    /// Interpret statements from `cursor` until the current body closes or the input
    /// ends.
    fn parse_body(&mut self, mut cursor: usize) {
        while let Some((statement, next)) = self.scanner.next_statement(cursor) {
            trace!("{:?} {:?}", statement.tokens, statement.terminator);
            if let Some(resume) = self.interpret(&statement) {
                cursor = resume;
                continue;
            }

            cursor = next;
            match statement.terminator {
                Terminator::Block { body_start, .. }
                    if self.scopes.in_method_body() && statement.first() != Some("new") =>
                {
                    // Nested blocks of a method body are searched too, anonymous
                    // class bodies are not.
                    self.scopes.open_block();
                    cursor = body_start;
                }
                Terminator::Close => {
                    if !self.scopes.close_block() {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// Apply one statement. Returns where to continue when the statement consumed
    /// a whole type body.
    fn interpret(&mut self, statement: &Statement) -> Option<usize> {
        let tokens = &statement.tokens;
        let mut modifiers = Modifiers::default();
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i].as_str();
            if let Some(accessibility) = Accessibility::from_keyword(token) {
                modifiers.accessibility = accessibility;
                i += 1;
                continue;
            }

            match token {
                "static" => modifiers.is_static = true,
                "final" => modifiers.is_final = true,
                "package" => {
                    i += 1;
                    if let Some(path) = tokens.get(i) {
                        self.scopes.current_mut().path = path.clone();
                    }
                }
                "import" => {
                    i += 1;
                    if let Some(full_name) = tokens.get(i) {
                        self.add_import(full_name);
                    }
                }
                _ => {
                    if let Some(kind) = ClassKind::from_keyword(token) {
                        return self.enter_type(kind, &tokens[i + 1..], statement.terminator);
                    }
                    if is_ignored_keyword(token) {
                        if self.scopes.in_method_body() && i == 0 {
                            return None;
                        }
                    } else if token.starts_with('<') {
                        // Type parameters of a generic method, possibly spanning
                        // tokens (`<T extends Comparable<T>>`)
                        let mut open = angle_balance(token);
                        while open > 0 && i + 1 < tokens.len() {
                            i += 1;
                            open += angle_balance(&tokens[i]);
                        }
                    } else if self.scopes.current().builder.is_some() {
                        self.declare_member(tokens, i, modifiers, statement.terminator);
                        return None;
                    }
                }
            }
            i += 1;
        }
        None
    }

    fn add_import(&mut self, full_name: &str) {
        if let Some(dot) = full_name.rfind('.') {
            let short_name = &full_name[dot + 1..];
            if short_name != "*" {
                self.scopes
                    .current_mut()
                    .imports
                    .insert(short_name.to_string(), full_name.to_string());
            }
        }
    }

    /// `class Name [extends Super] [implements A, B]` followed by its body.
    fn enter_type(&mut self, kind: ClassKind, rest: &[String], terminator: Terminator) -> Option<usize> {
        let Terminator::Block { body_start, end } = terminator else {
            return None;
        };
        let (declared, mut rest) = rest.split_first()?;
        let name = strip_type_parameters(declared);
        if name.is_empty() {
            return None;
        }
        // `Box<T extends Comparable<T>>` spans several tokens
        let mut open = angle_balance(declared);
        while open > 0 {
            let Some((token, tail)) = rest.split_first() else {
                break;
            };
            open += angle_balance(token);
            rest = tail;
        }

        let caller = self.scopes.current();
        let path = qualify(&caller.path, name);
        let mut imports = caller.imports.clone();
        imports.insert(name.to_string(), path.clone());

        let mut builder = ClassBuilder::new(&path, kind);
        builder.add_imports(&imports);
        if let Some(outer) = self.scopes.enclosing_type_mut() {
            builder.set_outer_class_name(outer.name());
            // Lets sibling nested types see each other by simple name
            outer.add_import(name, path.clone());
            builder.add_imports(outer.imports());
        }

        if let [keyword, supers, tail @ ..] = rest {
            if keyword == "extends" {
                let mut supers = split_type_list(supers).into_iter();
                if let Some(super_class) = supers.next() {
                    builder.set_super_class_name(super_class);
                }
                // `interface A extends B, C`
                for extra in supers {
                    builder.add_interface_name(extra);
                }
                rest = tail;
            }
        }
        if let [keyword, interfaces, ..] = rest {
            if keyword == "implements" {
                for interface in split_type_list(interfaces) {
                    builder.add_interface_name(interface);
                }
            }
        }

        self.scopes
            .push(Scope::type_body(path, imports, builder, end));
        self.parse_body(body_start);
        let scope = self.scopes.pop()?;
        if let Some(builder) = scope.builder {
            let record = builder.build();
            let full_name = record.full_name();
            match self.registry.register(record) {
                Ok(()) => self.registered.push(full_name),
                Err(RegistryError::DuplicateClass { full_name }) => {
                    warn!("Ignoring second declaration of {full_name}");
                }
                Err(e) => warn!("Could not register {full_name}: {e}"),
            }
        }
        Some(scope.resume_at)
    }

    /// A statement inside a type or method body starting at `tokens[start]` after
    /// its modifiers: enum constants, fields, methods, constructors or locals.
    fn declare_member(&mut self, tokens: &[String], start: usize, modifiers: Modifiers, terminator: Terminator) {
        let in_method = self.scopes.in_method_body();

        if tokens.len() == 1 {
            // Outside a type body this is an expression, not an enum constant list
            if in_method {
                return;
            }
            if let Some(builder) = self.scopes.current_mut().builder.as_mut() {
                for constant in tokens[start].split(',').filter(|c| !c.is_empty()) {
                    builder.add_field(Accessibility::Public, constant, None, false, false);
                }
            }
            return;
        }

        let Some(next) = tokens.get(start + 1) else {
            return;
        };
        let (name, type_name, after_name) = if next == "(" {
            (tokens[start].as_str(), None, start + 1)
        } else {
            (next.as_str(), Some(tokens[start].clone()), start + 2)
        };

        if tokens.get(after_name).map(String::as_str) != Some("(") {
            if let Some(builder) = self.scopes.current_mut().builder.as_mut() {
                for field in name.split(',') {
                    if is_identifier(field.trim_end_matches(['[', ']'])) {
                        builder.add_field(
                            modifiers.accessibility,
                            field,
                            type_name.clone(),
                            modifiers.is_final,
                            modifiers.is_static,
                        );
                    }
                }
            }
            return;
        }

        // A call inside a method body, not a declaration
        if in_method {
            return;
        }

        let parameters = parse_parameters(&tokens[after_name + 1..]);
        let variables = match terminator {
            Terminator::Block { body_start, end } if self.harvest_locals => self.harvest_body(body_start, end),
            _ => Vec::new(),
        };
        if let Some(builder) = self.scopes.current_mut().builder.as_mut() {
            builder.add_method(
                modifiers.accessibility,
                name,
                type_name,
                parameters,
                variables,
                modifiers.is_final,
                modifiers.is_static,
            );
        }
    }

    /// Scan a method body for local declarations, in encounter order.
    fn harvest_body(&mut self, body_start: usize, end: usize) -> Vec<ValueInfo> {
        let current = self.scopes.current();
        let path = current.path.clone();
        let imports = current.imports.clone();
        let scratch = match &current.builder {
            Some(builder) => ClassBuilder::scratch(builder.imports()),
            None => ClassBuilder::scratch(&imports),
        };

        self.scopes
            .push(Scope::method_body(path, imports, scratch, end));
        self.parse_body(body_start);
        self.scopes
            .pop()
            .and_then(|scope| scope.builder)
            .map(ClassBuilder::into_variables)
            .unwrap_or_default()
    }
}

/// Parameters from the tokens after `(`, up to `)`: optional `final`, then type and
/// name. A varargs type arrives glued to its name (`String...args`).
fn parse_parameters(tokens: &[String]) -> Vec<ParameterInfo> {
    let mut parameters = Vec::new();
    let mut i = 0;
    while let Some(token) = tokens.get(i) {
        if token == ")" {
            break;
        }
        let mut token = token.as_str();
        let is_final = token == "final";
        if is_final {
            i += 1;
            match tokens.get(i) {
                Some(next) => token = next,
                None => break,
            }
        }

        if let Some(at) = token.find("...") {
            let (type_name, name) = token.split_at(at + 3);
            parameters.push(ParameterInfo::new(name, Some(type_name.to_string()), is_final));
        } else if let Some(name) = tokens.get(i + 1) {
            i += 1;
            parameters.push(ParameterInfo::new(name.as_str(), Some(token.to_string()), is_final));
        }
        i += 1;
    }
    parameters
}

/// `Box<T>` → `Box`
fn strip_type_parameters(name: &str) -> &str {
    name.find('<').map_or(name, |at| &name[..at])
}

fn angle_balance(token: &str) -> i32 {
    token.chars().fold(0, |balance, c| match c {
        '<' => balance + 1,
        '>' => balance - 1,
        _ => balance,
    })
}

/// Split `A, Map<K, V>` at commas outside type arguments.
fn split_type_list(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (at, c) in list.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&list[start..at]);
                start = at + 1;
            }
            _ => {}
        }
    }
    parts.push(&list[start..]);
    parts.retain(|part| !part.is_empty());
    parts
}
