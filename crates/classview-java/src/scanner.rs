//! Statement scanner.
//!
//! Splits source text into one token list per statement without building a syntax
//! tree. A statement ends at `;`, at `}`, at a `{` outside parentheses (the braced
//! block is skipped, and the caller decides whether to descend into it), or at a
//! label `:`. Comments are whitespace and string/char literals vanish.
//!
//! Tokens are coarser than a lexer's: qualified names, generic arguments and array
//! suffixes stay glued together (`java.util.Map<String,List<Integer>>`, `int[]`), and
//! so do comma-separated declarators outside parentheses (`a,b,c`). Parentheses are
//! tokens of their own.
//!
//! Nothing here can fail. Unterminated literals, comments or blocks simply run to
//! the end of the input.

use crate::keywords::{is_ignored_keyword, is_modifier};

/// How a statement ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `;`
    Semicolon,
    /// `{` outside parentheses; the block was skipped up to its matching `}`
    Block {
        /// Position just inside the opening brace
        body_start: usize,
        /// Position just past the matching closing brace
        end: usize,
    },
    /// `}`
    Close,
    /// `:` of a `case`/`default` label or a single-token label
    Label,
    /// Input ran out while skipping an initializer
    EndOfInput,
}

/// Tokens of one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub tokens: Vec<String>,
    pub terminator: Terminator,
}

impl Statement {
    pub fn first(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Immutable view of one source text; positions are char indices.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: Vec<char>,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Scan the statement starting at `cursor`.
    ///
    /// Returns the statement and the position to continue from, or `None` once no
    /// further statement can be completed before the end of input.
    pub fn next_statement(&self, cursor: usize) -> Option<(Statement, usize)> {
        let start = skip_trivia(&self.source, cursor);
        if start >= self.source.len() {
            return None;
        }
        StatementScan {
            src: &self.source,
            index: start,
            tokens: Vec::new(),
            current: String::new(),
            parens: 0,
            angles: 0,
        }
        .run()
    }

    /// Iterate over all statements from the start, without descending into blocks.
    pub fn statements(&self) -> Statements<'_> {
        Statements {
            scanner: self,
            cursor: 0,
        }
    }
}

/// Iterator returned by [`Scanner::statements`].
pub struct Statements<'a> {
    scanner: &'a Scanner,
    cursor: usize,
}

impl Iterator for Statements<'_> {
    type Item = Statement;

    fn next(&mut self) -> Option<Statement> {
        let (statement, next) = self.scanner.next_statement(self.cursor)?;
        self.cursor = next;
        Some(statement)
    }
}

/// Characters that end the token being built.
fn breaks_token(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '.' | ',' | '<' | '>' | '[' | ']' | '=' | '{' | '?'
    )
}

/// State while scanning a single statement.
struct StatementScan<'a> {
    src: &'a [char],
    index: usize,
    tokens: Vec<String>,
    current: String,
    parens: i32,
    angles: i32,
}

impl StatementScan<'_> {
    fn run(mut self) -> Option<(Statement, usize)> {
        while let Some(&c) = self.src.get(self.index) {
            if c.is_whitespace() || c == '/' || (!self.current.is_empty() && breaks_token(c)) {
                if c.is_whitespace() || c == '/' {
                    self.index = skip_trivia(self.src, self.index);
                }
                let Some(&next) = self.src.get(self.index) else {
                    break;
                };
                self.token_boundary(next);
                continue;
            }

            match c {
                '"' | '\'' => self.index = skip_literal(self.src, self.index),
                '(' => {
                    self.tokens.push("(".to_string());
                    self.parens += 1;
                    self.index += 1;
                }
                ')' => self.close_paren(),
                ':' | ';' | '{' | '}' | '=' => {
                    if let Some(done) = self.terminate(c) {
                        return Some(done);
                    }
                }
                _ => {
                    if c == '<' {
                        self.angles += 1;
                    }
                    self.current.push(c);
                    self.index += 1;
                }
            }
        }
        None
    }

    /// At a token boundary, `c` being the next significant character. Joining
    /// characters may extend the current token across whitespace.
    fn token_boundary(&mut self, c: char) {
        if !matches!(c, '.' | ',' | '<' | '>' | '[' | ']' | '?') {
            self.finish_token(c);
            return;
        }

        if c == '<' {
            self.angles += 1;
            // `public <T> T pick()`: type parameters start their own token
            if is_modifier(&self.current) {
                self.finish_token(c);
                self.current.push(c);
                self.index = skip_whitespace(self.src, self.index + 1);
                return;
            }
        } else if c == '>' {
            self.angles -= 1;
        }
        let after = skip_whitespace(self.src, self.index + 1);
        let lookahead = self.src.get(after).copied();

        // `,` separates parameters inside parentheses unless inside type arguments;
        // closing characters only join when more type arguments, brackets or a
        // statement-level list follow (`implements A<T>, B`).
        let joins = ((c != ',' || self.parens == 0) && !matches!(c, '>' | ']' | '?'))
            || self.angles > 0
            || lookahead == Some('[')
            || (c == '>' && lookahead == Some(',') && self.parens == 0);
        if joins {
            self.current.push(c);
            self.index = after;
            return;
        }

        if matches!(c, '>' | ']' | '?') {
            self.current.push(c);
        }
        self.index += 1;
        self.finish_token(c);
    }

    /// Push the current token. Annotations are dropped, along with their argument
    /// list when `next` opens one.
    fn finish_token(&mut self, next: char) {
        if self.current.is_empty() {
            return;
        }
        let token = std::mem::take(&mut self.current);
        if token.starts_with('@') {
            if next == '(' {
                self.index = skip_brackets(self.src, self.index, '(', ')');
            }
        } else {
            self.tokens.push(token);
        }
    }

    fn first_is_ignored(&self) -> bool {
        self.tokens.first().is_some_and(|t| is_ignored_keyword(t))
    }

    /// A `)` not followed by a body or `throws` is taken as an enum constant's
    /// argument list: `VALUE(1, 2)` collapses back to `VALUE`, which stays open so
    /// following constants join it (`VALUE,OTHER`). Declarations with a type before
    /// the name (`void run()` in an interface) keep their parameter list.
    fn close_paren(&mut self) {
        self.tokens.push(")".to_string());
        self.parens -= 1;
        self.index = skip_whitespace(self.src, self.index + 1);

        let rest = &self.src[self.index.min(self.src.len())..];
        let opens_body = rest.first() == Some(&'{') || starts_with(rest, "throws");
        if opens_body || self.first_is_ignored() {
            return;
        }

        let open = self.tokens.iter().rposition(|t| t == "(");
        if open.map_or(true, |i| i < 2) {
            while self.tokens.len() > 1 {
                if self.tokens.pop().as_deref() == Some("(") {
                    break;
                }
            }
            if let Some(last) = self.tokens.pop() {
                self.current.push_str(&last);
            }
        }
    }

    /// Whether a `:` ends the statement: after `case`/`default` or a lone token.
    fn ends_at_colon(&self) -> bool {
        let pending = usize::from(!self.current.is_empty());
        matches!(self.first(), Some("case") | Some("default"))
            || self.current == "default"
            || self.tokens.len() + pending == 1
    }

    fn first(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Handle a potential statement end. Returns the finished statement, or `None`
    /// when scanning continues.
    fn terminate(&mut self, c: char) -> Option<(Statement, usize)> {
        if c == ':' && !self.ends_at_colon() {
            self.current.push(c);
            self.index += 1;
            return None;
        }
        if self.parens > 0 {
            self.index += 1;
            return None;
        }

        match c {
            '{' => {
                let body_start = self.index + 1;
                let end = skip_brackets(self.src, self.index, '{', '}');
                if self.tokens.len() == 1 && !self.first_is_ignored() && self.first() != Some("static") {
                    // A lone name before a body: an enum constant with its own class
                    // body. The statement goes on after the block.
                    if let Some(name) = self.tokens.pop() {
                        self.current.push_str(&name);
                    }
                    self.index = end;
                    return None;
                }
                Some(self.finish(Terminator::Block { body_start, end }, end))
            }
            '=' => match skip_initializer(self.src, self.index + 1) {
                Initializer::Separator(at) => {
                    // `int a = 1, b = 2;` - keep building the declarator list.
                    if let Some(last) = self.tokens.pop() {
                        self.current.push_str(&last);
                    }
                    self.index = at;
                    None
                }
                Initializer::End(after) => Some(self.finish(Terminator::Semicolon, after)),
                Initializer::Exhausted => {
                    let len = self.src.len();
                    Some(self.finish(Terminator::EndOfInput, len))
                }
            },
            '}' => Some(self.finish(Terminator::Close, self.index + 1)),
            ':' => Some(self.finish(Terminator::Label, self.index + 1)),
            _ => Some(self.finish(Terminator::Semicolon, self.index + 1)),
        }
    }

    fn finish(&mut self, terminator: Terminator, next: usize) -> (Statement, usize) {
        self.finish_token(';');
        let statement = Statement {
            tokens: std::mem::take(&mut self.tokens),
            terminator,
        };
        (statement, next)
    }
}

/// Outcome of skipping an initializer after `=`.
enum Initializer {
    /// A top-level `,` at this position
    Separator(usize),
    /// A top-level `;`; position just past it
    End(usize),
    Exhausted,
}

/// Skip an initializer expression up to the next `,` or `;` outside brackets,
/// braces, parentheses, literals and comments. A `,` inside type arguments
/// (`new HashMap<K, V>()`) does not separate declarators.
fn skip_initializer(src: &[char], start: usize) -> Initializer {
    let mut square = 0i32;
    let mut curly = 0i32;
    let mut round = 0i32;
    let mut angle = 0i32;
    let mut i = start;
    while let Some(&c) = src.get(i) {
        match c {
            '"' | '\'' => {
                i = skip_literal(src, i);
                continue;
            }
            '/' if matches!(src.get(i + 1), Some('/') | Some('*')) => {
                i = skip_comment(src, i);
                continue;
            }
            '[' => square += 1,
            ']' => square -= 1,
            '{' => curly += 1,
            '}' => curly -= 1,
            '(' => round += 1,
            ')' => round -= 1,
            '<' => angle += 1,
            '>' => angle = (angle - 1).max(0),
            ',' | ';' if square == 0 && curly == 0 && round == 0 => {
                if c == ';' {
                    return Initializer::End(i + 1);
                }
                if angle == 0 {
                    return Initializer::Separator(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    Initializer::Exhausted
}

fn starts_with(chars: &[char], word: &str) -> bool {
    let mut rest = chars.iter();
    word.chars().all(|w| rest.next() == Some(&w))
}

fn skip_whitespace(src: &[char], mut index: usize) -> usize {
    while src.get(index).is_some_and(|c| c.is_whitespace()) {
        index += 1;
    }
    index
}

/// Skip whitespace and comments. A `/` that starts no comment is skipped as well.
fn skip_trivia(src: &[char], mut index: usize) -> usize {
    loop {
        index = skip_whitespace(src, index);
        if src.get(index) == Some(&'/') {
            index = skip_comment(src, index);
        } else {
            return index;
        }
    }
}

/// `index` is at a `/`. Returns the position after the comment, or after the lone
/// `/`.
fn skip_comment(src: &[char], index: usize) -> usize {
    match src.get(index + 1) {
        Some('/') => src[index + 2..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(src.len(), |p| index + 2 + p + 1),
        Some('*') => {
            let mut i = index + 2;
            while i + 1 < src.len() {
                if src[i] == '*' && src[i + 1] == '/' {
                    return i + 2;
                }
                i += 1;
            }
            src.len()
        }
        _ => index + 1,
    }
}

/// `index` is at an opening quote. Returns the position after the closing quote,
/// honoring backslash escapes.
fn skip_literal(src: &[char], index: usize) -> usize {
    let quote = src[index];
    let mut i = index + 1;
    while let Some(&c) = src.get(i) {
        i += 1;
        if c == quote {
            return i;
        }
        if c == '\\' {
            i += 1;
        }
    }
    src.len()
}

/// `index` is at `open`. Returns the position after the matching `close`.
fn skip_brackets(src: &[char], index: usize, open: char, close: char) -> usize {
    let mut depth = 0i32;
    let mut i = index;
    while let Some(&c) = src.get(i) {
        match c {
            '/' => i = skip_comment(src, i),
            '"' | '\'' => i = skip_literal(src, i),
            _ => {
                if c == open {
                    depth += 1;
                } else if c == close {
                    depth -= 1;
                }
                i += 1;
            }
        }
        if depth <= 0 {
            return i;
        }
    }
    src.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Vec<Vec<String>> {
        Scanner::new(source).statements().map(|s| s.tokens).collect()
    }

    fn first(source: &str) -> Statement {
        Scanner::new(source).next_statement(0).unwrap().0
    }

    #[test]
    fn test_simple_statements() {
        assert_eq!(
            scan("package com.example; import java.util.List;"),
            vec![vec!["package", "com.example"], vec!["import", "java.util.List"]]
        );
    }

    #[test]
    fn test_comments_are_whitespace() {
        let statements = scan("// class Fake {}\nint /* class Fake {} */ x; /** doc */ long y;");
        assert_eq!(statements, vec![vec!["int", "x"], vec!["long", "y"]]);
    }

    #[test]
    fn test_block_is_skipped_and_reported() {
        let source = "class A { int x; } int y;";
        let (statement, next) = Scanner::new(source).next_statement(0).unwrap();
        assert_eq!(statement.tokens, ["class", "A"]);
        assert_eq!(statement.terminator, Terminator::Block { body_start: 9, end: 18 });
        assert_eq!(next, 18);

        let (rest, _) = Scanner::new(source).next_statement(next).unwrap();
        assert_eq!(rest.tokens, ["int", "y"]);
    }

    #[test]
    fn test_close_brace_ends_statement() {
        let (statement, next) = Scanner::new("  } int x;").next_statement(0).unwrap();
        assert!(statement.is_empty());
        assert_eq!(statement.terminator, Terminator::Close);
        assert_eq!(next, 3);
    }

    #[test]
    fn test_generics_stay_one_token() {
        assert_eq!(
            first("private Map<String, List<Integer>> index;").tokens,
            ["private", "Map<String,List<Integer>>", "index"]
        );
        assert_eq!(first("List<String>[] buckets;").tokens, ["List<String>[]", "buckets"]);
    }

    #[test]
    fn test_generic_type_lists_stay_joined() {
        assert_eq!(
            first("class A implements Comparable<A>, Serializable {}").tokens,
            ["class", "A", "implements", "Comparable<A>,Serializable"]
        );
    }

    #[test]
    fn test_method_type_parameters_are_separate_tokens() {
        assert_eq!(
            first("public <R> R map(Function<T, R> f) {}").tokens,
            ["public", "<R>", "R", "map", "(", "Function<T,R>", "f", ")"]
        );
        assert_eq!(
            first("public static<T extends Comparable<T>> T max(List<T> xs) {}").tokens,
            ["public", "static", "<T", "extends", "Comparable<T>>", "T", "max", "(", "List<T>", "xs", ")"]
        );
    }

    #[test]
    fn test_leading_type_parameters_keep_arguments_joined() {
        assert_eq!(
            first("<T> void f(Map<K, V> m, int x) {}").tokens,
            ["<T>", "void", "f", "(", "Map<K,V>", "m", "int", "x", ")"]
        );
    }

    #[test]
    fn test_array_suffixes() {
        assert_eq!(first("int x[];").tokens, ["int", "x[]"]);
        assert_eq!(first("String [] names;").tokens, ["String[]", "names"]);
    }

    #[test]
    fn test_declarator_list_joins_outside_parentheses() {
        assert_eq!(first("int a, b ,c;").tokens, ["int", "a,b,c"]);
    }

    #[test]
    fn test_parameters_split_inside_parentheses() {
        let statement = first("void put(String key, Map<K, V> value) throws IOException;");
        assert_eq!(
            statement.tokens,
            ["void", "put", "(", "String", "key", "Map<K,V>", "value", ")", "throws", "IOException"]
        );
    }

    #[test]
    fn test_varargs_glue() {
        assert_eq!(
            first("void run(String... args) {}").tokens,
            ["void", "run", "(", "String...args", ")"]
        );
    }

    #[test]
    fn test_initializer_is_skipped() {
        let statement = first("private final int a, b = compute(1, 2) + \";\";");
        assert_eq!(statement.tokens, ["private", "final", "int", "a,b"]);
        assert_eq!(statement.terminator, Terminator::Semicolon);
    }

    #[test]
    fn test_multiple_initializers() {
        assert_eq!(first("int a = 1, b = 2, c;").tokens, ["int", "a,b,c"]);
        assert_eq!(
            first("int[] a = {1, 2}, b = new int[] {3};").tokens,
            ["int[]", "a,b"]
        );
    }

    #[test]
    fn test_generic_constructor_in_initializer() {
        assert_eq!(
            first("Map<String, Integer> m = new HashMap<String, Integer>(), n;").tokens,
            ["Map<String,Integer>", "m,n"]
        );
    }

    #[test]
    fn test_lambda_in_initializer() {
        let statements = scan("Runnable r = () -> { go(); }; int x;");
        assert_eq!(statements, vec![vec!["Runnable", "r"], vec!["int", "x"]]);
    }

    #[test]
    fn test_string_literals_vanish() {
        let statements = scan("call(\"class Fake {}\", 'x', \"esc\\\"aped\"); int y;");
        assert_eq!(statements, vec![vec!["call"], vec!["int", "y"]]);
    }

    #[test]
    fn test_annotations_are_dropped() {
        assert_eq!(
            first("@Override @SuppressWarnings(\"unchecked\") public String toString() {}").tokens,
            ["public", "String", "toString", "(", ")"]
        );
        assert_eq!(
            first("void f(@NonNull String s) {}").tokens,
            ["void", "f", "(", "String", "s", ")"]
        );
    }

    #[test]
    fn test_enum_constants_with_arguments_collapse() {
        let statement = first("RED(255, 0, 0), GREEN(0, 255, 0), BLUE(0, 0, 255); private int r;");
        assert_eq!(statement.tokens, ["RED,GREEN,BLUE"]);
    }

    #[test]
    fn test_enum_constant_bodies_continue_statement() {
        let statement = first("PLUS { int apply() { return 1; } }, MINUS { int apply() { return 2; } };");
        assert_eq!(statement.tokens, ["PLUS,MINUS"]);
        assert_eq!(statement.terminator, Terminator::Semicolon);
    }

    #[test]
    fn test_static_initializer_is_a_block() {
        let statements: Vec<_> = Scanner::new("static { init(); } int x;").statements().collect();
        assert_eq!(statements[0].tokens, ["static"]);
        assert!(matches!(statements[0].terminator, Terminator::Block { .. }));
        assert_eq!(statements[1].tokens, ["int", "x"]);
    }

    #[test]
    fn test_call_collapses_to_single_token() {
        assert_eq!(first("System.out.println(x);").tokens, ["System.out.println"]);
        assert_eq!(first("builder.add(1).add(2);").tokens, ["builder.add.add"]);
    }

    #[test]
    fn test_control_statement_keeps_parentheses() {
        let statement = first("if (ready) return;");
        assert_eq!(statement.tokens, ["if", "(", "ready", ")", "return"]);
    }

    #[test]
    fn test_abstract_method_declaration_keeps_parentheses() {
        assert_eq!(
            first("int size();").tokens,
            ["int", "size", "(", ")"]
        );
    }

    #[test]
    fn test_labels() {
        let statements: Vec<_> = Scanner::new("case RED: x++; default: outer: y;")
            .statements()
            .collect();
        assert_eq!(statements[0].tokens, ["case", "RED"]);
        assert_eq!(statements[0].terminator, Terminator::Label);
        assert_eq!(statements[2].tokens, ["default"]);
        assert_eq!(statements[2].terminator, Terminator::Label);
        assert_eq!(statements[3].tokens, ["outer"]);
    }

    #[test]
    fn test_ternary_colon_does_not_end_statement() {
        let statements = scan("return ready ? a : b; int z;");
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1], ["int", "z"]);
    }

    #[test]
    fn test_for_header_is_one_statement() {
        let statement = first("for (int i = 0; i < n; i++) { total += i; }");
        assert_eq!(statement.first(), Some("for"));
        assert!(matches!(statement.terminator, Terminator::Block { .. }));
    }

    #[test]
    fn test_unterminated_input_runs_to_end() {
        assert!(Scanner::new("int x").next_statement(0).is_none());
        assert!(Scanner::new("/* never closed").next_statement(0).is_none());
        let (statement, next) = Scanner::new("class A { int x;").next_statement(0).unwrap();
        assert_eq!(statement.tokens, ["class", "A"]);
        assert_eq!(next, 16);
        let (statement, _) = Scanner::new("String s = \"open").next_statement(0).unwrap();
        assert_eq!(statement.terminator, Terminator::EndOfInput);
    }

    #[test]
    fn test_division_is_not_a_comment() {
        assert_eq!(scan("int ratio = a / b; int c;")[1], ["int", "c"]);
    }
}
