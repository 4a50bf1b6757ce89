//! pmmc-par — the P‑‑ recursive-descent parser.
//!
//! One method per grammar non-terminal, panic-mode error recovery driven
//! by a per-token-class [`SyncStack`] vector (`pmmc_util::SyncStack`).
//! Every rule follows the same shape (spec.md §4.4):
//!
//! 1. `descend()` — bump every sync stack, we're one level deeper.
//! 2. Match the rule's terminals/non-terminals in sequence, using
//!    [`Parser::expect`] for a required terminal and [`Parser::call`] for
//!    a non-terminal; either can trigger panic mode and signal that the
//!    rest of this rule's body should be skipped.
//! 3. `ascend()` — undo step 1, on every exit path.
//!
//! `panic_mode` and `call` are the non-macro re-architecture of the
//! original PANIC-MODE/NEXT-RULE: a `bool` return value in place of the
//! C version's early-`return`-from-macro, checked by the caller via a
//! plain `if !...`.

mod expr;
mod items;
mod stmt;

use pmmc_lex::{Lexer, Token, TokenClass};
use pmmc_util::{Handler, Span, SyncStack};

/// Drives one compilation: owns the lexer, the current lookahead token,
/// and the per-class synchronization stacks. Diagnostics are reported
/// through the shared [`Handler`] (also used directly by the lexer), so
/// lexical and syntactic errors interleave in source order automatically.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    handler: &'a Handler,
    current: Token,
    sync: Vec<SyncStack>,
    panic: bool,
    tokens: Vec<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>, handler: &'a Handler) -> Self {
        Self {
            lexer,
            handler,
            current: Token::lambda(1, 1),
            sync: (0..TokenClass::COUNT).map(|_| SyncStack::new()).collect(),
            panic: false,
            tokens: Vec::new(),
        }
    }

    /// Every token the lexer produced during this compilation, in source
    /// order, including the terminating `Lambda` — exactly the sequence
    /// `tokenOutput.txt` needs (spec.md §6), since the parser is the
    /// lexer's sole caller and records each token as it fetches it.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Runs the driver's top-level compile step (spec.md §4.4 "Top-level
    /// compile"): prime the first token, register the top-level `Lambda`
    /// follower, invoke `programa`, then check the stream actually ended.
    pub fn compile(&mut self) {
        self.bump();
        self.sync[TokenClass::Lambda.index()].push();
        self.parse_program();
        self.sync[TokenClass::Lambda.index()].pop();
        if self.current.class != TokenClass::Lambda {
            self.report_expected("end of input");
        }
    }

    /// Fetches the next token from the lexer, logging it for
    /// `tokenOutput.txt` before it becomes the new lookahead. Every path
    /// that advances past `self.current` — normal matches and panic
    /// mode's skip loop alike — goes through this one method, so the
    /// logged sequence is exactly what the lexer produced.
    fn bump(&mut self) {
        let token = self.lexer.next_token(self.handler);
        self.tokens.push(token.clone());
        self.current = token;
    }

    fn descend(&mut self) {
        for stack in &mut self.sync {
            stack.add_all(1);
        }
    }

    fn ascend(&mut self) {
        for stack in &mut self.sync {
            stack.add_all(-1);
        }
    }

    fn push_sync(&mut self, classes: &[TokenClass]) {
        for &class in classes {
            self.sync[class.index()].push();
        }
    }

    fn pop_sync(&mut self, classes: &[TokenClass]) {
        for &class in classes {
            self.sync[class.index()].pop();
        }
    }

    fn token_span(&self) -> Span {
        Span::point(self.current.line, self.current.column)
    }

    fn report_expected(&mut self, expected: &str) {
        let span = self.token_span();
        if self.current.class == TokenClass::Lambda {
            self.handler.parser_error_eof(span, expected);
        } else {
            self.handler.parser_error(span, expected, &self.current.lexeme);
        }
    }

    /// PANIC-MODE: report the mismatch, register `local` as additional
    /// synchronization points for the duration of the recovery search,
    /// then discard tokens until the current one is a live sync point for
    /// some rule on the call chain (spec.md §4.4). Returns `true` if the
    /// sync point belongs to *this* rule (`level == 0`, so the caller
    /// should keep executing its own body) or `false` if it belongs to an
    /// ancestor (`level > 0`, so the caller must unwind).
    fn panic_mode(&mut self, expected: &str, local: &[TokenClass]) -> bool {
        self.report_expected(expected);
        self.push_sync(local);
        self.panic = true;
        while self.sync[self.current.class.index()].peek() < 0
            && self.current.class != TokenClass::Lambda
        {
            self.bump();
        }
        let level = self.sync[self.current.class.index()].peek();
        self.pop_sync(local);
        if level > 0 {
            false
        } else {
            self.panic = false;
            true
        }
    }

    /// Matches a required terminal, consuming it on success. On mismatch,
    /// enters panic mode with `local` pushed as extra synchronization
    /// points specific to this match site (on top of whatever an
    /// enclosing [`Parser::call`] already pushed).
    fn expect(&mut self, class: TokenClass, friendly: &str, local: &[TokenClass]) -> bool {
        if self.current.class == class {
            self.bump();
            true
        } else {
            self.panic_mode(friendly, local)
        }
    }

    /// `dc_c`'s `=` check (spec.md §4.4): the lexer classifies a bare `=`
    /// as `RELATION` (it covers six spellings), so this compares the
    /// lexeme against the literal byte `"="` instead of testing the
    /// token class, exactly as spec.md's resolved Open Question demands —
    /// no generalization to other `RELATION` spellings.
    fn expect_literal_equals(&mut self, local: &[TokenClass]) -> bool {
        if self.current.class == TokenClass::Relation && self.current.lexeme == "=" {
            self.bump();
            true
        } else {
            self.panic_mode("=", local)
        }
    }

    /// NEXT-RULE: push `local` as synchronization points around a
    /// non-terminal's entire invocation, call it, then inspect whether
    /// panic mode is still active and — if so — whether the token that
    /// stopped it belongs to an ancestor (`level > 0`, unwind) or to this
    /// call site itself (`level <= 0`, clear `panic` and keep going).
    fn call(&mut self, local: &[TokenClass], rule: impl FnOnce(&mut Self)) -> bool {
        self.push_sync(local);
        rule(self);
        let cont = if self.panic {
            if self.sync[self.current.class.index()].peek() > 0 {
                false
            } else {
                self.panic = false;
                true
            }
        } else {
            true
        };
        self.pop_sync(local);
        cont
    }

    /// `programa ::= program ident ; corpo .`
    fn parse_program(&mut self) {
        self.descend();
        if !self.expect(
            TokenClass::Program,
            "program",
            &[TokenClass::Id, TokenClass::Semicolon, TokenClass::Begin, TokenClass::Dot],
        ) {
            self.ascend();
            return;
        }
        if !self.expect(
            TokenClass::Id,
            "identifier",
            &[TokenClass::Semicolon, TokenClass::Begin, TokenClass::Dot],
        ) {
            self.ascend();
            return;
        }
        if !self.expect(
            TokenClass::Semicolon,
            ";",
            &[TokenClass::Const, TokenClass::Var, TokenClass::Procedure, TokenClass::Begin, TokenClass::Dot],
        ) {
            self.ascend();
            return;
        }
        if !self.call(&[TokenClass::Dot], Self::parse_body) {
            self.ascend();
            return;
        }
        self.expect(TokenClass::Dot, ".", &[]);
        self.ascend();
    }

    const COMMAND_STARTERS: [TokenClass; 7] = [
        TokenClass::Read,
        TokenClass::Write,
        TokenClass::While,
        TokenClass::If,
        TokenClass::For,
        TokenClass::Id,
        TokenClass::Begin,
    ];

    /// `corpo ::= dc begin comandos end`
    fn parse_body(&mut self) {
        self.descend();
        if !self.call(&[TokenClass::Begin], Self::parse_declarations) {
            self.ascend();
            return;
        }
        let mut begin_followers = Self::COMMAND_STARTERS.to_vec();
        begin_followers.push(TokenClass::End);
        if !self.expect(TokenClass::Begin, "begin", &begin_followers) {
            self.ascend();
            return;
        }
        if !self.call(&[TokenClass::End], Self::parse_commands) {
            self.ascend();
            return;
        }
        self.expect(TokenClass::End, "end", &[TokenClass::Dot]);
        self.ascend();
    }

    fn is_command_start(class: TokenClass) -> bool {
        Self::COMMAND_STARTERS.contains(&class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(source: &str) -> (Handler, Vec<Token>) {
        let handler = Handler::new();
        let lexer = Lexer::new(source.as_bytes());
        let mut parser = Parser::new(lexer, &handler);
        parser.compile();
        let tokens = parser.tokens().to_vec();
        (handler, tokens)
    }

    /// S1: minimal program compiles with zero errors.
    #[test]
    fn minimal_program_compiles_clean() {
        let (handler, tokens) = compile("program p;\nbegin\nend.");
        assert_eq!(handler.error_count(), 0, "{:?}", handler.diagnostics());
        assert_eq!(tokens.last().unwrap().class, TokenClass::Lambda);
    }

    /// S4: a missing `;` before `begin` is reported once, then recovery
    /// resumes and the rest of the (otherwise valid) program compiles
    /// clean.
    #[test]
    fn missing_semicolon_recovers_with_one_error() {
        let source = "program p;\nvar x : integer\nbegin\nend.";
        let (handler, _tokens) = compile(source);
        assert_eq!(handler.error_count(), 1, "{:?}", handler.diagnostics());
        assert!(handler.diagnostics()[0].message.contains("expected ;"));
    }

    #[test]
    fn trailing_garbage_after_dot_is_reported() {
        let source = "program p;\nbegin\nend. garbage";
        let (handler, _tokens) = compile(source);
        assert_eq!(handler.error_count(), 1);
        assert!(handler.diagnostics()[0].message.contains("end of input"));
    }

    #[test]
    fn missing_program_keyword_still_terminates() {
        let (handler, tokens) = compile("p;\nbegin\nend.");
        assert!(handler.error_count() >= 1);
        assert_eq!(tokens.last().unwrap().class, TokenClass::Lambda);
    }

    #[test]
    fn sync_stacks_are_empty_after_clean_compile() {
        let handler = Handler::new();
        let lexer = Lexer::new(b"program p;\nbegin\nend.");
        let mut parser = Parser::new(lexer, &handler);
        parser.compile();
        assert!(parser.sync.iter().all(SyncStack::is_empty));
    }
}
