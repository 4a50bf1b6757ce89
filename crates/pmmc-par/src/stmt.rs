//! Statement rules: the seven `cmd` alternatives, the `pos_ident`
//! lookahead between assignment and procedure call, and the
//! `else`/argument-list tails that hang off them.

use pmmc_lex::TokenClass;

use crate::Parser;

/// `FIRST(condicao)` / `FIRST(expressao)`: a condition or expression can
/// start with a unary sign, an identifier, a number literal, or `(`.
const EXPR_STARTERS: [TokenClass; 5] = [
    TokenClass::OpUn,
    TokenClass::Id,
    TokenClass::NInteger,
    TokenClass::NReal,
    TokenClass::OpenPar,
];

impl<'a> Parser<'a> {
    /// `comandos ::= cmd ; comandos | λ`
    pub(crate) fn parse_commands(&mut self) {
        self.descend();
        if Self::is_command_start(self.current.class) {
            let mut followers = Self::COMMAND_STARTERS.to_vec();
            followers.push(TokenClass::End);
            if !self.call(&[TokenClass::Semicolon], Self::parse_command) {
                self.ascend();
                return;
            }
            if !self.expect(TokenClass::Semicolon, ";", &followers) {
                self.ascend();
                return;
            }
            self.call(&[], Self::parse_commands);
        }
        self.ascend();
    }

    /// Required `cmd` position (spec.md §4.4's `COMMAND` pseudo-expected):
    /// every call site that needs a `cmd` — as opposed to `comandos`'s own
    /// epsilon test — goes through here rather than invoking
    /// [`Parser::parse_command`] directly, so a non-starter token enters
    /// panic mode instead of reaching `parse_command`'s unconditional
    /// dispatch.
    fn expect_command(&mut self, local: &[TokenClass]) -> bool {
        if Self::is_command_start(self.current.class) {
            self.call(local, Self::parse_command)
        } else {
            self.panic_mode("command", local)
        }
    }

    /// `cmd` — the seven command alternatives. Only reached through
    /// [`Parser::parse_commands`]'s own `FIRST(cmd)` test or
    /// [`Parser::expect_command`], both of which confirm
    /// [`Parser::is_command_start`] first, so every arm here is reachable
    /// and the match needs no recovery arm of its own.
    pub(crate) fn parse_command(&mut self) {
        self.descend();
        match self.current.class {
            TokenClass::Read => {
                self.bump();
                if self.expect(TokenClass::OpenPar, "(", &[TokenClass::Id]) {
                    if self.call(&[TokenClass::ClosePar], Self::parse_variables) {
                        self.expect(TokenClass::ClosePar, ")", &[]);
                    }
                }
            }
            TokenClass::Write => {
                self.bump();
                if self.expect(TokenClass::OpenPar, "(", &[TokenClass::Id]) {
                    if self.call(&[TokenClass::ClosePar], Self::parse_variables) {
                        self.expect(TokenClass::ClosePar, ")", &[]);
                    }
                }
            }
            TokenClass::While => {
                self.bump();
                if !self.expect(TokenClass::OpenPar, "(", &EXPR_STARTERS) {
                    self.ascend();
                    return;
                }
                if !self.call(&[TokenClass::ClosePar], Self::parse_condition) {
                    self.ascend();
                    return;
                }
                if !self.expect(TokenClass::ClosePar, ")", &[TokenClass::Do]) {
                    self.ascend();
                    return;
                }
                if !self.expect(TokenClass::Do, "do", &Self::COMMAND_STARTERS) {
                    self.ascend();
                    return;
                }
                self.expect_command(&[]);
            }
            TokenClass::If => {
                self.bump();
                if !self.call(&[TokenClass::Then], Self::parse_condition) {
                    self.ascend();
                    return;
                }
                if !self.expect(TokenClass::Then, "then", &Self::COMMAND_STARTERS) {
                    self.ascend();
                    return;
                }
                if !self.expect_command(&[TokenClass::Else]) {
                    self.ascend();
                    return;
                }
                self.call(&[], Self::parse_else_branch);
            }
            TokenClass::For => {
                self.bump();
                if !self.expect(TokenClass::Id, "identifier", &[TokenClass::Assign]) {
                    self.ascend();
                    return;
                }
                if !self.expect(TokenClass::Assign, ":=", &EXPR_STARTERS) {
                    self.ascend();
                    return;
                }
                if !self.call(&[TokenClass::To], Self::parse_expression) {
                    self.ascend();
                    return;
                }
                if !self.expect(TokenClass::To, "to", &EXPR_STARTERS) {
                    self.ascend();
                    return;
                }
                if !self.call(&[TokenClass::Do], Self::parse_expression) {
                    self.ascend();
                    return;
                }
                if !self.expect(TokenClass::Do, "do", &Self::COMMAND_STARTERS) {
                    self.ascend();
                    return;
                }
                self.expect_command(&[]);
            }
            TokenClass::Id => {
                self.bump();
                self.call(&[], Self::parse_after_ident);
            }
            TokenClass::Begin => {
                self.bump();
                if self.call(&[TokenClass::End], Self::parse_commands) {
                    self.expect(TokenClass::End, "end", &[]);
                }
            }
            _ => unreachable!("parse_command is only called when is_command_start holds"),
        }
        self.ascend();
    }

    /// `pos_ident ::= := expressao | lista_arg`
    pub(crate) fn parse_after_ident(&mut self) {
        self.descend();
        if self.current.class == TokenClass::Assign {
            self.bump();
            self.call(&[], Self::parse_expression);
        } else {
            self.call(&[], Self::parse_arg_list);
        }
        self.ascend();
    }

    /// `pfalsa ::= else cmd | λ`
    pub(crate) fn parse_else_branch(&mut self) {
        self.descend();
        if self.current.class == TokenClass::Else {
            self.bump();
            self.expect_command(&[]);
        }
        self.ascend();
    }

    /// `lista_arg ::= ( argumentos ) | λ`
    pub(crate) fn parse_arg_list(&mut self) {
        self.descend();
        if self.current.class == TokenClass::OpenPar {
            self.bump();
            if self.call(&[TokenClass::ClosePar], Self::parse_arguments) {
                self.expect(TokenClass::ClosePar, ")", &[]);
            }
        }
        self.ascend();
    }

    /// `argumentos ::= ident mais_ident`
    pub(crate) fn parse_arguments(&mut self) {
        self.descend();
        if self.expect(TokenClass::Id, "identifier", &[TokenClass::Semicolon]) {
            self.call(&[], Self::parse_more_idents);
        }
        self.ascend();
    }

    /// `mais_ident ::= ; argumentos | λ`
    pub(crate) fn parse_more_idents(&mut self) {
        self.descend();
        if self.current.class == TokenClass::Semicolon {
            self.bump();
            self.call(&[], Self::parse_arguments);
        }
        self.ascend();
    }
}
