//! Expression rules: conditions, the additive/multiplicative precedence
//! chain (`expressao` → `termo` → `fator`), and number literals.
//!
//! P‑‑ has no operator-precedence climbing to do at parse time — the
//! grammar already encodes `*`/`/` binding tighter than `+`/`-` through
//! the `termo`/`fator` nesting, so each rule here just follows its
//! production in order.

use pmmc_lex::TokenClass;

use crate::Parser;

/// `FIRST(fator)`: an identifier, a number, or a parenthesized sub-expression.
const FACTOR_STARTERS: [TokenClass; 4] = [
    TokenClass::Id,
    TokenClass::NInteger,
    TokenClass::NReal,
    TokenClass::OpenPar,
];

/// `FIRST(termo)`: `fator`'s starters, plus a leading unary sign.
const TERM_STARTERS: [TokenClass; 5] = [
    TokenClass::OpUn,
    TokenClass::Id,
    TokenClass::NInteger,
    TokenClass::NReal,
    TokenClass::OpenPar,
];

impl<'a> Parser<'a> {
    /// `condicao ::= expressao relacao expressao`
    pub(crate) fn parse_condition(&mut self) {
        self.descend();
        if !self.call(&[TokenClass::Relation], Self::parse_expression) {
            self.ascend();
            return;
        }
        if !self.call(&TERM_STARTERS, Self::parse_relation) {
            self.ascend();
            return;
        }
        self.call(&[], Self::parse_expression);
        self.ascend();
    }

    /// `relacao ::= RELATION`
    pub(crate) fn parse_relation(&mut self) {
        self.descend();
        self.expect(TokenClass::Relation, "relational operator", &TERM_STARTERS);
        self.ascend();
    }

    /// `expressao ::= termo outros_termos`
    pub(crate) fn parse_expression(&mut self) {
        self.descend();
        if !self.call(&[TokenClass::OpAdd], Self::parse_term) {
            self.ascend();
            return;
        }
        self.call(&[], Self::parse_more_terms);
        self.ascend();
    }

    /// `op_un ::= + | - | λ` — never mismatches, since every call site
    /// only reaches this rule at a position where `FIRST(termo)` already
    /// holds; there is nothing to recover from.
    pub(crate) fn parse_unary_sign(&mut self) {
        self.descend();
        if self.current.class == TokenClass::OpUn {
            self.bump();
        }
        self.ascend();
    }

    /// `outros_termos ::= op_ad termo outros_termos | λ`
    pub(crate) fn parse_more_terms(&mut self) {
        self.descend();
        if self.current.class == TokenClass::OpAdd {
            if !self.call(&TERM_STARTERS, Self::parse_add_op) {
                self.ascend();
                return;
            }
            if !self.call(&[TokenClass::OpAdd], Self::parse_term) {
                self.ascend();
                return;
            }
            self.call(&[], Self::parse_more_terms);
        }
        self.ascend();
    }

    /// `op_ad ::= + | -`
    pub(crate) fn parse_add_op(&mut self) {
        self.descend();
        self.expect(TokenClass::OpAdd, "+ or -", &TERM_STARTERS);
        self.ascend();
    }

    /// `termo ::= op_un fator mais_fatores`
    pub(crate) fn parse_term(&mut self) {
        self.descend();
        self.call(&FACTOR_STARTERS, Self::parse_unary_sign);
        if !self.call(&[TokenClass::OpMult], Self::parse_factor) {
            self.ascend();
            return;
        }
        self.call(&[], Self::parse_more_factors);
        self.ascend();
    }

    /// `mais_fatores ::= op_mul fator mais_fatores | λ`
    pub(crate) fn parse_more_factors(&mut self) {
        self.descend();
        if self.current.class == TokenClass::OpMult {
            if !self.call(&FACTOR_STARTERS, Self::parse_mul_op) {
                self.ascend();
                return;
            }
            if !self.call(&[TokenClass::OpMult], Self::parse_factor) {
                self.ascend();
                return;
            }
            self.call(&[], Self::parse_more_factors);
        }
        self.ascend();
    }

    /// `op_mul ::= * | /`
    pub(crate) fn parse_mul_op(&mut self) {
        self.descend();
        self.expect(TokenClass::OpMult, "* or /", &FACTOR_STARTERS);
        self.ascend();
    }

    /// `fator ::= ident | numero | ( expressao )`
    pub(crate) fn parse_factor(&mut self) {
        self.descend();
        match self.current.class {
            TokenClass::Id => self.bump(),
            TokenClass::NInteger | TokenClass::NReal => {
                self.call(&[], Self::parse_number);
            }
            TokenClass::OpenPar => {
                self.bump();
                if self.call(&[TokenClass::ClosePar], Self::parse_expression) {
                    self.expect(TokenClass::ClosePar, ")", &[]);
                }
            }
            _ => {
                self.panic_mode("identifier, number, or (", &[]);
            }
        }
        self.ascend();
    }

    /// `numero ::= N_INTEGER | N_REAL`
    pub(crate) fn parse_number(&mut self) {
        self.descend();
        match self.current.class {
            TokenClass::NInteger | TokenClass::NReal => self.bump(),
            _ => {
                self.panic_mode("number", &[]);
            }
        }
        self.ascend();
    }
}
