//! Declaration rules: `dc`, the constant/variable/procedure declaration
//! chains, parameter lists, and the procedure body wrapper `corpo_p`.

use pmmc_lex::TokenClass;

use crate::Parser;

impl<'a> Parser<'a> {
    /// `dc ::= dc_c dc_v dc_p`
    pub(crate) fn parse_declarations(&mut self) {
        self.descend();
        if !self.call(
            &[TokenClass::Var, TokenClass::Procedure, TokenClass::Begin],
            Self::parse_const_decls,
        ) {
            self.ascend();
            return;
        }
        if !self.call(&[TokenClass::Procedure, TokenClass::Begin], Self::parse_var_decls) {
            self.ascend();
            return;
        }
        self.call(&[TokenClass::Begin], Self::parse_proc_decls);
        self.ascend();
    }

    /// `dc_c ::= const ident = numero ; dc_c | λ`
    pub(crate) fn parse_const_decls(&mut self) {
        self.descend();
        if self.current.class == TokenClass::Const {
            self.bump();
            if !self.expect(
                TokenClass::Id,
                "identifier",
                &[TokenClass::Var, TokenClass::Procedure, TokenClass::Begin],
            ) {
                self.ascend();
                return;
            }
            if !self.expect_literal_equals(&[TokenClass::NInteger, TokenClass::NReal, TokenClass::Semicolon]) {
                self.ascend();
                return;
            }
            if !self.call(&[TokenClass::Semicolon], Self::parse_number) {
                self.ascend();
                return;
            }
            if !self.expect(
                TokenClass::Semicolon,
                ";",
                &[TokenClass::Const, TokenClass::Var, TokenClass::Procedure, TokenClass::Begin],
            ) {
                self.ascend();
                return;
            }
            self.call(&[], Self::parse_const_decls);
        }
        self.ascend();
    }

    /// `dc_v ::= var variaveis : tipo_var ; dc_v | λ`
    ///
    /// Shared by two call sites (`dc` and `dc_loc`) with different follow
    /// contexts (`{Procedure, Begin}` vs. just `{Begin}`); the caller is
    /// responsible for pushing the right set before invoking this rule.
    pub(crate) fn parse_var_decls(&mut self) {
        self.descend();
        if self.current.class == TokenClass::Var {
            self.bump();
            if !self.call(&[TokenClass::DeclareType], Self::parse_variables) {
                self.ascend();
                return;
            }
            if !self.expect(
                TokenClass::DeclareType,
                ":",
                &[TokenClass::Real, TokenClass::Integer, TokenClass::Semicolon],
            ) {
                self.ascend();
                return;
            }
            if !self.call(&[TokenClass::Semicolon], Self::parse_var_type) {
                self.ascend();
                return;
            }
            if !self.expect(
                TokenClass::Semicolon,
                ";",
                &[TokenClass::Var, TokenClass::Procedure, TokenClass::Begin],
            ) {
                self.ascend();
                return;
            }
            self.call(&[], Self::parse_var_decls);
        }
        self.ascend();
    }

    /// `dc_loc ::= dc_v` — a pure pass-through kept as its own rule so
    /// `corpo_p` registers only `Begin` as the follower in its context.
    pub(crate) fn parse_local_decls(&mut self) {
        self.descend();
        self.call(&[], Self::parse_var_decls);
        self.ascend();
    }

    /// `tipo_var ::= real | integer`
    pub(crate) fn parse_var_type(&mut self) {
        self.descend();
        match self.current.class {
            TokenClass::Real | TokenClass::Integer => self.bump(),
            _ => {
                self.panic_mode("type specifier", &[]);
            }
        }
        self.ascend();
    }

    /// `variaveis ::= ident mais_var`
    pub(crate) fn parse_variables(&mut self) {
        self.descend();
        if self.expect(
            TokenClass::Id,
            "identifier",
            &[TokenClass::Colon, TokenClass::DeclareType, TokenClass::ClosePar],
        ) {
            self.call(&[TokenClass::DeclareType, TokenClass::ClosePar], Self::parse_more_variables);
        }
        self.ascend();
    }

    /// `mais_var ::= , variaveis | λ`
    pub(crate) fn parse_more_variables(&mut self) {
        self.descend();
        if self.current.class == TokenClass::Colon {
            self.bump();
            self.call(&[TokenClass::DeclareType, TokenClass::ClosePar], Self::parse_variables);
        }
        self.ascend();
    }

    /// `dc_p ::= procedure ident parametros ; corpo_p dc_p | λ`
    pub(crate) fn parse_proc_decls(&mut self) {
        self.descend();
        if self.current.class == TokenClass::Procedure {
            self.bump();
            if !self.expect(TokenClass::Id, "identifier", &[TokenClass::OpenPar, TokenClass::Semicolon]) {
                self.ascend();
                return;
            }
            if !self.call(&[TokenClass::Semicolon], Self::parse_parameters) {
                self.ascend();
                return;
            }
            if !self.expect(TokenClass::Semicolon, ";", &[TokenClass::Var, TokenClass::Begin]) {
                self.ascend();
                return;
            }
            if !self.call(&[TokenClass::Procedure, TokenClass::Begin], Self::parse_proc_body) {
                self.ascend();
                return;
            }
            self.call(&[], Self::parse_proc_decls);
        }
        self.ascend();
    }

    /// `parametros ::= ( lista_par ) | λ`
    pub(crate) fn parse_parameters(&mut self) {
        self.descend();
        if self.current.class == TokenClass::OpenPar {
            self.bump();
            if self.call(&[TokenClass::ClosePar], Self::parse_param_list) {
                self.expect(TokenClass::ClosePar, ")", &[TokenClass::Semicolon]);
            }
        }
        self.ascend();
    }

    /// `lista_par ::= variaveis : tipo_var mais_par`
    pub(crate) fn parse_param_list(&mut self) {
        self.descend();
        if !self.call(&[TokenClass::DeclareType], Self::parse_variables) {
            self.ascend();
            return;
        }
        if !self.expect(
            TokenClass::DeclareType,
            ":",
            &[TokenClass::Real, TokenClass::Integer, TokenClass::Semicolon, TokenClass::ClosePar],
        ) {
            self.ascend();
            return;
        }
        if !self.call(&[TokenClass::Semicolon, TokenClass::ClosePar], Self::parse_var_type) {
            self.ascend();
            return;
        }
        self.call(&[], Self::parse_more_params);
        self.ascend();
    }

    /// `mais_par ::= ; lista_par | λ`
    pub(crate) fn parse_more_params(&mut self) {
        self.descend();
        if self.current.class == TokenClass::Semicolon {
            self.bump();
            self.call(&[], Self::parse_param_list);
        }
        self.ascend();
    }

    /// `corpo_p ::= dc_loc begin comandos end ;`
    pub(crate) fn parse_proc_body(&mut self) {
        self.descend();
        if !self.call(&[TokenClass::Begin], Self::parse_local_decls) {
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
        if !self.expect(TokenClass::End, "end", &[TokenClass::Semicolon]) {
            self.ascend();
            return;
        }
        self.expect(TokenClass::Semicolon, ";", &[]);
        self.ascend();
    }
}

#[cfg(test)]
mod tests {
    use pmmc_util::Handler;

    use crate::Parser;

    fn compile(source: &str) -> Handler {
        let handler = Handler::new();
        let lexer = pmmc_lex::Lexer::new(source.as_bytes());
        let mut parser = Parser::new(lexer, &handler);
        parser.compile();
        handler
    }

    #[test]
    fn const_and_var_and_procedure_decls_compile_clean() {
        let source = "program p;\n\
             const limit = 10;\n\
             var x, y : integer;\n\
             var z : real;\n\
             procedure helper(a : integer; b : real);\n\
             var local : integer;\n\
             begin\n\
             end;\n\
             begin\n\
             end.";
        let handler = compile(source);
        assert_eq!(handler.error_count(), 0, "{:?}", handler.diagnostics());
    }

    #[test]
    fn procedure_with_no_parameters_compiles_clean() {
        let source = "program p;\nprocedure helper;\nbegin\nend;\nbegin\nend.";
        let handler = compile(source);
        assert_eq!(handler.error_count(), 0, "{:?}", handler.diagnostics());
    }

    #[test]
    fn bad_type_specifier_reports_error() {
        let source = "program p;\nvar x : nonsense;\nbegin\nend.";
        let handler = compile(source);
        assert!(handler.error_count() >= 1);
        assert!(handler.diagnostics()[0].message.contains("type specifier"));
    }

    #[test]
    fn const_requires_literal_equals_not_other_relations() {
        let source = "program p;\nconst limit <> 10;\nbegin\nend.";
        let handler = compile(source);
        assert!(handler.error_count() >= 1);
        assert!(handler.diagnostics()[0].message.contains("expected ="));
    }

    /// `variaveis`'s own sync set now matches parser.c:365-367's
    /// `PANICMODE(ID, COLON, DECLARE_TYPE, CLOSE_PAR)`: a missing parameter
    /// name is reported once and parsing picks back up at the `:` that
    /// follows, instead of the stale two-class set cascading the failure
    /// further down the rule chain.
    #[test]
    fn missing_parameter_name_resyncs_at_close_paren() {
        let source = "program p;\nprocedure helper(: integer);\nbegin\nend;\nbegin\nend.";
        let handler = compile(source);
        assert_eq!(handler.error_count(), 1, "{:?}", handler.diagnostics());
        assert!(handler.diagnostics()[0].message.contains("expected identifier"));
    }
}
