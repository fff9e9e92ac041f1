//! Grammatical contexts tracked while scanning.
//!
//! Each [`LexState`] names a position in the grammar and owns the set of
//! token kinds admissible there. The lexer feeds every token it produces
//! through [`Machine::accept`], which rejects inadmissible tokens and moves
//! to the next state. Parentheses are tracked on a frame stack only to know
//! what kind of list we are in; balance is left to the parser.

use crate::error::SyntaxError;
use crate::token::{Token, TokenKind};

use TokenKind::*;

/// What a token does beyond its kind, decided by the lexer's lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Plain,
    /// String immediately followed by a FIQL comparison
    Field,
    /// Operator produced from FIQL sugar (`=eq=`, `<=`, ...)
    FiqlOperator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexState {
    /// Start of input, after a top-level `&`/`|`, inside a group
    ExpressionStart,
    AfterOperator,
    AfterField,
    AfterFiqlOperator,
    /// Inside an operator's argument list or a list nested in one
    Arguments,
    /// Inside a FIQL array value, `a=in=(1,2)`
    Array,
    AfterSign,
    AfterType,
    AfterTypeColon,
    /// A complete top-level expression has been read
    AfterExpression,
}

const SCALARS: [TokenKind; 9] = [String, Integer, Float, Date, Glob, Null, True, False, Empty];

impl LexState {
    /// Kinds admissible for plain tokens. Fields and FIQL operators are
    /// admitted separately, see [`LexState::admits`].
    pub(crate) fn admissible(self) -> &'static [TokenKind] {
        match self {
            LexState::ExpressionStart => &[Operator, OpenParenthesis],
            LexState::AfterOperator => &[OpenParenthesis],
            LexState::AfterField => &[],
            LexState::AfterFiqlOperator => &[
                String, Integer, Float, Date, Glob, Null, True, False, Empty, Type,
                OpenParenthesis,
            ],
            LexState::Arguments => &[
                String, Integer, Float, Date, Glob, Null, True, False, Empty, Type, Operator,
                OpenParenthesis, CloseParenthesis, Comma, Ampersand, VerticalBar, Plus, Minus,
            ],
            LexState::Array => &[
                String, Integer, Float, Date, Glob, Null, True, False, Empty, Type, Comma,
                CloseParenthesis,
            ],
            LexState::AfterSign => &[String],
            LexState::AfterType => &[Colon],
            LexState::AfterTypeColon => &SCALARS,
            LexState::AfterExpression => &[Ampersand, VerticalBar, CloseParenthesis],
        }
    }

    pub(crate) fn admits(self, kind: TokenKind, role: Role) -> bool {
        match role {
            Role::Field => {
                kind == String && matches!(self, LexState::ExpressionStart | LexState::Arguments)
            }
            Role::FiqlOperator => kind == Operator && self == LexState::AfterField,
            Role::Plain => self.admissible().contains(&kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// `(` opening a logical group at expression start
    Group,
    /// `(` right after an operator name
    Arguments,
    /// `(` inside an argument list: an array or a group, we cannot tell
    Nested,
    /// `(` after a FIQL operator
    Array,
}

#[derive(Debug)]
pub(crate) struct Machine {
    state: LexState,
    frames: Vec<Frame>,
}

impl Machine {
    pub(crate) fn new() -> Self {
        Machine {
            state: LexState::ExpressionStart,
            frames: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> LexState {
        self.state
    }

    /// Checks `token` against the current state and transitions past it.
    pub(crate) fn accept(&mut self, token: &Token, role: Role) -> Result<(), SyntaxError> {
        let kind = token.kind();
        if !self.admits(kind, role) {
            return Err(SyntaxError::from(token));
        }

        self.state = match (kind, role) {
            (String, Role::Field) => LexState::AfterField,
            (Operator, Role::FiqlOperator) => LexState::AfterFiqlOperator,
            (Operator, _) => LexState::AfterOperator,
            (OpenParenthesis, _) => self.open(),
            (CloseParenthesis, _) => {
                self.frames.pop();
                self.after_value()
            }
            (Comma, _) => self.state,
            (Ampersand | VerticalBar, _) => match self.state {
                LexState::AfterExpression => LexState::ExpressionStart,
                state => state,
            },
            (Plus | Minus, _) => LexState::AfterSign,
            (Type, _) => LexState::AfterType,
            (Colon, _) => LexState::AfterTypeColon,
            _ => self.after_value(),
        };
        Ok(())
    }

    /// A cast takes a signed string wherever the enclosing list would.
    fn admits(&self, kind: TokenKind, role: Role) -> bool {
        match (self.state, kind) {
            (LexState::AfterTypeColon, Plus | Minus) => self.after_value() == LexState::Arguments,
            (state, _) => state.admits(kind, role),
        }
    }

    fn open(&mut self) -> LexState {
        let (frame, state) = match self.state {
            LexState::ExpressionStart => (Frame::Group, LexState::ExpressionStart),
            LexState::AfterOperator => (Frame::Arguments, LexState::Arguments),
            LexState::AfterFiqlOperator => (Frame::Array, LexState::Array),
            _ => (Frame::Nested, LexState::Arguments),
        };
        self.frames.push(frame);
        state
    }

    /// Where a finished value leaves us, given the innermost open list.
    fn after_value(&self) -> LexState {
        match self.frames.last() {
            None | Some(Frame::Group) => LexState::AfterExpression,
            Some(Frame::Arguments | Frame::Nested) => LexState::Arguments,
            Some(Frame::Array) => LexState::Array,
        }
    }
}
