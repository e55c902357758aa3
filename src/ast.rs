use std::{fmt, mem, rc::Rc};

/// A binary operator appearing in a [`Expression::BinaryExpression`].
///
/// The first four are arithmetic and produce integers; the remaining six are
/// comparisons and produce booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    NotEqual,
}

impl Operator {
    /// Returns the surface syntax of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
            Self::EqualEqual => "==",
            Self::NotEqual => "!=",
        }
    }

    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        !matches!(self, Self::Add | Self::Subtract | Self::Multiply | Self::Divide)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One `label = expression` pair of a labelled call such as `power[n = 5]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledArgument {
    /// The parameter name this argument binds to.
    pub label:      String,
    /// The argument expression, evaluated in the caller's scope.
    pub expression: Expression,
}

/// An abstract syntax tree node representing an expression.
///
/// Every statement-like construct of the language (assignment, `while`,
/// `println`, blocks) is an expression and yields a value. The set of variants
/// is closed: the evaluator matches on it exhaustively, so adding a variant
/// forces the parser and the evaluator to be updated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// An arithmetic or comparison operation.
    BinaryExpression {
        /// The operator.
        operator: Operator,
        /// Left operand, evaluated first.
        lhs:      Box<Self>,
        /// Right operand.
        rhs:      Box<Self>,
    },
    /// An integer literal such as `42`.
    IntegerLiteral(i64),
    /// `true` or `false`.
    BoolLiteral(bool),
    /// An array literal such as `[1, 2, 3]`.
    ArrayLiteral(Vec<Self>),
    /// A variable read.
    Identifier(String),
    /// A variable write; yields the assigned value.
    Assignment {
        /// The variable being written.
        name:       String,
        /// The value expression.
        expression: Box<Self>,
    },
    /// A `{ ... }` sequence; yields the value of its last element.
    Block(Vec<Self>),
    /// A conditional with an optional `else` branch.
    If {
        /// Must evaluate to a boolean.
        condition:   Box<Self>,
        /// Evaluated when the condition holds.
        then_clause: Box<Self>,
        /// Evaluated when the condition does not hold.
        else_clause: Option<Box<Self>>,
    },
    /// A pre-tested loop.
    While {
        /// Must evaluate to a boolean.
        condition: Box<Self>,
        /// The loop body.
        body:      Box<Self>,
    },
    /// A positional call such as `add(1, 2)`.
    FunctionCall {
        /// The callee.
        name: String,
        /// Arguments, bound to parameters by position.
        args: Vec<Self>,
    },
    /// A call with named arguments such as `add[y = 2, x = 1]`.
    LabelledCall {
        /// The callee.
        name: String,
        /// Arguments, bound to parameters by label.
        args: Vec<LabelledArgument>,
    },
    /// `println(expr)`; prints the value and yields it unchanged.
    Println(Box<Self>),
}

/// Builds a binary expression node.
#[must_use]
pub fn binary(operator: Operator, lhs: Expression, rhs: Expression) -> Expression {
    Expression::BinaryExpression { operator,
                                   lhs: Box::new(lhs),
                                   rhs: Box::new(rhs) }
}

/// Builds an identifier node.
#[must_use]
pub fn identifier(name: impl Into<String>) -> Expression {
    Expression::Identifier(name.into())
}

/// Builds an assignment node.
#[must_use]
pub fn assignment(name: impl Into<String>, expression: Expression) -> Expression {
    Expression::Assignment { name:       name.into(),
                             expression: Box::new(expression), }
}

impl Expression {
    /// Returns `false` for nodes that own no sub-expressions.
    const fn has_children(&self) -> bool {
        !matches!(self, Self::IntegerLiteral(_) | Self::BoolLiteral(_) | Self::Identifier(_))
    }

    /// Moves every non-leaf child of this node into `out`, leaving cheap
    /// placeholders behind.
    fn detach_children(&mut self, out: &mut Vec<Self>) {
        let mut detach = |slot: &mut Self| {
            if slot.has_children() {
                out.push(mem::replace(slot, Self::BoolLiteral(false)));
            }
        };
        match self {
            Self::BinaryExpression { lhs, rhs, .. } => {
                detach(&mut **lhs);
                detach(&mut **rhs);
            },
            Self::Assignment { expression, .. } => detach(&mut **expression),
            Self::If { condition,
                       then_clause,
                       else_clause, } => {
                detach(&mut **condition);
                detach(&mut **then_clause);
                if let Some(else_clause) = else_clause {
                    detach(&mut **else_clause);
                }
            },
            Self::While { condition, body } => {
                detach(&mut **condition);
                detach(&mut **body);
            },
            Self::Println(arg) => detach(&mut **arg),
            Self::ArrayLiteral(items) | Self::Block(items) | Self::FunctionCall { args: items, .. } => {
                items.iter_mut().for_each(&mut detach);
            },
            Self::LabelledCall { args, .. } => {
                args.iter_mut().for_each(|arg| detach(&mut arg.expression));
            },
            Self::IntegerLiteral(_) | Self::BoolLiteral(_) | Self::Identifier(_) => {},
        }
    }
}

/// Trees produced from long operator chains or deep nesting are far deeper
/// than the native stack allows, so they are torn down with an explicit
/// work-list instead of the compiler's recursive drop glue.
impl Drop for Expression {
    fn drop(&mut self) {
        if !self.has_children() {
            return;
        }
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

/// A single top-level definition of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevel {
    /// `global name = expr;`
    GlobalVariableDefinition {
        /// The global's name.
        name:       String,
        /// Initializer, evaluated once in the global frame.
        expression: Expression,
    },
    /// `define name(params) { ... }`. Shared with the interpreter's function
    /// table once the program runs.
    FunctionDefinition(Rc<FunctionDefinition>),
}

/// A user-defined function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    /// The function name.
    pub name:   String,
    /// Formal parameter names, in declaration order.
    pub params: Vec<String>,
    /// The function body, always a block.
    pub body:   Expression,
}

/// A parsed source file: top-level definitions in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The definitions.
    pub definitions: Vec<TopLevel>,
}
