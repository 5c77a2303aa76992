use std::fmt::{self, Display};

use crate::lexer::tokens::Token;

/// One node of the parse tree, one variant per grammar production.
///
/// Leaf variants (`Literal`, `Variable`) carry exactly one token and no
/// children. Internal variants carry their children in source order; that
/// order is part of the contract a downstream evaluator relies on. Bare
/// keyword markers (program delimiters, operator keywords, separators) are
/// kept as token fields on the owning variant rather than as extra child
/// nodes.
#[derive(Debug, Clone)]
pub enum ParseTree {
    /// Root node: optional `HAI` / `KTHXBYE` delimiters around a statement list.
    Program {
        start: Option<Token>,
        body: Box<ParseTree>,
        end: Option<Token>,
    },
    /// Statements in source order; empty for an empty program.
    StatementList { statements: Vec<ParseTree> },
    /// Wraps every parsed statement, carrying its line and any attached
    /// comment metadata. Comments never change the shape of `body`.
    Statement {
        body: Box<ParseTree>,
        comment: Option<String>,
        inline_comment: Option<String>,
        line: u32,
    },
    /// `WAZZUP ... BUHBYE` variable-declaration block.
    VarBlock {
        keyword: Token,
        statements: Vec<ParseTree>,
    },
    /// `I HAS A name [ITZ init]`.
    VariableDeclaration {
        keyword: Token,
        name: Token,
        init: Option<Box<ParseTree>>,
    },
    /// `VISIBLE value`.
    PrintStatement { keyword: Token, value: Box<ParseTree> },
    /// `GIMMEH target (AN target)*`; targets in declaration order.
    InputStatement { keyword: Token, targets: Vec<Token> },
    /// `name R value`.
    Assignment { name: Token, value: Box<ParseTree> },
    /// Binary arithmetic or comparison: always exactly two operands,
    /// keeping the `AN` separator token when one was present.
    BinaryExpression {
        operator: Token,
        separator: Option<Token>,
        left: Box<ParseTree>,
        right: Box<ParseTree>,
    },
    /// Boolean operator with an ordered operand list: arity 2 for
    /// `BOTH OF` / `EITHER OF` / `WON OF`, one or more for `ALL OF` / `ANY OF`.
    BooleanExpression {
        operator: Token,
        operands: Vec<ParseTree>,
    },
    /// `NOT operand`.
    Not {
        keyword: Token,
        operand: Box<ParseTree>,
    },
    /// `SMOOSH` (or `+`-sugar) concatenation: ordered operands, arity >= 1.
    Smoosh {
        operator: Token,
        operands: Vec<ParseTree>,
    },
    Literal { token: Token },
    Variable { token: Token },
}

impl ParseTree {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParseTree::Program { .. } => "Program",
            ParseTree::StatementList { .. } => "StatementList",
            ParseTree::Statement { .. } => "Statement",
            ParseTree::VarBlock { .. } => "VarBlock",
            ParseTree::VariableDeclaration { .. } => "VariableDeclaration",
            ParseTree::PrintStatement { .. } => "PrintStatement",
            ParseTree::InputStatement { .. } => "InputStatement",
            ParseTree::Assignment { .. } => "Assignment",
            ParseTree::BinaryExpression { .. } => "BinaryExpression",
            ParseTree::BooleanExpression { .. } => "BooleanExpression",
            ParseTree::Not { .. } => "Not",
            ParseTree::Smoosh { .. } => "Smoosh",
            ParseTree::Literal { .. } => "Literal",
            ParseTree::Variable { .. } => "Variable",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ParseTree::Literal { .. } | ParseTree::Variable { .. })
    }

    /// Source line of the node, when it has one. A statement list takes the
    /// line of its first statement; an empty one has no line.
    pub fn line(&self) -> Option<u32> {
        match self {
            ParseTree::Program { start, body, .. } => {
                start.as_ref().map(|token| token.line).or_else(|| body.line())
            }
            ParseTree::StatementList { statements } => {
                statements.first().and_then(|statement| statement.line())
            }
            ParseTree::Statement { line, .. } => Some(*line),
            ParseTree::VarBlock { keyword, .. } => Some(keyword.line),
            ParseTree::VariableDeclaration { keyword, .. } => Some(keyword.line),
            ParseTree::PrintStatement { keyword, .. } => Some(keyword.line),
            ParseTree::InputStatement { keyword, .. } => Some(keyword.line),
            ParseTree::Assignment { name, .. } => Some(name.line),
            ParseTree::BinaryExpression { operator, .. } => Some(operator.line),
            ParseTree::BooleanExpression { operator, .. } => Some(operator.line),
            ParseTree::Not { keyword, .. } => Some(keyword.line),
            ParseTree::Smoosh { operator, .. } => Some(operator.line),
            ParseTree::Literal { token } => Some(token.line),
            ParseTree::Variable { token } => Some(token.line),
        }
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);

        match self {
            ParseTree::Program { start, body, end } => {
                writeln!(f, "{}Program", indent)?;
                if let Some(token) = start {
                    writeln!(f, "{}  {}", indent, token.value)?;
                }
                body.write_node(f, depth + 1)?;
                if let Some(token) = end {
                    writeln!(f, "{}  {}", indent, token.value)?;
                }
                Ok(())
            }
            ParseTree::StatementList { statements } => {
                writeln!(f, "{}StatementList ({} statements)", indent, statements.len())?;
                for statement in statements {
                    statement.write_node(f, depth + 1)?;
                }
                Ok(())
            }
            ParseTree::Statement {
                body,
                comment,
                inline_comment,
                line,
            } => {
                write!(f, "{}Statement (line {})", indent, line)?;
                if let Some(text) = comment {
                    write!(f, " [comment: {}]", text)?;
                }
                if let Some(text) = inline_comment {
                    write!(f, " [inline: {}]", text)?;
                }
                writeln!(f)?;
                body.write_node(f, depth + 1)
            }
            ParseTree::VarBlock { statements, .. } => {
                writeln!(f, "{}VarBlock ({} statements)", indent, statements.len())?;
                for statement in statements {
                    statement.write_node(f, depth + 1)?;
                }
                Ok(())
            }
            ParseTree::VariableDeclaration { name, init, .. } => {
                writeln!(f, "{}VariableDeclaration({})", indent, name.value)?;
                if let Some(expression) = init {
                    expression.write_node(f, depth + 1)?;
                }
                Ok(())
            }
            ParseTree::PrintStatement { value, .. } => {
                writeln!(f, "{}PrintStatement", indent)?;
                value.write_node(f, depth + 1)
            }
            ParseTree::InputStatement { targets, .. } => {
                let names: Vec<&str> = targets.iter().map(|token| token.value.as_str()).collect();
                writeln!(f, "{}InputStatement({})", indent, names.join(", "))
            }
            ParseTree::Assignment { name, value } => {
                writeln!(f, "{}Assignment({})", indent, name.value)?;
                value.write_node(f, depth + 1)
            }
            ParseTree::BinaryExpression {
                operator,
                left,
                right,
                ..
            } => {
                writeln!(f, "{}BinaryExpression({})", indent, operator.value)?;
                left.write_node(f, depth + 1)?;
                right.write_node(f, depth + 1)
            }
            ParseTree::BooleanExpression { operator, operands } => {
                writeln!(f, "{}BooleanExpression({})", indent, operator.value)?;
                for operand in operands {
                    operand.write_node(f, depth + 1)?;
                }
                Ok(())
            }
            ParseTree::Not { operand, .. } => {
                writeln!(f, "{}Not", indent)?;
                operand.write_node(f, depth + 1)
            }
            ParseTree::Smoosh { operands, .. } => {
                writeln!(f, "{}Smoosh ({} operands)", indent, operands.len())?;
                for operand in operands {
                    operand.write_node(f, depth + 1)?;
                }
                Ok(())
            }
            ParseTree::Literal { token } => {
                writeln!(f, "{}Literal({}: {})", indent, token.kind, token.value)
            }
            ParseTree::Variable { token } => {
                writeln!(f, "{}Variable({})", indent, token.value)
            }
        }
    }
}

impl Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, 0)
    }
}
