use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    /// Binary operator with no canonical wire symbol.
    #[error("Unsupported binary operator: {0}")]
    UnsupportedOperator(String),

    /// Expression node the engine has no wire representation for.
    #[error("Unsupported expression: {0}")]
    UnsupportedExpression(String),

    /// Literal without a usable type hint.
    #[error("Unrecognized literal type: '{0}'")]
    UnrecognizedLiteralType(String),

    /// Literal text that does not parse into its hinted numeric type.
    #[error("Failed to parse literal '{text}' as {target}")]
    LiteralParse { text: String, target: &'static str },

    /// The filter string was rejected by the SQL front end.
    #[error("Failed to parse filter: {0}")]
    FilterParse(#[from] sqlparser::parser::ParserError),
}

pub type Result<T> = std::result::Result<T, CompileError>;
